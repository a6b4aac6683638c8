//! Error types for fetch operations.

use thiserror::Error;

/// Errors that can occur while retrieving a file.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Base URL and path do not form a valid URL.
    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// Request could not be sent or the body could not be read.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body is not valid UTF-8 text.
    #[error("{url} did not return text")]
    NotText { url: String },

    /// The fetcher panicked before producing a result.
    #[error("Fetch panicked: {message}")]
    Panicked { message: String },

    /// Fetch was abandoned before it completed.
    #[error("Fetch cancelled")]
    Cancelled,
}

impl FetchError {
    /// Whether the failure came from the network layer rather than the content.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Client { .. })
    }
}
