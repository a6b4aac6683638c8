//! HTTP retrieval of catalog files for filepeek.
//!
//! This crate turns a catalog path into the text served at that path.
//!
//! # Overview
//!
//! - [`Fetcher`] is the seam the TUI depends on, so tests can swap in a
//!   recording double.
//! - [`HttpFetcher`] issues a plain `GET <base_url><path>` with reqwest and
//!   requires a successful status and a UTF-8 body.
//!
//! # Example
//!
//! ```rust,no_run
//! use filepeek_core::PreviewConfig;
//! use filepeek_fetch::{Fetcher, HttpFetcher};
//!
//! # async fn demo() -> Result<(), filepeek_fetch::FetchError> {
//! let fetcher = HttpFetcher::new(&PreviewConfig::new("http://localhost:3000"))?;
//! let text = fetcher.fetch_text("/files/Web-1.txt").await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

mod error;
mod http;

pub use error::FetchError;
pub use http::HttpFetcher;

use async_trait::async_trait;

/// Source of file text keyed by catalog path.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Retrieve the full text stored at `path`.
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}
