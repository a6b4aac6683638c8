//! reqwest-backed fetcher.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use filepeek_core::PreviewConfig;

use crate::{FetchError, Fetcher};

/// Fetches catalog paths from a single origin over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher for the configured base URL.
    pub fn new(config: &PreviewConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .build()
            .map_err(|source| FetchError::Client { source })?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Create a fetcher reusing an existing client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a catalog path.
    pub fn url_for(&self, path: &str) -> Result<Url, FetchError> {
        let joined = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        Url::parse(&joined).map_err(|e| FetchError::InvalidUrl {
            url: joined,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path)?;
        let url_str = url.to_string();
        debug!(url = %url_str, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url_str.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url_str,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url_str.clone(),
                source,
            })?;

        String::from_utf8(body.to_vec()).map_err(|_| FetchError::NotText { url: url_str })
    }
}
