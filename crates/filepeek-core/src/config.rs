//! Preview configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Rows available to the content viewport before it scrolls.
pub const DEFAULT_CONTENT_HEIGHT: u16 = 24;

/// Tallest content viewport accepted, in rows.
pub const MAX_CONTENT_HEIGHT: u16 = 1000;

/// Configuration for previewing files.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PreviewConfig {
    /// Origin serving the catalog paths, e.g. `http://localhost:3000`.
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum height of the content viewport in rows.
    #[builder(default = "DEFAULT_CONTENT_HEIGHT")]
    #[serde(default = "default_content_height")]
    pub content_height: u16,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_content_height() -> u16 {
    DEFAULT_CONTENT_HEIGHT
}

impl PreviewConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref base_url) = self.base_url {
            if !is_http_url(base_url) {
                return Err(format!("Base URL must start with http:// or https://: {base_url}"));
            }
        }
        match self.content_height {
            Some(0) => return Err("Content height must be at least one row".to_string()),
            Some(rows) if rows > MAX_CONTENT_HEIGHT => {
                return Err(format!(
                    "Content height must be at most {MAX_CONTENT_HEIGHT} rows: {rows}"
                ));
            }
            _ => {}
        }
        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    matches!(rest, Some(host) if !host.is_empty())
}

impl PreviewConfig {
    /// Create a new preview config builder.
    pub fn builder() -> PreviewConfigBuilder {
        PreviewConfigBuilder::default()
    }

    /// Create a simple config for a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            content_height: DEFAULT_CONTENT_HEIGHT,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = PreviewConfig::builder()
            .base_url("https://example.com")
            .content_height(10u16)
            .build()
            .unwrap();

        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.content_height, 10);
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = PreviewConfig::builder().build().unwrap();
        assert_eq!(config, PreviewConfig::default());
    }

    #[test]
    fn test_config_rejects_bad_base_url() {
        assert!(PreviewConfig::builder().base_url("ftp://host").build().is_err());
        assert!(PreviewConfig::builder().base_url("http://").build().is_err());
    }

    #[test]
    fn test_config_rejects_zero_height() {
        assert!(PreviewConfig::builder().content_height(0u16).build().is_err());
    }

    #[test]
    fn test_config_height_upper_bound() {
        let config = PreviewConfig::builder()
            .content_height(MAX_CONTENT_HEIGHT)
            .build()
            .unwrap();
        assert_eq!(config.content_height, MAX_CONTENT_HEIGHT);

        assert!(PreviewConfig::builder()
            .content_height(MAX_CONTENT_HEIGHT + 1)
            .build()
            .is_err());
        assert!(PreviewConfig::builder().content_height(u16::MAX).build().is_err());
    }
}
