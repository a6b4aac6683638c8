//! Error types for catalog lookups.

use thiserror::Error;

/// Text shown in place of file content when a preview fails.
pub const ERROR_CONTENT: &str = "Error loading file content";

/// Errors that can occur when resolving a selection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No descriptor carries the selected id.
    #[error("Unknown file id: {id}")]
    UnknownFile { id: String },
}
