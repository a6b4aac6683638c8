//! Core types and configuration for filepeek.
//!
//! This crate provides the fixed catalog of previewable files, the
//! configuration shared by the fetcher and the TUI, and the error types
//! used when a catalog lookup fails.

mod catalog;
mod config;
mod error;

pub use catalog::{Catalog, FILES, FileDescriptor};
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_CONTENT_HEIGHT, MAX_CONTENT_HEIGHT, PreviewConfig,
    PreviewConfigBuilder,
};
pub use error::{CatalogError, ERROR_CONTENT};
