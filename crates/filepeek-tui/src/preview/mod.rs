//! Content preview layout for the TUI.
//!
//! Lays fetched text out as preformatted rows and tracks how far the
//! viewport has been scrolled.

mod content;

pub use content::{ContentScroll, wrap_text};
