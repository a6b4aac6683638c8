//! Application constants.

/// Number of rows to move when pressing Page Up/Down.
pub const PAGE_SIZE: usize = 10;

/// Channel buffer size for fetch results.
pub const FETCH_CHANNEL_SIZE: usize = 1;

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 50;

/// Selector text when nothing is selected.
pub const PLACEHOLDER: &str = "Select a file";

/// Button label when a preview can be requested.
pub const PREVIEW_LABEL: &str = "Preview";

/// Button label while a fetch is in flight.
pub const LOADING_LABEL: &str = "Loading...";

/// Width of the closed selector, in columns.
pub const SELECTOR_WIDTH: u16 = 32;

/// Width of the preview button, in columns.
pub const BUTTON_WIDTH: u16 = 14;
