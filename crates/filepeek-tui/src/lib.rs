//! Terminal user interface for filepeek.
//!
//! This crate provides the interactive file preview widget, built with
//! ratatui.
//!
//! # Overview
//!
//! The screen holds three controls:
//!
//! - **Selector** - dropdown listing the fixed catalog of files
//! - **Preview button** - fetches the selected file; disabled while nothing
//!   is selected or a fetch is in flight
//! - **Content pane** - the fetched text, preformatted and scrollable
//!
//! # Usage
//!
//! ```rust,no_run
//! use filepeek_tui::TuiConfig;
//!
//! filepeek_tui::run_with_config(TuiConfig::new().with_base_url("http://localhost:3000")).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `Tab` - Cycle focus
//! - `Enter` - Open selector / choose / press button
//! - `1`-`3` - Choose a file directly
//! - `p` - Preview
//! - `j`/`k` - Scroll content
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod preview;
mod theme;
mod ui;

use std::sync::Arc;

use color_eyre::eyre::WrapErr;

use filepeek_core::PreviewConfig;
use filepeek_fetch::HttpFetcher;

pub use app::state::UserSettings;
pub use app::{App, AppResult};
pub use theme::{Theme, ThemeVariant};

/// Configuration passed in from the command line.
///
/// Every field left unset falls back to the persisted [`UserSettings`].
#[derive(Debug, Clone, Default)]
pub struct TuiConfig {
    /// Origin serving the catalog files.
    pub base_url: Option<String>,
    /// Initial color theme.
    pub theme: Option<ThemeVariant>,
    /// Maximum rows of the content viewport.
    pub content_height: Option<u16>,
}

impl TuiConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the initial theme.
    pub fn with_theme(mut self, theme: ThemeVariant) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Override the content viewport height.
    pub fn with_content_height(mut self, rows: u16) -> Self {
        self.content_height = Some(rows);
        self
    }

    /// Merge with persisted settings into a validated preview config.
    pub fn preview_config(&self, settings: &UserSettings) -> AppResult<PreviewConfig> {
        PreviewConfig::builder()
            .base_url(
                self.base_url
                    .clone()
                    .unwrap_or_else(|| settings.base_url.clone()),
            )
            .content_height(self.content_height.unwrap_or(settings.content_height))
            .build()
            .wrap_err("Invalid preview configuration")
    }
}

/// Run the TUI application with custom config.
pub fn run_with_config(config: TuiConfig) -> AppResult<()> {
    let settings_path = UserSettings::config_path();
    let settings = settings_path
        .as_deref()
        .map(UserSettings::load_from)
        .unwrap_or_default();

    let preview_config = config.preview_config(&settings)?;
    let fetcher = HttpFetcher::new(&preview_config).wrap_err("Failed to create fetcher")?;
    let theme = config.theme.unwrap_or(settings.theme);

    tracing::info!(base_url = %preview_config.base_url, "starting TUI");

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;

    let app = App::new(&preview_config, Arc::new(fetcher))
        .with_theme(theme)
        .with_settings(settings, settings_path);

    let terminal = ratatui::init();
    let result = rt.block_on(app.run(terminal));
    ratatui::restore();

    // Shutdown runtime immediately to cancel background tasks
    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
