//! Application state types and enums.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use filepeek_core::{
    Catalog, DEFAULT_BASE_URL, DEFAULT_CONTENT_HEIGHT, ERROR_CONTENT, FileDescriptor,
};
use filepeek_fetch::FetchError;

use crate::theme::ThemeVariant;

use super::constants::{LOADING_LABEL, PLACEHOLDER, PREVIEW_LABEL};

/// Application mode representing the current UI state.
/// Note: Loading is NOT a mode - the fetch runs in the background
/// while the user can still interact with the UI in Normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    /// Selector dropdown is open.
    Selecting,
    Help,
    Quit,
}

/// Control that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Selector,
    Button,
    Content,
}

impl Focus {
    /// Next control in tab order.
    pub fn next(self) -> Self {
        match self {
            Self::Selector => Self::Button,
            Self::Button => Self::Content,
            Self::Content => Self::Selector,
        }
    }

    /// Previous control in tab order.
    pub fn prev(self) -> Self {
        match self {
            Self::Selector => Self::Content,
            Self::Button => Self::Selector,
            Self::Content => Self::Button,
        }
    }
}

/// Highlighted row while the selector dropdown is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropdownState {
    pub highlighted: usize,
}

impl DropdownState {
    /// Open with the current selection highlighted, or the first entry.
    pub fn open(catalog: &Catalog, selected: Option<&str>) -> Self {
        let highlighted = selected.and_then(|id| catalog.position(id)).unwrap_or(0);
        Self { highlighted }
    }

    /// Move highlight up, stopping at the first entry.
    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Move highlight down, stopping at the last entry.
    pub fn move_down(&mut self, len: usize) {
        if self.highlighted + 1 < len {
            self.highlighted += 1;
        }
    }
}

/// State owned by the file preview widget.
///
/// `content` only changes when a fetch attempt completes, and each
/// completion replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    selected: Option<&'static str>,
    content: String,
    loading: bool,
}

impl PreviewState {
    /// Empty state: nothing selected, nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the selected file.
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    /// Text of the last completed preview, or empty.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Select a file. Does not fetch.
    pub fn select(&mut self, file: &'static FileDescriptor) {
        debug!(id = file.id, "selected");
        self.selected = Some(file.id);
    }

    /// Whether the preview button accepts a press.
    pub fn can_trigger(&self) -> bool {
        self.selected.is_some() && !self.loading
    }

    /// Label of the preview button.
    pub fn trigger_label(&self) -> &'static str {
        if self.loading { LOADING_LABEL } else { PREVIEW_LABEL }
    }

    /// Text shown in the closed selector.
    pub fn selector_label(&self, catalog: &Catalog) -> &'static str {
        self.selected
            .and_then(|id| catalog.name_of(id))
            .unwrap_or(PLACEHOLDER)
    }

    /// Start a preview of the selected file.
    ///
    /// Returns the descriptor to fetch, with the loading flag raised, or
    /// `None` when the button is disabled or the selection no longer
    /// resolves. A failed lookup leaves the flag lowered.
    pub fn begin(&mut self, catalog: &Catalog) -> Option<&'static FileDescriptor> {
        if !self.can_trigger() {
            return None;
        }
        let id = self.selected?;

        self.loading = true;
        match catalog.lookup(id) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!(error = %e, "preview aborted");
                self.loading = false;
                None
            }
        }
    }

    /// Apply the outcome of a fetch attempt and lower the loading flag.
    pub fn finish(&mut self, result: Result<String, FetchError>) {
        match result {
            Ok(text) => self.content = text,
            Err(FetchError::Cancelled) => {}
            Err(e) => {
                error!(error = %e, "Error loading file");
                self.content = ERROR_CONTENT.to_string();
            }
        }
        self.loading = false;
    }
}

/// Persistent user settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Origin serving the catalog files.
    pub base_url: String,
    /// Color theme.
    pub theme: ThemeVariant,
    /// Maximum rows of the content viewport.
    pub content_height: u16,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme: ThemeVariant::Dark,
            content_height: DEFAULT_CONTENT_HEIGHT,
        }
    }
}

impl UserSettings {
    /// Get the config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("filepeek").join("settings.toml"))
    }

    /// Load settings from a specific file, or return defaults.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| match toml::from_str(&content) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring malformed settings");
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Save settings to a specific file.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(path, content)
    }
}
