//! Main application state and logic.

pub(crate) mod constants;
mod fetching;
mod render;
pub mod state;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use filepeek_core::{Catalog, MAX_CONTENT_HEIGHT, PreviewConfig};
use filepeek_fetch::{FetchError, Fetcher};

use crate::event::KeyAction;
use crate::preview::ContentScroll;
use crate::theme::{Theme, ThemeVariant};

use self::constants::{PAGE_SIZE, TICK_INTERVAL_MS};
use self::fetching::FetchOutcome;
use self::render::{RenderContext, render_app};
use self::state::{AppMode, DropdownState, Focus, PreviewState, UserSettings};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Main application state.
pub struct App {
    /// Files offered by the selector.
    catalog: Catalog,
    /// Source of file text.
    fetcher: Arc<dyn Fetcher>,
    /// Current mode.
    mode: AppMode,
    /// Control receiving key input.
    focus: Focus,
    /// Color theme.
    theme: Theme,
    /// Selection, content and loading flag.
    preview: PreviewState,
    /// Highlight while the dropdown is open.
    dropdown: Option<DropdownState>,
    /// Content viewport scroll.
    scroll: ContentScroll,
    /// Maximum rows of the content viewport.
    content_height: u16,
    /// Origin shown in the footer.
    base_url: String,
    /// Channel for receiving the in-flight fetch result.
    fetch_rx: Option<mpsc::Receiver<FetchOutcome>>,
    /// Parent of every fetch token; cancelled when the app goes away.
    cancel: CancellationToken,
    /// Settings as loaded, written back when the theme changes.
    settings: UserSettings,
    /// Where to persist settings, if anywhere.
    settings_path: Option<PathBuf>,
    /// Flag indicating UI needs redraw.
    needs_redraw: bool,
}

impl App {
    /// Create a new application over the default catalog.
    pub fn new(config: &PreviewConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self::with_catalog(Catalog::default(), config, fetcher)
    }

    /// Create a new application over a specific catalog.
    pub fn with_catalog(catalog: Catalog, config: &PreviewConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            catalog,
            fetcher,
            mode: AppMode::default(),
            focus: Focus::default(),
            theme: Theme::default(),
            preview: PreviewState::new(),
            dropdown: None,
            scroll: ContentScroll::new(),
            content_height: config.content_height.clamp(1, MAX_CONTENT_HEIGHT),
            base_url: config.base_url.clone(),
            fetch_rx: None,
            cancel: CancellationToken::new(),
            settings: UserSettings::default(),
            settings_path: None,
            needs_redraw: true,
        }
    }

    /// Set the initial theme.
    pub fn with_theme(mut self, variant: ThemeVariant) -> Self {
        self.theme = Theme::from_variant(variant);
        self
    }

    /// Persist theme changes into `settings` at `path`.
    pub fn with_settings(mut self, settings: UserSettings, path: Option<PathBuf>) -> Self {
        self.settings = settings;
        self.settings_path = path;
        self
    }

    /// Widget state, for inspection.
    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    /// Current mode.
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Run the application with async event loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while self.mode != AppMode::Quit {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    if let Event::Key(key_event) = event {
                        if key_event.kind == KeyEventKind::Press {
                            self.handle_action(KeyAction::from_key_event(key_event));
                        }
                    }
                    self.needs_redraw = true;
                }

                outcome = async {
                    if let Some(rx) = &mut self.fetch_rx {
                        rx.recv().await
                    } else {
                        std::future::pending().await
                    }
                } => {
                    self.handle_fetch_outcome(outcome);
                    self.needs_redraw = true;
                }

                _ = interval.tick() => {
                    // Periodic tick for background updates
                }
            }
        }

        self.cancel.cancel();
        Ok(())
    }

    /// Render the application.
    fn render(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    /// Handle a key action.
    pub fn handle_action(&mut self, action: KeyAction) {
        if action == KeyAction::ForceQuit {
            self.quit();
            return;
        }

        match self.mode {
            AppMode::Help => {
                if matches!(action, KeyAction::ToggleHelp | KeyAction::Quit | KeyAction::Cancel) {
                    self.mode = AppMode::Normal;
                }
                return;
            }
            AppMode::Selecting => {
                self.handle_dropdown_action(action);
                return;
            }
            AppMode::Quit => return,
            AppMode::Normal => {}
        }

        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::FocusNext => self.focus = self.focus.next(),
            KeyAction::FocusPrev => self.focus = self.focus.prev(),
            KeyAction::Activate => match self.focus {
                Focus::Selector => self.open_dropdown(),
                Focus::Button => self.trigger_preview(),
                Focus::Content => {}
            },
            KeyAction::Preview => self.trigger_preview(),
            KeyAction::SelectIndex(index) => self.select_index(index),
            KeyAction::MoveUp | KeyAction::MoveDown if self.focus == Focus::Selector => {
                self.open_dropdown();
            }
            KeyAction::MoveUp => self.scroll.scroll_up(1),
            KeyAction::MoveDown => self.scroll.scroll_down(1),
            KeyAction::PageUp => self.scroll.scroll_up(self.page_rows()),
            KeyAction::PageDown => self.scroll.scroll_down(self.page_rows()),
            KeyAction::JumpToTop => self.scroll.to_top(),
            KeyAction::JumpToBottom => self.scroll.to_bottom(),
            KeyAction::ToggleHelp => self.mode = AppMode::Help,
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::Cancel | KeyAction::ForceQuit | KeyAction::None => {}
        }
    }

    /// Handle a key action while the dropdown is open.
    fn handle_dropdown_action(&mut self, action: KeyAction) {
        let Some(dropdown) = self.dropdown.as_mut() else {
            self.mode = AppMode::Normal;
            return;
        };

        match action {
            KeyAction::MoveUp => dropdown.move_up(),
            KeyAction::MoveDown => dropdown.move_down(self.catalog.len()),
            KeyAction::JumpToTop => dropdown.highlighted = 0,
            KeyAction::JumpToBottom => dropdown.highlighted = self.catalog.len().saturating_sub(1),
            KeyAction::Activate => {
                let index = dropdown.highlighted;
                self.select_index(index);
            }
            KeyAction::SelectIndex(index) => self.select_index(index),
            KeyAction::Cancel | KeyAction::Quit => self.close_dropdown(),
            _ => {}
        }
    }

    fn open_dropdown(&mut self) {
        self.dropdown = Some(DropdownState::open(&self.catalog, self.preview.selected()));
        self.mode = AppMode::Selecting;
    }

    fn close_dropdown(&mut self) {
        self.dropdown = None;
        self.mode = AppMode::Normal;
    }

    /// Select the catalog entry at `index` and close the dropdown.
    fn select_index(&mut self, index: usize) {
        match self.catalog.get(index) {
            Some(file) => {
                self.preview.select(file);
                self.close_dropdown();
            }
            None => debug!(index, "no catalog entry at index"),
        }
    }

    /// Start fetching the selected file if the button is enabled.
    fn trigger_preview(&mut self) {
        let Some(file) = self.preview.begin(&self.catalog) else {
            return;
        };
        self.fetch_rx = Some(fetching::start_fetch(
            Arc::clone(&self.fetcher),
            file,
            self.cancel.child_token(),
        ));
    }

    /// Apply a fetch result. `None` means the task ended without sending.
    fn handle_fetch_outcome(&mut self, outcome: Option<FetchOutcome>) {
        self.fetch_rx = None;
        match outcome {
            Some(outcome) => {
                debug!(id = outcome.file.id, ok = outcome.result.is_ok(), "fetch finished");
                self.preview.finish(outcome.result);
                self.scroll.to_top();
            }
            None => self.preview.finish(Err(FetchError::Cancelled)),
        }
    }

    fn page_rows(&self) -> usize {
        match self.scroll.viewport_rows() {
            0 => PAGE_SIZE,
            rows => rows,
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.settings.theme = self.theme.variant;

        if let Some(path) = &self.settings_path {
            if let Err(e) = self.settings.save_to(path) {
                warn!(path = %path.display(), error = %e, "failed to save settings");
            }
        }
    }

    fn quit(&mut self) {
        self.cancel.cancel();
        self.mode = AppMode::Quit;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Any fetch still running must not outlive the widget.
        self.cancel.cancel();
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = RenderContext {
            mode: self.mode,
            focus: self.focus,
            theme: &self.theme,
            catalog: &self.catalog,
            preview: &self.preview,
            dropdown: self.dropdown,
            scroll: &self.scroll,
            content_height: self.content_height,
            base_url: &self.base_url,
        };

        render_app(&ctx, area, buf);
    }
}
