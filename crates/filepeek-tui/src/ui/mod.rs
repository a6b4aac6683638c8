//! UI components and widgets.

mod button;
mod content;
mod help;
mod selector;

pub use button::PreviewButton;
pub use content::ContentPane;
pub use help::HelpOverlay;
pub use selector::{Dropdown, Selector};

use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::constants::{BUTTON_WIDTH, SELECTOR_WIDTH};

/// Layout areas for the application.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub selector: Rect,
    pub button: Rect,
    /// Present only when there is content to show.
    pub content: Option<Rect>,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    ///
    /// `content_rows` is the number of text rows the content pane needs,
    /// already capped at the configured viewport height.
    pub fn new(area: Rect, content_rows: Option<u16>) -> Self {
        // Bordered pane: text rows plus top and bottom border
        let content_height = content_rows.map(|rows| rows.saturating_add(2)).unwrap_or(0);

        let [header, _, controls, _, content, _, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(content_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let [selector, _, button, _] = Layout::horizontal([
            Constraint::Length(SELECTOR_WIDTH),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .areas(controls);

        Self {
            header,
            selector,
            button,
            content: content_rows.map(|_| content),
            footer,
        }
    }
}

/// Inner width available to text inside a bordered, padded pane.
pub fn content_text_width(pane_width: u16) -> u16 {
    // One column of border and one of padding on each side
    pane_width.saturating_sub(4).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_content() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24), None);
        assert!(layout.content.is_none());
        assert_eq!(layout.selector.y, 2);
        assert_eq!(layout.selector.width, SELECTOR_WIDTH);
        assert_eq!(layout.button.x, SELECTOR_WIDTH + 1);
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_layout_with_content() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 40), Some(10));
        let content = layout.content.unwrap();
        assert_eq!(content.y, 6);
        assert_eq!(content.height, 12);
        assert_eq!(content.width, 80);
    }

    #[test]
    fn test_layout_with_max_content_rows() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = AppLayout::new(area, Some(u16::MAX));
        let content = layout.content.unwrap();
        assert!(content.bottom() <= area.bottom());
    }
}
