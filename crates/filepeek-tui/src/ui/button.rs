//! Preview trigger button.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// Button that starts a preview. Drawn greyed out when disabled.
pub struct PreviewButton<'a> {
    label: &'a str,
    enabled: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> PreviewButton<'a> {
    pub fn new(label: &'a str, enabled: bool, focused: bool, theme: &'a Theme) -> Self {
        Self {
            label,
            enabled,
            focused,
            theme,
        }
    }
}

impl Widget for PreviewButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.enabled {
            self.theme.button
        } else {
            self.theme.button_disabled
        };
        let border = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .render(area, buf);
    }
}
