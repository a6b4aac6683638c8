//! Preformatted content pane.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Widget};

use crate::theme::Theme;

/// Bordered pane showing a window of pre-wrapped rows.
pub struct ContentPane<'a> {
    rows: &'a [String],
    offset: usize,
    is_error: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ContentPane<'a> {
    pub fn new(
        rows: &'a [String],
        offset: usize,
        is_error: bool,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            rows,
            offset,
            is_error,
            focused,
            theme,
        }
    }
}

impl Widget for ContentPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        let text_style = if self.is_error {
            self.theme.content.fg(self.theme.error)
        } else {
            self.theme.content
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .padding(Padding::horizontal(1))
            .style(text_style);

        let visible = area.height.saturating_sub(2) as usize;
        if self.rows.len() > visible {
            let last = (self.offset + visible).min(self.rows.len());
            block = block.title_bottom(
                Line::styled(
                    format!(" {}-{}/{} ", self.offset + 1, last, self.rows.len()),
                    Style::new().fg(self.theme.muted),
                )
                .right_aligned(),
            );
        }

        let lines: Vec<Line> = self
            .rows
            .iter()
            .skip(self.offset)
            .take(visible)
            .map(|row| Line::raw(row.as_str()))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
