//! File selector and its dropdown list.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use filepeek_core::Catalog;

use crate::theme::Theme;

/// Closed selector showing the current choice or a placeholder.
pub struct Selector<'a> {
    label: &'a str,
    has_selection: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Selector<'a> {
    pub fn new(label: &'a str, has_selection: bool, focused: bool, theme: &'a Theme) -> Self {
        Self {
            label,
            has_selection,
            focused,
            theme,
        }
    }
}

impl Widget for Selector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        let block = Block::default().borders(Borders::ALL).border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let label_style = if self.has_selection {
            Style::new().fg(self.theme.foreground)
        } else {
            self.theme.placeholder
        };
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.label, label_style),
        ]);
        buf.set_line(inner.x, inner.y, &line, inner.width);

        // Chevron on the right edge
        if inner.width > 2 {
            let chevron = Line::from(Span::styled("▾", Style::new().fg(self.theme.muted)));
            buf.set_line(inner.right() - 2, inner.y, &chevron, 1);
        }
    }
}

/// Open dropdown listing every catalog entry.
pub struct Dropdown<'a> {
    catalog: &'a Catalog,
    highlighted: usize,
    selected: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> Dropdown<'a> {
    pub fn new(
        catalog: &'a Catalog,
        highlighted: usize,
        selected: Option<&'a str>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            catalog,
            highlighted,
            selected,
            theme,
        }
    }

    /// Area the list occupies when anchored below `selector`, clipped to `bounds`.
    pub fn area(&self, selector: Rect, bounds: Rect) -> Rect {
        let height = (self.catalog.len() as u16 + 2)
            .min(bounds.bottom().saturating_sub(selector.bottom()));
        Rect::new(selector.x, selector.bottom(), selector.width, height)
    }
}

impl Widget for Dropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_focused)
            .style(Style::new().bg(self.theme.background));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .catalog
            .iter()
            .enumerate()
            .map(|(i, file)| {
                let check = if self.selected == Some(file.id) { "✓ " } else { "  " };
                let text = format!("{check}{}", file.name);
                if i == self.highlighted {
                    Line::from(Span::styled(text, self.theme.selected))
                } else {
                    Line::from(Span::styled(
                        text,
                        Style::new().fg(self.theme.foreground),
                    ))
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
