//! Preformatted text layout and scroll state.

use std::cell::Cell;

use unicode_width::UnicodeWidthChar;

/// Tab size for display.
const TAB_SIZE: usize = 4;

/// Expand tabs to the next tab stop so columns line up in the terminal.
pub fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + TAB_SIZE);
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_SIZE - (column % TAB_SIZE);
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(ch);
            column += ch.width().unwrap_or(0);
        }
    }
    out
}

/// Break text into display rows no wider than `width` columns.
///
/// Line breaks and runs of whitespace are kept as-is. Long lines are broken
/// at any character, not only at word boundaries, so nothing is lost off the
/// right edge.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for raw in text.lines() {
        let line = expand_tabs(raw);
        if line.is_empty() {
            rows.push(String::new());
            continue;
        }

        let mut row = String::new();
        let mut row_width = 0;
        for ch in line.chars() {
            let w = ch.width().unwrap_or(0);
            if row_width + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += w;
        }
        rows.push(row);
    }

    rows
}

/// Vertical scroll position of the content viewport.
///
/// The renderer records how many rows the content wrapped to and how many
/// fit on screen; scrolling is clamped against that last layout.
#[derive(Debug, Default)]
pub struct ContentScroll {
    offset: usize,
    total_rows: Cell<usize>,
    viewport_rows: Cell<usize>,
}

impl ContentScroll {
    /// Create a scroll state at the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current first visible row.
    pub fn offset(&self) -> usize {
        self.offset.min(self.max_offset())
    }

    /// Record the layout produced by the last render.
    pub fn record_layout(&self, total_rows: usize, viewport_rows: usize) {
        self.total_rows.set(total_rows);
        self.viewport_rows.set(viewport_rows);
    }

    /// Rows visible at once in the last render.
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows.get()
    }

    fn max_offset(&self) -> usize {
        self.total_rows.get().saturating_sub(self.viewport_rows.get())
    }

    /// Scroll down by `rows`.
    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = (self.offset() + rows).min(self.max_offset());
    }

    /// Scroll up by `rows`.
    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset().saturating_sub(rows);
    }

    /// Jump to the first row.
    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    /// Jump so the last row is visible.
    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tabs_to_stops() {
        assert_eq!(expand_tabs("\tid"), "    id");
        assert_eq!(expand_tabs("ab\tc"), "ab  c");
        assert_eq!(expand_tabs("plain"), "plain");
    }

    #[test]
    fn test_wrap_keeps_blank_lines_and_spaces() {
        let rows = wrap_text("a  b\n\n  c", 80);
        assert_eq!(rows, vec!["a  b", "", "  c"]);
    }

    #[test]
    fn test_wrap_breaks_long_lines() {
        let rows = wrap_text("abcdefghij", 4);
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_wide_characters() {
        // Each CJK character is two columns wide.
        let rows = wrap_text("日本語", 4);
        assert_eq!(rows, vec!["日本", "語"]);
    }

    #[test]
    fn test_scroll_clamped_to_layout() {
        let mut scroll = ContentScroll::new();
        scroll.record_layout(30, 10);

        scroll.scroll_down(5);
        assert_eq!(scroll.offset(), 5);
        scroll.scroll_down(100);
        assert_eq!(scroll.offset(), 20);
        scroll.scroll_up(3);
        assert_eq!(scroll.offset(), 17);
        scroll.to_top();
        assert_eq!(scroll.offset(), 0);
        scroll.to_bottom();
        assert_eq!(scroll.offset(), 20);
    }

    #[test]
    fn test_scroll_when_content_fits() {
        let mut scroll = ContentScroll::new();
        scroll.record_layout(3, 10);
        scroll.scroll_down(1);
        assert_eq!(scroll.offset(), 0);
    }
}
