//! Application rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use filepeek_core::{Catalog, ERROR_CONTENT};

use crate::preview::{ContentScroll, wrap_text};
use crate::theme::Theme;
use crate::ui::{
    AppLayout, ContentPane, Dropdown, HelpOverlay, PreviewButton, Selector, content_text_width,
};

use super::state::{AppMode, DropdownState, Focus, PreviewState};

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub mode: AppMode,
    pub focus: Focus,
    pub theme: &'a Theme,
    pub catalog: &'a Catalog,
    pub preview: &'a PreviewState,
    pub dropdown: Option<DropdownState>,
    pub scroll: &'a ContentScroll,
    pub content_height: u16,
    pub base_url: &'a str,
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    // Fill entire area with theme background color
    let base_style = Style::default()
        .bg(ctx.theme.background)
        .fg(ctx.theme.foreground);
    buf.set_style(area, base_style);

    let content = ctx.preview.content();
    let rows = if content.is_empty() {
        Vec::new()
    } else {
        wrap_text(content, content_text_width(area.width) as usize)
    };
    let content_rows = (!content.is_empty())
        .then(|| rows.len().clamp(1, usize::from(ctx.content_height.max(1))) as u16);

    let layout = AppLayout::new(area, content_rows);

    render_header(ctx, layout.header, buf);

    Selector::new(
        ctx.preview.selector_label(ctx.catalog),
        ctx.preview.selected().is_some(),
        ctx.focus == Focus::Selector,
        ctx.theme,
    )
    .render(layout.selector, buf);

    PreviewButton::new(
        ctx.preview.trigger_label(),
        ctx.preview.can_trigger(),
        ctx.focus == Focus::Button,
        ctx.theme,
    )
    .render(layout.button, buf);

    if let Some(content_area) = layout.content {
        let visible = content_area.height.saturating_sub(2) as usize;
        ctx.scroll.record_layout(rows.len(), visible);
        ContentPane::new(
            &rows,
            ctx.scroll.offset(),
            content == ERROR_CONTENT,
            ctx.focus == Focus::Content,
            ctx.theme,
        )
        .render(content_area, buf);
    } else {
        ctx.scroll.record_layout(0, 0);
    }

    render_footer(ctx, layout.footer, buf);

    // Overlays
    match ctx.mode {
        AppMode::Selecting => {
            if let Some(dropdown) = ctx.dropdown {
                let widget = Dropdown::new(
                    ctx.catalog,
                    dropdown.highlighted,
                    ctx.preview.selected(),
                    ctx.theme,
                );
                let dropdown_area = widget.area(layout.selector, area);
                widget.render(dropdown_area, buf);
            }
        }
        AppMode::Help => HelpOverlay::new(ctx.theme).render(area, buf),
        AppMode::Normal | AppMode::Quit => {}
    }
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::styled(" filepeek ", ctx.theme.title),
        Span::raw("│ "),
        Span::raw(format!("{} files", ctx.catalog.len())),
    ]);
    Paragraph::new(line).style(ctx.theme.header).render(area, buf);
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let hints = match ctx.mode {
        AppMode::Selecting => " j/k move  Enter choose  Esc close ",
        AppMode::Help => " Esc close ",
        _ => " Tab focus  Enter activate  p preview  ? help  q quit ",
    };
    let line = Line::from(vec![
        Span::raw(hints),
        Span::styled(format!("│ {}", ctx.base_url), Style::new().fg(ctx.theme.muted)),
    ]);
    Paragraph::new(line).style(ctx.theme.footer).render(area, buf);
}
