//! Overlay widgets — key help and command palette.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use aether_core::NAV_ENTRIES;

use crate::app::AppState;
use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Keys [any key]close ")
        .title_style(theme::accent_bold());

    let mut lines = vec![Line::from("")];
    for (keys, desc) in key_bindings_help() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>16}  ", keys), theme::accent()),
            Span::styled(desc, theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Jump-to-view list, opened with Ctrl+K.
pub fn render_palette(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(50, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Command palette [Enter]go [Esc]close ")
        .title_style(theme::panel_title(true));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines = vec![Line::from(Span::styled("Go to view:", theme::muted())), Line::from("")];
    for (i, entry) in NAV_ENTRIES.iter().enumerate() {
        let is_cursor = i == app.palette_cursor;
        let marker = if app.nav.is_selected(entry.id) { "  (current)" } else { "" };
        let meta = entry.id.metadata();
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", i + 1), theme::accent()),
            Span::styled(format!(" {:<10}", entry.label), theme::nav_item(is_cursor)),
            Span::styled(format!(" {}", meta.title), theme::muted()),
            Span::styled(marker, theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
