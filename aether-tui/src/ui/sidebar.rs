//! Sidebar — brand, navigation entries, automation metric, operator card.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use aether_core::shell::{BRAND, OPERATOR, SIDEBAR_METRIC};
use aether_core::{ViewId, NAV_ENTRIES};

use crate::app::AppState;
use crate::theme;

/// Row (inside the frame) of the first navigation entry.
pub const NAV_TOP: u16 = 3;

const FOOTER_HEIGHT: u16 = 7;

fn frame() -> Block<'static> {
    Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::panel_border(false))
        .padding(Padding::horizontal(1))
}

/// Clickable row of every navigation entry that fits in `area`.
pub fn entry_rects(area: Rect) -> Vec<(Rect, ViewId)> {
    let inner = frame().inner(area);
    NAV_ENTRIES
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let y = inner.y + NAV_TOP + i as u16;
            (y < inner.bottom()).then(|| (Rect::new(inner.x, y, inner.width, 1), entry.id))
        })
        .collect()
}

pub fn entry_at(area: Rect, column: u16, row: u16) -> Option<ViewId> {
    entry_rects(area)
        .into_iter()
        .find(|(r, _)| column >= r.x && column < r.right() && row >= r.y && row < r.bottom())
        .map(|(_, view)| view)
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = frame();
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(NAV_TOP), Constraint::Length(FOOTER_HEIGHT)])
        .split(inner);

    // Brand
    let brand = vec![
        Line::from(vec![
            Span::styled("◆ ", theme::accent()),
            Span::styled(BRAND.name, theme::accent_bold()),
        ]),
        Line::from(Span::styled(format!("  {}", BRAND.tagline), theme::muted())),
    ];
    f.render_widget(Paragraph::new(brand), sections[0]);

    // Navigation entries, each on its own clickable row.
    for (rect, view) in entry_rects(area) {
        let active = app.nav.is_selected(view);
        let dot = if active { "●" } else { "·" };
        let label = format!(" {dot} {:<width$}", view.label(), width = rect.width as usize);
        f.render_widget(
            Paragraph::new(Span::styled(label, theme::nav_item(active))),
            rect,
        );
    }

    // Footer: automation metric + operator.
    if inner.height >= NAV_TOP + NAV_ENTRIES.len() as u16 + FOOTER_HEIGHT {
        let footer = vec![
            Line::from(Span::styled(SIDEBAR_METRIC.label, theme::muted())),
            Line::from(Span::styled(SIDEBAR_METRIC.value, theme::accent_bold())),
            Line::from(Span::styled(SIDEBAR_METRIC.caption, theme::muted())),
        ];
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(sections[1]);
        f.render_widget(Paragraph::new(footer).wrap(Wrap { trim: true }), parts[0]);

        let operator = vec![
            Line::from(vec![
                Span::styled(format!("[{}] ", OPERATOR.initial), theme::accent_bold()),
                Span::styled(OPERATOR.name, theme::heading()),
            ]),
            Line::from(Span::styled(format!("    {}", OPERATOR.role), theme::muted())),
        ];
        f.render_widget(Paragraph::new(operator), parts[1]);
    }
}
