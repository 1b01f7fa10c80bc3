//! Console view — KPI tiles above the live event stream and system health.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use aether_core::demo::{self, Kpi};
use aether_core::ViewId;

use crate::app::AppState;
use crate::theme;
use crate::ui::widgets::card;

/// Borders and padding around a tile's text.
const TILE_CHROME: u16 = 4;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let content = demo::panel(ViewId::Console);

    let per_row = tiles_per_row(area.width, content.kpis);
    let [kpi_area, cards_area] = Layout::vertical([
        Constraint::Length(kpi_grid_height(area.width, content.kpis, per_row)),
        Constraint::Min(0),
    ])
    .areas(area);

    render_kpis(f, kpi_area, content.kpis, per_row);

    let columns = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(cards_area);
    for (c, rect) in content.cards.iter().zip(columns.iter()) {
        card::render(f, *rect, c);
    }
}

/// All tiles on one row while every label fits on a single line, else two per row.
fn tiles_per_row(width: u16, kpis: &[Kpi]) -> usize {
    if kpis.is_empty() {
        return 1;
    }
    let longest = kpis.iter().map(|k| k.label.chars().count()).max().unwrap_or(0) as u16;
    if width / kpis.len() as u16 >= longest + TILE_CHROME {
        kpis.len()
    } else {
        kpis.len().min(2)
    }
}

fn tile_height(kpi: &Kpi, tile_width: u16) -> u16 {
    let inner = tile_width.saturating_sub(TILE_CHROME);
    card::wrapped_height(kpi.label, inner) + 1 + card::wrapped_height(kpi.caption, inner) + 2
}

fn kpi_grid_height(width: u16, kpis: &[Kpi], per_row: usize) -> u16 {
    let tile_width = width / per_row as u16;
    let row_height = kpis.iter().map(|k| tile_height(k, tile_width)).max().unwrap_or(0);
    row_height * kpis.len().div_ceil(per_row) as u16
}

fn render_kpis(f: &mut Frame, area: Rect, kpis: &[Kpi], per_row: usize) {
    if kpis.is_empty() {
        return;
    }
    let row_count = kpis.len().div_ceil(per_row);
    let rows = Layout::vertical(vec![Constraint::Ratio(1, row_count as u32); row_count]).split(area);

    for (chunk, row) in kpis.chunks(per_row).zip(rows.iter()) {
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, per_row as u32); per_row]).split(*row);
        for (kpi, rect) in chunk.iter().zip(cells.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border(false))
                .padding(Padding::horizontal(1));
            let lines = vec![
                Line::from(Span::styled(kpi.label, theme::muted())),
                Line::from(Span::styled(kpi.value, theme::accent_bold())),
                Line::from(Span::styled(kpi.caption, theme::muted())),
            ];
            f.render_widget(
                Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
                *rect,
            );
        }
    }
}
