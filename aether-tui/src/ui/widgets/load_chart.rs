//! Decorative load chart.
//!
//! Carries no data: a shaded box with vertical grid lines every few columns,
//! standing in for a 24h volume graph.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::theme;

pub const HEIGHT: u16 = 9;
const GRID_STEP: u16 = 4;

pub fn render(f: &mut Frame, area: Rect) {
    let area = Rect {
        height: area.height.min(HEIGHT),
        ..area
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::panel_border(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Upper half shaded, lower half bare, like a top-down gradient.
    let lines: Vec<Line> = (0..inner.height)
        .map(|row| {
            let style = if row < inner.height / 2 {
                Style::default().fg(theme::GRID).bg(theme::CHART_FILL)
            } else {
                Style::default().fg(theme::GRID)
            };
            Line::from(Span::styled(grid_row(inner.width), style))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn grid_row(width: u16) -> String {
    (0..width)
        .map(|x| if x % GRID_STEP == 0 { '┆' } else { ' ' })
        .collect()
}
