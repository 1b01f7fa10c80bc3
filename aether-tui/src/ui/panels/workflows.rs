//! Workflows view — trigger/agent/action chains beside the design note.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use aether_core::demo;
use aether_core::ViewId;

use crate::app::AppState;
use crate::ui::widgets::card;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let content = demo::panel(ViewId::Workflows);

    let columns = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    for (c, rect) in content.cards.iter().zip(columns.iter()) {
        card::render(f, *rect, c);
    }
}
