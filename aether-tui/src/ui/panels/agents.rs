//! Agents view — roster table across the top, recent-runs note below.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use aether_core::demo;
use aether_core::ViewId;

use crate::app::AppState;
use crate::ui::widgets::card;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let content = demo::panel(ViewId::Agents);
    let [roster, runs] = [&content.cards[0], &content.cards[1]];

    let [top, bottom] = Layout::vertical([
        Constraint::Length(card::card_height(roster, area.width)),
        Constraint::Min(0),
    ])
    .areas(area);

    card::render(f, top, roster);
    card::render(f, bottom, runs);
}
