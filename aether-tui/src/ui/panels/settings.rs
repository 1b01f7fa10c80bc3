//! Settings view — preferences explained then listed, case-study copy.
//!
//! The two cards sit side by side while every preference value fits on one
//! line of the left column; otherwise they stack.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use aether_core::demo;
use aether_core::ViewId;

use crate::app::AppState;
use crate::ui::widgets::card;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let content = demo::panel(ViewId::Settings);
    let [prefs, copy] = [&content.cards[0], &content.cards[1]];

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

    let [first, second] = if card::fits(prefs, left.width) {
        [left, right]
    } else {
        Layout::vertical([
            Constraint::Length(card::card_height(prefs, area.width)),
            Constraint::Min(0),
        ])
        .areas(area)
    };

    card::render(f, first, prefs);
    card::render(f, second, copy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::test_helpers::render_panel;

    #[test]
    fn preference_values_are_never_clipped() {
        let app = AppState::new(TuiConfig::default());
        // Panel widths for terminals 80 to 200 columns wide.
        for width in 54..=174 {
            let text = render_panel(render, &app, width, 30);
            assert!(text.contains("Alert when ≥ 3 incidents open"), "clipped at {width}");
            assert!(text.contains("Slack · #ai-ops"), "clipped at {width}");
            assert!(text.contains("Time zone"));
        }
    }

    #[test]
    fn cards_stack_on_narrow_panels() {
        let app = AppState::new(TuiConfig::default());
        let text = render_panel(render, &app, 54, 30);
        let lines: Vec<&str> = text.lines().collect();
        let prefs = lines.iter().position(|l| l.contains("Ops preferences")).unwrap();
        let copy = lines.iter().position(|l| l.contains("Case-study copy")).unwrap();
        assert!(copy > prefs);
    }
}
