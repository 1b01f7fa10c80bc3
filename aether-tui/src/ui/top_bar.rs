//! Top bar — current view title and subtitle, demo chip, palette button.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use ratatui::Frame;

use aether_core::demo::Tone;
use aether_core::shell::{DEMO_CHIP, PALETTE_HINT, PALETTE_LABEL};

use crate::app::AppState;
use crate::theme;

/// Title row, subtitle row, bottom border.
pub const HEIGHT: u16 = 3;

/// Minimum blank columns between the title and the actions.
const GAP: usize = 2;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::panel_border(false))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let meta = app.nav.metadata();
    let [title_row, subtitle_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    let title = Line::from(Span::styled(meta.title, theme::heading()));
    match actions_for(title_row.width, title.width()) {
        Some(actions) => {
            let [left, right] = Layout::horizontal([
                Constraint::Min(0),
                Constraint::Length(actions.width() as u16),
            ])
            .areas(title_row);
            f.render_widget(Paragraph::new(title), left);
            f.render_widget(Paragraph::new(actions), right);
        }
        None => f.render_widget(Paragraph::new(title), title_row),
    }

    f.render_widget(
        Paragraph::new(Span::styled(meta.subtitle, theme::muted())),
        subtitle_row,
    );
}

/// Widest action line that leaves the title whole, if any does.
fn actions_for(width: u16, title_width: usize) -> Option<Line<'static>> {
    [actions_line(), palette_hint()]
        .into_iter()
        .find(|actions| title_width + GAP + actions.width() <= width as usize)
}

fn actions_line() -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!(" {DEMO_CHIP} "), theme::tone(Tone::Soft)),
        Span::raw("  "),
        Span::styled(format!(" ⌘K {PALETTE_LABEL} "), theme::nav_item(true)),
    ];
    spans.extend(palette_hint().spans);
    Line::from(spans)
}

fn palette_hint() -> Line<'static> {
    Line::from(Span::styled(
        format!(" {PALETTE_HINT} "),
        theme::accent().add_modifier(Modifier::REVERSED),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aether_core::ViewId;

    use crate::config::TuiConfig;
    use crate::test_helpers::render_to_text;

    fn top_bar(view: ViewId, width: u16) -> String {
        let mut app = AppState::new(TuiConfig::default());
        app.select(view);
        render_to_text(width, HEIGHT, |f, area| render(f, area, &app))
    }

    #[test]
    fn wide_bar_shows_title_and_all_actions() {
        let text = top_bar(ViewId::Console, 94);
        let first = text.lines().next().unwrap();
        assert!(first.contains("Command Console"));
        assert!(first.contains(DEMO_CHIP));
        assert!(first.contains(PALETTE_LABEL));
        assert!(first.contains(PALETTE_HINT));
    }

    #[test]
    fn narrow_bar_keeps_every_title() {
        // Main column of an 80-column terminal.
        for view in ViewId::ALL {
            let text = top_bar(view, 54);
            let meta = view.metadata();
            assert!(text.contains(meta.title), "{view}: {text}");
            assert!(text.contains(meta.subtitle), "{view}: {text}");
            assert!(!text.contains(DEMO_CHIP));
            assert!(text.contains(PALETTE_HINT));
        }
    }

    #[test]
    fn actions_drop_before_the_title_is_covered() {
        assert!(actions_for(20, 15).is_none());
        assert_eq!(actions_for(25, 15).map(|l| l.width()), Some(palette_hint().width()));
        assert_eq!(actions_for(200, 15).map(|l| l.width()), Some(actions_line().width()));
    }
}
