//! Card frame and body renderers shared by the panels.
//!
//! A card is a bordered block titled with the card title, an optional badge
//! pill on the right of the border, and the subtitle as its first line.
//! [`render_frame`] draws that chrome and hands back the body area;
//! [`render_body`] fills it according to the body kind. Panels only decide
//! where each card goes.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use aether_core::demo::{Card, CardBody, EventRow, StatusRow, Tone};

use crate::theme;
use crate::ui::widgets::{load_chart, roster};

/// Top and bottom border plus the spacer under the subtitle.
const CHROME_HEIGHT: u16 = 3;
/// Left and right border plus one column of padding on each side.
const CHROME_WIDTH: u16 = 4;
/// Indent of a status pill moved below its label.
const VALUE_INDENT: &str = "  ";

/// Frame plus body.
pub fn render(f: &mut Frame, area: Rect, card: &Card) {
    let body = render_frame(f, area, card);
    render_body(f, body, &card.body);
}

/// Draw border, title, badge and subtitle. Returns the area left for the body.
pub fn render_frame(f: &mut Frame, area: Rect, card: &Card) -> Rect {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .padding(Padding::horizontal(1))
        .title(Span::styled(format!(" {} ", card.title), theme::panel_title(true)));
    if let Some(badge) = card.badge {
        block = block.title_top(Line::from(pill(badge.text, badge.tone)).right_aligned());
    }

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return inner;
    }

    let subtitle_rows = wrapped_height(card.subtitle, inner.width).min(inner.height);
    let subtitle = Paragraph::new(Span::styled(
        card.subtitle,
        theme::muted().add_modifier(Modifier::ITALIC),
    ))
    .wrap(Wrap { trim: true });
    f.render_widget(subtitle, Rect { height: subtitle_rows, ..inner });

    // Subtitle plus one spacer row.
    let used = (subtitle_rows + 1).min(inner.height);
    Rect {
        y: inner.y + used,
        height: inner.height - used,
        ..inner
    }
}

pub fn render_body(f: &mut Frame, area: Rect, body: &CardBody) {
    match *body {
        CardBody::Events(rows) => f.render_widget(
            Paragraph::new(event_lines(rows)).wrap(Wrap { trim: false }),
            area,
        ),
        CardBody::Flows(rows) => f.render_widget(
            Paragraph::new(flow_lines(rows)).wrap(Wrap { trim: false }),
            area,
        ),
        CardBody::Status(rows) => {
            f.render_widget(Paragraph::new(status_lines(rows, area.width)), area)
        }
        CardBody::Agents(agents) => roster::render(f, area, agents),
        CardBody::Note(text) => f.render_widget(note(text), area),
        CardBody::Quote(text) => f.render_widget(quote(text), area),
        CardBody::NoteThenStatus(text, rows) => {
            let [top, rest] = Layout::vertical([
                Constraint::Length(wrapped_height(text, area.width) + 1),
                Constraint::Min(0),
            ])
            .areas(area);
            f.render_widget(note(text), top);
            f.render_widget(Paragraph::new(status_lines(rows, rest.width)), rest);
        }
        CardBody::LoadChart => load_chart::render(f, area),
    }
}

/// Rows a card needs at `width` columns to show its whole body.
pub fn card_height(card: &Card, width: u16) -> u16 {
    let inner = width.saturating_sub(CHROME_WIDTH);
    wrapped_height(card.subtitle, inner) + body_height(&card.body, inner) + CHROME_HEIGHT
}

/// Whether a card at `width` columns shows its unwrapped lines in full.
/// Text bodies wrap, so only status pills and the roster can clip.
pub fn fits(card: &Card, width: u16) -> bool {
    let inner = width.saturating_sub(CHROME_WIDTH);
    match card.body {
        CardBody::Status(rows) | CardBody::NoteThenStatus(_, rows) => status_lines(rows, inner)
            .iter()
            .all(|l| l.width() <= inner as usize),
        CardBody::Agents(agents) => roster::min_width(agents) <= inner,
        CardBody::Events(_)
        | CardBody::Flows(_)
        | CardBody::Note(_)
        | CardBody::Quote(_)
        | CardBody::LoadChart => true,
    }
}

pub fn body_height(body: &CardBody, width: u16) -> u16 {
    match *body {
        CardBody::Events(rows) => rows
            .iter()
            .map(|r| {
                wrapped_height(&format!("{}  {}", r.tag, r.when), width)
                    + wrapped_height(r.text, width.saturating_sub(2))
            })
            .sum(),
        CardBody::Flows(rows) => rows
            .iter()
            .map(|r| {
                wrapped_height(&format!("{} · {}", r.tag, r.when), width)
                    + wrapped_height(r.text, width.saturating_sub(2))
                    + 1
            })
            .sum(),
        CardBody::Status(rows) => status_lines(rows, width).len() as u16,
        CardBody::Agents(agents) => roster::height(agents),
        CardBody::Note(text) | CardBody::Quote(text) => wrapped_height(text, width),
        CardBody::NoteThenStatus(text, rows) => {
            wrapped_height(text, width) + 1 + status_lines(rows, width).len() as u16
        }
        CardBody::LoadChart => load_chart::HEIGHT,
    }
}

pub fn pill(text: &str, tone: Tone) -> Span<'static> {
    Span::styled(format!(" {text} "), theme::tone(tone))
}

/// Label column padded to the longest label, pill after it. A row whose pill
/// would not fit in `width` gets the pill on its own indented line.
pub fn status_lines(rows: &[StatusRow], width: u16) -> Vec<Line<'static>> {
    let label_width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0) + 2;
    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        let value = pill(row.value, row.tone);
        if label_width + value.width() <= width as usize {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<label_width$}", row.label), theme::text()),
                value,
            ]));
        } else {
            lines.push(Line::from(Span::styled(row.label, theme::text())));
            lines.push(Line::from(vec![Span::raw(VALUE_INDENT), value]));
        }
    }
    lines
}

/// Two lines per event: tag and time, then the indented text.
pub fn event_lines(rows: &[EventRow]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(rows.len() * 2);
    for row in rows {
        lines.push(Line::from(vec![
            Span::styled(row.tag, theme::agent(row.accent)),
            Span::styled(format!("  {}", row.when), theme::muted()),
        ]));
        lines.push(Line::from(Span::styled(format!("  {}", row.text), theme::text())));
    }
    lines
}

/// Name and trigger on one line, the chain beneath, a blank line between flows.
pub fn flow_lines(rows: &[EventRow]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(rows.len() * 3);
    for row in rows {
        lines.push(Line::from(vec![
            Span::styled(row.tag, theme::agent(row.accent)),
            Span::styled(" · ", theme::muted()),
            Span::styled(row.when, theme::accent()),
        ]));
        lines.push(Line::from(Span::styled(format!("  {}", row.text), theme::text())));
        lines.push(Line::from(""));
    }
    lines
}

pub fn note(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(Span::styled(text, theme::muted())).wrap(Wrap { trim: true })
}

pub fn quote(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(Span::styled(text, theme::text().add_modifier(Modifier::ITALIC)))
        .wrap(Wrap { trim: true })
}

/// Rows `text` takes when word-wrapped at `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    let mut lines = 1;
    let mut used = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used == 0 {
            used = len;
        } else if used + 1 + len <= width {
            used += 1 + len;
        } else {
            lines += 1;
            used = len;
        }
        // Words longer than a row spill over.
        while used > width {
            lines += 1;
            used -= width;
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use aether_core::demo::{self, Accent};
    use aether_core::ViewId;

    use crate::test_helpers::render_to_text;

    const PREFS: [StatusRow; 2] = [
        StatusRow { label: "Time zone", value: "UTC", tone: Tone::Soft },
        StatusRow {
            label: "Notification channel",
            value: "Slack · #ai-ops",
            tone: Tone::Soft,
        },
    ];

    #[test]
    fn status_labels_are_padded_to_one_column() {
        let lines = status_lines(&PREFS, 60);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content.chars().count(), 22);
        assert_eq!(lines[1].spans[0].content.chars().count(), 22);
        assert_eq!(lines[0].spans[1].content, " UTC ");
    }

    #[test]
    fn narrow_status_moves_value_below_label() {
        // 22 label columns + 17 for the pill do not fit in 30.
        let lines = status_lines(&PREFS, 30);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].spans[0].content, "Notification channel");
        assert_eq!(lines[2].spans[1].content, " Slack · #ai-ops ");
        assert!(lines.iter().all(|l| l.width() <= 30));
    }

    #[test]
    fn narrow_status_card_shows_full_values() {
        let body = CardBody::Status(&PREFS);
        let text = render_to_text(24, 6, |f, area| render_body(f, area, &body));
        assert!(text.contains("Slack · #ai-ops"), "{text}");
        assert!(text.contains("UTC"));
    }

    #[test]
    fn events_take_two_lines_each() {
        let rows = [EventRow {
            tag: "ORION",
            text: "Qualified leads.",
            when: "23:18:55",
            accent: Accent::Orion,
        }];
        let lines = event_lines(&rows);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content, "ORION");
        assert_eq!(lines[1].spans[0].content, "  Qualified leads.");
    }

    #[test]
    fn flows_show_name_trigger_and_chain() {
        let text = render_to_text(60, 12, |f, area| {
            render_body(f, area, &demo::panel(ViewId::Workflows).cards[0].body)
        });
        assert!(text.contains("Lead intake · On form submit"));
        assert!(text.contains("Daily ops digest · 09:00 daily"));
        assert!(text.contains("Schedule → VEGA"));
    }

    #[test]
    fn wrapped_height_counts_word_breaks() {
        assert_eq!(wrapped_height("abc def", 7), 1);
        assert_eq!(wrapped_height("abc def", 6), 2);
        assert_eq!(wrapped_height("abcdefg", 3), 3);
        assert_eq!(wrapped_height("abc", 0), 0);
    }

    #[test]
    fn preferences_card_height_covers_note_and_rows() {
        let prefs = &demo::panel(ViewId::Settings).cards[0];
        // Wide: note on two rows, spacer, three single-line rows.
        let wide = card_height(prefs, 104);
        // Narrow: the threshold value drops below its label.
        let narrow = card_height(prefs, 54);
        assert!(narrow > wide, "{narrow} <= {wide}");

        let text = render_to_text(54, narrow, |f, area| render(f, area, prefs));
        assert!(text.contains("Alert when ≥ 3 incidents open"), "{text}");
        assert!(text.contains("Slack · #ai-ops"));
    }

    #[test]
    fn long_subtitles_wrap_instead_of_clipping() {
        let card = &demo::panel(ViewId::Analytics).cards[1];
        let text = render_to_text(24, card_height(card, 24), |f, area| render(f, area, card));
        for word in card.subtitle.split_whitespace() {
            assert!(text.contains(word), "missing {word}\n{text}");
        }
        assert!(text.contains("Automation success"));
        assert!(text.contains("7 in last 24h"));
    }

    #[test]
    fn fits_tracks_unwrapped_lines() {
        let prefs = &demo::panel(ViewId::Settings).cards[0];
        assert!(fits(prefs, 54));
        assert!(!fits(prefs, 30));
        let note = &demo::panel(ViewId::Workflows).cards[1];
        assert!(fits(note, 10));
        let roster = &demo::panel(ViewId::Agents).cards[0];
        assert!(fits(roster, 52));
        assert!(!fits(roster, 51));
    }
}
