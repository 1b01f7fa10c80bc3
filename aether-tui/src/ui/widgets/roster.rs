//! Agent roster table: tag, role over today's volume, success rate.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use aether_core::demo::{Accent, AgentProfile};

use crate::theme;

const ROW_HEIGHT: u16 = 2;
const NAME_WIDTH: u16 = 8;
const SUCCESS_WIDTH: u16 = 12;
const SPACING: u16 = 2;

/// Header plus two rows per agent.
pub fn height(agents: &[AgentProfile]) -> u16 {
    agents.len() as u16 * ROW_HEIGHT + 1
}

/// Narrowest width at which every role is shown unclipped.
pub fn min_width(agents: &[AgentProfile]) -> u16 {
    let activity = agents
        .iter()
        .map(|a| a.role.chars().count().max(a.activity().chars().count()))
        .max()
        .unwrap_or(0) as u16;
    NAME_WIDTH + SPACING + activity + SPACING + SUCCESS_WIDTH
}

pub fn render(f: &mut Frame, area: Rect, agents: &[AgentProfile]) {
    let header = Row::new(["Agent", "Activity", "Success"])
        .style(theme::muted().add_modifier(Modifier::BOLD));

    // All roster tags share one colour.
    let rows = agents.iter().map(|agent| {
        let activity = Text::from(vec![
            Line::styled(agent.role, theme::text()),
            Line::styled(agent.activity(), theme::muted()),
        ]);
        Row::new(vec![
            Cell::from(agent.name).style(theme::agent(Accent::Orion)),
            Cell::from(activity),
            Cell::from(agent.success_label()).style(theme::accent()),
        ])
        .height(ROW_HEIGHT)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(NAME_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(SUCCESS_WIDTH),
        ],
    )
    .header(header)
    .column_spacing(SPACING);

    f.render_widget(table, area);
}
