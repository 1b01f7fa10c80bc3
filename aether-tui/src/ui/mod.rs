//! Top-level UI layout — sidebar, top bar, active panel, status bar.

pub mod overlays;
pub mod panels;
pub mod sidebar;
pub mod status_bar;
pub mod top_bar;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::Frame;

use aether_core::ViewId;

use crate::app::{AppState, Overlay};

/// Screen regions of the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub sidebar: Rect,
    pub top_bar: Rect,
    pub panel: Rect,
    pub status: Rect,
}

/// Split `area` into the shell regions. Pure, so input can hit-test against it.
pub fn shell_layout(area: Rect, sidebar_width: u16) -> ShellLayout {
    // Split: body + 1-line status bar.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width.min(area.width / 2)),
            Constraint::Min(20),
        ])
        .split(rows[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(top_bar::HEIGHT), Constraint::Min(3)])
        .split(columns[1]);

    ShellLayout {
        sidebar: columns[0],
        top_bar: main[0],
        panel: main[1],
        status: rows[1],
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let screen = f.area();
    let shell = shell_layout(screen, app.config.ui.sidebar_width);

    sidebar::render(f, shell.sidebar, app);
    top_bar::render(f, shell.top_bar, app);

    let render_panel = panels::resolve(app.selection());
    render_panel(f, shell.panel, app);

    status_bar::render(f, shell.status, app);

    // Draw overlays on top.
    match app.overlay {
        Overlay::Help => overlays::render_help(f, screen),
        Overlay::Palette => overlays::render_palette(f, screen, app),
        Overlay::None => {}
    }
}

/// Sidebar entry under a screen cell, based on the last drawn viewport.
pub fn view_at(app: &AppState, column: u16, row: u16) -> Option<ViewId> {
    let shell = shell_layout(app.viewport, app.config.ui.sidebar_width);
    sidebar::entry_at(shell.sidebar, column, row)
}

/// Overlay area: `percent_x` by `percent_y` of `area`, centred in it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
