//! One renderer per dashboard view.
//!
//! - Console: KPI row, live event stream, system health
//! - Agents: agent roster table, recent-runs note
//! - Workflows: trigger → agent → action list, design note
//! - Analytics: decorative load chart, reliability snapshot
//! - Settings: ops preferences, case-study copy

pub mod agents;
pub mod analytics;
pub mod console;
pub mod settings;
pub mod workflows;

use ratatui::layout::Rect;
use ratatui::Frame;

use aether_core::ViewId;

use crate::app::AppState;

/// Draws the static content of one view into the panel area.
pub type PanelRenderer = fn(&mut Frame, Rect, &AppState);

/// Renderer for a view. Total over every view.
pub fn resolve(view: ViewId) -> PanelRenderer {
    match view {
        ViewId::Console => console::render,
        ViewId::Agents => agents::render,
        ViewId::Workflows => workflows::render,
        ViewId::Analytics => analytics::render,
        ViewId::Settings => settings::render,
    }
}
