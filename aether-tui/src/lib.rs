//! AETHER TUI — terminal rendition of the AI Ops command dashboard.
//!
//! Layout:
//! - Sidebar: brand, five navigation entries (click or press 1-5), automation metric, operator
//! - Top bar: title and subtitle of the selected view, demo chip, palette button
//! - Panel: static content of the selected view
//! - Status bar: key hints

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use config::TuiConfig;

#[cfg(test)]
mod test_helpers;
