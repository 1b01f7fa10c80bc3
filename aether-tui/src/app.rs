//! Application state — single-owner, main-thread only.
//!
//! The view selection lives in the `Navigator` owned here; everything the
//! frame shows is derived from it on each draw.

use ratatui::layout::Rect;
use tracing::info;

use aether_core::{Navigator, ViewId};

use crate::config::TuiConfig;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Palette,
}

/// Top-level application state.
pub struct AppState {
    pub nav: Navigator,
    pub running: bool,
    pub overlay: Overlay,
    /// Highlighted row in the command palette.
    pub palette_cursor: usize,
    pub status_message: Option<(String, StatusLevel)>,
    /// Frame area of the last draw, used to hit-test mouse clicks.
    pub viewport: Rect,
    pub config: TuiConfig,
}

impl AppState {
    pub fn new(config: TuiConfig) -> Self {
        Self {
            nav: Navigator::new(),
            running: true,
            overlay: Overlay::None,
            palette_cursor: 0,
            status_message: None,
            viewport: Rect::default(),
            config,
        }
    }

    pub fn selection(&self) -> ViewId {
        self.nav.selection()
    }

    pub fn select(&mut self, view: ViewId) {
        self.nav.set_selection(view);
    }

    pub fn open_palette(&mut self) {
        self.palette_cursor = self.selection().index();
        self.overlay = Overlay::Palette;
    }

    /// Select the palette's highlighted entry and close it.
    pub fn confirm_palette(&mut self) {
        if let Some(view) = ViewId::from_index(self.palette_cursor) {
            self.select(view);
        }
        self.overlay = Overlay::None;
    }

    pub fn quit(&mut self) {
        info!(view = %self.selection(), "quit requested");
        self.running = false;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
