//! Navigation state — the single selected view.

use tracing::debug;

use crate::view::{ViewId, ViewMeta};

/// Holds the currently selected view.
///
/// Starts on [`ViewId::Console`]. Writes are unconditional; the type of the
/// argument is the only validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    selection: ViewId,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            selection: ViewId::Console,
        }
    }

    pub fn selection(&self) -> ViewId {
        self.selection
    }

    pub fn set_selection(&mut self, id: ViewId) {
        if self.selection != id {
            debug!(from = %self.selection, to = %id, "view selected");
        }
        self.selection = id;
    }

    pub fn is_selected(&self, id: ViewId) -> bool {
        self.selection == id
    }

    /// Metadata of the current selection.
    pub fn metadata(&self) -> ViewMeta {
        self.selection.metadata()
    }

    pub fn select_next(&mut self) {
        self.set_selection(self.selection.next());
    }

    pub fn select_prev(&mut self) {
        self.set_selection(self.selection.prev());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_console() {
        let nav = Navigator::new();
        assert_eq!(nav.selection(), ViewId::Console);
        assert_eq!(nav.metadata().title, "Command Console");
    }

    #[test]
    fn set_then_get() {
        let mut nav = Navigator::default();
        nav.set_selection(ViewId::Agents);
        assert_eq!(nav.selection(), ViewId::Agents);
        assert!(nav.is_selected(ViewId::Agents));
        assert!(!nav.is_selected(ViewId::Console));
        assert_eq!(nav.metadata().title, "AI Agents");
    }

    #[test]
    fn repeated_set_is_idempotent() {
        let mut nav = Navigator::new();
        nav.set_selection(ViewId::Settings);
        let snapshot = nav.clone();
        nav.set_selection(ViewId::Settings);
        assert_eq!(nav, snapshot);
    }

    #[test]
    fn cycling_wraps() {
        let mut nav = Navigator::new();
        nav.select_prev();
        assert_eq!(nav.selection(), ViewId::Settings);
        nav.select_next();
        assert_eq!(nav.selection(), ViewId::Console);
    }
}
