//! Dashboard views, their metadata, and the sidebar navigation entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AetherError;

/// Which dashboard screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Console,
    Agents,
    Workflows,
    Analytics,
    Settings,
}

impl ViewId {
    /// All views in sidebar order.
    pub const ALL: [ViewId; 5] = [
        ViewId::Console,
        ViewId::Agents,
        ViewId::Workflows,
        ViewId::Analytics,
        ViewId::Settings,
    ];

    pub fn index(self) -> usize {
        match self {
            ViewId::Console => 0,
            ViewId::Agents => 1,
            ViewId::Workflows => 2,
            ViewId::Analytics => 3,
            ViewId::Settings => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn next(self) -> ViewId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> ViewId {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Lowercase identifier used on the command line and in JSON.
    pub fn slug(self) -> &'static str {
        match self {
            ViewId::Console => "console",
            ViewId::Agents => "agents",
            ViewId::Workflows => "workflows",
            ViewId::Analytics => "analytics",
            ViewId::Settings => "settings",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            ViewId::Console => "Console",
            ViewId::Agents => "Agents",
            ViewId::Workflows => "Workflows",
            ViewId::Analytics => "Analytics",
            ViewId::Settings => "Settings",
        }
    }

    /// Title and subtitle shown in the top bar. Total over every view.
    pub fn metadata(self) -> ViewMeta {
        match self {
            ViewId::Console => ViewMeta {
                title: "Command Console",
                subtitle: "Unified live view of all AI assistants and systems.",
            },
            ViewId::Agents => ViewMeta {
                title: "AI Agents",
                subtitle: "Inspect individual AI agents and their performance.",
            },
            ViewId::Workflows => ViewMeta {
                title: "Workflows",
                subtitle: "See how triggers, AI steps and actions connect.",
            },
            ViewId::Analytics => ViewMeta {
                title: "Analytics",
                subtitle: "High-level load and reliability overview.",
            },
            ViewId::Settings => ViewMeta {
                title: "Settings",
                subtitle: "Demo preferences for the AETHER AI Ops console.",
            },
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ViewId {
    type Err = AetherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.slug() == wanted)
            .ok_or_else(|| AetherError::UnknownView(s.to_string()))
    }
}

/// Top-bar title and subtitle for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewMeta {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Pure lookup of a view's metadata.
pub fn resolve_metadata(id: ViewId) -> ViewMeta {
    id.metadata()
}

/// A clickable sidebar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub id: ViewId,
    pub label: &'static str,
}

/// Sidebar entries, top to bottom.
pub const NAV_ENTRIES: [NavEntry; 5] = [
    NavEntry { id: ViewId::Console, label: "Console" },
    NavEntry { id: ViewId::Agents, label: "Agents" },
    NavEntry { id: ViewId::Workflows, label: "Workflows" },
    NavEntry { id: ViewId::Analytics, label: "Analytics" },
    NavEntry { id: ViewId::Settings, label: "Settings" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_cycle() {
        assert_eq!(ViewId::Console.next(), ViewId::Agents);
        assert_eq!(ViewId::Settings.next(), ViewId::Console);
        assert_eq!(ViewId::Console.prev(), ViewId::Settings);
        assert_eq!(ViewId::Agents.prev(), ViewId::Console);
    }

    #[test]
    fn view_from_index() {
        for i in 0..5 {
            let v = ViewId::from_index(i).unwrap();
            assert_eq!(v.index(), i);
        }
        assert!(ViewId::from_index(5).is_none());
    }

    #[test]
    fn every_view_has_title_and_subtitle() {
        for view in ViewId::ALL {
            let meta = resolve_metadata(view);
            assert!(!meta.title.is_empty(), "{view} has empty title");
            assert!(!meta.subtitle.is_empty(), "{view} has empty subtitle");
        }
    }

    #[test]
    fn titles_are_distinct() {
        let mut titles: Vec<&str> = ViewId::ALL.iter().map(|v| v.metadata().title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 5);
    }

    #[test]
    fn nav_entries_follow_view_order() {
        for (i, entry) in NAV_ENTRIES.iter().enumerate() {
            assert_eq!(entry.id.index(), i);
            assert_eq!(entry.label, entry.id.label());
        }
    }

    #[test]
    fn parse_slug() {
        assert_eq!("agents".parse::<ViewId>(), Ok(ViewId::Agents));
        assert_eq!(" Settings ".parse::<ViewId>(), Ok(ViewId::Settings));
        assert_eq!(
            "dashboard".parse::<ViewId>(),
            Err(AetherError::UnknownView("dashboard".into()))
        );
    }

    #[test]
    fn serde_uses_slugs() {
        let json = serde_json::to_string(&ViewId::Analytics).unwrap();
        assert_eq!(json, "\"analytics\"");
        let back: ViewId = serde_json::from_str("\"workflows\"").unwrap();
        assert_eq!(back, ViewId::Workflows);
    }
}
