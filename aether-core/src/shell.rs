//! Static chrome around the panels: brand, sidebar footer, operator, top-bar chips.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

/// Signed-in operator shown at the bottom of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operator {
    pub initial: char,
    pub name: &'static str,
    pub role: &'static str,
}

pub const BRAND: Brand = Brand {
    name: "AETHER",
    tagline: "AI Ops Command",
};

pub const SIDEBAR_METRIC: SidebarMetric = SidebarMetric {
    label: "AI automation",
    value: "83%",
    caption: "of tickets are resolved without a human reply.",
};

pub const OPERATOR: Operator = Operator {
    initial: 'M',
    name: "Maksym H.",
    role: "Support Lead",
};

pub const DEMO_CHIP: &str = "Demo · no real data";
pub const PALETTE_LABEL: &str = "Command palette";
pub const PALETTE_HINT: &str = "Ctrl+K";
