//! Static demo content for the five dashboard panels.
//!
//! Nothing here changes during a session. Every panel is a `'static`
//! constant and [`panel`] is an exhaustive lookup over [`ViewId`].

use serde::Serialize;

use crate::view::ViewId;

/// Semantic colour of a status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Neutral,
    Warn,
    Alert,
    Soft,
}

/// Colour key of an event tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Orion,
    Selene,
    Titan,
    Vega,
}

/// Headline number on the console view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

/// Label plus pill, used for health, reliability and preference rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusRow {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

/// Tagged line of the event stream and workflow list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventRow {
    pub tag: &'static str,
    pub text: &'static str,
    pub when: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentProfile {
    pub name: &'static str,
    pub role: &'static str,
    pub msgs_today: u32,
    pub success_pct: u8,
}

impl AgentProfile {
    pub fn summary(&self) -> String {
        format!("{} · {}", self.role, self.activity())
    }

    pub fn activity(&self) -> String {
        format!("{} msgs today", self.msgs_today)
    }

    pub fn success_label(&self) -> String {
        format!("{}% success", self.success_pct)
    }
}

/// Pill shown in a card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum CardBody {
    Events(&'static [EventRow]),
    /// Trigger → agent → action chains; `tag` names the flow, `when` its trigger.
    Flows(&'static [EventRow]),
    Status(&'static [StatusRow]),
    Agents(&'static [AgentProfile]),
    Note(&'static str),
    /// Reusable copy, shown as a quotation.
    Quote(&'static str),
    NoteThenStatus(&'static str, &'static [StatusRow]),
    /// Decorative grid; carries no data.
    LoadChart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge: Option<Badge>,
    pub body: CardBody,
}

/// Everything a view shows below the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelContent {
    pub view: ViewId,
    pub kpis: &'static [Kpi],
    pub cards: &'static [Card],
}

/// Static content of a view. Total over every view.
pub fn panel(id: ViewId) -> &'static PanelContent {
    match id {
        ViewId::Console => &CONSOLE,
        ViewId::Agents => &AGENTS,
        ViewId::Workflows => &WORKFLOWS,
        ViewId::Analytics => &ANALYTICS,
        ViewId::Settings => &SETTINGS,
    }
}

// ─── Console ─────────────────────────────────────────────────────────

const CONSOLE_KPIS: [Kpi; 4] = [
    Kpi {
        label: "Active agents",
        value: "4",
        caption: "Orchestrating support, billing and sales.",
    },
    Kpi {
        label: "Messages (last 24h)",
        value: "1,948",
        caption: "Chat, email and internal tools.",
    },
    Kpi {
        label: "Automation success",
        value: "93%",
        caption: "Completed without human handoff.",
    },
    Kpi {
        label: "Open incidents",
        value: "3",
        caption: "All under investigation.",
    },
];

const LIVE_EVENTS: [EventRow; 4] = [
    EventRow {
        tag: "ORION",
        text: "Qualified 4 new leads from inbound forms.",
        when: "23:18:55",
        accent: Accent::Orion,
    },
    EventRow {
        tag: "SELENE",
        text: "Resolved 12 chat conversations without handoff.",
        when: "23:18:58",
        accent: Accent::Selene,
    },
    EventRow {
        tag: "TITAN",
        text: "Executed nightly automation run for billing exports.",
        when: "23:19:03",
        accent: Accent::Titan,
    },
    EventRow {
        tag: "VEGA",
        text: "Generated summary of yesterday's usage for #ops.",
        when: "23:19:07",
        accent: Accent::Vega,
    },
];

const SYSTEM_HEALTH: [StatusRow; 5] = [
    StatusRow { label: "LLM provider", value: "Operational", tone: Tone::Success },
    StatusRow { label: "Automation runners", value: "Healthy", tone: Tone::Success },
    StatusRow { label: "Inbox processing", value: "Stable", tone: Tone::Neutral },
    StatusRow { label: "Incident queue", value: "Slight delay", tone: Tone::Warn },
    StatusRow { label: "Open incidents", value: "3 open", tone: Tone::Alert },
];

const CONSOLE_CARDS: [Card; 2] = [
    Card {
        title: "Live event stream",
        subtitle: "Real-time status across all AI ops agents.",
        badge: Some(Badge { text: "Real-time · demo", tone: Tone::Soft }),
        body: CardBody::Events(&LIVE_EVENTS),
    },
    Card {
        title: "System health",
        subtitle: "Snapshot of infrastructure status.",
        badge: None,
        body: CardBody::Status(&SYSTEM_HEALTH),
    },
];

pub static CONSOLE: PanelContent = PanelContent {
    view: ViewId::Console,
    kpis: &CONSOLE_KPIS,
    cards: &CONSOLE_CARDS,
};

// ─── Agents ──────────────────────────────────────────────────────────

/// The agent roster.
pub const ROSTER: [AgentProfile; 4] = [
    AgentProfile {
        name: "ORION",
        role: "Lead qualification agent",
        msgs_today: 214,
        success_pct: 96,
    },
    AgentProfile {
        name: "SELENE",
        role: "Support deflection agent",
        msgs_today: 593,
        success_pct: 91,
    },
    AgentProfile {
        name: "TITAN",
        role: "Back-office automation",
        msgs_today: 87,
        success_pct: 99,
    },
    AgentProfile {
        name: "VEGA",
        role: "Ops reporting agent",
        msgs_today: 61,
        success_pct: 97,
    },
];

const AGENTS_CARDS: [Card; 2] = [
    Card {
        title: "AI agents",
        subtitle: "Inspect individual agents and their health.",
        badge: Some(Badge { text: "Click an agent to inspect", tone: Tone::Soft }),
        body: CardBody::Agents(&ROSTER),
    },
    Card {
        title: "Recent runs",
        subtitle: "High-level history of the last executions.",
        badge: None,
        body: CardBody::Note(
            "This is a static portfolio preview. In a real product this area would \
             show execution logs, latency, error rates and links to observability tools.",
        ),
    },
];

pub static AGENTS: PanelContent = PanelContent {
    view: ViewId::Agents,
    kpis: &[],
    cards: &AGENTS_CARDS,
};

// ─── Workflows ───────────────────────────────────────────────────────

const WORKFLOW_ROWS: [EventRow; 3] = [
    EventRow {
        tag: "Lead intake",
        text: "Web form → ORION + TITAN → CRM update + Slack alert.",
        when: "On form submit",
        accent: Accent::Orion,
    },
    EventRow {
        tag: "Support triage",
        text: "Live chat → SELENE → deflect FAQs, escalate complex tickets.",
        when: "On new chat",
        accent: Accent::Selene,
    },
    EventRow {
        tag: "Daily ops digest",
        text: "Schedule → VEGA → AI summary of incidents and KPIs.",
        when: "09:00 daily",
        accent: Accent::Vega,
    },
];

const WORKFLOWS_CARDS: [Card; 2] = [
    Card {
        title: "Workflows",
        subtitle: "How triggers, AI steps and actions connect.",
        badge: Some(Badge { text: "Portfolio demo", tone: Tone::Soft }),
        body: CardBody::Flows(&WORKFLOW_ROWS),
    },
    Card {
        title: "Design note",
        subtitle: "This view exists to prove multi-screen UX.",
        badge: None,
        body: CardBody::Note(
            "In the case study on Upwork you can describe how each workflow is \
             configured: triggers, AI prompts, routing rules and failure-handling \
             policies. This shows you understand both UX and AI-Ops logic.",
        ),
    },
];

pub static WORKFLOWS: PanelContent = PanelContent {
    view: ViewId::Workflows,
    kpis: &[],
    cards: &WORKFLOWS_CARDS,
};

// ─── Analytics ───────────────────────────────────────────────────────

const RELIABILITY: [StatusRow; 4] = [
    StatusRow { label: "Automation success", value: "93% last 24h", tone: Tone::Success },
    StatusRow { label: "P95 response time", value: "420ms", tone: Tone::Neutral },
    StatusRow { label: "Incident budget used", value: "34%", tone: Tone::Warn },
    StatusRow { label: "Failed automations", value: "7 in last 24h", tone: Tone::Alert },
];

const ANALYTICS_CARDS: [Card; 2] = [
    Card {
        title: "Load over last 24 hours",
        subtitle: "Simulated combined message volume across all agents.",
        badge: Some(Badge { text: "Demo chart", tone: Tone::Soft }),
        body: CardBody::LoadChart,
    },
    Card {
        title: "Reliability snapshot",
        subtitle: "Error budget and automation success rate.",
        badge: None,
        body: CardBody::Status(&RELIABILITY),
    },
];

pub static ANALYTICS: PanelContent = PanelContent {
    view: ViewId::Analytics,
    kpis: &[],
    cards: &ANALYTICS_CARDS,
};

// ─── Settings ────────────────────────────────────────────────────────

const PREFERENCES: [StatusRow; 3] = [
    StatusRow {
        label: "Incident alert threshold",
        value: "Alert when ≥ 3 incidents open",
        tone: Tone::Soft,
    },
    StatusRow { label: "Time zone", value: "UTC", tone: Tone::Soft },
    StatusRow { label: "Notification channel", value: "Slack · #ai-ops", tone: Tone::Soft },
];

const SETTINGS_CARDS: [Card; 2] = [
    Card {
        title: "Ops preferences",
        subtitle: "Demo preferences for the AETHER Ops console.",
        badge: None,
        body: CardBody::NoteThenStatus(
            "In a real product this view would contain forms with time-zone, \
             alerting thresholds and notification channels. Here it only documents the UX.",
            &PREFERENCES,
        ),
    },
    Card {
        title: "Case-study copy",
        subtitle: "Text you can reuse in your portfolio.",
        badge: None,
        body: CardBody::Quote(
            "“AETHER Console is a concept AI-Ops dashboard I designed and coded \
             with React + TypeScript. It shows how multiple AI agents orchestrate \
             customer support, billing and lead-qualification workflows, and how \
             an operator can monitor automation health in real time.”",
        ),
    },
];

pub static SETTINGS: PanelContent = PanelContent {
    view: ViewId::Settings,
    kpis: &[],
    cards: &SETTINGS_CARDS,
};
