//! AETHER CLI — print the dashboard's views without a terminal UI.
//!
//! Commands:
//! - `views` — the sidebar entries in order
//! - `show <view>` — title, subtitle and panel content of one view

use std::fmt::Write as _;
use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use aether_core::demo::{self, CardBody, PanelContent};
use aether_core::{resolve_metadata, ViewId, ViewMeta, NAV_ENTRIES};

#[derive(Parser)]
#[command(name = "aether-cli", about = "AETHER CLI — inspect the AI Ops console views")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List navigation entries in sidebar order.
    Views {
        /// Print JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print one view: console, agents, workflows, analytics or settings.
    Show {
        view: ViewId,

        /// Print JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ViewDump {
    #[serde(flatten)]
    meta: ViewMeta,
    panel: &'static PanelContent,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("AETHER_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Views { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&NAV_ENTRIES)?);
            } else {
                print!("{}", views_text());
            }
        }
        Commands::Show { view, json } => {
            debug!(%view, json, "show");
            if json {
                let dump = ViewDump {
                    meta: resolve_metadata(view),
                    panel: demo::panel(view),
                };
                println!("{}", serde_json::to_string_pretty(&dump)?);
            } else {
                print!("{}", view_text(view));
            }
        }
    }
    Ok(())
}

fn views_text() -> String {
    let mut out = String::new();
    for (i, entry) in NAV_ENTRIES.iter().enumerate() {
        let meta = entry.id.metadata();
        let _ = writeln!(out, "{}  {:<10} {:<10} {}", i + 1, entry.id.slug(), entry.label, meta.title);
    }
    out
}

fn view_text(view: ViewId) -> String {
    let meta = resolve_metadata(view);
    let content = demo::panel(view);
    let mut out = String::new();

    let _ = writeln!(out, "{}", meta.title);
    let _ = writeln!(out, "{}", meta.subtitle);

    if !content.kpis.is_empty() {
        let _ = writeln!(out);
        for kpi in content.kpis {
            let _ = writeln!(out, "  {:<22} {:>6}  {}", kpi.label, kpi.value, kpi.caption);
        }
    }

    for card in content.cards {
        let _ = writeln!(out);
        match card.badge {
            Some(badge) => {
                let _ = writeln!(out, "## {}  [{}]", card.title, badge.text);
            }
            None => {
                let _ = writeln!(out, "## {}", card.title);
            }
        }
        let _ = writeln!(out, "{}", card.subtitle);
        write_body(&mut out, &card.body);
    }
    out
}

fn write_body(out: &mut String, body: &CardBody) {
    match *body {
        CardBody::Events(rows) => {
            for row in rows {
                let _ = writeln!(out, "  {:<18} {:<62} {}", row.tag, row.text, row.when);
            }
        }
        CardBody::Flows(rows) => {
            for row in rows {
                let _ = writeln!(out, "  {} ({})", row.tag, row.when);
                let _ = writeln!(out, "    {}", row.text);
            }
        }
        CardBody::Status(rows) => {
            for row in rows {
                let _ = writeln!(out, "  {:<26} {}", row.label, row.value);
            }
        }
        CardBody::Agents(agents) => {
            for agent in agents {
                let _ = writeln!(out, "  {:<8} {:<44} {}", agent.name, agent.summary(), agent.success_label());
            }
        }
        CardBody::Note(text) => {
            let _ = writeln!(out, "  {text}");
        }
        CardBody::Quote(text) => {
            let _ = writeln!(out, "  > {text}");
        }
        CardBody::NoteThenStatus(text, rows) => {
            let _ = writeln!(out, "  {text}");
            write_body(out, &CardBody::Status(rows));
        }
        CardBody::LoadChart => {
            let _ = writeln!(out, "  (decorative chart, no data)");
        }
    }
}
