//! AETHER — AI Ops command console in the terminal.
//!
//! Views:
//! 1. Console — KPIs, live event stream, system health
//! 2. Agents — agent roster
//! 3. Workflows — trigger → agent → action chains
//! 4. Analytics — load chart, reliability snapshot
//! 5. Settings — ops preferences

use std::io::{self, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use aether_tui::{input, logging, ui, AppState, TuiConfig};

#[derive(Parser)]
#[command(name = "aether", about = "AETHER — AI Ops command console (demo data)")]
struct Cli {
    /// Path to a TOML config file. Defaults to <config dir>/aether/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append logs to this file instead of the configured one.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not capture the mouse (sidebar clicks disabled).
    #[arg(long, default_value_t = false)]
    no_mouse: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(TuiConfig::default_path);
    let mut config = match &config_path {
        Some(path) => TuiConfig::load(path)?,
        None => TuiConfig::default(),
    };
    if cli.no_mouse {
        config.ui.mouse = false;
    }

    logging::init(&config.log, cli.log_file.as_deref())?;
    info!(config = ?config_path, mouse = config.ui.mouse, "starting dashboard");

    let mut app = AppState::new(config);
    match &config_path {
        Some(path) if path.exists() => app.set_status(format!("Config: {}", path.display())),
        Some(_) => {}
        None => app.set_warning("No config directory; using defaults"),
    }

    // Restore the terminal before printing a panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if app.config.ui.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    info!("dashboard closed");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let tick = app.config.tick_rate();
    while app.running {
        // 1. Render, remembering the frame size for mouse hit-testing.
        let frame = terminal.draw(|f| ui::draw(f, app))?;
        app.viewport = frame.area;

        // 2. Poll for input events.
        if event::poll(tick)? {
            input::handle_event(app, event::read()?);
        }
    }
    Ok(())
}
