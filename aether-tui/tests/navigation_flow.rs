//! End-to-end: draw the whole shell, click sidebar entries, check what is on screen.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use aether_core::ViewId;
use aether_tui::app::Overlay;
use aether_tui::{input, ui, AppState, TuiConfig};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn screen_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

struct Harness {
    terminal: Terminal<TestBackend>,
    app: AppState,
}

impl Harness {
    fn new() -> Self {
        Self::with_size(WIDTH, HEIGHT)
    }

    fn with_size(width: u16, height: u16) -> Self {
        Self {
            terminal: Terminal::new(TestBackend::new(width, height)).unwrap(),
            app: AppState::new(TuiConfig::default()),
        }
    }

    fn draw(&mut self) -> String {
        let app = &self.app;
        let frame = self.terminal.draw(|f| ui::draw(f, app)).unwrap();
        let area = frame.area;
        self.app.viewport = area;
        screen_text(self.terminal.backend().buffer())
    }

    fn click_entry(&mut self, label: &str) {
        let shell = ui::shell_layout(self.app.viewport, self.app.config.ui.sidebar_width);
        let (rect, _) = ui::sidebar::entry_rects(shell.sidebar)
            .into_iter()
            .find(|(_, view)| view.label() == label)
            .unwrap_or_else(|| panic!("no sidebar entry {label}"));
        input::handle_event(
            &mut self.app,
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: rect.x + 2,
                row: rect.y,
                modifiers: KeyModifiers::NONE,
            }),
        );
    }

    fn press(&mut self, code: KeyCode) {
        input::handle_event(&mut self.app, Event::Key(KeyEvent::from(code)));
    }
}

#[test]
fn console_agents_settings_scenario() {
    let mut h = Harness::new();

    // Start: console selected.
    let screen = h.draw();
    assert_eq!(h.app.selection(), ViewId::Console);
    assert!(screen.contains("Command Console"));
    assert!(screen.contains("Unified live view of all AI assistants and systems."));
    assert!(screen.contains("Live event stream"));
    assert!(screen.contains("1,948"));

    // Click "Agents".
    h.click_entry("Agents");
    let screen = h.draw();
    assert_eq!(h.app.selection(), ViewId::Agents);
    assert!(screen.contains("AI Agents"));
    assert!(!screen.contains("Command Console"));
    assert_eq!(screen.matches("% success").count(), 4);
    for role in [
        "Lead qualification agent",
        "Support deflection agent",
        "Back-office automation",
        "Ops reporting agent",
    ] {
        assert!(screen.contains(role), "missing {role}");
    }

    // Click "Settings".
    h.click_entry("Settings");
    let screen = h.draw();
    assert_eq!(h.app.selection(), ViewId::Settings);
    assert!(screen.contains("Demo preferences for the AETHER AI Ops console."));
    assert!(screen.contains("Ops preferences"));
    assert!(screen.contains("Incident alert threshold"));
    assert!(screen.contains("Notification channel"));
    assert!(!screen.contains("% success"));
}

#[test]
fn every_entry_switches_title_and_panel() {
    let mut h = Harness::new();
    h.draw();
    for view in ViewId::ALL {
        h.click_entry(view.label());
        let screen = h.draw();
        assert_eq!(h.app.selection(), view);
        assert!(screen.contains(view.metadata().title));
        assert!(screen.contains(view.metadata().subtitle));
    }
}

#[test]
fn repeat_click_changes_nothing() {
    let mut h = Harness::new();
    h.draw();
    h.click_entry("Workflows");
    let first = h.draw();
    h.click_entry("Workflows");
    let second = h.draw();
    assert_eq!(first, second);
    assert_eq!(h.app.selection(), ViewId::Workflows);
}

#[test]
fn shell_chrome_is_always_present() {
    let mut h = Harness::new();
    for code in [KeyCode::Char('2'), KeyCode::Char('4'), KeyCode::Tab] {
        h.press(code);
        let screen = h.draw();
        assert!(screen.contains("AETHER"));
        assert!(screen.contains("AI Ops Command"));
        assert!(screen.contains("Demo · no real data"));
        assert!(screen.contains("Maksym H."));
        for view in ViewId::ALL {
            assert!(screen.contains(view.label()));
        }
    }
}

#[test]
fn palette_jumps_to_view() {
    let mut h = Harness::new();
    h.draw();
    input::handle_event(
        &mut h.app,
        Event::Key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)),
    );
    let screen = h.draw();
    assert_eq!(h.app.overlay, Overlay::Palette);
    assert!(screen.contains("Go to view:"));

    h.press(KeyCode::Char('4'));
    let screen = h.draw();
    assert_eq!(h.app.overlay, Overlay::None);
    assert_eq!(h.app.selection(), ViewId::Analytics);
    assert!(screen.contains("Reliability snapshot"));
}

/// Text each view must show in full, whatever the terminal size.
fn key_content(view: ViewId) -> &'static [&'static str] {
    match view {
        ViewId::Console => &["Live event stream", "System health", "1,948"],
        ViewId::Agents => &["ORION", "SELENE", "TITAN", "VEGA", "Lead qualification agent"],
        ViewId::Workflows => &["Lead intake", "Support triage", "Daily ops digest"],
        ViewId::Analytics => &["Load over last 24 hours", "Automation success"],
        ViewId::Settings => &[
            "Incident alert threshold",
            "Alert when ≥ 3 incidents open",
            "Slack · #ai-ops",
        ],
    }
}

#[test]
fn every_view_reads_at_common_terminal_sizes() {
    for (width, height) in [(80, 24), (100, 30), (120, 40), (160, 50)] {
        let mut h = Harness::with_size(width, height);
        for (i, view) in ViewId::ALL.into_iter().enumerate() {
            h.press(KeyCode::Char(char::from(b'1' + i as u8)));
            let screen = h.draw();
            let meta = view.metadata();
            assert!(screen.contains(meta.title), "{width}x{height} {view}: no title\n{screen}");
            assert!(screen.contains(meta.subtitle), "{width}x{height} {view}: no subtitle");
            for text in key_content(view) {
                assert!(screen.contains(text), "{width}x{height} {view}: missing {text}\n{screen}");
            }
            if view == ViewId::Agents {
                assert_eq!(screen.matches("% success").count(), 4, "{width}x{height}");
            }
        }
    }
}

#[test]
fn titles_survive_an_80_by_24_terminal() {
    let mut h = Harness::with_size(80, 24);
    h.draw();
    for view in ViewId::ALL {
        h.click_entry(view.label());
        let screen = h.draw();
        let title_row = screen.lines().next().unwrap();
        assert!(title_row.contains(view.metadata().title), "{title_row}");
    }
}
