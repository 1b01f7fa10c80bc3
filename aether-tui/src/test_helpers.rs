//! Test helpers for rendering into an in-memory terminal.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};

use crate::app::AppState;
use crate::ui::panels::PanelRenderer;

/// Buffer contents as text, one line per row.
pub fn buffer_text(buf: &Buffer) -> String {
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

/// Run `draw` over a whole `width` x `height` terminal and return the screen.
pub fn render_to_text(width: u16, height: u16, draw: impl FnOnce(&mut Frame, Rect)) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            draw(f, area);
        })
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

/// Render a single panel into a `width` x `height` terminal.
pub fn render_panel(renderer: PanelRenderer, app: &AppState, width: u16, height: u16) -> String {
    render_to_text(width, height, |f, area| renderer(f, area, app))
}
