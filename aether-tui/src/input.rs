//! Input dispatch — overlays first, then global keys; left clicks on the sidebar.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use aether_core::{ViewId, NAV_ENTRIES};

use crate::app::{AppState, Overlay};
use crate::ui;

pub fn handle_event(app: &mut AppState, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
}

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Palette => {
            handle_palette_key(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('k') if ctrl => app.open_palette(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(view) = digit_view(c) {
                app.select(view);
            }
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => app.nav.select_next(),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => app.nav.select_prev(),
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        _ => {}
    }
}

fn handle_palette_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.overlay = Overlay::None,
        KeyCode::Char('j') | KeyCode::Down => {
            if app.palette_cursor + 1 < NAV_ENTRIES.len() {
                app.palette_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.palette_cursor = app.palette_cursor.saturating_sub(1);
        }
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(view) = digit_view(c) {
                app.palette_cursor = view.index();
                app.confirm_palette();
            }
        }
        KeyCode::Enter => app.confirm_palette(),
        _ => {}
    }
}

/// `'1'` is the first sidebar entry.
fn digit_view(c: char) -> Option<ViewId> {
    let n = c.to_digit(10)? as usize;
    NAV_ENTRIES.get(n.checked_sub(1)?).map(|entry| entry.id)
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if !app.config.ui.mouse {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.overlay != Overlay::None {
        app.overlay = Overlay::None;
        return;
    }
    if let Some(view) = ui::view_at(app, mouse.column, mouse.row) {
        app.select(view);
    }
}

/// Key bindings help text.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("1-5", "Jump to view"),
        ("Tab / Shift+Tab", "Next / previous view"),
        ("j/↓, k/↑", "Next / previous view"),
        ("Click", "Select sidebar entry"),
        ("Ctrl+K", "Command palette"),
        ("?", "This help"),
        ("q / Ctrl+C", "Quit"),
    ]
}
