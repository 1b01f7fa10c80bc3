//! AETHER colour tokens and style helpers.
//!
//! A calm operations palette on the terminal's own background:
//! - **Accent**: signal blue (focus, active navigation, headings)
//! - **Success / Warn / Alert**: green, amber and red status pills
//! - **Neutral**: slate (informational pills)
//! - **Soft**: indigo (descriptive badges, preferences)
//! - **Muted**: cool grey (subtitles, captions, hints)
//!
//! Each agent gets its own tag colour.

use ratatui::style::{Color, Modifier, Style};

use aether_core::demo::{Accent, Tone};

pub const ACCENT: Color = Color::Rgb(59, 130, 246);
pub const SUCCESS: Color = Color::Rgb(34, 197, 94);
pub const WARN: Color = Color::Rgb(245, 158, 11);
pub const ALERT: Color = Color::Rgb(239, 68, 68);
pub const NEUTRAL: Color = Color::Rgb(148, 163, 184);
pub const SOFT: Color = Color::Rgb(129, 140, 248);
pub const MUTED: Color = Color::Rgb(107, 114, 128);
pub const TEXT: Color = Color::Rgb(229, 231, 235);
pub const GRID: Color = Color::Rgb(71, 85, 105);
pub const CHART_FILL: Color = Color::Rgb(30, 58, 138);

pub const ORION: Color = Color::Rgb(96, 165, 250);
pub const SELENE: Color = Color::Rgb(192, 132, 252);
pub const TITAN: Color = Color::Rgb(45, 212, 191);
pub const VEGA: Color = Color::Rgb(251, 146, 60);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn heading() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn warning() -> Style {
    Style::default().fg(WARN)
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => SUCCESS,
        Tone::Neutral => NEUTRAL,
        Tone::Warn => WARN,
        Tone::Alert => ALERT,
        Tone::Soft => SOFT,
    }
}

/// Pill style: solid for states that demand attention, outlined text otherwise.
pub fn tone(tone: Tone) -> Style {
    match tone {
        Tone::Success | Tone::Warn | Tone::Alert => Style::default()
            .fg(Color::Black)
            .bg(tone_color(tone))
            .add_modifier(Modifier::BOLD),
        Tone::Neutral | Tone::Soft => Style::default().fg(tone_color(tone)),
    }
}

pub fn agent(accent: Accent) -> Style {
    let color = match accent {
        Accent::Orion => ORION,
        Accent::Selene => SELENE,
        Accent::Titan => TITAN,
        Accent::Vega => VEGA,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        Style::default().fg(GRID)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        heading()
    } else {
        muted()
    }
}

/// Sidebar entry style; the active entry is drawn as a filled bar.
pub fn nav_item(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_tones_are_filled() {
        assert_eq!(tone(Tone::Alert).bg, Some(ALERT));
        assert_eq!(tone(Tone::Success).bg, Some(SUCCESS));
        assert_eq!(tone(Tone::Soft).bg, None);
        assert_eq!(tone(Tone::Neutral).fg, Some(NEUTRAL));
    }

    #[test]
    fn agents_have_distinct_colours() {
        let colours = [
            agent(Accent::Orion).fg,
            agent(Accent::Selene).fg,
            agent(Accent::Titan).fg,
            agent(Accent::Vega).fg,
        ];
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn active_nav_item_is_highlighted() {
        assert_eq!(nav_item(true).bg, Some(ACCENT));
        assert_eq!(nav_item(false).bg, None);
    }
}
