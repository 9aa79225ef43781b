use ratatui::style::{Color, Modifier, Style};

use homeboard_core::widgets::Backdrop;

// Color palette
pub const SECONDARY: Color = Color::Rgb(96, 160, 96);
pub const ACCENT: Color = Color::Rgb(192, 160, 64);
pub const ERROR: Color = Color::Rgb(192, 64, 64);
pub const MUTED: Color = Color::Rgb(128, 128, 128);
pub const HIGHLIGHT: Color = Color::Rgb(48, 48, 64);

/// Primary colour for each backdrop, indexed from one.
const BACKDROPS: [Color; 6] = [
    Color::Rgb(64, 128, 192),
    Color::Rgb(96, 160, 128),
    Color::Rgb(176, 112, 160),
    Color::Rgb(200, 136, 72),
    Color::Rgb(112, 112, 200),
    Color::Rgb(72, 168, 176),
];

pub fn primary(backdrop: Backdrop) -> Color {
    BACKDROPS[usize::from(backdrop.index() - 1) % BACKDROPS.len()]
}

// Styles
pub fn title_style(backdrop: Backdrop) -> Style {
    Style::default()
        .fg(primary(backdrop))
        .add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn list_item_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn done_style() -> Style {
    Style::default()
        .fg(MUTED)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn highlight_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn success_style() -> Style {
    Style::default().fg(SECONDARY)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn border_style(backdrop: Backdrop, focused: bool) -> Style {
    if focused {
        Style::default().fg(primary(backdrop))
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn status_bar_style() -> Style {
    Style::default().bg(Color::Rgb(32, 32, 40)).fg(Color::White)
}

pub fn help_key_style() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn help_desc_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn big_text_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}
