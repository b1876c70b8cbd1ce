//! Theme-aware style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::shell_state::Theme;

/// Base style applied to the whole frame; this is where the display-mode
/// toggle becomes visible.
pub fn base_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::Black).bg(Color::White),
        Theme::Dark => Style::default().fg(Color::Gray).bg(Color::Black),
    }
}

/// Style for the header title.
pub fn header_style(theme: Theme) -> Style {
    let fg = match theme {
        Theme::Light => Color::Blue,
        Theme::Dark => Color::Cyan,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

pub fn panel_border_style(theme: Theme) -> Style {
    let fg = match theme {
        Theme::Light => Color::DarkGray,
        Theme::Dark => Color::Gray,
    };
    Style::default().fg(fg)
}

// =============================================================================
// Transcript styles
// =============================================================================

/// Style for the sender label of user-authored messages.
pub fn user_sender_style(theme: Theme) -> Style {
    let fg = match theme {
        Theme::Light => Color::Blue,
        Theme::Dark => Color::Cyan,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

/// Style for the sender label of bot-authored messages.
pub fn bot_sender_style(theme: Theme) -> Style {
    let fg = match theme {
        Theme::Light => Color::Magenta,
        Theme::Dark => Color::Green,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

pub fn message_text_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::Black),
        Theme::Dark => Style::default().fg(Color::White),
    }
}

pub fn timestamp_style(_theme: Theme) -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Composer styles
// =============================================================================

pub fn input_prompt_style(theme: Theme) -> Style {
    header_style(theme)
}

pub fn input_text_style(theme: Theme) -> Style {
    message_text_style(theme)
}

pub fn input_placeholder_style(_theme: Theme) -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Notice styles
// =============================================================================

pub fn notice_border_style(theme: Theme) -> Style {
    let fg = match theme {
        Theme::Light => Color::Red,
        Theme::Dark => Color::Yellow,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

pub fn notice_hint_style(_theme: Theme) -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn status_style(_theme: Theme) -> Style {
    Style::default().fg(Color::DarkGray)
}
