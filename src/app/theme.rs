//! Color and style constants shared by the screens.
//!
//! Cyan is the brand color (active navigation, highlights, focused widgets).
//! Green and red only appear on notifications and validation messages.

use ratatui::style::{Color, Modifier, Style};

pub const PRIMARY: Color = Color::Cyan;

pub const STYLE_PRIMARY: Style = Style::new().fg(PRIMARY);

pub const STYLE_HEADING: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const STYLE_ACCENT: Style = Style::new().fg(PRIMARY).add_modifier(Modifier::BOLD);

pub const STYLE_BODY: Style = Style::new().fg(Color::Gray);

pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

pub const STYLE_TAG: Style = Style::new().fg(PRIMARY).bg(Color::Rgb(20, 40, 48));

/// Widget that currently receives keys
pub const STYLE_FOCUSED: Style = Style::new().fg(Color::Black).bg(PRIMARY);

pub const STYLE_DISABLED: Style = Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);

pub const STYLE_SUCCESS: Style = Style::new().fg(Color::Green);

pub const STYLE_ERROR: Style = Style::new().fg(Color::Red);

pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_colors() {
        assert_eq!(STYLE_PRIMARY.fg, Some(Color::Cyan));
        assert_eq!(STYLE_ERROR.fg, Some(Color::Red));
        assert_eq!(STYLE_FOCUSED.bg, Some(Color::Cyan));
        assert!(STYLE_HEADING.add_modifier.contains(Modifier::BOLD));
    }
}
