//! Color theme and style helpers shared by every renderer.

use ratatui::style::{Color, Modifier, Style};

/// Colors used across the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub recording: Color,
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Color::Cyan,
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Cyan,
            highlight_fg: Color::Black,
            highlight_bg: Color::Cyan,
            recording: Color::Yellow,
            info: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Accent + bold.
    pub fn title(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of a shortcut row while it is being re-recorded.
    pub fn recording(&self) -> Style {
        Style::default()
            .fg(self.recording)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    }
}
