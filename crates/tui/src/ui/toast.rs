//! Toast notifications for transient feedback messages.
//!
//! Toasts stack in the bottom-right corner. Each has a unique id, a
//! severity level and a time-to-live after which `Action::Tick` prunes it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::app::FOOTER_HEIGHT;
use crate::ui::theme::Theme;
use mailzero_config::constants::DEFAULT_TOAST_TTL_SECS;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Returns the TTL (time-to-live) for this level.
    ///
    /// Errors stay up twice as long as everything else.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success | Self::Warning => {
                Duration::from_secs(DEFAULT_TOAST_TTL_SECS)
            }
            Self::Error => Duration::from_secs(DEFAULT_TOAST_TTL_SECS * 2),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    /// Returns true once the TTL has elapsed.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

/// Maximum number of toasts shown at once (most recent win).
const MAX_TOASTS: usize = 5;
const TOAST_WIDTH: u16 = 50;
/// Border plus up to two lines of text.
const TOAST_HEIGHT: u16 = 4;
const MAX_LINES: usize = 2;

/// Render active toasts in the bottom-right corner, newest at the bottom.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let active: Vec<&Toast> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let active = &active[active.len().saturating_sub(MAX_TOASTS)..];

    let area = f.area();
    let total_height = active.len() as u16 * TOAST_HEIGHT;
    if area.height < FOOTER_HEIGHT + total_height + 1 || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(TOAST_WIDTH + 2),
        y: area.height.saturating_sub(FOOTER_HEIGHT + total_height),
        width: TOAST_WIDTH,
        height: total_height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TOAST_HEIGHT); active.len()])
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

/// Split a message into at most `MAX_LINES` chunks of `width` characters,
/// ending with "..." when it was cut short.
fn wrap_message(message: &str, width: usize) -> Vec<String> {
    let width = width.max(4);
    let chars: Vec<char> = message.chars().collect();
    let mut lines: Vec<String> = chars
        .chunks(width)
        .take(MAX_LINES)
        .map(|c| c.iter().collect())
        .collect();

    if chars.len() > width * MAX_LINES
        && let Some(last) = lines.last_mut()
    {
        let kept: String = last.chars().take(width - 3).collect();
        *last = format!("{kept}...");
    }
    lines
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let color = match toast.level {
        ToastLevel::Info => theme.info,
        ToastLevel::Success => theme.success,
        ToastLevel::Warning => theme.warning,
        ToastLevel::Error => theme.error,
    };
    let label = format!("{:<5}", toast.level.label());
    let text_width = (area.width as usize).saturating_sub(2 + label.len());

    let lines: Vec<Line> = wrap_message(&toast.message, text_width)
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let prefix = if i == 0 {
                label.clone()
            } else {
                " ".repeat(label.len())
            };
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(text, theme.text()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .alignment(Alignment::Left);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_toast_expiration() {
        let toast = Toast::info("Test message");
        assert!(!toast.is_expired(), "Fresh toast should not be expired");

        let mut expired = Toast::info("Test");
        expired.ttl = Duration::from_millis(1);
        expired.created_at = Instant::now() - Duration::from_secs(1);
        assert!(expired.is_expired(), "Old toast should be expired");
    }

    #[test]
    fn test_toast_level_ttl() {
        assert_eq!(ToastLevel::Info.ttl(), Duration::from_secs(5));
        assert_eq!(ToastLevel::Success.ttl(), Duration::from_secs(5));
        assert_eq!(ToastLevel::Warning.ttl(), Duration::from_secs(5));
        assert_eq!(ToastLevel::Error.ttl(), Duration::from_secs(10));
    }

    #[test]
    fn test_toast_constructors() {
        assert_eq!(Toast::info("i").level, ToastLevel::Info);
        assert_eq!(Toast::success("s").level, ToastLevel::Success);
        assert_eq!(Toast::warning("w").level, ToastLevel::Warning);
        assert_eq!(Toast::error("e").level, ToastLevel::Error);
        assert_ne!(Toast::info("a").id, Toast::info("a").id);
    }

    #[test]
    fn test_wrap_message_is_char_safe() {
        let lines = wrap_message("⌘+n is bound to New Email", 10);
        assert_eq!(lines, vec!["⌘+n is bou", "nd to N..."]);

        let short = wrap_message("OK", 10);
        assert_eq!(short, vec!["OK"]);
    }

    #[test]
    fn test_render_toasts_shows_latest() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let toasts: Vec<Toast> = (0..7).map(|i| Toast::info(format!("toast {i}"))).collect();

        terminal
            .draw(|f| render_toasts(f, &toasts, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("toast 6"));
        assert!(content.contains("toast 2"));
        assert!(!content.contains("toast 1"), "only the last five toasts render");
    }
}
