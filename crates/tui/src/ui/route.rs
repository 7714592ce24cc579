//! Placeholder for routes the terminal client does not render.
//!
//! Mailbox views, compose and the other settings pages belong to the web
//! application; the terminal client only names the route and points at the
//! command palette.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::theme::Theme;

/// Human-readable title for a route path.
pub fn route_title(path: &str) -> String {
    let path = path.split('?').next().unwrap_or(path);
    match path {
        "/mail/inbox" => "Inbox".to_string(),
        "/mail/draft" => "Drafts".to_string(),
        "/mail/sent" => "Sent".to_string(),
        "/mail/compose" => "New message".to_string(),
        other => {
            let last = other.rsplit('/').find(|s| !s.is_empty()).unwrap_or("Home");
            let mut chars = last.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => "Home".to_string(),
            }
        }
    }
}

pub fn render_route_placeholder(f: &mut Frame, area: Rect, path: &str, theme: &Theme) {
    let text = vec![
        Line::from(Span::styled(route_title(path), theme.title())),
        Line::raw(""),
        Line::from(Span::styled(path.to_string(), theme.text_dim())),
        Line::raw(""),
        Line::from(Span::styled(
            "This view is available in the web app. Press Ctrl+K to open the command palette.",
            theme.text(),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
