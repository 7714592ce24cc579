//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Store session and connection results from side effects
//! - Track the single in-flight account switch
//!
//! Non-responsibilities:
//! - Does NOT create Actions from input (see `app::input`, `app::mouse`)
//! - Does NOT perform async operations (see `runtime::side_effects`)

use crate::action::Action;
use crate::app::{App, COMPOSE_ROUTE};
use crate::palette::registry::SHORTCUTS_ROUTE;
use crate::ui::{Toast, ToastLevel};

/// Route opened by a bound shortcut, for the shortcuts that name a place.
pub fn shortcut_route(action: &str) -> Option<&'static str> {
    match action {
        "New Email" => Some(COMPOSE_ROUTE),
        "Inbox" => Some("/mail/inbox"),
        "Drafts" | "Go to Drafts" => Some("/mail/draft"),
        "Sent Mail" => Some("/mail/sent"),
        "Help with shortcuts" => Some(SHORTCUTS_ROUTE),
        _ => None,
    }
}

impl App {
    /// Pure state mutation based on Action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Tick => {
                self.toasts.retain(|t| !t.is_expired());
            }
            Action::Resize(width, height) => {
                self.last_area = ratatui::layout::Rect::new(0, 0, width, height);
            }
            Action::FocusLost => self.handle_focus_lost(),

            Action::Navigate(path) => self.navigate(path),
            Action::OpenCompose => self.navigate(COMPOSE_ROUTE.to_string()),
            Action::RefreshRoute => {
                self.route_refreshes += 1;
                tracing::debug!(path = %self.current_path, "Route refreshed");
            }
            Action::OpenUrl(url) => {
                tracing::info!(url = %url, "Opening external link");
                self.toasts.push(Toast::info(format!("Open in a browser: {url}")));
            }
            Action::ShortcutTriggered(name) => self.handle_shortcut(&name),

            Action::SwitchAccount { .. } => {
                self.switch_in_flight = true;
            }
            Action::SessionLoaded(session) => {
                self.session = session;
            }
            Action::ConnectionsLoaded(connections) => {
                self.connections = connections;
            }
            Action::AccountSwitchFinished => {
                self.switch_in_flight = false;
            }
            Action::Notify(level, message) => {
                self.toasts.push(Toast::new(message, level));
            }

            Action::Quit
            | Action::Input(_)
            | Action::Mouse(_)
            | Action::LoadSession => {}
        }
    }

    fn navigate(&mut self, path: String) {
        if path == self.current_path {
            return;
        }
        self.recorder.cancel();
        tracing::debug!(from = %self.current_path, to = %path, "Navigating");
        self.current_path = path;
    }

    fn handle_shortcut(&mut self, name: &str) {
        match shortcut_route(name) {
            Some(route) => self.navigate(route.to_string()),
            None => {
                tracing::info!(action = name, "Shortcut has no terminal counterpart");
                self.toasts.push(Toast::new(
                    format!("{name} is only available in the web app"),
                    ToastLevel::Info,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailzero_client::{Session, SessionUser};
    use mailzero_config::MemoryStorage;
    use std::time::{Duration, Instant};

    fn app() -> App {
        App::with_storage(MemoryStorage::new())
    }

    #[test]
    fn test_navigate_cancels_recording() {
        let mut app = app();
        app.recorder.begin_edit("Reply");
        app.update(Action::Navigate("/mail/inbox".to_string()));

        assert_eq!(app.current_path, "/mail/inbox");
        assert!(!app.recorder.is_recording());
    }

    #[test]
    fn test_open_compose_and_shortcut_routes() {
        let mut app = app();
        app.update(Action::OpenCompose);
        assert_eq!(app.current_path, COMPOSE_ROUTE);

        app.update(Action::ShortcutTriggered("Go to Drafts".to_string()));
        assert_eq!(app.current_path, "/mail/draft");
    }

    #[test]
    fn test_unrouted_shortcut_shows_toast() {
        let mut app = app();
        app.update(Action::ShortcutTriggered("Reply".to_string()));
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].level, ToastLevel::Info);
    }

    #[test]
    fn test_switch_flag_lifecycle() {
        let mut app = app();
        app.update(Action::SwitchAccount {
            connection_id: "conn-home".to_string(),
            email: "me@home.example.com".to_string(),
        });
        assert!(app.switch_in_flight);

        app.update(Action::AccountSwitchFinished);
        assert!(!app.switch_in_flight);
    }

    #[test]
    fn test_session_and_refresh() {
        let mut app = app();
        let session = Session {
            user: SessionUser {
                id: "user-1".to_string(),
                email: "me@work.example.com".to_string(),
                name: None,
            },
            connection_id: Some("conn-work".to_string()),
        };
        app.update(Action::SessionLoaded(Some(session)));
        app.update(Action::RefreshRoute);

        assert_eq!(
            app.session.as_ref().and_then(|s| s.connection_id.as_deref()),
            Some("conn-work")
        );
        assert_eq!(app.route_refreshes, 1);
    }

    #[test]
    fn test_tick_prunes_expired_toasts() {
        let mut app = app();
        let mut old = Toast::info("old");
        old.created_at = Instant::now() - Duration::from_secs(60);
        app.toasts.push(old);
        app.toasts.push(Toast::info("new"));

        app.update(Action::Tick);
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].message, "new");
    }
}
