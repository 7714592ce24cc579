//! Command palette popup input handling.
//!
//! Responsibilities:
//! - Edit the search text and move the selection.
//! - Run the selected command through `palette::dispatch_entry`.
//!
//! Does NOT handle:
//! - Rendering the palette (see `ui::palette`).
//! - Building or filtering commands (see `palette::registry` and `palette::filter`).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::input::is_palette_hotkey;
use crate::palette::{CommandTarget, dispatch_entry};
use crate::ui::Toast;

impl App {
    /// Handle a key press while the palette is open.
    pub fn handle_palette_key(&mut self, key: KeyEvent) -> Option<Action> {
        if is_palette_hotkey(&key) {
            self.palette.close();
            return None;
        }

        match key.code {
            KeyCode::Esc => {
                self.palette.close();
                None
            }

            KeyCode::Enter => {
                let view = self.palette_view();
                let entry = self.palette.select(&view)?;

                if matches!(entry.target, CommandTarget::SwitchAccount { .. })
                    && self.switch_in_flight
                {
                    tracing::debug!(command = %entry.title, "Account switch already in progress");
                    self.toasts
                        .push(Toast::warning("An account switch is already in progress"));
                    return None;
                }

                Some(dispatch_entry(&entry))
            }

            KeyCode::Down | KeyCode::Tab => {
                let len = self.palette_view().len();
                self.palette.select_next(len);
                None
            }

            KeyCode::Up | KeyCode::BackTab => {
                let len = self.palette_view().len();
                self.palette.select_previous(len);
                None
            }

            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.palette.clear_search();
                None
            }

            KeyCode::Backspace => {
                self.palette.backspace();
                None
            }

            // Character input (only if no modifiers except SHIFT)
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.palette.push_char(c);
                None
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailzero_config::MemoryStorage;

    fn open_app() -> App {
        let mut app = App::with_storage(MemoryStorage::new());
        app.palette.toggle();
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_filters_and_enter_navigates() {
        let mut app = open_app();
        type_str(&mut app, "inbox");
        assert_eq!(app.palette.search(), "inbox");

        let action = app.handle_input(key(KeyCode::Enter));
        assert!(matches!(action, Some(Action::Navigate(p)) if p == "/mail/inbox"));
        assert!(!app.palette.is_open());
        assert!(app.palette.search().is_empty());
    }

    #[test]
    fn test_enter_with_no_results_keeps_palette_open() {
        let mut app = open_app();
        type_str(&mut app, "zzzz");

        assert!(app.handle_input(key(KeyCode::Enter)).is_none());
        assert!(app.palette.is_open());
    }

    #[test]
    fn test_escape_and_hotkey_close() {
        let mut app = open_app();
        app.handle_input(key(KeyCode::Esc));
        assert!(!app.palette.is_open());

        app.palette.toggle();
        app.handle_input(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert!(!app.palette.is_open());
    }

    #[test]
    fn test_up_wraps_to_last_entry() {
        let mut app = open_app();
        app.handle_input(key(KeyCode::Up));
        assert_eq!(app.palette.selected(), app.palette_view().len() - 1);
    }

    #[test]
    fn test_ctrl_u_clears_search() {
        let mut app = open_app();
        type_str(&mut app, "se");
        app.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(app.palette.search().is_empty());
    }

    #[test]
    fn test_q_is_typed_not_quit() {
        let mut app = open_app();
        assert!(app.handle_input(key(KeyCode::Char('q'))).is_none());
        assert_eq!(app.palette.search(), "q");
    }
}
