//! Keyboard input ownership for the TUI app.
//!
//! Responsibilities:
//! - Route each key press to exactly one owner, in order: the recorder
//!   (while recording), the palette (while open), the palette hotkey, the
//!   current screen, then bound shortcuts.
//! - Turn recorder outcomes into toasts.
//!
//! Does NOT handle:
//! - Mouse or focus events (see `app::mouse`).
//! - Palette popup keys (see `app::palette`).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mailzero_config::keybind::normalize;

use crate::action::Action;
use crate::app::App;
use crate::input::{is_palette_hotkey, to_raw_key};
use crate::recorder::{RecordError, RecorderEvent};
use crate::ui::Toast;

impl App {
    /// Handle keyboard input - returns Action if one should be dispatched.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if self.recorder.is_recording() {
            self.handle_recording_key(key);
            return None;
        }

        if self.palette.is_open() {
            return self.handle_palette_key(key);
        }

        if is_palette_hotkey(&key) {
            self.palette.toggle();
            return None;
        }

        if let Some(action) = self.handle_screen_key(key) {
            return action;
        }

        self.handle_bound_shortcut(key)
    }

    fn handle_recording_key(&mut self, key: KeyEvent) {
        let Some(raw) = to_raw_key(&key) else {
            return;
        };

        match self.recorder.handle_key(&raw, &mut self.store) {
            RecorderEvent::Committed(binding) => {
                tracing::info!(action = %binding.action, keys = %binding.display(), "Shortcut recorded");
                self.toasts.push(Toast::success("Shortcut updated!"));
            }
            RecorderEvent::Rejected(err) => {
                if let RecordError::Persist(e) = &err {
                    tracing::error!(error = %e, "Failed to persist shortcut");
                }
                self.toasts.push(Toast::error(err.to_string()));
            }
            RecorderEvent::Inactive
            | RecorderEvent::Ignored
            | RecorderEvent::Updated
            | RecorderEvent::Cancelled => {}
        }
    }

    /// Screen-level keys.
    ///
    /// The outer `None` means the key was not consumed and may still match
    /// a bound shortcut.
    fn handle_screen_key(&mut self, key: KeyEvent) -> Option<Option<Action>> {
        let plain = key.modifiers.is_empty();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Some(Action::Quit))
            }
            KeyCode::Char('q') if plain => Some(Some(Action::Quit)),
            _ if !self.on_shortcuts_screen() => None,
            KeyCode::Down | KeyCode::Char('j') if plain => {
                let len = self.store.bindings().len();
                if len > 0 {
                    self.selected_shortcut = (self.selected_shortcut + 1).min(len - 1);
                }
                Some(None)
            }
            KeyCode::Up | KeyCode::Char('k') if plain => {
                self.selected_shortcut = self.selected_shortcut.saturating_sub(1);
                Some(None)
            }
            KeyCode::Enter if plain => {
                if let Some(action) = self.selected_action().map(String::from) {
                    self.recorder.begin_edit(action);
                }
                Some(None)
            }
            KeyCode::Char('r') if plain => {
                self.reset_shortcuts();
                Some(None)
            }
            _ => None,
        }
    }

    /// Restore the default bindings.
    pub fn reset_shortcuts(&mut self) {
        self.recorder.cancel();
        match self.store.reset() {
            Ok(_) => self.toasts.push(Toast::success("Shortcuts reset to defaults!")),
            Err(e) => {
                tracing::error!(error = %e, "Failed to reset shortcuts");
                self.toasts.push(Toast::error(e.to_string()));
            }
        }
    }

    fn handle_bound_shortcut(&mut self, key: KeyEvent) -> Option<Action> {
        let raw = to_raw_key(&key)?;
        let tokens = normalize(&raw);
        let action = self.store.find_action(&tokens)?;
        Some(Action::ShortcutTriggered(action.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailzero_config::MemoryStorage;

    fn app() -> App {
        App::with_storage(MemoryStorage::new())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_enter_begins_recording_selected_row() {
        let mut app = app();
        app.handle_input(key(KeyCode::Down));
        app.handle_input(key(KeyCode::Enter));

        assert_eq!(app.recorder.editing_action(), Some("Send Email"));
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = app();
        app.handle_input(key(KeyCode::Up));
        assert_eq!(app.selected_shortcut, 0);

        for _ in 0..50 {
            app.handle_input(key(KeyCode::Down));
        }
        assert_eq!(app.selected_shortcut, app.store.bindings().len() - 1);
    }

    #[test]
    fn test_ctrl_k_while_recording_goes_to_recorder() {
        let mut app = app();
        app.handle_input(key(KeyCode::Enter));
        app.handle_input(ctrl('k'));

        assert!(!app.palette.is_open());
        assert_eq!(
            mailzero_config::keybind::format_keys(app.recorder.tentative()),
            "Ctrl+k"
        );
    }

    #[test]
    fn test_bound_shortcut_is_triggered() {
        let mut app = app();
        let action = app.handle_input(KeyEvent::new(
            KeyCode::Char('n'),
            KeyModifiers::SUPER,
        ));
        assert!(matches!(action, Some(Action::ShortcutTriggered(a)) if a == "New Email"));
    }

    #[test]
    fn test_q_quits_when_idle() {
        let mut app = app();
        assert!(matches!(
            app.handle_input(key(KeyCode::Char('q'))),
            Some(Action::Quit)
        ));
    }
}
