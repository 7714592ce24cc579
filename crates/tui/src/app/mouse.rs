//! Mouse and focus handling for the TUI app.
//!
//! Responsibilities:
//! - Map clicks on the shortcuts table to rows using the last drawn layout.
//! - Cancel recording when the pointer or focus leaves the editing row.
//!
//! Does NOT handle:
//! - Keyboard input (see `app::input`).
//!
//! Invariants:
//! - A click on the row being recorded never cancels it.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::action::Action;
use crate::app::App;

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if self.palette.is_open() || !self.on_shortcuts_screen() {
            return None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_shortcuts_click(mouse.column, mouse.row);
                None
            }
            MouseEventKind::ScrollDown if !self.recorder.is_recording() => {
                let len = self.store.bindings().len();
                if len > 0 {
                    self.selected_shortcut = (self.selected_shortcut + 1).min(len - 1);
                }
                None
            }
            MouseEventKind::ScrollUp if !self.recorder.is_recording() => {
                self.selected_shortcut = self.selected_shortcut.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    fn handle_shortcuts_click(&mut self, column: u16, row: u16) {
        let clicked = self
            .shortcuts_layout
            .row_at(column, row)
            .filter(|index| *index < self.store.bindings().len());

        let Some(index) = clicked else {
            self.recorder.cancel();
            return;
        };

        let Some(action) = self
            .store
            .bindings()
            .as_slice()
            .get(index)
            .map(|b| b.action.clone())
        else {
            return;
        };

        if self.recorder.editing_action() == Some(action.as_str()) {
            return;
        }

        self.selected_shortcut = index;
        self.recorder.begin_edit(action);
    }

    /// The terminal lost focus; abandon any recording.
    pub fn handle_focus_lost(&mut self) {
        self.recorder.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::shortcuts::ShortcutsLayout;
    use crossterm::event::KeyModifiers;
    use mailzero_config::MemoryStorage;
    use ratatui::layout::Rect;

    fn app() -> App {
        let mut app = App::with_storage(MemoryStorage::new());
        app.shortcuts_layout = ShortcutsLayout {
            rows: Rect::new(1, 4, 60, 20),
            offset: 0,
        };
        app
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_row_begins_recording() {
        let mut app = app();
        app.handle_mouse(click(5, 6));
        assert_eq!(app.recorder.editing_action(), Some("Reply"));
        assert_eq!(app.selected_shortcut, 2);
    }

    #[test]
    fn test_click_editing_row_keeps_recording() {
        let mut app = app();
        app.handle_mouse(click(5, 6));
        app.handle_mouse(click(10, 6));
        assert_eq!(app.recorder.editing_action(), Some("Reply"));
    }

    #[test]
    fn test_click_outside_cancels() {
        let mut app = app();
        app.handle_mouse(click(5, 6));
        app.handle_mouse(click(5, 1));
        assert!(!app.recorder.is_recording());
    }

    #[test]
    fn test_click_other_row_switches_edit() {
        let mut app = app();
        app.handle_mouse(click(5, 6));
        app.handle_mouse(click(5, 4));
        assert_eq!(app.recorder.editing_action(), Some("New Email"));
    }

    #[test]
    fn test_focus_lost_cancels() {
        let mut app = app();
        app.handle_mouse(click(5, 4));
        app.handle_focus_lost();
        assert!(!app.recorder.is_recording());
    }

    #[test]
    fn test_clicks_ignored_while_palette_open() {
        let mut app = app();
        app.palette.toggle();
        app.handle_mouse(click(5, 4));
        assert!(!app.recorder.is_recording());
    }
}
