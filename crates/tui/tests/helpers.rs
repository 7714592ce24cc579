//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard input and creating
//! test fixtures for the TUI application.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mailzero_config::MemoryStorage;
use mailzero_tui::App;

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create a Meta+char key event (the ⌘ key on macOS terminals).
pub fn meta_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SUPER)
}

/// Create a key event with explicit modifiers.
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

/// An app over in-memory storage, on the shortcuts screen.
pub fn test_app() -> App {
    App::with_storage(MemoryStorage::new())
}

/// Type each character of `text`.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_input(key(c));
    }
}

/// Move the shortcuts selection to `action` and start recording it.
pub fn begin_recording(app: &mut App, action: &str) {
    let index = app
        .store
        .bindings()
        .iter()
        .position(|b| b.action == action)
        .unwrap_or_else(|| panic!("unknown action {action}"));
    app.selected_shortcut = index;
    app.handle_input(enter_key());
    assert_eq!(app.recorder.editing_action(), Some(action));
}
