//! Configuration types for Mail Zero TUI.
//!
//! Responsibilities:
//! - Re-export shortcut binding types and client connection settings.
//!
//! Does NOT handle:
//! - Loading configuration (see `loader`).
//! - Persisting bindings (see `persistence`).

mod connection;
mod keybind;

pub use connection::ClientConfig;
pub use keybind::{
    BindingSet, DEFAULT_KEYBOARD_SHORTCUTS, HELP_ACTION, NEW_EMAIL_ACTION, ShortcutBinding,
    default_bindings, is_known_action,
};
