//! Configuration management for Mail Zero TUI.
//!
//! This crate provides key chord normalization, the default shortcut table,
//! persisted shortcut bindings, and client settings loaded from the environment.

pub mod constants;
pub mod keybind;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{
    BindingStorage, BindingStore, FileStorage, Loaded, MemoryStorage, StoreError,
};
pub use types::{BindingSet, ClientConfig, DEFAULT_KEYBOARD_SHORTCUTS, ShortcutBinding};
