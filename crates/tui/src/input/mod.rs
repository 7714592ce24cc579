//! Keyboard input translation.
//!
//! Responsibilities:
//! - Translate crossterm key events into `RawKeyEvent`s for the recorder
//!   and for bound-shortcut lookup.
//!
//! Does NOT handle:
//! - Routing input to the recorder, palette or screen (see `app::input`).

pub mod keys;

pub use keys::{is_palette_hotkey, key_name, to_raw_key};
