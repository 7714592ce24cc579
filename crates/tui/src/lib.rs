//! Mail Zero TUI Library
//!
//! Keyboard shortcut customization and the command palette for Mail Zero,
//! as a terminal application.
//!
//! # Example
//!
//! ```rust
//! use mailzero_tui::{App, Action};
//! use mailzero_config::MemoryStorage;
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::with_storage(MemoryStorage::new());
//! if let Some(action) = app.handle_input(KeyEvent::from(KeyCode::Char('q'))) {
//!     assert!(matches!(action, Action::Quit));
//! }
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod input;
pub mod palette;
pub mod recorder;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use recorder::{RecordError, Recorder, RecorderEvent, RecorderState};
pub use ui::toast::{Toast, ToastLevel};
