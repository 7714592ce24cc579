//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Client creation from the loaded configuration
//! - Async side effect handlers for API calls
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `mailzero_tui::app` and `mailzero_tui::ui`).
//! - HTTP details of the Mail Zero API (see `mailzero_client`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.
//! - Side effects run in separate tokio tasks to avoid blocking the UI.

pub mod client;
pub mod side_effects;
pub mod terminal;
