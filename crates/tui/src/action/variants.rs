//! Action enum definitions for the TUI event system.
//!
//! # Action Categories
//!
//! - **System**: Application lifecycle (Quit, Tick, Resize)
//! - **Input**: Raw terminal events (keyboard, mouse, focus)
//! - **Navigation**: Route changes and route refresh
//! - **Commands**: Palette and shortcut results (compose, open URL, shortcut)
//! - **API Triggers**: Session loading and account switching
//! - **API Results**: Session and connection data from the server
//! - **Notifications**: Toast messages
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by the app state machine)
//! - Async task execution (handled by the runtime module)
//! - UI rendering (handled by the ui module)

use crossterm::event::{KeyEvent, MouseEvent};
use mailzero_client::{Connection, Session};

use crate::ui::ToastLevel;

/// Unified action type for async TUI event handling.
///
/// Actions flow through a channel from input handlers and async tasks
/// to the main app state, where they trigger state mutations.
#[derive(Debug, Clone)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Periodic UI tick (prunes expired toasts)
    Tick,
    /// Terminal was resized
    Resize(u16, u16),

    // Input
    /// Keyboard press from the terminal
    Input(KeyEvent),
    /// Mouse event from the terminal
    Mouse(MouseEvent),
    /// The terminal window lost focus
    FocusLost,

    // Navigation
    /// Switch to another route (e.g. `/mail/inbox`)
    Navigate(String),
    /// Re-render the current route with fresh server state
    RefreshRoute,

    // Commands
    /// Open an external URL
    OpenUrl(String),
    /// Open the compose view
    OpenCompose,
    /// A bound shortcut was pressed outside of recording
    ShortcutTriggered(String),

    // API Triggers
    /// Fetch the session and the connection list
    LoadSession,
    /// Make another connection the active account
    SwitchAccount {
        connection_id: String,
        email: String,
    },

    // API Results
    /// Session fetched (`None` when signed out)
    SessionLoaded(Option<Session>),
    /// Connection list fetched
    ConnectionsLoaded(Vec<Connection>),
    /// The account switch task finished, successfully or not
    AccountSwitchFinished,

    // Notifications
    /// Show a toast
    Notify(ToastLevel, String),
}
