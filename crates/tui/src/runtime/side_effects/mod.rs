//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Handle async API calls triggered by user actions.
//! - Spawn background tasks so the UI never waits on the network.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - All API calls are spawned on the shared `TaskTracker`.
//! - Results are always sent back via the action channel.
//! - An account switch always ends with `Action::AccountSwitchFinished`.

mod accounts;
mod dispatcher;
mod session;

use std::sync::Arc;

use mailzero_client::MailClient;

pub use accounts::{AccountSwitchError, handle_switch_account};
pub use dispatcher::handle_side_effects;
pub use session::handle_load_session;
pub use tokio_util::task::TaskTracker;

/// Shared client handle for async tasks.
///
/// `MailClient` holds no mutable session state, so tasks share it without a lock.
pub type SharedClient = Arc<MailClient>;
