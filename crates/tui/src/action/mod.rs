//! Action protocol for async TUI event handling.
//!
//! Actions represent both user inputs and async API operation results.
//!
//! # Module Structure
//!
//! - `redaction`: Logging wrapper that masks account data (`RedactedAction`)
//! - `variants`: Action enum definitions (`Action`)
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by the app state machine in `App`)
//! - Async task execution (handled by the runtime module)
//! - UI rendering (handled by the ui module)

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::Action;

#[cfg(test)]
mod tests;
