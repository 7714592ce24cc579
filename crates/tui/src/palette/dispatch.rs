//! Command dispatch: turn a selected palette entry into an Action.
//!
//! Responsibilities:
//! - Map each `CommandTarget` onto the Action that carries it out.
//!
//! Does NOT handle:
//! - Closing the palette (done by `PaletteState::select` before dispatch).
//! - Running the account switch (see `runtime::side_effects::accounts`).

use crate::action::Action;
use crate::palette::registry::{CommandEntry, CommandTarget};

/// The Action that executes `target`.
pub fn dispatch(target: &CommandTarget) -> Action {
    match target {
        CommandTarget::Navigate(path) => Action::Navigate(path.clone()),
        CommandTarget::OpenUrl(url) => Action::OpenUrl(url.clone()),
        CommandTarget::Compose => Action::OpenCompose,
        CommandTarget::SwitchAccount {
            connection_id,
            email,
        } => Action::SwitchAccount {
            connection_id: connection_id.clone(),
            email: email.clone(),
        },
    }
}

/// Dispatch a selected entry, logging the command title.
pub fn dispatch_entry(entry: &CommandEntry) -> Action {
    tracing::debug!(command = %entry.title, group = %entry.group, "Running palette command");
    dispatch(&entry.target)
}
