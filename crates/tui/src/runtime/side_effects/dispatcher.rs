//! Side effect dispatcher.
//!
//! Routes actions that need the network to their handler functions.

use std::time::Instant;

use tokio::sync::mpsc::Sender;
use tracing::{Instrument, info_span};

use crate::action::Action;
use crate::runtime::side_effects::{SharedClient, TaskTracker, accounts, session};

/// Handle side effects (async API calls) for actions.
///
/// Actions without a side effect return immediately.
pub async fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    let action_name = action_type_name(&action);
    let start = Instant::now();

    let span = info_span!(
        "tui.handle_action",
        action_type = action_name,
        duration_ms = tracing::field::Empty,
    );

    async move {
        handle_action(action, client, tx, task_tracker).await;

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

/// Get a safe action name for tracing (no sensitive data).
fn action_type_name(action: &Action) -> &'static str {
    match action {
        Action::LoadSession => "LoadSession",
        Action::SwitchAccount { .. } => "SwitchAccount",
        _ => "Other",
    }
}

async fn handle_action(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    match action {
        Action::LoadSession => {
            session::handle_load_session(client, tx, task_tracker).await;
        }
        Action::SwitchAccount {
            connection_id,
            email,
        } => {
            accounts::handle_switch_account(client, tx, task_tracker, connection_id, email).await;
        }
        _ => {}
    }
}
