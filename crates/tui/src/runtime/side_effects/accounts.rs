//! Account switching side effect.
//!
//! Responsibilities:
//! - Make another connection the active account on the server.
//! - Refresh session and connection data afterwards and report the outcome.
//!
//! Does NOT handle:
//! - Refusing a second concurrent switch (the App guards that).
//!
//! Invariants:
//! - Requests run in order: switch, session update, session fetch, connection list.
//! - The first failure stops the sequence; later requests are never sent.
//! - `Action::AccountSwitchFinished` is always the last action sent.

use mailzero_client::{ClientError, Connection, Session};
use thiserror::Error;
use tokio::sync::mpsc::Sender;

use crate::action::Action;
use crate::ui::ToastLevel;

use super::{SharedClient, TaskTracker};

/// A failed step of the account switch.
#[derive(Debug, Error)]
pub enum AccountSwitchError {
    #[error("{}", .0.description())]
    Switch(#[source] ClientError),

    #[error("failed to update session: {}", .0.description())]
    UpdateSession(#[source] ClientError),

    #[error("failed to reload session: {}", .0.description())]
    Reload(#[source] ClientError),
}

async fn switch_account(
    client: &SharedClient,
    connection_id: &str,
) -> Result<(Option<Session>, Vec<Connection>), AccountSwitchError> {
    client
        .switch_connection(connection_id)
        .await
        .map_err(AccountSwitchError::Switch)?;
    client
        .update_session(connection_id)
        .await
        .map_err(AccountSwitchError::UpdateSession)?;

    let session = client.get_session().await.map_err(AccountSwitchError::Reload)?;
    let connections = client
        .list_connections()
        .await
        .map_err(AccountSwitchError::Reload)?;
    Ok((session, connections))
}

/// Switch the active account to `connection_id`.
pub async fn handle_switch_account(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    connection_id: String,
    email: String,
) {
    task_tracker.spawn(async move {
        tracing::info!(connection_id = %connection_id, "Switching account");

        match switch_account(&client, &connection_id).await {
            Ok((session, connections)) => {
                let _ = tx.send(Action::SessionLoaded(session)).await;
                let _ = tx.send(Action::ConnectionsLoaded(connections)).await;
                let _ = tx.send(Action::RefreshRoute).await;
                let _ = tx
                    .send(Action::Notify(
                        ToastLevel::Success,
                        format!("Switched to account: {email}"),
                    ))
                    .await;
            }
            Err(e) => {
                tracing::error!(connection_id = %connection_id, error = %e, "Error switching connection");
                let _ = tx
                    .send(Action::Notify(
                        ToastLevel::Error,
                        format!("Error switching connection: {e}"),
                    ))
                    .await;
            }
        }

        let _ = tx.send(Action::AccountSwitchFinished).await;
    });
}
