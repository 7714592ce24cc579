//! Session loading side effect.
//!
//! Responsibilities:
//! - Fetch the current session and the connection list.
//!
//! Does NOT handle:
//! - Account switching (see `accounts`).

use tokio::sync::mpsc::Sender;

use crate::action::Action;
use crate::ui::ToastLevel;

use super::{SharedClient, TaskTracker};

/// Fetch the session, then the connections.
///
/// A signed-out session (`None`) skips the connection request. A rejected
/// session token is treated as signed out.
pub async fn handle_load_session(client: SharedClient, tx: Sender<Action>, task_tracker: TaskTracker) {
    task_tracker.spawn(async move {
        let session = match client.get_session().await {
            Ok(session) => session,
            Err(e) if e.is_auth_error() => {
                tracing::warn!(error = %e, "Session token rejected");
                let _ = tx.send(Action::SessionLoaded(None)).await;
                let _ = tx
                    .send(Action::Notify(
                        ToastLevel::Warning,
                        "Session expired. Sign in again.".to_string(),
                    ))
                    .await;
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load session");
                let _ = tx
                    .send(Action::Notify(
                        ToastLevel::Error,
                        format!("Failed to load session: {}", e.description()),
                    ))
                    .await;
                return;
            }
        };

        let signed_in = session.is_some();
        let _ = tx.send(Action::SessionLoaded(session)).await;
        if !signed_in {
            tracing::info!("No active session");
            return;
        }

        match client.list_connections().await {
            Ok(connections) => {
                tracing::debug!(count = connections.len(), "Connections loaded");
                let _ = tx.send(Action::ConnectionsLoaded(connections)).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load connections");
                let _ = tx
                    .send(Action::Notify(
                        ToastLevel::Error,
                        format!("Failed to load connections: {}", e.description()),
                    ))
                    .await;
            }
        }
    });
}
