//! Redaction wrapper for Action logging.
//!
//! `RedactedAction` implements `Debug` so that account data (email
//! addresses, session user details, toast text) never reaches the log
//! files. Use `RedactedAction(&action)` instead of `?action` when logging.
//!
//! # Invariants
//!
//! - Variants carrying user data are handled explicitly.
//! - Simple variants fall through to the default Debug output.

use crate::action::variants::Action;

/// Mask an email address, keeping the first character and the domain.
fn redact_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => format!("<{} chars>", email.len()),
    }
}

/// Redacted wrapper for Action that keeps account data out of logs.
///
/// # Example
/// ```ignore
/// let action = Action::SwitchAccount {
///     connection_id: "conn-1".into(),
///     email: "someone@example.com".into(),
/// };
/// tracing::info!("Handling action: {:?}", RedactedAction(&action));
/// // Logs: Handling action: SwitchAccount { connection_id: "conn-1", email: "s***@example.com" }
/// ```
pub struct RedactedAction<'a>(pub &'a Action);

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::SwitchAccount {
                connection_id,
                email,
            } => write!(
                f,
                "SwitchAccount {{ connection_id: {:?}, email: {:?} }}",
                connection_id,
                redact_email(email)
            ),
            Action::SessionLoaded(Some(session)) => write!(
                f,
                "SessionLoaded(Some(user={:?}, connection_id={:?}))",
                session.user.id, session.connection_id
            ),
            Action::ConnectionsLoaded(connections) => {
                write!(f, "ConnectionsLoaded(<{} items>)", connections.len())
            }
            Action::Notify(level, message) => {
                write!(f, "Notify({:?}, <{} chars>)", level, message.len())
            }
            _ => write!(f, "{:?}", self.0),
        }
    }
}
