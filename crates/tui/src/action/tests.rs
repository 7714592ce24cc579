//! Redaction tests for action logging.

use super::*;
use crate::ui::ToastLevel;
use mailzero_client::{Connection, Session, SessionUser};

fn redacted_debug(action: &Action) -> String {
    format!("{:?}", RedactedAction(action))
}

#[test]
fn test_redact_switch_account_email() {
    let action = Action::SwitchAccount {
        connection_id: "conn-home".to_string(),
        email: "someone@example.com".to_string(),
    };
    let output = redacted_debug(&action);

    assert!(!output.contains("someone@"), "email local part leaked: {output}");
    assert!(output.contains("s***@example.com"));
    assert!(output.contains("conn-home"));
}

#[test]
fn test_redact_session_loaded_hides_email() {
    let session = Session {
        user: SessionUser {
            id: "user-1".to_string(),
            email: "me@work.example.com".to_string(),
            name: Some("Me".to_string()),
        },
        connection_id: Some("conn-work".to_string()),
    };
    let output = redacted_debug(&Action::SessionLoaded(Some(session)));

    assert!(!output.contains("me@work.example.com"));
    assert!(output.contains("user-1"));
    assert!(output.contains("conn-work"));
}

#[test]
fn test_redact_connections_loaded_shows_count_only() {
    let connections = vec![Connection {
        id: "conn-work".to_string(),
        email: "me@work.example.com".to_string(),
        name: None,
        picture: None,
    }];
    let output = redacted_debug(&Action::ConnectionsLoaded(connections));

    assert_eq!(output, "ConnectionsLoaded(<1 items>)");
}

#[test]
fn test_redact_notify() {
    let action = Action::Notify(
        ToastLevel::Success,
        "Switched to account: me@home.example.com".to_string(),
    );
    let output = redacted_debug(&action);

    assert!(!output.contains("me@home"));
    assert!(output.contains("Success"));
}

#[test]
fn test_non_sensitive_action_shown_fully() {
    let output = redacted_debug(&Action::Navigate("/mail/inbox".to_string()));
    assert_eq!(output, "Navigate(\"/mail/inbox\")");

    assert_eq!(redacted_debug(&Action::Quit), "Quit");
}
