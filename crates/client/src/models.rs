//! Data models for the Mail Zero API.
//!
//! Invariants:
//! - Field names follow the server's camelCase JSON via `serde(rename)`.
//! - Optional profile fields default to `None` when absent.

use serde::{Deserialize, Serialize};

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Session record as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "connectionId", default)]
    pub connection_id: Option<String>,
}

/// Body of `GET /api/auth/get-session`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub user: SessionUser,
    #[serde(default)]
    pub session: SessionRecord,
}

/// The current session: user plus active connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: SessionUser,
    pub connection_id: Option<String>,
}

impl From<SessionResponse> for Session {
    fn from(resp: SessionResponse) -> Self {
        Self {
            user: resp.user,
            connection_id: resp.session.connection_id,
        }
    }
}

/// A linked mail account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Body of `GET /api/v1/mail/connections`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionListResponse {
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// Body of `POST /api/auth/session`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateSessionParams<'a> {
    #[serde(rename = "connectionId")]
    pub connection_id: &'a str,
}

/// Error body returned by the server on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
