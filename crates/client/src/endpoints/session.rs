//! Session endpoints.

use reqwest::Client;

use crate::endpoints::{send_request, with_session};
use crate::error::Result;
use crate::models::{Session, SessionResponse, UpdateSessionParams};

/// Fetch the current session.
///
/// Returns `None` when the server reports no session (a `null` body).
pub async fn get_session(
    client: &Client,
    base_url: &str,
    session_token: Option<&str>,
) -> Result<Option<Session>> {
    let url = format!("{}/api/auth/get-session", base_url);

    let builder = with_session(client.get(&url), session_token);
    let response = send_request(builder, "/api/auth/get-session", "GET").await?;

    let resp: Option<SessionResponse> = response.json().await?;
    Ok(resp.map(Session::from))
}

/// Point the session at a different connection.
pub async fn update_session(
    client: &Client,
    base_url: &str,
    session_token: Option<&str>,
    connection_id: &str,
) -> Result<()> {
    let url = format!("{}/api/auth/session", base_url);

    let builder = with_session(client.post(&url), session_token)
        .json(&UpdateSessionParams { connection_id });
    send_request(builder, "/api/auth/session", "POST").await?;
    Ok(())
}
