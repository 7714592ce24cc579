//! Mail connection endpoints.

use reqwest::Client;

use crate::endpoints::{encode_path_segment, send_request, with_session};
use crate::error::Result;
use crate::models::{Connection, ConnectionListResponse};

/// List the user's linked mail connections.
pub async fn list_connections(
    client: &Client,
    base_url: &str,
    session_token: Option<&str>,
) -> Result<Vec<Connection>> {
    let url = format!("{}/api/v1/mail/connections", base_url);

    let builder = with_session(client.get(&url), session_token);
    let response = send_request(builder, "/api/v1/mail/connections", "GET").await?;

    let resp: ConnectionListResponse = response.json().await?;
    Ok(resp.connections)
}

/// Make `connection_id` the server-side default connection.
///
/// A rejection comes back as `ClientError::ApiError` whose message is the
/// server's `error` field.
pub async fn switch_connection(
    client: &Client,
    base_url: &str,
    session_token: Option<&str>,
    connection_id: &str,
) -> Result<()> {
    let url = format!(
        "{}/api/v1/mail/connections/{}",
        base_url,
        encode_path_segment(connection_id)
    );

    let builder = with_session(client.put(&url), session_token);
    send_request(builder, "/api/v1/mail/connections/{id}", "PUT").await?;
    Ok(())
}
