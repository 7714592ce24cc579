//! Shared request helpers: session cookie attachment and response checking.

use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::debug;

use mailzero_config::constants::SESSION_COOKIE_NAME;

use crate::error::{ClientError, Result};
use crate::models::ApiErrorBody;

/// Attach the session cookie when a token is configured.
pub fn with_session(builder: RequestBuilder, session_token: Option<&str>) -> RequestBuilder {
    match session_token {
        Some(token) => builder.header(
            reqwest::header::COOKIE,
            format!("{SESSION_COOKIE_NAME}={token}"),
        ),
        None => builder,
    }
}

/// Send a request and convert non-success statuses into errors.
///
/// - 401 becomes `ClientError::Unauthorized`
/// - any other non-2xx becomes `ClientError::ApiError`, with the message taken
///   from a `{ "error": "..." }` body when present
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();

    if status.is_success() {
        debug!(endpoint, method, status = status.as_u16(), "Request succeeded");
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => parsed.error,
        Err(_) => body,
    };

    debug!(endpoint, method, status = status.as_u16(), %message, "Request failed");

    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized(message));
    }

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}
