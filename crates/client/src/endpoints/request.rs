//! Single-shot request helper.
//!
//! Sends a request once and turns non-success responses into
//! [`ClientError::ApiError`]. There is no retry: rate limiting and server
//! errors surface to the caller unchanged.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ApiErrorBody;

/// Send `builder` and return the response if its status is 2xx.
///
/// `endpoint` and `method` are only used for logging.
pub(crate) async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();
    debug!(endpoint, method, status = status.as_u16(), "Search Job API response");

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let (message, request_id) = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => (parsed.summary(), parsed.id),
        Err(_) if body.trim().is_empty() => (
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            None,
        ),
        Err(_) => (body, None),
    };

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
        request_id,
    })
}
