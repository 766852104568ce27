//! Error types for the Search Job API client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Search Job API calls.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, timeout, body decoding).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the API.
    ///
    /// `message` is the API's `code: message` pair when the body could be
    /// parsed, otherwise the raw response body.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// The API answered successfully but the payload was not what we expected.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Job creation succeeded but no `Location` header identified the job.
    #[error("Job creation response did not include a Location header")]
    MissingLocation,

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client was built without credentials.
    #[error("Access id and access key are required")]
    MissingCredentials,
}

impl ClientError {
    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        self.status() == Some(401) || matches!(self, Self::MissingCredentials)
    }

    /// Check if this error is a connection-level failure (refused, DNS, timeout).
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_connect() || e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://api.sumologic.com/api/v1/search/jobs".to_string(),
            message: "boom".to_string(),
            request_id: None,
        }
    }

    #[test]
    fn test_status_of_api_error() {
        assert_eq!(api_error(404).status(), Some(404));
        assert_eq!(ClientError::MissingLocation.status(), None);
    }

    #[test]
    fn test_is_auth_error() {
        assert!(api_error(401).is_auth_error());
        assert!(!api_error(403).is_auth_error());
        assert!(!ClientError::InvalidResponse("x".into()).is_auth_error());
    }

    #[test]
    fn test_display_includes_request_id() {
        let err = ClientError::ApiError {
            status: 400,
            url: "https://api.sumologic.com/api/v1/search/jobs".to_string(),
            message: "searchjob.invalid.timestamp.from: bad from".to_string(),
            request_id: Some("IUUQI-DGH5I-TJ045".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("API error (400)"));
        assert!(msg.contains("bad from"));
        assert!(msg.contains("[Request ID: IUUQI-DGH5I-TJ045]"));
    }
}
