//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map client, lifecycle and config errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use sumo_client::ClientError;
use sumo_config::ConfigError;
use sumo_lifecycle::{LifecycleError, ValidationError};

/// Structured exit codes for sumo-search-job-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - missing or rejected access id / key.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// Search job not found (expired or already deleted).
    NotFound = 4,

    /// Validation error - bad job inputs or an HTTP 400.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - HTTP 403.
    PermissionDenied = 6,

    /// Rate limited - HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// Service unavailable - HTTP 502, 503 or 504.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::MissingCredentials => ExitCode::AuthenticationFailed,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::ApiError { status, .. } => match status {
                400 => ExitCode::ValidationError,
                401 => ExitCode::AuthenticationFailed,
                403 => ExitCode::PermissionDenied,
                404 => ExitCode::NotFound,
                429 => ExitCode::RateLimited,
                502..=504 => ExitCode::ServiceUnavailable,
                _ => ExitCode::GeneralError,
            },
            ClientError::HttpError(_)
            | ClientError::InvalidResponse(_)
            | ClientError::MissingLocation => ExitCode::GeneralError,
        }
    }
}

impl From<&LifecycleError> for ExitCode {
    fn from(err: &LifecycleError) -> Self {
        match err {
            LifecycleError::Validation(_) => ExitCode::ValidationError,
            LifecycleError::Client(e) => Self::from(e),
            LifecycleError::Output(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingCredentials => ExitCode::AuthenticationFailed,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        // `LifecycleError` wraps transparently, so the inner error never shows
        // up in the chain on its own.
        for cause in self.chain() {
            if let Some(e) = cause.downcast_ref::<LifecycleError>() {
                return ExitCode::from(e);
            }
            if let Some(e) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(e);
            }
            if cause.downcast_ref::<ValidationError>().is_some() {
                return ExitCode::ValidationError;
            }
            if let Some(e) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(e);
            }
        }
        ExitCode::GeneralError
    }
}
