//! Error types for the lifecycle engine.
//!
//! [`ValidationError`] is raised before any remote call is made.
//! [`LifecycleError`] wraps validation, transport and output failures.

use chrono::NaiveDateTime;
use std::path::PathBuf;
use sumo_client::ClientError;
use thiserror::Error;

/// Result type alias for lifecycle operations.
pub type Result<T> = std::result::Result<T, LifecycleError>;

/// Problems with the user-supplied job inputs.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Two input options that cannot be combined were both supplied.
    #[error("{option} is not compatible with {conflicts_with}")]
    IncompatibleOptions {
        option: &'static str,
        conflicts_with: &'static str,
    },

    #[error("Unable to parse the provided span '{value}': {reason}")]
    InvalidDuration { value: String, reason: &'static str },

    #[error("Unable to parse the provided {option} time '{value}': expected YYYY-MM-DDTHH:MM:SS")]
    InvalidTimestamp { option: &'static str, value: String },

    #[error("from {from} is not before to {to}")]
    InvalidTimeRange {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },

    #[error("Invalid job definition in {origin}: {message}")]
    InvalidJobDefinition { origin: String, message: String },

    #[error("Unknown auto-parse mode '{0}' (expected 'performance' or 'intelligent')")]
    InvalidAutoParsingMode(String),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Failed to read {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Pagination limit must be greater than zero")]
    InvalidLimit,
}

/// Any failure while driving a job.
#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Client(#[from] ClientError),

    /// Writing a result page to the sink failed.
    #[error("Failed to write results: {0}")]
    Output(#[from] std::io::Error),
}

impl LifecycleError {
    /// The transport error, if this failure came from the API.
    pub fn as_client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(e) => Some(e),
            _ => None,
        }
    }
}
