//! Job creation models.
//!
//! # What this module handles:
//! - The normalized job specification sent on creation
//! - The handle identifying a created job
//!
//! # What this module does NOT handle:
//! - Building a specification from user input (see the lifecycle crate)
//! - HTTP transport (see [`crate::endpoints::search_jobs`])

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field extraction behaviour requested for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoParsingMode {
    Performance,
    Intelligent,
}

impl AutoParsingMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AutoParsingMode::Performance => "performance",
            AutoParsingMode::Intelligent => "intelligent",
        }
    }
}

impl fmt::Display for AutoParsingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an auto-parsing mode is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAutoParsingMode(pub String);

impl fmt::Display for UnknownAutoParsingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown auto-parsing mode '{}' (expected performance or intelligent)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAutoParsingMode {}

impl FromStr for AutoParsingMode {
    type Err = UnknownAutoParsingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "performance" => Ok(AutoParsingMode::Performance),
            "intelligent" => Ok(AutoParsingMode::Intelligent),
            _ => Err(UnknownAutoParsingMode(s.to_string())),
        }
    }
}

/// The normalized request body for `POST /v1/search/jobs`.
///
/// `from` and `to` are wall-clock times interpreted in `timezone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpecification {
    pub query: String,
    #[serde(with = "crate::serde_helpers::timestamp")]
    pub from: NaiveDateTime,
    #[serde(with = "crate::serde_helpers::timestamp")]
    pub to: NaiveDateTime,
    #[serde(rename = "timeZone")]
    pub timezone: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub by_receipt_time: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_parsing_mode: Option<AutoParsingMode>,
}

/// Identifies a created job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    /// Opaque job id (last path segment of `location`).
    pub id: String,
    /// The `Location` returned on creation.
    pub location: String,
}

impl JobHandle {
    /// Build a handle from a `Location` header value.
    ///
    /// Returns `None` when the location has no non-empty path segment.
    pub fn from_location(location: &str) -> Option<Self> {
        let path = location.split(['?', '#']).next().unwrap_or_default();
        let id = path.trim_end_matches('/').rsplit('/').next()?;
        if id.is_empty() || id.contains(':') {
            return None;
        }
        Some(Self {
            id: id.to_string(),
            location: location.to_string(),
        })
    }
}
