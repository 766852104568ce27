//! Job status models.
//!
//! The wire `state` is a free-form string. It is mapped onto [`JobState`] at
//! the deserialization boundary; values this client does not know about are
//! kept verbatim in [`JobState::Unrecognized`] instead of being folded into a
//! known state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Lifecycle state of a search job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    NotStarted,
    GatheringResults,
    ForcePaused,
    Cancelled,
    DoneGatheringResults,
    /// A state string this client does not know.
    Unrecognized(String),
}

impl JobState {
    /// Map a wire string to a state. Matching is exact (case and spacing).
    pub fn from_wire(s: &str) -> Self {
        match s {
            "NOT STARTED" => JobState::NotStarted,
            "GATHERING RESULTS" => JobState::GatheringResults,
            "FORCE PAUSED" => JobState::ForcePaused,
            "CANCELLED" => JobState::Cancelled,
            "DONE GATHERING RESULTS" => JobState::DoneGatheringResults,
            other => JobState::Unrecognized(other.to_string()),
        }
    }

    /// The wire string for this state.
    pub fn as_wire(&self) -> &str {
        match self {
            JobState::NotStarted => "NOT STARTED",
            JobState::GatheringResults => "GATHERING RESULTS",
            JobState::ForcePaused => "FORCE PAUSED",
            JobState::Cancelled => "CANCELLED",
            JobState::DoneGatheringResults => "DONE GATHERING RESULTS",
            JobState::Unrecognized(s) => s,
        }
    }

    /// True when no further progress polling is meaningful.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobState::DoneGatheringResults | JobState::Cancelled | JobState::ForcePaused
        )
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Serialize for JobState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for JobState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(JobState::from_wire(&s))
    }
}

/// Point-in-time status of a job (`GET /v1/search/jobs/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusSnapshot {
    pub state: JobState,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub message_count: u64,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub record_count: u64,
    #[serde(default)]
    pub pending_warnings: Vec<String>,
    #[serde(default)]
    pub pending_errors: Vec<String>,
}

impl JobStatusSnapshot {
    /// A snapshot with no warnings or errors.
    pub fn new(state: JobState, message_count: u64, record_count: u64) -> Self {
        Self {
            state,
            message_count,
            record_count,
            pending_warnings: Vec::new(),
            pending_errors: Vec::new(),
        }
    }

    /// True when the job produced neither messages nor records.
    pub fn is_empty(&self) -> bool {
        self.message_count == 0 && self.record_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(JobState::DoneGatheringResults.is_terminal());
        assert!(JobState::Cancelled.is_terminal());
        assert!(JobState::ForcePaused.is_terminal());
        assert!(!JobState::NotStarted.is_terminal());
        assert!(!JobState::GatheringResults.is_terminal());
        assert!(!JobState::Unrecognized("PAUSED".into()).is_terminal());
    }

    #[test]
    fn test_wire_matching_is_exact() {
        assert_eq!(
            JobState::from_wire("DONE GATHERING RESULTS"),
            JobState::DoneGatheringResults
        );
        assert_eq!(
            JobState::from_wire("done gathering results"),
            JobState::Unrecognized("done gathering results".into())
        );
        assert_eq!(
            JobState::from_wire("DONE  GATHERING RESULTS"),
            JobState::Unrecognized("DONE  GATHERING RESULTS".into())
        );
    }

    #[test]
    fn test_known_states_round_trip_wire_strings() {
        for state in [
            JobState::NotStarted,
            JobState::GatheringResults,
            JobState::ForcePaused,
            JobState::Cancelled,
            JobState::DoneGatheringResults,
        ] {
            assert_eq!(JobState::from_wire(state.as_wire()), state);
        }
    }

    #[test]
    fn test_snapshot_deserializes_api_payload() {
        let snapshot: JobStatusSnapshot = serde_json::from_value(serde_json::json!({
            "state": "GATHERING RESULTS",
            "messageCount": 90,
            "histogramBuckets": [{"length": 60000, "count": 90, "startTimestamp": 1359404820000u64}],
            "pendingErrors": [],
            "pendingWarnings": ["slow query"],
            "recordCount": 1
        }))
        .unwrap();

        assert_eq!(snapshot.state, JobState::GatheringResults);
        assert_eq!(snapshot.message_count, 90);
        assert_eq!(snapshot.record_count, 1);
        assert_eq!(snapshot.pending_warnings, vec!["slow query".to_string()]);
    }

    #[test]
    fn test_snapshot_defaults_missing_counts_to_zero() {
        let snapshot: JobStatusSnapshot =
            serde_json::from_value(serde_json::json!({"state": "NOT STARTED"})).unwrap();
        assert!(snapshot.is_empty());
    }
}
