//! Shared helpers for lifecycle integration tests.

#![allow(dead_code, unused_imports)]

use chrono::NaiveDateTime;
use sumo_config::constants::TIMESTAMP_FORMAT;

pub use sumo_lifecycle::testing::{ApiCall, CallKind, Observed, RecordingObserver, ScriptedApi, snapshot};

pub const JOB_ID: &str = "7A1B2C3D4E5F6A7B";

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
}

/// Fixed wall clock used as "now".
pub fn now() -> NaiveDateTime {
    ts("2024-03-01T12:00:00")
}
