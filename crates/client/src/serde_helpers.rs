//! Serde helpers for Search Job API payloads.
//!
//! Responsibilities:
//! - (De)serialize job window timestamps in the `YYYY-MM-DDTHH:MM:SS` layout.
//! - Accept either JSON numbers or numeric strings for count fields.
//!
//! Invariants / assumptions:
//! - Timestamps never carry an offset; the timezone travels in its own field.
//! - These helpers must not log; errors are generic parse errors.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    String(String),
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match U64OrString::deserialize(deserializer)? {
        U64OrString::U64(v) => Ok(v),
        U64OrString::String(s) => s.trim().parse::<u64>().map_err(D::Error::custom),
    }
}

pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};
    use sumo_config::constants::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Window {
        #[serde(with = "timestamp")]
        at: NaiveDateTime,
    }

    #[derive(Debug, Deserialize)]
    struct Count {
        #[serde(deserialize_with = "u64_from_string_or_number")]
        n: u64,
    }

    #[test]
    fn test_timestamp_layout_has_no_offset() {
        let at = NaiveDateTime::parse_from_str("2017-07-16T00:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        let json = serde_json::to_string(&Window { at }).unwrap();
        assert_eq!(json, r#"{"at":"2017-07-16T00:00:00"}"#);
    }

    #[test]
    fn test_timestamp_rejects_offset_suffix() {
        let err = serde_json::from_str::<Window>(r#"{"at":"2017-07-16T00:00:00Z"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_count_accepts_number_or_string() {
        assert_eq!(serde_json::from_str::<Count>(r#"{"n":42}"#).unwrap().n, 42);
        assert_eq!(serde_json::from_str::<Count>(r#"{"n":"42"}"#).unwrap().n, 42);
        assert!(serde_json::from_str::<Count>(r#"{"n":"many"}"#).is_err());
    }
}
