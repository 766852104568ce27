//! Turns [`JobInputs`] into a [`JobSpecification`].
//!
//! Resolution reads files and parses values but applies no cross-option
//! rules; call [`crate::check_exclusions`] first and
//! [`crate::check_time_range`] afterwards (or use [`crate::prepare_job`]).

use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Deserialize;
use sumo_client::{AutoParsingMode, JobSpecification};
use sumo_config::constants::{DEFAULT_TIMEZONE, TIMESTAMP_FORMAT};
use tracing::debug;

use crate::duration::parse_duration;
use crate::error::ValidationError;
use crate::inputs::JobInputs;

/// A job definition as written in `--job` / `--job-file` JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobDefinition {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    time_zone: Option<String>,
    #[serde(default)]
    by_receipt_time: bool,
    #[serde(default)]
    auto_parsing_mode: Option<String>,
}

fn read_file(path: &Path) -> Result<String, ValidationError> {
    std::fs::read_to_string(path).map_err(|source| ValidationError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_definition(text: &str, origin: String) -> Result<JobDefinition, ValidationError> {
    serde_json::from_str(text).map_err(|e| ValidationError::InvalidJobDefinition {
        origin,
        message: e.to_string(),
    })
}

fn parse_timestamp(option: &'static str, value: &str) -> Result<NaiveDateTime, ValidationError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        ValidationError::InvalidTimestamp {
            option,
            value: value.to_string(),
        }
    })
}

fn parse_auto_parse(value: &str) -> Result<AutoParsingMode, ValidationError> {
    AutoParsingMode::from_str(value)
        .map_err(|_| ValidationError::InvalidAutoParsingMode(value.to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Resolve inputs against `now` (UTC wall clock).
///
/// Time window, for query inputs: a span sets `to = now` and
/// `from = now - span`; explicit `from` / `to` then override their endpoint.
/// Any endpoint left unset defaults to `now`.
pub fn resolve(inputs: &JobInputs, now: NaiveDateTime) -> Result<JobSpecification, ValidationError> {
    let definition = if let Some(json) = inputs.job() {
        Some(parse_definition(json, "job".to_string())?)
    } else if let Some(path) = inputs.job_file() {
        let text = read_file(path)?;
        Some(parse_definition(&text, path.display().to_string())?)
    } else {
        None
    };

    let mut query = None;
    let mut from = None;
    let mut to = None;
    let mut timezone = None;
    let mut by_receipt_time = inputs.by_receipt_time;
    let mut auto_parsing_mode = None;

    if let Some(def) = definition {
        debug!("Resolving job from JSON definition");
        query = non_empty(def.query);
        if let Some(value) = non_empty(def.from) {
            from = Some(parse_timestamp("from", &value)?);
        }
        if let Some(value) = non_empty(def.to) {
            to = Some(parse_timestamp("to", &value)?);
        }
        timezone = non_empty(def.time_zone);
        by_receipt_time = def.by_receipt_time;
        if let Some(value) = non_empty(def.auto_parsing_mode) {
            auto_parsing_mode = Some(parse_auto_parse(&value)?);
        }
    }

    if let Some(q) = inputs.query() {
        query = Some(q.to_string());
    } else if let Some(path) = inputs.query_file() {
        let text = read_file(path)?;
        query = Some(text.trim_end_matches(['\r', '\n']).to_string());
    }

    if let Some(span) = inputs.span() {
        let delta = parse_duration(span)?;
        let start = now
            .checked_sub_signed(delta)
            .ok_or_else(|| ValidationError::InvalidDuration {
                value: span.to_string(),
                reason: "value out of range",
            })?;
        from = Some(start);
        to = Some(now);
    }
    if let Some(value) = inputs.to() {
        to = Some(parse_timestamp("to", value)?);
    }
    if let Some(value) = inputs.from() {
        from = Some(parse_timestamp("from", value)?);
    }

    if let Some(tz) = inputs.timezone() {
        timezone = Some(tz.to_string());
    }
    if let Some(value) = inputs.auto_parse() {
        auto_parsing_mode = Some(parse_auto_parse(value)?);
    }

    let query = query
        .filter(|q| !q.trim().is_empty())
        .ok_or(ValidationError::EmptyQuery)?;

    Ok(JobSpecification {
        query,
        from: from.unwrap_or(now),
        to: to.unwrap_or(now),
        timezone: timezone.unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
        by_receipt_time,
        auto_parsing_mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
    }

    fn now() -> NaiveDateTime {
        ts("2024-03-01T12:00:00")
    }

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_span_sets_window_ending_now() {
        let spec = resolve(&JobInputs::with_query_span("error", "1h30m"), now()).unwrap();
        assert_eq!(spec.to, now());
        assert_eq!(spec.from, ts("2024-03-01T10:30:00"));
        assert_eq!(spec.timezone, "UTC");
        assert_eq!(spec.query, "error");
    }

    #[test]
    fn test_explicit_window_and_options() {
        let inputs = JobInputs {
            query: Some("error".into()),
            from: Some("2024-02-01T00:00:00".into()),
            to: Some("2024-02-02T00:00:00".into()),
            timezone: Some("America/New_York".into()),
            by_receipt_time: true,
            auto_parse: Some("Performance".into()),
            ..JobInputs::default()
        };
        let spec = resolve(&inputs, now()).unwrap();
        assert_eq!(spec.from, ts("2024-02-01T00:00:00"));
        assert_eq!(spec.to, ts("2024-02-02T00:00:00"));
        assert_eq!(spec.timezone, "America/New_York");
        assert!(spec.by_receipt_time);
        assert_eq!(spec.auto_parsing_mode, Some(AutoParsingMode::Performance));
    }

    #[test]
    fn test_missing_from_defaults_to_now() {
        let inputs = JobInputs {
            query: Some("error".into()),
            ..JobInputs::default()
        };
        let spec = resolve(&inputs, now()).unwrap();
        assert_eq!(spec.from, now());
        assert_eq!(spec.to, now());
    }

    #[test]
    fn test_inline_job_definition() {
        let inputs = JobInputs {
            job: Some(
                r#"{"query":"_sourceCategory=app","from":"2024-01-01T00:00:00","to":"2024-01-01T06:00:00","byReceiptTime":true,"autoParsingMode":"intelligent"}"#
                    .into(),
            ),
            by_receipt_time: false,
            ..JobInputs::default()
        };
        let spec = resolve(&inputs, now()).unwrap();
        assert_eq!(spec.query, "_sourceCategory=app");
        assert_eq!(spec.timezone, "UTC");
        assert!(spec.by_receipt_time);
        assert_eq!(spec.auto_parsing_mode, Some(AutoParsingMode::Intelligent));
    }

    #[test]
    fn test_receipt_time_flag_ignored_for_job_definition() {
        let inputs = JobInputs {
            job: Some(r#"{"query":"x","from":"2024-01-01T00:00:00","to":"2024-01-01T06:00:00"}"#.into()),
            by_receipt_time: true,
            ..JobInputs::default()
        };
        assert!(!resolve(&inputs, now()).unwrap().by_receipt_time);
    }

    #[test]
    fn test_timezone_overrides_job_definition() {
        let inputs = JobInputs {
            job: Some(r#"{"query":"x","from":"2024-01-01T00:00:00","to":"2024-01-01T06:00:00","timeZone":"Asia/Tokyo"}"#.into()),
            timezone: Some("Europe/Berlin".into()),
            ..JobInputs::default()
        };
        assert_eq!(resolve(&inputs, now()).unwrap().timezone, "Europe/Berlin");
    }

    #[test]
    fn test_job_file_definition() {
        let file = temp_file(
            r#"{"query":"error | count","from":"2024-01-01T00:00:00","to":"2024-01-02T00:00:00","timeZone":"PST"}"#,
        );
        let inputs = JobInputs {
            job_file: Some(file.path().to_path_buf()),
            ..JobInputs::default()
        };
        let spec = resolve(&inputs, now()).unwrap();
        assert_eq!(spec.query, "error | count");
        assert_eq!(spec.timezone, "PST");
    }

    #[test]
    fn test_query_file_trailing_newline_trimmed() {
        let file = temp_file("_sourceCategory=app\n| count by _sourceHost\n");
        let inputs = JobInputs {
            query_file: Some(file.path().to_path_buf()),
            span: Some("15m".into()),
            ..JobInputs::default()
        };
        let spec = resolve(&inputs, now()).unwrap();
        assert_eq!(spec.query, "_sourceCategory=app\n| count by _sourceHost");
    }

    #[test]
    fn test_unreadable_file() {
        let inputs = JobInputs {
            query_file: Some(PathBuf::from("/nonexistent/query.txt")),
            ..JobInputs::default()
        };
        assert!(matches!(
            resolve(&inputs, now()),
            Err(ValidationError::FileRead { .. })
        ));
    }

    #[test]
    fn test_malformed_job_json() {
        let inputs = JobInputs {
            job: Some("{query:".into()),
            ..JobInputs::default()
        };
        assert!(matches!(
            resolve(&inputs, now()),
            Err(ValidationError::InvalidJobDefinition { .. })
        ));
    }

    #[test]
    fn test_bad_values_rejected() {
        let bad_span = JobInputs::with_query_span("error", "soon");
        assert!(matches!(
            resolve(&bad_span, now()),
            Err(ValidationError::InvalidDuration { .. })
        ));

        let bad_from = JobInputs {
            query: Some("error".into()),
            from: Some("2024-01-01 00:00:00".into()),
            ..JobInputs::default()
        };
        assert!(matches!(
            resolve(&bad_from, now()),
            Err(ValidationError::InvalidTimestamp { option: "from", .. })
        ));

        let bad_mode = JobInputs {
            query: Some("error".into()),
            auto_parse: Some("fast".into()),
            ..JobInputs::default()
        };
        assert!(matches!(
            resolve(&bad_mode, now()),
            Err(ValidationError::InvalidAutoParsingMode(_))
        ));
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(
            resolve(&JobInputs::default(), now()),
            Err(ValidationError::EmptyQuery)
        ));
        let blank = temp_file("\n");
        let inputs = JobInputs {
            query_file: Some(blank.path().to_path_buf()),
            ..JobInputs::default()
        };
        assert!(matches!(
            resolve(&inputs, now()),
            Err(ValidationError::EmptyQuery)
        ));
    }
}
