//! Input validation.
//!
//! Option conflicts are a declarative table evaluated in order; the first
//! conflict found is reported. The time-range rule runs after resolution so
//! it sees the effective window from every channel.

use chrono::NaiveDateTime;

use crate::error::ValidationError;
use crate::inputs::{InputOption, InputOption as O, JobInputs};

/// `(option, conflicting options)` rows, checked top to bottom.
pub const EXCLUSIONS: &[(InputOption, &[InputOption])] = &[
    (
        O::Job,
        &[O::JobFile, O::Query, O::QueryFile, O::From, O::Span, O::To, O::AutoParse],
    ),
    (
        O::JobFile,
        &[O::Job, O::Query, O::QueryFile, O::From, O::Span, O::To, O::AutoParse],
    ),
    (O::Query, &[O::QueryFile]),
    (O::QueryFile, &[O::Query]),
    (O::Span, &[O::From, O::To, O::Timezone]),
];

/// Fail on the first pair of supplied options that cannot be combined.
pub fn check_exclusions(inputs: &JobInputs) -> Result<(), ValidationError> {
    for (anchor, conflicts) in EXCLUSIONS {
        if !inputs.is_present(*anchor) {
            continue;
        }
        if let Some(conflict) = conflicts.iter().find(|c| inputs.is_present(**c)) {
            return Err(ValidationError::IncompatibleOptions {
                option: conflict.name(),
                conflicts_with: anchor.name(),
            });
        }
    }
    Ok(())
}

/// `from` must be strictly before `to`.
pub fn check_time_range(from: NaiveDateTime, to: NaiveDateTime) -> Result<(), ValidationError> {
    if from < to {
        Ok(())
    } else {
        Err(ValidationError::InvalidTimeRange { from, to })
    }
}
