//! Relative time span parsing.
//!
//! Accepts the same grammar as Go's `time.ParseDuration`: an optional sign
//! followed by one or more `<number><unit>` components, where the number may
//! have a fractional part and the unit is one of `ns`, `us` (`µs`, `μs`),
//! `ms`, `s`, `m`, `h`. A bare `0` is allowed without a unit.

use chrono::TimeDelta;

use crate::error::ValidationError;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

// Fraction digits beyond this do not change a nanosecond result.
const MAX_FRACTION_DIVISOR: u128 = 1_000_000_000_000_000_000;

/// Parse a span such as `"3h"`, `"1h30m"`, `"1.5h"` or `"90s"`.
pub fn parse_duration(input: &str) -> Result<TimeDelta, ValidationError> {
    let invalid = |reason: &'static str| ValidationError::InvalidDuration {
        value: input.to_string(),
        reason,
    };

    let mut rest = input;
    let negative = match rest.as_bytes().first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(invalid("empty duration"));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_part, after_int) = rest.split_at(int_len);
        rest = after_int;

        let mut frac_part = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            frac_part = &after_dot[..frac_len];
            rest = &after_dot[frac_len..];
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid("expected a number"));
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (unit, after_unit) = rest.split_at(unit_len);
        rest = after_unit;

        let scale = match unit {
            "ns" => 1,
            "us" | "µs" | "μs" => NANOS_PER_MICRO,
            "ms" => NANOS_PER_MILLI,
            "s" => NANOS_PER_SEC,
            "m" => NANOS_PER_MIN,
            "h" => NANOS_PER_HOUR,
            "" => return Err(invalid("missing unit")),
            _ => return Err(invalid("unknown unit")),
        };

        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid("value out of range"))?
        };
        let mut nanos = whole
            .checked_mul(scale)
            .ok_or_else(|| invalid("value out of range"))?;

        let mut fraction: u128 = 0;
        let mut divisor: u128 = 1;
        for digit in frac_part.bytes() {
            if divisor >= MAX_FRACTION_DIVISOR {
                break;
            }
            fraction = fraction * 10 + u128::from(digit - b'0');
            divisor *= 10;
        }
        nanos += fraction * scale / divisor;

        total = total
            .checked_add(nanos)
            .filter(|t| *t <= i64::MAX as u128)
            .ok_or_else(|| invalid("value out of range"))?;
    }

    let nanos = i64::try_from(total).map_err(|_| invalid("value out of range"))?;
    Ok(TimeDelta::nanoseconds(if negative { -nanos } else { nanos }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: &str) -> i64 {
        parse_duration(s).unwrap().num_seconds()
    }

    #[test]
    fn test_single_units() {
        assert_eq!(secs("3h"), 3 * 3600);
        assert_eq!(secs("15m"), 900);
        assert_eq!(secs("90s"), 90);
        assert_eq!(parse_duration("250ms").unwrap().num_milliseconds(), 250);
        assert_eq!(parse_duration("7us").unwrap().num_microseconds(), Some(7));
        assert_eq!(parse_duration("7µs").unwrap().num_microseconds(), Some(7));
        assert_eq!(parse_duration("42ns").unwrap().num_nanoseconds(), Some(42));
    }

    #[test]
    fn test_compound_and_fractional() {
        assert_eq!(secs("1h30m"), 5400);
        assert_eq!(secs("1.5h"), 5400);
        assert_eq!(secs("2h45m30s"), 9930);
        assert_eq!(parse_duration(".5s").unwrap().num_milliseconds(), 500);
        assert_eq!(secs("1.s"), 1);
    }

    #[test]
    fn test_sign_and_zero() {
        assert_eq!(secs("-3h"), -3 * 3600);
        assert_eq!(secs("+3h"), 3 * 3600);
        assert_eq!(secs("0"), 0);
        assert_eq!(secs("-0"), 0);
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "3", "h", "3x", "1h30", ".s", "-", "1d", "abc", " 3h"] {
            assert!(
                matches!(
                    parse_duration(bad),
                    Err(ValidationError::InvalidDuration { .. })
                ),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(parse_duration("9999999999999999999h").is_err());
        assert!(parse_duration("3000000h").is_err());
    }
}
