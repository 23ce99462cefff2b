//! `"HH:MM"` wall-clock conversions and duration math.
//!
//! Minutes are counted from midnight. Only [`add_minutes`] (and its alias
//! [`calculate_end_time`]) wraps around the day; the plain conversions keep
//! out-of-range values visible, e.g. `minutes_to_time(1500) == "25:00"`.

use crate::error::{Result, TimeError};

/// Fallback duration used when either end of a session is unknown.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse an `"HH:MM"` string into minutes since midnight.
///
/// Components are read as signed integers, so `"25:00"` yields `1500` and
/// `"9:5"` yields `545`. Anything after a second colon (`"10:30:00"`) is
/// ignored.
///
/// # Errors
/// Returns `TimeError::InvalidTime` if either component is missing, is not
/// an integer, or the total does not fit in an `i64`.
///
/// # Example
/// ```
/// use festival_time::time_to_minutes;
/// assert_eq!(time_to_minutes("10:30").unwrap(), 630);
/// assert_eq!(time_to_minutes("00:00").unwrap(), 0);
/// ```
pub fn time_to_minutes(time: &str) -> Result<i64> {
    let invalid = || TimeError::InvalidTime(time.to_string());

    let mut parts = time.split(':');
    let hours = parts.next().ok_or_else(invalid)?;
    let minutes = parts.next().ok_or_else(invalid)?;

    let hours: i64 = hours.trim().parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.trim().parse().map_err(|_| invalid())?;

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(invalid)
}

/// Format minutes since midnight as `"HH:MM"`.
///
/// Uses floor division, so the minute component is always in `0..60`. The
/// hour component is not wrapped to 24.
///
/// # Example
/// ```
/// use festival_time::minutes_to_time;
/// assert_eq!(minutes_to_time(630), "10:30");
/// assert_eq!(minutes_to_time(1500), "25:00");
/// ```
pub fn minutes_to_time(minutes: i64) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    format!("{:02}:{:02}", hours, mins)
}

/// Minutes between `start` and `end`.
///
/// The result is negative when `end` precedes `start`; it is not clamped.
/// When either bound is absent or empty the session length is unknown and
/// [`DEFAULT_DURATION_MINUTES`] is returned.
///
/// # Errors
/// Returns `TimeError::InvalidTime` if a present bound is not `HH:MM`.
pub fn calculate_duration_in_minutes(start: Option<&str>, end: Option<&str>) -> Result<i64> {
    match (start, end) {
        (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
            time_to_minutes(end)?
                .checked_sub(time_to_minutes(start)?)
                .ok_or_else(|| TimeError::InvalidTime(end.to_string()))
        }
        _ => Ok(DEFAULT_DURATION_MINUTES),
    }
}

/// Add (or, with a negative `minutes`, subtract) minutes to a wall-clock time.
///
/// The result wraps around midnight: `add_minutes("23:30", 60) == "00:30"` and
/// `add_minutes("00:15", -30) == "23:45"`.
///
/// # Errors
/// Returns `TimeError::InvalidTime` if `time` is not `HH:MM`.
pub fn add_minutes(time: &str, minutes: i64) -> Result<String> {
    let base = time_to_minutes(time)?.rem_euclid(MINUTES_PER_DAY);
    let total = (base + minutes.rem_euclid(MINUTES_PER_DAY)).rem_euclid(MINUTES_PER_DAY);
    Ok(minutes_to_time(total))
}

/// End time of a session starting at `start` and lasting `duration_minutes`.
///
/// Same wrapping rules as [`add_minutes`].
pub fn calculate_end_time(start: &str, duration_minutes: i64) -> Result<String> {
    add_minutes(start, duration_minutes)
}

/// Format a second count as `"MM:SS"` for timer displays.
///
/// The minute component is not wrapped into hours: `format_time(3665) == "61:05"`.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_digit_components() {
        assert_eq!(time_to_minutes("9:5").unwrap(), 545);
    }

    #[test]
    fn ignores_seconds_component() {
        assert_eq!(time_to_minutes("10:30:00").unwrap(), 630);
    }

    #[test]
    fn rejects_missing_minutes() {
        assert_eq!(
            time_to_minutes("10"),
            Err(TimeError::InvalidTime("10".to_string()))
        );
    }

    #[test]
    fn rejects_components_that_overflow() {
        assert_eq!(
            time_to_minutes("999999999999999999:00"),
            Err(TimeError::InvalidTime("999999999999999999:00".to_string()))
        );
        assert!(time_to_minutes("0:9223372036854775807").is_ok());
        assert!(time_to_minutes("1:9223372036854775807").is_err());
    }

    #[test]
    fn add_minutes_wraps_extreme_offsets() {
        // i64::MAX is 1087 mod 1440.
        assert_eq!(add_minutes("10:00", i64::MAX).unwrap(), "04:07");
        // i64::MIN is 352 mod 1440.
        assert_eq!(add_minutes("10:00", i64::MIN).unwrap(), "15:52");
    }

    #[test]
    fn duration_overflow_is_an_error() {
        let start = "-153722867280912930:00";
        let end = "153722867280912930:00";
        assert!(calculate_duration_in_minutes(Some(start), Some(end)).is_err());
    }

    #[test]
    fn negative_minutes_keep_minute_component_positive() {
        assert_eq!(minutes_to_time(-30), "-1:30");
    }
}
