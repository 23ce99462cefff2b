//! Evenly spaced time slots for schedule grids.
//!
//! Slots include both endpoints when the interval divides the range evenly,
//! e.g. hourly slots from 08:00 to 20:00 yield 13 entries.

use serde::{Deserialize, Serialize};

use crate::clock::{minutes_to_time, time_to_minutes};
use crate::error::{Result, TimeError};

/// Parameters for a slot sequence. The default is a half-hour grid from
/// 09:00 to 23:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeSlots {
    pub interval_minutes: i64,
    pub start: String,
    pub end: String,
}

impl Default for TimeSlots {
    fn default() -> Self {
        Self {
            interval_minutes: 30,
            start: "09:00".to_string(),
            end: "23:00".to_string(),
        }
    }
}

impl TimeSlots {
    /// Expand these parameters into `"HH:MM"` slots.
    pub fn generate(&self) -> Result<Vec<String>> {
        generate_time_slots(self.interval_minutes, &self.start, &self.end)
    }
}

/// Upper bound on the number of slots one call may produce.
pub const MAX_TIME_SLOTS: usize = 10_000;

/// Generate `"HH:MM"` slots from `start` to `end` inclusive, stepping by
/// `interval_minutes`.
///
/// Returns an empty list when `start` is after `end`. The last slot is the
/// greatest step not past `end`, so `end` itself is only included when the
/// interval lands on it.
///
/// # Errors
/// Returns `TimeError::InvalidInterval` when `interval_minutes <= 0` (the
/// sequence would never reach `end`), `TimeError::InvalidTime` when a bound
/// is not `HH:MM`, and `TimeError::TooManySlots` when the range would yield
/// more than [`MAX_TIME_SLOTS`] entries.
///
/// # Example
/// ```
/// use festival_time::generate_time_slots;
/// let slots = generate_time_slots(60, "08:00", "20:00").unwrap();
/// assert_eq!(slots.len(), 13);
/// assert_eq!(slots.first().map(String::as_str), Some("08:00"));
/// assert_eq!(slots.last().map(String::as_str), Some("20:00"));
/// ```
pub fn generate_time_slots(interval_minutes: i64, start: &str, end: &str) -> Result<Vec<String>> {
    if interval_minutes <= 0 {
        return Err(TimeError::InvalidInterval(interval_minutes));
    }

    let start_minutes = time_to_minutes(start)?;
    let end_minutes = time_to_minutes(end)?;
    if start_minutes > end_minutes {
        return Ok(Vec::new());
    }

    // i128 holds the span of any two i64 bounds.
    let span = i128::from(end_minutes) - i128::from(start_minutes);
    let count = span / i128::from(interval_minutes) + 1;
    if count > MAX_TIME_SLOTS as i128 {
        return Err(TimeError::TooManySlots(count));
    }

    // Every step up to `count` stays within `start_minutes..=end_minutes`.
    let slots = (0..count as i64)
        .map(|step| minutes_to_time(start_minutes + step * interval_minutes))
        .collect();

    Ok(slots)
}
