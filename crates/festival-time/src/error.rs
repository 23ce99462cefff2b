//! Error types for time arithmetic.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The input was not an `HH:MM` wall-clock string.
    #[error("Invalid time: {0:?} (expected HH:MM)")]
    InvalidTime(String),

    /// Slot generation needs a strictly positive step.
    #[error("Invalid slot interval: {0} minutes (must be positive)")]
    InvalidInterval(i64),

    /// The slot range would produce more entries than the generator allows.
    #[error(
        "Too many time slots: {0} requested (limit {limit})",
        limit = crate::slots::MAX_TIME_SLOTS
    )]
    TooManySlots(i128),
}

pub type Result<T> = std::result::Result<T, TimeError>;
