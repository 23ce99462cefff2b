//! # festival-time
//!
//! Wall-clock time-of-day arithmetic for the festival planner.
//!
//! Times are `"HH:MM"` strings counted in minutes since midnight. All functions
//! are pure: no clock reads, no hidden state.
//!
//! ## Modules
//!
//! - [`clock`] -- `"HH:MM"` ↔ minutes conversion, timer formatting, duration math
//! - [`slots`] -- evenly spaced time-slot sequences for schedule grids
//! - [`error`] -- Error types

pub mod clock;
pub mod error;
pub mod slots;

pub use clock::{
    add_minutes, calculate_duration_in_minutes, calculate_end_time, format_time,
    minutes_to_time, time_to_minutes, DEFAULT_DURATION_MINUTES,
};
pub use error::TimeError;
pub use slots::{generate_time_slots, TimeSlots, MAX_TIME_SLOTS};
