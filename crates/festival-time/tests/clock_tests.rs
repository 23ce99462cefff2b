use festival_time::{
    add_minutes, calculate_duration_in_minutes, calculate_end_time, format_time,
    minutes_to_time, time_to_minutes, TimeError, DEFAULT_DURATION_MINUTES,
};

// ============================================================================
// time_to_minutes / minutes_to_time
// ============================================================================

#[test]
fn time_to_minutes_basic() {
    assert_eq!(time_to_minutes("10:30").unwrap(), 630);
    assert_eq!(time_to_minutes("00:00").unwrap(), 0);
    assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
}

#[test]
fn time_to_minutes_does_not_validate_ranges() {
    assert_eq!(time_to_minutes("25:00").unwrap(), 1500);
    assert_eq!(time_to_minutes("10:75").unwrap(), 675);
}

#[test]
fn time_to_minutes_rejects_garbage() {
    for bad in ["", "abc", "10", "ab:cd", "10:", ":30"] {
        assert_eq!(
            time_to_minutes(bad),
            Err(TimeError::InvalidTime(bad.to_string())),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn minutes_to_time_pads_both_components() {
    assert_eq!(minutes_to_time(0), "00:00");
    assert_eq!(minutes_to_time(65), "01:05");
    assert_eq!(minutes_to_time(630), "10:30");
}

#[test]
fn minutes_to_time_does_not_wrap_hours() {
    assert_eq!(minutes_to_time(1440), "24:00");
    assert_eq!(minutes_to_time(1500), "25:00");
}

// ============================================================================
// Durations
// ============================================================================

#[test]
fn duration_between_two_times() {
    assert_eq!(
        calculate_duration_in_minutes(Some("10:00"), Some("11:30")).unwrap(),
        90
    );
}

#[test]
fn duration_is_negative_when_end_precedes_start() {
    assert_eq!(
        calculate_duration_in_minutes(Some("12:00"), Some("11:00")).unwrap(),
        -60
    );
}

#[test]
fn duration_falls_back_when_a_bound_is_missing() {
    assert_eq!(
        calculate_duration_in_minutes(None, Some("11:00")).unwrap(),
        DEFAULT_DURATION_MINUTES
    );
    assert_eq!(
        calculate_duration_in_minutes(Some("10:00"), None).unwrap(),
        60
    );
    assert_eq!(calculate_duration_in_minutes(Some(""), Some("11:00")).unwrap(), 60);
}

#[test]
fn duration_propagates_malformed_time() {
    assert!(matches!(
        calculate_duration_in_minutes(Some("10:00"), Some("late")),
        Err(TimeError::InvalidTime(_))
    ));
}

// ============================================================================
// add_minutes / calculate_end_time
// ============================================================================

#[test]
fn add_minutes_within_day() {
    assert_eq!(add_minutes("10:30", 45).unwrap(), "11:15");
}

#[test]
fn add_minutes_rolls_over_midnight() {
    assert_eq!(add_minutes("23:30", 60).unwrap(), "00:30");
    assert_eq!(add_minutes("22:00", 24 * 60 + 90).unwrap(), "23:30");
}

#[test]
fn add_minutes_accepts_negative_offsets() {
    assert_eq!(add_minutes("10:00", -30).unwrap(), "09:30");
    assert_eq!(add_minutes("00:15", -30).unwrap(), "23:45");
}

#[test]
fn end_time_is_start_plus_duration() {
    assert_eq!(calculate_end_time("10:00", 90).unwrap(), "11:30");
    assert_eq!(
        calculate_end_time("23:00", 120).unwrap(),
        add_minutes("23:00", 120).unwrap()
    );
}

// ============================================================================
// Timer formatting
// ============================================================================

#[test]
fn format_time_mm_ss() {
    assert_eq!(format_time(0), "00:00");
    assert_eq!(format_time(90), "01:30");
    assert_eq!(format_time(59), "00:59");
}

#[test]
fn format_time_does_not_wrap_minutes() {
    assert_eq!(format_time(3665), "61:05");
}
