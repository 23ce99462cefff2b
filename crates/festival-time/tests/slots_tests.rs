use festival_time::{generate_time_slots, TimeError, TimeSlots, MAX_TIME_SLOTS};

#[test]
fn hourly_slots_include_both_endpoints() {
    let slots = generate_time_slots(60, "08:00", "20:00").unwrap();
    assert_eq!(slots.len(), 13);
    assert_eq!(slots[0], "08:00");
    assert_eq!(slots[1], "09:00");
    assert_eq!(slots[12], "20:00");
}

#[test]
fn default_grid_is_half_hourly_from_nine_to_eleven() {
    let slots = TimeSlots::default().generate().unwrap();
    // 14 hours * 2 + 1
    assert_eq!(slots.len(), 29);
    assert_eq!(slots.first().unwrap(), "09:00");
    assert_eq!(slots[1], "09:30");
    assert_eq!(slots.last().unwrap(), "23:00");
}

#[test]
fn uneven_interval_stops_before_end() {
    let slots = generate_time_slots(45, "10:00", "11:00").unwrap();
    assert_eq!(slots, vec!["10:00", "10:45"]);
}

#[test]
fn start_equal_to_end_yields_one_slot() {
    let slots = generate_time_slots(30, "12:00", "12:00").unwrap();
    assert_eq!(slots, vec!["12:00"]);
}

#[test]
fn start_after_end_yields_no_slots() {
    let slots = generate_time_slots(30, "20:00", "08:00").unwrap();
    assert!(slots.is_empty());
}

#[test]
fn non_positive_interval_is_rejected() {
    assert_eq!(
        generate_time_slots(0, "09:00", "10:00"),
        Err(TimeError::InvalidInterval(0))
    );
    assert_eq!(
        generate_time_slots(-15, "09:00", "10:00"),
        Err(TimeError::InvalidInterval(-15))
    );
}

#[test]
fn malformed_bound_is_rejected() {
    assert!(matches!(
        generate_time_slots(30, "nine", "10:00"),
        Err(TimeError::InvalidTime(_))
    ));
}

#[test]
fn slot_parameters_deserialize_with_defaults() {
    let params: TimeSlots = serde_json::from_str(r#"{"intervalMinutes":15}"#).unwrap();
    assert_eq!(params.interval_minutes, 15);
    assert_eq!(params.start, "09:00");
    assert_eq!(params.end, "23:00");
}

#[test]
fn oversized_range_is_rejected() {
    assert_eq!(
        generate_time_slots(1, "00:00", "99999999:00"),
        Err(TimeError::TooManySlots(5_999_999_941))
    );
}

#[test]
fn extreme_bounds_do_not_overflow() {
    let start = "-153722867280912930:00";
    let end = "153722867280912930:00";
    assert!(matches!(
        generate_time_slots(1, start, end),
        Err(TimeError::TooManySlots(_))
    ));
}

#[test]
fn range_at_the_limit_is_generated() {
    let end = (MAX_TIME_SLOTS - 1).to_string();
    let slots = generate_time_slots(1, "0:0", &format!("0:{end}")).unwrap();
    assert_eq!(slots.len(), MAX_TIME_SLOTS);
    assert_eq!(slots.last().unwrap(), "166:39");
}
