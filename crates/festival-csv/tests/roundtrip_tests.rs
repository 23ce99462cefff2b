//! Export → import behaviour, including the fields import deliberately loses.

use chrono::{TimeZone, Utc};
use festival_csv::{
    decode_sessions_at, encode_sessions, Location, MultiValue, ProgramTables, Session,
};

fn locations() -> Vec<Location> {
    vec![
        Location::new("loc-kiosk", "Festival Kiosk"),
        Location::new("loc-yard", "Yard Stage"),
        Location::new("loc-garden", "Secret Garden"),
    ]
}

fn roundtrip(sessions: &[Session]) -> Vec<Session> {
    let tables = ProgramTables::builtin();
    let csv = encode_sessions(sessions, &locations(), tables);
    let now = Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap();
    decode_sessions_at(&csv, &locations(), tables, now)
}

fn session() -> Session {
    Session {
        id: "original".to_string(),
        title: "Robotik für Kinder".to_string(),
        start_time: "16:00".to_string(),
        end_time: "17:15".to_string(),
        location_id: Some("loc-yard".to_string()),
        day: 4,
        description: "Hands-on".to_string(),
        format: MultiValue::from("Workshop"),
        speakers: MultiValue::from(&["Lin"][..]),
        language: "EN".to_string(),
        tracks: MultiValue::from(&["a", "b"][..]),
    }
}

#[test]
fn preserved_fields_survive_roundtrip() {
    let back = roundtrip(&[session()]);
    assert_eq!(back.len(), 1);
    let s = &back[0];
    assert_eq!(s.title, "Robotik für Kinder");
    assert_eq!(s.start_time, "16:00");
    assert_eq!(s.end_time, "17:15");
    assert_eq!(s.location_id.as_deref(), Some("loc-yard"));
    assert_eq!(s.day, 4);
    assert_eq!(s.description, "Hands-on");
    assert_eq!(s.format, MultiValue::from("Workshop"));
}

#[test]
fn roundtrip_is_lossy_for_tracks_speakers_and_language() {
    let back = roundtrip(&[session()]);
    let s = &back[0];
    assert_eq!(s.tracks, MultiValue::from(""));
    assert_eq!(s.speakers, MultiValue::from(""));
    assert_eq!(s.language, "DE");
    assert_ne!(s.id, "original");
    assert_ne!(s, &session());
}

#[test]
fn every_festival_day_roundtrips() {
    let sessions: Vec<Session> = (1..=4).map(|day| Session { day, ..session() }).collect();
    let days: Vec<u32> = roundtrip(&sessions).iter().map(|s| s.day).collect();
    assert_eq!(days, vec![1, 2, 3, 4]);
}

#[test]
fn invalid_day_comes_back_as_day_one() {
    let back = roundtrip(&[Session { day: 0, ..session() }]);
    assert_eq!(back[0].day, 1);
}

#[test]
fn embedded_comma_does_not_split_columns() {
    let back = roundtrip(&[Session {
        description: "Hello, world".to_string(),
        ..session()
    }]);
    assert_eq!(back[0].description, "Hello, world");
    assert_eq!(back[0].location_id.as_deref(), Some("loc-yard"));
}

#[test]
fn quotes_and_newlines_in_description_survive() {
    let description = "Bring \"good\" shoes,\nand water";
    let back = roundtrip(&[Session {
        description: description.to_string(),
        ..session()
    }]);
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].description, description);
}

#[test]
fn unmapped_location_comes_back_as_first_location() {
    let back = roundtrip(&[Session {
        location_id: Some("loc-garden".to_string()),
        ..session()
    }]);
    assert_eq!(back[0].location_id.as_deref(), Some("loc-kiosk"));
}

#[test]
fn multi_item_format_comes_back_unsplit() {
    let back = roundtrip(&[Session {
        format: MultiValue::from(&["Talk", "Panel"][..]),
        ..session()
    }]);
    assert_eq!(back[0].format, MultiValue::from(r#"Talk","Panel"#));
}

#[test]
fn empty_title_comes_back_numbered() {
    let back = roundtrip(&[session(), Session {
        title: String::new(),
        ..session()
    }]);
    assert_eq!(back[1].title, "Session 2");
}

#[test]
fn export_with_byte_order_mark_imports_cleanly() {
    let tables = ProgramTables::builtin();
    let file = festival_csv::render_export(&[session()], &locations(), tables);
    let back = festival_csv::decode_sessions(&file, &locations(), tables);
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].title, "Robotik für Kinder");
}
