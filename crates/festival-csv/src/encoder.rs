//! Session export -- converts planner sessions into the platform's CSV layout.
//!
//! Each session becomes one row of [`HEADERS`](crate::schema::HEADERS) cells:
//!
//! - **Location**: the session's venue name mapped to the platform UUID
//! - **Event Days / Start / End**: the day number mapped to its label and date
//! - **List fields** (tracks, format, speakers, language): quoted-list cells
//! - **Platform constants**: fixed paths, year and event name
//!
//! Rows are joined with `\n` after the header line. Cells are quoted only when
//! they contain a comma, a quote or a newline.
//!
//! # Example
//! ```
//! use festival_csv::{encode_sessions, Location, ProgramTables, Session};
//!
//! let stage = Location::new("loc-1", "Dome Stage");
//! let session = Session {
//!     title: "Opening".to_string(),
//!     start_time: "10:00".to_string(),
//!     end_time: "11:00".to_string(),
//!     location_id: Some("loc-1".to_string()),
//!     day: 2,
//!     ..Session::default()
//! };
//! let csv = encode_sessions(&[session], &[stage], ProgramTables::builtin());
//! let row = csv.lines().nth(1).unwrap();
//! assert!(row.starts_with("Opening,,FALSE,2026,"));
//! assert!(row.contains("2026-07-03T10:00:00Z"));
//! ```

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::list::{encode_item, encode_list};
use crate::schema::HEADERS;
use crate::tables::ProgramTables;
use crate::types::{Location, Session};

const DEFAULT_LANGUAGE: &str = "DE";

/// Encode sessions into CSV text: the header line plus one row per session.
///
/// The text carries no byte order mark and no trailing newline; see
/// [`render_export`](crate::export::render_export) for the file form.
pub fn encode_sessions(
    sessions: &[Session],
    locations: &[Location],
    tables: &ProgramTables,
) -> String {
    let mut out = HEADERS.join(",");
    for session in sessions {
        out.push('\n');
        let row = encode_row(session, locations, tables);
        push_row(&row, &mut out);
    }
    out
}

/// Build the unescaped cells of one session row, in [`HEADERS`] order.
pub fn encode_row(
    session: &Session,
    locations: &[Location],
    tables: &ProgramTables,
) -> Vec<String> {
    let location = resolve_location_uuid(session, locations, tables)
        .unwrap_or_default()
        .to_string();
    let festival_day = tables.festival_day_or_first(session.day);
    let event_day = festival_day.map(|d| d.label.as_str()).unwrap_or_default();
    let date = festival_day.map(|d| d.date);

    let language = if session.language.is_empty() {
        DEFAULT_LANGUAGE
    } else {
        session.language.as_str()
    };

    vec![
        session.title.clone(),                       // Name
        encode_list(&session.tracks),                // Tracks
        "FALSE".to_string(),                         // Public
        tables.year.to_string(),                     // Jahr
        String::new(),                               // Needs Update
        String::new(),                               // Speaker Area
        encode_list(&session.format),                // Format
        encode_item(event_day),                      // Event Days
        encode_list(&session.speakers),              // Speakers
        timestamp(date, &session.start_time),        // Start Time
        timestamp(date, &session.end_time),          // End Time
        session.description.clone(),                 // Description
        location,                                    // Location
        String::new(),                               // link-programm-2024-name
        String::new(),                               // link-programm-2024-1-all
        String::new(),                               // ID (assigned by the platform)
        String::new(),                               // Created Date
        String::new(),                               // Updated Date
        String::new(),                               // Owner
        String::new(),                               // link-copy-of-programm-2024-all
        String::new(),                               // link-mein-programm-2024-all
        String::new(),                               // Partner
        String::new(),                               // Link
        String::new(),                               // Link-Text
        String::new(),                               // link-copy-of-programm-2024-familientage-all
        tables.dashboard_path.clone(),               // Programm - Dashboard
        encode_item(&tables.event_name),             // Event
        tables.overview_path.clone(),                // Programm - Übersicht
        String::new(),                               // Programm - Session
        encode_item(language),                       // Language
        String::new(),                               // Dispo
        tables.copy_overview_path.clone(),           // Kopie von Programm - Übersicht
        String::new(),                               // Impressions
    ]
}

/// Quote a cell if it contains a comma, a double quote or a newline.
/// Inner quotes are doubled.
pub fn escape_cell(cell: &str) -> Cow<'_, str> {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

fn push_row(cells: &[String], out: &mut String) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_cell(cell));
    }
}

/// Look up the session's venue, then the venue's platform UUID.
fn resolve_location_uuid<'t>(
    session: &Session,
    locations: &[Location],
    tables: &'t ProgramTables,
) -> Option<&'t str> {
    let location = session
        .location_id
        .as_deref()
        .and_then(|id| locations.iter().find(|l| l.id == id));

    let uuid = location.and_then(|l| tables.uuid_for_name(&l.name));
    if uuid.is_none() {
        tracing::debug!(
            session = %session.id,
            location = ?location.map(|l| l.name.as_str()),
            "no platform UUID for session location; leaving cell empty"
        );
    }
    uuid
}

/// Combine a festival date and an `HH:MM` time into `YYYY-MM-DDTHH:MM:00Z`.
fn timestamp(date: Option<NaiveDate>, time: &str) -> String {
    let date = date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    format!("{}T{}:00Z", date, time)
}
