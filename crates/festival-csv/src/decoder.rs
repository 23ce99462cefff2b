//! Session import -- converts the platform's CSV export back into sessions.
//!
//! Import is best-effort and lossy:
//!
//! - Columns are located by header name ([`ColumnMap::resolve`]), not position
//! - Rows with fewer than three non-empty cells are dropped
//! - Unknown venues fall back to the first available location
//! - Unknown day labels fall back to day 1
//! - Speakers and tracks are not read back; language is always `DE`
//!
//! # Key design decisions
//!
//! - **Quote-aware records**: records are split on newlines outside quoted
//!   cells, so a quoted description containing a line break stays one row.
//! - **Positional cells**: empty cells are kept, so cell `i` always lines up
//!   with header `i`.

use chrono::{DateTime, Utc};

use crate::export::BYTE_ORDER_MARK;
use crate::list::unwrap_list;
use crate::schema::ColumnMap;
use crate::tables::ProgramTables;
use crate::types::{Location, MultiValue, Session};

const DEFAULT_START_TIME: &str = "10:00";
const DEFAULT_END_TIME: &str = "11:00";
const IMPORTED_LANGUAGE: &str = "DE";
const MIN_CELLS: usize = 3;

/// Decode CSV text into sessions, stamping ids with the current time.
pub fn decode_sessions(text: &str, locations: &[Location], tables: &ProgramTables) -> Vec<Session> {
    decode_sessions_at(text, locations, tables, Utc::now())
}

/// Decode CSV text into sessions.
///
/// Session ids are `session-<now in unix millis>-<record index>`, where the
/// record index counts from 1 after the header and includes skipped records.
/// Ids are unique within one call only.
pub fn decode_sessions_at(
    text: &str,
    locations: &[Location],
    tables: &ProgramTables,
    now: DateTime<Utc>,
) -> Vec<Session> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let records = split_records(text);

    let Some((header, rows)) = records.split_first() else {
        return Vec::new();
    };
    let columns = ColumnMap::from_header_line(header);
    let stamp = now.timestamp_millis();

    let mut sessions = Vec::new();
    for (offset, record) in rows.iter().enumerate() {
        let index = offset + 1;
        if record.trim().is_empty() {
            continue;
        }

        let row = tokenize_record(record);
        let filled = row.iter().filter(|c| !c.is_empty()).count();
        if filled < MIN_CELLS {
            tracing::debug!(record = index, cells = filled, "skipping short CSV row");
            continue;
        }

        sessions.push(decode_row(&row, index, stamp, &columns, locations, tables));
    }

    sessions
}

/// Build one session from a tokenized row.
fn decode_row(
    row: &[String],
    index: usize,
    stamp: i64,
    columns: &ColumnMap,
    locations: &[Location],
    tables: &ProgramTables,
) -> Session {
    let title = cell(row, columns.name);
    let title = if title.is_empty() {
        format!("Session {}", index)
    } else {
        title.to_string()
    };

    Session {
        id: format!("session-{}-{}", stamp, index),
        title,
        start_time: time_from_cell(cell(row, columns.start), DEFAULT_START_TIME),
        end_time: time_from_cell(cell(row, columns.end), DEFAULT_END_TIME),
        location_id: resolve_location(cell(row, columns.location), locations, tables),
        day: day_from_label(cell(row, columns.event_day)),
        description: cell(row, columns.description).to_string(),
        format: MultiValue::Text(unwrap_list(cell(row, columns.format))),
        speakers: MultiValue::default(),
        language: IMPORTED_LANGUAGE.to_string(),
        tracks: MultiValue::default(),
    }
}

/// Read a cell by resolved column; missing columns and short rows read as "".
fn cell(row: &[String], column: Option<usize>) -> &str {
    column
        .and_then(|i| row.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

/// Map a platform venue UUID to the id of a matching location.
///
/// Falls back to the first location when the UUID or its venue name is
/// unknown, and to `None` when `locations` is empty.
fn resolve_location(uuid: &str, locations: &[Location], tables: &ProgramTables) -> Option<String> {
    let name = tables.name_for_uuid(uuid).unwrap_or("");
    let location = match locations.iter().find(|l| l.name == name) {
        Some(location) => Some(location),
        None => {
            tracing::debug!(uuid, "unknown venue; falling back to first location");
            locations.first()
        }
    };
    location.map(|l| l.id.clone())
}

/// Map an event-day label to a day number.
///
/// Checks are ordered: `Fr.`/`3.` → 2, then `Sa.`/`4.` → 3, then `So.`/`5.` → 4.
/// Anything else is day 1.
pub fn day_from_label(label: &str) -> u32 {
    if label.contains("Fr.") || label.contains("3.") {
        2
    } else if label.contains("Sa.") || label.contains("4.") {
        3
    } else if label.contains("So.") || label.contains("5.") {
        4
    } else {
        1
    }
}

/// Extract `HH:MM` from a start/end cell.
///
/// Timestamps (`2026-07-02T10:00:00Z`) contribute characters 11..16; other
/// cells are used as-is; empty cells take `default`.
fn time_from_cell(cell: &str, default: &str) -> String {
    if cell.contains('T') {
        cell.chars().skip(11).take(5).collect()
    } else if cell.is_empty() {
        default.to_string()
    } else {
        cell.to_string()
    }
}

/// Split text into records on newlines that are not inside a quoted cell.
/// A trailing `\r` is dropped from each record.
///
/// A quote only opens a quoted cell when it is the first non-whitespace
/// character of the cell; inside a quoted cell `""` is an escaped quote.
/// Quotes in the middle of a bare cell are plain text.
pub fn split_records(text: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut cell_start = true;
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if matches!(chars.peek(), Some((_, '"'))) {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }

        match ch {
            '\n' => {
                records.push(trim_cr(&text[start..i]));
                start = i + 1;
                cell_start = true;
            }
            ',' => cell_start = true,
            '"' if cell_start => {
                in_quotes = true;
                cell_start = false;
            }
            c if c.is_whitespace() => {}
            _ => cell_start = false,
        }
    }
    records.push(trim_cr(&text[start..]));

    records
}

fn trim_cr(record: &str) -> &str {
    record.strip_suffix('\r').unwrap_or(record)
}

/// Split one record into trimmed cells.
///
/// A cell is either a quoted span (`"..."`, with `""` standing for a literal
/// quote) or a run of non-comma characters. Empty cells are kept.
pub fn tokenize_record(record: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut chars = record.chars().peekable();

    loop {
        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }

        let mut cell = String::new();
        if chars.peek() == Some(&'"') {
            chars.next();
            while let Some(ch) = chars.next() {
                if ch == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        cell.push('"');
                    } else {
                        break;
                    }
                } else {
                    cell.push(ch);
                }
            }
            // Anything between the closing quote and the next comma is kept.
            while let Some(&ch) = chars.peek() {
                if ch == ',' {
                    break;
                }
                cell.push(ch);
                chars.next();
            }
            cells.push(cell.trim().to_string());
        } else {
            while let Some(&ch) = chars.peek() {
                if ch == ',' {
                    break;
                }
                cell.push(ch);
                chars.next();
            }
            cells.push(clean_bare_cell(&cell));
        }

        match chars.next() {
            Some(',') => continue,
            _ => break,
        }
    }

    cells
}

/// Trim a bare cell, drop a stray trailing quote and collapse doubled quotes.
fn clean_bare_cell(cell: &str) -> String {
    let trimmed = cell.trim();
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.replace("\"\"", "\"").trim().to_string()
}
