//! Export files and JSON snapshots -- the file-system edge of the codec.
//!
//! The platform expects a UTF-8 file with a leading byte order mark, named
//! after the festival year and the day of export.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::encoder::encode_sessions;
use crate::error::Result;
use crate::tables::ProgramTables;
use crate::types::{Location, Session};

/// Prefixed to export files so spreadsheet tools detect UTF-8.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// `festival-programm-<year>-<YYYY-MM-DD>.csv` for an export made on `date`.
pub fn export_file_name(tables: &ProgramTables, date: NaiveDate) -> String {
    format!(
        "festival-programm-{}-{}.csv",
        tables.year,
        date.format("%Y-%m-%d")
    )
}

/// Encoded sessions with a leading byte order mark, ready to be written out.
pub fn render_export(
    sessions: &[Session],
    locations: &[Location],
    tables: &ProgramTables,
) -> String {
    let csv = encode_sessions(sessions, locations, tables);
    let mut out = String::with_capacity(csv.len() + BYTE_ORDER_MARK.len_utf8());
    out.push(BYTE_ORDER_MARK);
    out.push_str(&csv);
    out
}

/// Write the export into `dir` under its dated file name and return the path.
pub fn write_export(
    dir: &Path,
    sessions: &[Session],
    locations: &[Location],
    tables: &ProgramTables,
    date: NaiveDate,
) -> Result<PathBuf> {
    let path = dir.join(export_file_name(tables, date));
    fs::write(&path, render_export(sessions, locations, tables))?;
    tracing::info!(path = %path.display(), sessions = sessions.len(), "wrote program export");
    Ok(path)
}

/// Parse a session store snapshot (a JSON array of sessions).
pub fn sessions_from_json(json: &str) -> Result<Vec<Session>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a location store snapshot (a JSON array of locations).
pub fn locations_from_json(json: &str) -> Result<Vec<Location>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a session snapshot file.
pub fn read_sessions_json(path: &Path) -> Result<Vec<Session>> {
    sessions_from_json(&fs::read_to_string(path)?)
}

/// Read and parse a location snapshot file.
pub fn read_locations_json(path: &Path) -> Result<Vec<Location>> {
    locations_from_json(&fs::read_to_string(path)?)
}
