//! Error types for loading snapshots and writing export files.
//!
//! Encoding and decoding never fail; unknown values fall back to defaults.
//! Only the file and JSON boundaries can produce a `CsvError`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvError {
    /// Reading a snapshot or writing the export file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A session, location or table snapshot was not valid JSON for its type.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout festival-csv.
pub type Result<T> = std::result::Result<T, CsvError>;
