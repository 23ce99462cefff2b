//! # festival-csv
//!
//! CSV export and import of festival sessions for the external
//! program-management platform.
//!
//! Export writes the platform's fixed 33-column layout: venue names become
//! platform UUIDs, day numbers become German weekday labels and dated
//! timestamps, and list fields use the platform's `["a","b"]` cell format.
//! Import reads such a file back into sessions on a best-effort basis.
//!
//! ## Quick start
//!
//! ```rust
//! use festival_csv::{decode_sessions, encode_sessions, Location, ProgramTables, Session};
//!
//! let tables = ProgramTables::builtin();
//! let locations = vec![Location::new("loc-1", "Club Stage")];
//! let session = Session {
//!     title: "Keynote".to_string(),
//!     start_time: "10:00".to_string(),
//!     end_time: "11:00".to_string(),
//!     location_id: Some("loc-1".to_string()),
//!     day: 1,
//!     ..Session::default()
//! };
//!
//! let csv = encode_sessions(&[session], &locations, tables);
//! let back = decode_sessions(&csv, &locations, tables);
//! assert_eq!(back[0].title, "Keynote");
//! assert_eq!(back[0].location_id.as_deref(), Some("loc-1"));
//! ```
//!
//! ## Modules
//!
//! - [`encoder`]: sessions → CSV text
//! - [`decoder`]: CSV text → sessions
//! - [`schema`]: header layout and the import column resolver
//! - [`list`]: the `["a","b"]` cell micro-format
//! - [`tables`]: venue UUIDs, day labels and dates
//! - [`export`]: byte order mark, dated file names, JSON snapshots
//! - [`types`]: `Session`, `Location`, `MultiValue`
//! - [`error`]: Error types for the file and JSON boundaries

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod export;
pub mod list;
pub mod schema;
pub mod tables;
pub mod types;

pub use decoder::{decode_sessions, decode_sessions_at};
pub use encoder::encode_sessions;
pub use error::CsvError;
pub use export::{export_file_name, render_export, write_export};
pub use schema::{ColumnMap, HEADERS};
pub use tables::ProgramTables;
pub use types::{Location, MultiValue, Session};
