//! Column layout of the platform's program export.
//!
//! Export always writes [`HEADERS`] verbatim. Import does not assume that
//! layout: it locates the handful of columns it reads by matching header
//! names, see [`ColumnMap::resolve`].

/// Header row of the platform's program table, in column order.
pub const HEADERS: [&str; 33] = [
    "Name",
    "Tracks",
    "Public",
    "Jahr",
    "Needs Update",
    "Speaker Area",
    "Format",
    "Event Days",
    "Speakers",
    "Start Time",
    "End Time",
    "Description",
    "Location",
    "link-programm-2024-name",
    "link-programm-2024-1-all",
    "ID",
    "Created Date",
    "Updated Date",
    "Owner",
    "link-copy-of-programm-2024-all",
    "link-mein-programm-2024-all",
    "Partner",
    "Link",
    "Link-Text",
    "link-copy-of-programm-2024-familientage-all",
    "Programm - Dashboard",
    "Event",
    "Programm - Übersicht",
    "Programm - Session",
    "Language",
    "Dispo",
    "Kopie von Programm - Übersicht",
    "Impressions",
];

/// Positions of the columns read on import. `None` means no header matched;
/// the field is then read as an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub location: Option<usize>,
    pub event_day: Option<usize>,
    pub description: Option<usize>,
    pub format: Option<usize>,
}

impl ColumnMap {
    /// Resolve column positions from header names.
    ///
    /// Each field takes the first header whose lowercase form contains its
    /// key (`name`, `start`, `end`, `location`, `event day`, `description`,
    /// `format`). Fields are resolved independently, so two fields may land
    /// on the same column if the headers are ambiguous.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Self {
        let find = |needle: &str| {
            headers
                .iter()
                .position(|h| h.as_ref().to_lowercase().contains(needle))
        };

        Self {
            name: find("name"),
            start: find("start"),
            end: find("end"),
            location: find("location"),
            event_day: find("event day"),
            description: find("description"),
            format: find("format"),
        }
    }

    /// Resolve from a raw header line. Names are split on every comma and
    /// stripped of quotes and surrounding whitespace.
    pub fn from_header_line(line: &str) -> Self {
        let headers: Vec<String> = line
            .split(',')
            .map(|h| h.replace('"', "").trim().to_string())
            .collect();
        Self::resolve(&headers[..])
    }
}
