//! Fixed domain tables shared by export and import.
//!
//! The platform identifies venues by UUID and festival days by a German
//! weekday label plus a calendar date. These tables are built once per process
//! and never mutated; [`ProgramTables::builtin`] hands out the 2026 edition,
//! and tests or the CLI can substitute their own tables loaded from JSON.

use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Maps a venue name to the platform's venue UUID. Several names may share a
/// UUID (aliases).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAlias {
    pub name: String,
    pub uuid: String,
}

/// One festival day: its number, the label the platform shows, and its date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalDay {
    pub day: u32,
    pub label: String,
    pub date: NaiveDate,
}

/// Domain tables plus the constant values the platform expects in its
/// otherwise unused columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramTables {
    /// Festival year, written into the `Jahr` column and the export file name.
    pub year: i32,
    /// Single entry of the `Event` column.
    pub event_name: String,
    pub dashboard_path: String,
    pub overview_path: String,
    pub copy_overview_path: String,
    /// Venue name → UUID, in lookup order.
    pub locations: Vec<LocationAlias>,
    pub days: Vec<FestivalDay>,
}

const fn festival_date(month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(2026, month, day) {
        Some(date) => date,
        None => panic!("invalid festival date"),
    }
}

const THURSDAY: NaiveDate = festival_date(7, 2);
const FRIDAY: NaiveDate = festival_date(7, 3);
const SATURDAY: NaiveDate = festival_date(7, 4);
const SUNDAY: NaiveDate = festival_date(7, 5);

const LOCATION_UUIDS: [(&str, &str); 15] = [
    ("Meetup Area", "22e95e92-0079-4228-b8da-3882be979d37"),
    ("Networking Area", "401573fd-ef83-4eb8-886b-d01ffaf78aa6"),
    ("Club Stage", "5b5dc99e-0771-474c-aea1-648499e3572e"),
    ("Orange Room", "5fa91d56-90e4-4c12-b469-2877af9e52ac"),
    ("Festival Kiosk", "638b35d8-ef30-4e96-b89e-655269c2f6f0"),
    ("Workshop Space", "7dec5079-b16d-4127-b0f3-86c936481f03"),
    ("AHA Bühne", "99f9264e-1696-4e7a-ae64-3d2cc7a53aa3"),
    ("Experience Area", "a020b648-99d2-4b83-b5ca-12fc954b2e0c"),
    ("Yard Stage", "b30506bf-f43c-4e68-95e9-33943ccb80fb"),
    ("Dome Stage", "b38fad60-fdde-44b0-969d-31de75d8b983"),
    ("Forum der Zukunft", "c82ad0ae-c18e-4fd4-8f0c-a2a3788f120e"),
    ("Workshop Area", "c885c88c-dbb6-4dbd-88c6-1b30c8827f53"),
    ("Future Box", "d686f8ca-be3d-4feb-a60e-03544181a262"),
    ("Theater Stage", "de698305-b2f2-447e-a6f0-0090c683c684"),
    // Alias of Theater Stage.
    ("Hauptbühne", "de698305-b2f2-447e-a6f0-0090c683c684"),
];

static BUILTIN: LazyLock<ProgramTables> = LazyLock::new(ProgramTables::festival_2026);

impl ProgramTables {
    /// Shared 2026 tables, built on first use.
    pub fn builtin() -> &'static ProgramTables {
        &BUILTIN
    }

    /// Tables for the 2026 festival (2-5 July).
    pub fn festival_2026() -> Self {
        let days = [
            (1, "Do. 2. Juli", THURSDAY),
            (2, "Fr. 3. Juli", FRIDAY),
            (3, "Sa. 4. Juli", SATURDAY),
            (4, "So. 5. Juli", SUNDAY),
        ];

        Self {
            year: 2026,
            event_name: "Festival der Zukunft 2026".to_string(),
            dashboard_path: "/festival-der-zukunft/programm-dashboard".to_string(),
            overview_path: "/festival-der-zukunft/programm/2026".to_string(),
            copy_overview_path: "/copy-of-festival-der-zukunft/programm/2026".to_string(),
            locations: LOCATION_UUIDS
                .iter()
                .map(|(name, uuid)| LocationAlias {
                    name: name.to_string(),
                    uuid: uuid.to_string(),
                })
                .collect(),
            days: days
                .into_iter()
                .map(|(day, label, date)| FestivalDay {
                    day,
                    label: label.to_string(),
                    date,
                })
                .collect(),
        }
    }

    /// Parse tables from a JSON document (same shape as their serde form).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Platform UUID for a venue name. The first matching entry wins.
    pub fn uuid_for_name(&self, name: &str) -> Option<&str> {
        self.locations
            .iter()
            .find(|alias| alias.name == name)
            .map(|alias| alias.uuid.as_str())
    }

    /// Venue name for a platform UUID.
    ///
    /// When several names share a UUID the *last* one wins, so the Theater
    /// Stage UUID resolves to its `Hauptbühne` alias.
    pub fn name_for_uuid(&self, uuid: &str) -> Option<&str> {
        self.locations
            .iter()
            .rev()
            .find(|alias| alias.uuid == uuid)
            .map(|alias| alias.name.as_str())
    }

    /// The festival day with this number, if the tables define it.
    pub fn festival_day(&self, day: u32) -> Option<&FestivalDay> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Like [`festival_day`](Self::festival_day), falling back to day 1 for
    /// unknown day numbers.
    pub fn festival_day_or_first(&self, day: u32) -> Option<&FestivalDay> {
        self.festival_day(day).or_else(|| self.festival_day(1))
    }
}
