//! In-memory records exchanged with the planner's session and location stores.
//!
//! Field names serialize in camelCase to match the stores' JSON snapshots.
//! Every field is optional on input; missing fields take their default.

use serde::{Deserialize, Serialize};

/// A field the planner stores either as a single string or as a list of
/// strings (formats, speakers, tracks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MultiValue {
    Text(String),
    List(Vec<String>),
}

impl MultiValue {
    /// True for an empty string or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            MultiValue::Text(s) => s.is_empty(),
            MultiValue::List(items) => items.is_empty(),
        }
    }
}

impl Default for MultiValue {
    fn default() -> Self {
        MultiValue::Text(String::new())
    }
}

impl From<&str> for MultiValue {
    fn from(value: &str) -> Self {
        MultiValue::Text(value.to_string())
    }
}

impl From<String> for MultiValue {
    fn from(value: String) -> Self {
        MultiValue::Text(value)
    }
}

impl From<Vec<String>> for MultiValue {
    fn from(items: Vec<String>) -> Self {
        MultiValue::List(items)
    }
}

impl From<&[&str]> for MultiValue {
    fn from(items: &[&str]) -> Self {
        MultiValue::List(items.iter().map(|s| s.to_string()).collect())
    }
}

/// A scheduled festival program item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub id: String,
    pub title: String,
    /// Wall-clock start, `"HH:MM"`.
    pub start_time: String,
    /// Wall-clock end, `"HH:MM"`.
    pub end_time: String,
    /// Id of a [`Location`] in the location store. `None` after importing
    /// into an empty location list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Festival day, `1..=4`. Any other value (including the `0` default)
    /// is exported as day 1.
    pub day: u32,
    pub description: String,
    pub format: MultiValue,
    pub speakers: MultiValue,
    /// Language code; exported as `DE` when empty.
    pub language: String,
    pub tracks: MultiValue,
}

/// A named venue or room on the festival grounds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: String,
    pub name: String,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
