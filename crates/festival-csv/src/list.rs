//! The platform's quoted-list cell format: `["a","b"]`.
//!
//! This is not JSON. Items are written verbatim between `","` separators with
//! no escaping, so an item containing `","` cannot be recovered. On import the
//! platform's cells are only unwrapped ([`unwrap_list`]), never split.

use crate::types::MultiValue;

/// Encode a single string as a one-item list. Empty input stays empty.
pub fn encode_item(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("[\"{}\"]", value)
}

/// Encode a text-or-list field. Empty strings and empty lists encode to an
/// empty cell.
pub fn encode_list(value: &MultiValue) -> String {
    match value {
        MultiValue::Text(s) => encode_item(s),
        MultiValue::List(items) if items.is_empty() => String::new(),
        MultiValue::List(items) => format!("[\"{}\"]", items.join("\",\"")),
    }
}

/// Strip the list brackets from a cell, returning the raw inner text.
///
/// Finds the first `["` and the last `"]` after it; if at least one character
/// lies between them, that text is returned as-is (`["a","b"]` gives
/// `a","b`). Cells without the pattern pass through unchanged.
pub fn unwrap_list(cell: &str) -> String {
    if let Some(open) = cell.find("[\"") {
        let inner_start = open + 2;
        if let Some(close) = cell[inner_start..].rfind("\"]") {
            if close > 0 {
                return cell[inner_start..inner_start + close].to_string();
            }
        }
    }
    cell.to_string()
}

/// Split a whole-cell list back into its items.
///
/// Returns `Some(vec![])` for an empty cell and `None` when the cell is not a
/// bracketed quoted list.
pub fn decode_list(cell: &str) -> Option<Vec<String>> {
    if cell.is_empty() {
        return Some(Vec::new());
    }
    let inner = cell.strip_prefix("[\"")?.strip_suffix("\"]")?;
    Some(inner.split("\",\"").map(str::to_string).collect())
}
