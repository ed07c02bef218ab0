//! How absent values are rendered for list rows.
//!
//! | field kind        | absent or unresolved |
//! |-------------------|----------------------|
//! | entity reference  | `N/A`                |
//! | calendar date     | empty                |
//! | free text         | empty                |
//! | leave status      | empty                |

use chrono::NaiveDate;

use crate::model::LeaveStatus;

pub const NOT_AVAILABLE: &str = "N/A";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Name of a referenced entity, `N/A` when the reference is absent or
/// points at nothing.
pub fn reference(name: Option<&str>) -> String {
    name.unwrap_or(NOT_AVAILABLE).to_string()
}

pub fn date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

pub fn status(value: Option<LeaveStatus>) -> String {
    value.map(|s| s.to_string()).unwrap_or_default()
}
