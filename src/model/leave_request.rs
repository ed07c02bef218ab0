use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Leave request status.
///
/// Transitions are unconstrained: any status may be set from any other,
/// including reverting an approved or rejected request to pending.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    #[serde(default)]
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f8")]
    pub id: String,

    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub employee_id: Option<String>,

    /// Copied from the referenced employee on every read and save. Never
    /// stored.
    #[serde(default)]
    #[schema(example = "Ana", nullable = true)]
    pub employee_name: Option<String>,

    #[schema(example = "2024-03-01", value_type = Option<String>, format = "date")]
    pub start_date: Option<NaiveDate>,

    #[schema(example = "2024-03-05", value_type = Option<String>, format = "date")]
    pub end_date: Option<NaiveDate>,

    #[schema(example = "vacation")]
    pub reason: Option<String>,

    /// Written as PENDING when absent.
    #[schema(example = "PENDING")]
    pub status: Option<LeaveStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_names_are_upper_case() {
        assert_eq!(LeaveStatus::Approved.to_string(), "APPROVED");
        assert_eq!(LeaveStatus::Pending.as_ref(), "PENDING");
        assert_eq!(LeaveStatus::from_str("REJECTED").unwrap(), LeaveStatus::Rejected);
        assert!(LeaveStatus::from_str("approved").is_err());
    }

    #[test]
    fn status_json_matches_stored_form() {
        let json = serde_json::to_string(&LeaveStatus::Rejected).unwrap();
        assert_eq!(json, "\"REJECTED\"");
        let back: LeaveStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(back, LeaveStatus::Pending);
    }

    #[test]
    fn default_status_is_pending() {
        assert_eq!(LeaveStatus::default(), LeaveStatus::Pending);
    }
}
