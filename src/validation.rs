//! Form payloads and the checks a caller must pass before reaching the
//! repositories. The repositories themselves accept anything.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::model::{Department, Employee, LeaveRequest, LeaveStatus};
use crate::store::parse_id;

pub const FILL_ALL_FIELDS: &str = "Please fill all fields";
pub const DEPARTMENT_NAME_REQUIRED: &str = "Please enter department name";
pub const START_AFTER_END: &str = "Start date must be before end date";
pub const INVALID_EMPLOYEE: &str = "Please select a valid employee";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value.and_then(required)
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct EmployeeForm {
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@x.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineer")]
    pub position: String,
    /// Blank or missing means unassigned.
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f7", nullable = true)]
    pub department_id: Option<String>,
    #[schema(example = "2024-01-10", value_type = Option<String>, format = "date")]
    pub hire_date: Option<NaiveDate>,
}

impl EmployeeForm {
    /// Trimmed record carrying `id`; empty `id` means create.
    pub fn into_employee(self, id: String) -> Result<Employee, ValidationError> {
        let (Some(name), Some(email), Some(position), Some(hire_date)) = (
            required(&self.name),
            required(&self.email),
            required(&self.position),
            self.hire_date,
        ) else {
            return Err(ValidationError(FILL_ALL_FIELDS));
        };

        Ok(Employee {
            id,
            name: Some(name),
            email: Some(email),
            position: Some(position),
            department_id: optional(self.department_id.as_deref()),
            hire_date: Some(hire_date),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct DepartmentForm {
    #[schema(example = "Engineering")]
    pub name: String,
    #[schema(example = "R&D")]
    pub description: String,
}

impl DepartmentForm {
    pub fn into_department(self, id: String) -> Result<Department, ValidationError> {
        let name = required(&self.name).ok_or(ValidationError(DEPARTMENT_NAME_REQUIRED))?;
        Ok(Department {
            id,
            name: Some(name),
            description: Some(self.description.trim().to_string()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LeaveForm {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub employee_id: String,
    #[schema(example = "2024-03-01", value_type = Option<String>, format = "date")]
    pub start_date: Option<NaiveDate>,
    #[schema(example = "2024-03-05", value_type = Option<String>, format = "date")]
    pub end_date: Option<NaiveDate>,
    #[schema(example = "vacation")]
    pub reason: String,
    /// Ignored on creation, which always starts PENDING. On edit a missing
    /// status is written as PENDING.
    #[schema(example = "PENDING", nullable = true)]
    pub status: Option<LeaveStatus>,
}

impl LeaveForm {
    pub fn into_leave_request(self, id: String) -> Result<LeaveRequest, ValidationError> {
        let (Some(employee_id), Some(start), Some(end), Some(reason)) = (
            required(&self.employee_id),
            self.start_date,
            self.end_date,
            required(&self.reason),
        ) else {
            return Err(ValidationError(FILL_ALL_FIELDS));
        };

        if parse_id(&employee_id).is_err() {
            return Err(ValidationError(INVALID_EMPLOYEE));
        }

        if start > end {
            return Err(ValidationError(START_AFTER_END));
        }

        let status = if id.is_empty() {
            Some(LeaveStatus::Pending)
        } else {
            self.status
        };

        Ok(LeaveRequest {
            id,
            employee_id: Some(employee_id),
            employee_name: None,
            start_date: Some(start),
            end_date: Some(end),
            reason: Some(reason),
            status,
        })
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StatusForm {
    #[schema(example = "APPROVED")]
    pub status: LeaveStatus,
}
