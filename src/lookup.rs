//! Read-time joins rendered as list rows.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::display;
use crate::repository::{DepartmentRepository, EmployeeRepository, LeaveRequestRepository};
use crate::store::StoreResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmployeeRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department_id: Option<String>,
    /// Department name, `N/A` when unassigned or orphaned.
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = "2024-01-10")]
    pub hire_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LeaveRow {
    pub id: String,
    pub employee_id: Option<String>,
    #[schema(example = "Ana")]
    pub employee: String,
    #[schema(example = "2024-03-01")]
    pub start_date: String,
    #[schema(example = "2024-03-05")]
    pub end_date: String,
    pub reason: String,
    #[schema(example = "PENDING")]
    pub status: String,
}

/// All employees joined with their department name.
///
/// Departments are read once and joined in memory, so a dangling or
/// malformed `department_id` just renders as `N/A`.
pub async fn employee_rows(
    employees: &EmployeeRepository,
    departments: &DepartmentRepository,
) -> StoreResult<Vec<EmployeeRow>> {
    let names: HashMap<String, Option<String>> = departments
        .find_all()
        .await?
        .into_iter()
        .map(|d| (d.id, d.name))
        .collect();

    let rows = employees
        .find_all()
        .await?
        .into_iter()
        .map(|e| {
            let department = e
                .department_id
                .as_ref()
                .and_then(|id| names.get(id))
                .and_then(|name| name.as_deref());
            EmployeeRow {
                department: display::reference(department),
                hire_date: display::date(e.hire_date),
                name: display::text(e.name.as_deref()),
                email: display::text(e.email.as_deref()),
                position: display::text(e.position.as_deref()),
                department_id: e.department_id,
                id: e.id,
            }
        })
        .collect();

    Ok(rows)
}

/// All leave requests with the employee name already resolved.
pub async fn leave_rows(leaves: &LeaveRequestRepository) -> StoreResult<Vec<LeaveRow>> {
    let rows = leaves
        .find_all()
        .await?
        .into_iter()
        .map(|l| LeaveRow {
            employee: display::reference(l.employee_name.as_deref()),
            start_date: display::date(l.start_date),
            end_date: display::date(l.end_date),
            reason: display::text(l.reason.as_deref()),
            status: display::status(l.status),
            employee_id: l.employee_id,
            id: l.id,
        })
        .collect();

    Ok(rows)
}
