use crate::dashboard::DashboardStats;
use crate::lookup::{EmployeeRow, LeaveRow};
use crate::model::{Department, Employee, LeaveRequest, LeaveStatus};
use crate::validation::{DepartmentForm, EmployeeForm, LeaveForm, StatusForm};
use utoipa::OpenApi;
use utoipa::openapi::server::Server;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Records API",
        version = "0.1.0",
        description = r#"
## Employee records manager

Employees, departments and leave requests stored in MongoDB.

### Key Features
- **Employees**: list (with department name), create, replace, delete
- **Departments**: list, create, replace, delete
- **Leave**: submit, replace, delete, and set status (PENDING / APPROVED / REJECTED)
- **Dashboard**: totals per entity and per leave status

### Behaviour worth knowing
- Saving with an existing id replaces the whole record.
- Deleting never cascades; dangling references render as `N/A`.
- Leave status may move from any value to any value.
"#,
    ),
    paths(
        crate::api::dashboard::dashboard,

        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::department::list_departments,
        crate::api::department::create_department,
        crate::api::department::get_department,
        crate::api::department::update_department,
        crate::api::department::delete_department,

        crate::api::leave_request::leave_list,
        crate::api::leave_request::get_leave,
        crate::api::leave_request::create_leave,
        crate::api::leave_request::update_leave,
        crate::api::leave_request::delete_leave,
        crate::api::leave_request::set_status,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave
    ),
    components(
        schemas(
            Employee,
            EmployeeRow,
            EmployeeForm,
            Department,
            DepartmentForm,
            LeaveRequest,
            LeaveStatus,
            LeaveRow,
            LeaveForm,
            StatusForm,
            DashboardStats
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Department", description = "Department management APIs"),
        (name = "Leave", description = "Leave management APIs"),
        (name = "Dashboard", description = "Summary counts"),
    )
)]
pub struct ApiDoc;

/// The document served by Swagger UI. Paths are relative to the scope the
/// routes are mounted under, so `prefix` becomes the single server url.
pub fn openapi(prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(prefix)]);
    doc
}
