use actix_web::{HttpResponse, web};
use tracing::info;

use crate::api::ApiError;
use crate::context::AppContext;
use crate::lookup::{self, EmployeeRow};
use crate::model::employee::Employee;
use crate::validation::EmployeeForm;

/// List employees with their department name
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees, department resolved or N/A", body = [EmployeeRow])
    ),
    tag = "Employee"
)]
pub async fn list_employees(ctx: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let rows = lookup::employee_rows(&ctx.employees, &ctx.departments).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeeForm,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing field", body = Object, example = json!({
            "message": "Please fill all fields"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    ctx: web::Data<AppContext>,
    payload: web::Json<EmployeeForm>,
) -> Result<HttpResponse, ApiError> {
    let mut employee = payload.into_inner().into_employee(String::new())?;
    ctx.employees.save(&mut employee).await?;

    info!(employee_id = %employee.id, "Employee created");
    Ok(HttpResponse::Created().json(employee))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee ID (24 hex chars)")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    match ctx.employees.find_by_id(&employee_id).await? {
        Some(emp) => Ok(HttpResponse::Ok().json(emp)),
        None => Err(ApiError::NotFound("Employee")),
    }
}

/// Replace Employee
///
/// Full overwrite: fields left out of the form are cleared.
#[utoipa::path(
    put,
    path = "/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee ID (24 hex chars)")
    ),
    request_body = EmployeeForm,
    responses(
        (status = 200, description = "Employee saved", body = Employee),
        (status = 400, description = "Missing field or malformed identifier"),
        (status = 404, description = "No employee with this id; nothing was written", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
    payload: web::Json<EmployeeForm>,
) -> Result<HttpResponse, ApiError> {
    let mut employee = payload.into_inner().into_employee(path.into_inner())?;
    if !ctx.employees.save(&mut employee).await? {
        return Err(ApiError::NotFound("Employee"));
    }

    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee
///
/// Departments and leave requests referencing the employee are left as is.
#[utoipa::path(
    delete,
    path = "/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee ID (24 hex chars)")
    ),
    responses(
        (status = 204, description = "Deleted, or nothing matched"),
        (status = 400, description = "Malformed identifier")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    ctx.employees.delete(&employee_id).await?;

    info!(employee_id, "Employee deleted");
    Ok(HttpResponse::NoContent().finish())
}
