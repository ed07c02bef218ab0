use actix_web::{HttpResponse, web};
use tracing::info;

use crate::api::ApiError;
use crate::context::AppContext;
use crate::model::department::Department;
use crate::validation::DepartmentForm;

#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "All departments", body = [Department])
    ),
    tag = "Department"
)]
pub async fn list_departments(ctx: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let departments = ctx.departments.find_all().await?;
    Ok(HttpResponse::Ok().json(departments))
}

#[utoipa::path(
    post,
    path = "/departments",
    request_body = DepartmentForm,
    responses(
        (status = 201, description = "Department created", body = Department),
        (status = 400, description = "Missing name", body = Object, example = json!({
            "message": "Please enter department name"
        }))
    ),
    tag = "Department"
)]
pub async fn create_department(
    ctx: web::Data<AppContext>,
    payload: web::Json<DepartmentForm>,
) -> Result<HttpResponse, ApiError> {
    let mut department = payload.into_inner().into_department(String::new())?;
    ctx.departments.save(&mut department).await?;

    info!(department_id = %department.id, "Department created");
    Ok(HttpResponse::Created().json(department))
}

#[utoipa::path(
    get,
    path = "/departments/{department_id}",
    params(
        ("department_id" = String, Path, description = "Department ID (24 hex chars)")
    ),
    responses(
        (status = 200, description = "Department found", body = Department),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Department not found")
    ),
    tag = "Department"
)]
pub async fn get_department(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    ctx.departments
        .find_by_id(&path.into_inner())
        .await?
        .map(|d| HttpResponse::Ok().json(d))
        .ok_or(ApiError::NotFound("Department"))
}

#[utoipa::path(
    put,
    path = "/departments/{department_id}",
    params(
        ("department_id" = String, Path, description = "Department ID (24 hex chars)")
    ),
    request_body = DepartmentForm,
    responses(
        (status = 200, description = "Department saved", body = Department),
        (status = 400, description = "Missing name or malformed identifier"),
        (status = 404, description = "No department with this id; nothing was written")
    ),
    tag = "Department"
)]
pub async fn update_department(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
    payload: web::Json<DepartmentForm>,
) -> Result<HttpResponse, ApiError> {
    let mut department = payload.into_inner().into_department(path.into_inner())?;
    if !ctx.departments.save(&mut department).await? {
        return Err(ApiError::NotFound("Department"));
    }
    Ok(HttpResponse::Ok().json(department))
}

/// Employees keep pointing at a deleted department and show it as N/A.
#[utoipa::path(
    delete,
    path = "/departments/{department_id}",
    params(
        ("department_id" = String, Path, description = "Department ID (24 hex chars)")
    ),
    responses(
        (status = 204, description = "Deleted, or nothing matched"),
        (status = 400, description = "Malformed identifier")
    ),
    tag = "Department"
)]
pub async fn delete_department(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let department_id = path.into_inner();
    ctx.departments.delete(&department_id).await?;

    info!(department_id, "Department deleted");
    Ok(HttpResponse::NoContent().finish())
}
