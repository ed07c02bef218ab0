use actix_web::{HttpResponse, web};
use tracing::info;

use crate::api::ApiError;
use crate::context::AppContext;
use crate::lookup::{self, LeaveRow};
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::validation::{LeaveForm, StatusForm};

/* =========================
List / read
========================= */
/// for getting leave applications endpoint
#[utoipa::path(
    get,
    path = "/leave",
    responses(
        (status = 200, description = "All leave requests with employee names", body = [LeaveRow])
    ),
    tag = "Leave"
)]
pub async fn leave_list(ctx: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let rows = lookup::leave_rows(&ctx.leaves).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// for getting a leave application details endpoint
#[utoipa::path(
    get,
    path = "/leave/{leave_id}",
    params(
        ("leave_id" = String, Path, description = "ID of the leave request to fetch")
    ),
    responses(
        (status = 200, description = "Leave request found", body = LeaveRequest),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "Leave request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let leave_id = path.into_inner();

    match ctx.leaves.find_by_id(&leave_id).await? {
        Some(data) => Ok(HttpResponse::Ok().json(data)),
        None => Err(ApiError::NotFound("Leave request")),
    }
}

/* =========================
Create / replace / delete
========================= */
/// Submit a leave request; it always starts PENDING
#[utoipa::path(
    post,
    path = "/leave",
    request_body(
        content = LeaveForm,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave request submitted", body = LeaveRequest),
        (status = 400, description = "Missing field, employee id that is not an object id, or start after end", body = Object, example = json!({
            "message": "Start date must be before end date"
        }))
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    ctx: web::Data<AppContext>,
    payload: web::Json<LeaveForm>,
) -> Result<HttpResponse, ApiError> {
    let mut leave = payload.into_inner().into_leave_request(String::new())?;
    ctx.leaves.save(&mut leave).await?;

    info!(leave_id = %leave.id, employee_id = ?leave.employee_id, "Leave request submitted");
    Ok(HttpResponse::Created().json(leave))
}

#[utoipa::path(
    put,
    path = "/leave/{leave_id}",
    params(
        ("leave_id" = String, Path, description = "ID of the leave request to replace")
    ),
    request_body = LeaveForm,
    responses(
        (status = 200, description = "Leave request saved", body = LeaveRequest),
        (status = 400, description = "Missing field, start after end, or malformed identifier"),
        (status = 404, description = "No leave request with this id; nothing was written")
    ),
    tag = "Leave"
)]
pub async fn update_leave(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
    payload: web::Json<LeaveForm>,
) -> Result<HttpResponse, ApiError> {
    let mut leave = payload.into_inner().into_leave_request(path.into_inner())?;
    if !ctx.leaves.save(&mut leave).await? {
        return Err(ApiError::NotFound("Leave request"));
    }
    Ok(HttpResponse::Ok().json(leave))
}

#[utoipa::path(
    delete,
    path = "/leave/{leave_id}",
    params(
        ("leave_id" = String, Path, description = "ID of the leave request to delete")
    ),
    responses(
        (status = 204, description = "Deleted, or nothing matched"),
        (status = 400, description = "Malformed identifier")
    ),
    tag = "Leave"
)]
pub async fn delete_leave(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let leave_id = path.into_inner();
    ctx.leaves.delete(&leave_id).await?;

    info!(leave_id, "Leave request deleted");
    Ok(HttpResponse::NoContent().finish())
}

/* =========================
Status workflow
========================= */
async fn apply_status(
    ctx: &AppContext,
    leave_id: String,
    status: LeaveStatus,
) -> Result<HttpResponse, ApiError> {
    ctx.leaves.update_status(&leave_id, status).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "id": leave_id,
        "status": status,
    })))
}

/// Set any status from any status
#[utoipa::path(
    put,
    path = "/leave/{leave_id}/status",
    params(
        ("leave_id" = String, Path, description = "ID of the leave request")
    ),
    request_body = StatusForm,
    responses(
        (status = 200, description = "Status written", body = Object, example = json!({
            "id": "65a1f0c2e4b0a1b2c3d4e5f8",
            "status": "APPROVED"
        })),
        (status = 400, description = "Malformed identifier or unknown status")
    ),
    tag = "Leave"
)]
pub async fn set_status(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
    payload: web::Json<StatusForm>,
) -> Result<HttpResponse, ApiError> {
    apply_status(&ctx, path.into_inner(), payload.status).await
}

/// Approve leave
#[utoipa::path(
    put,
    path = "/leave/{leave_id}/approve",
    params(
        ("leave_id" = String, Path, description = "ID of the leave request to approve")
    ),
    responses(
        (status = 200, description = "Leave approved", body = Object, example = json!({
            "id": "65a1f0c2e4b0a1b2c3d4e5f8",
            "status": "APPROVED"
        })),
        (status = 400, description = "Malformed identifier")
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    apply_status(&ctx, path.into_inner(), LeaveStatus::Approved).await
}

/// Reject leave
#[utoipa::path(
    put,
    path = "/leave/{leave_id}/reject",
    params(
        ("leave_id" = String, Path, description = "ID of the leave request to reject")
    ),
    responses(
        (status = 200, description = "Leave rejected", body = Object, example = json!({
            "id": "65a1f0c2e4b0a1b2c3d4e5f8",
            "status": "REJECTED"
        })),
        (status = 400, description = "Malformed identifier")
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    apply_status(&ctx, path.into_inner(), LeaveStatus::Rejected).await
}
