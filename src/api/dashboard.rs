use actix_web::{HttpResponse, web};

use crate::api::ApiError;
use crate::context::AppContext;
use crate::dashboard::{DashboardStats, collect_stats};

/// Totals shown on the landing page
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Current totals", body = DashboardStats),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Dashboard"
)]
pub async fn dashboard(ctx: web::Data<AppContext>) -> Result<HttpResponse, ApiError> {
    let stats = collect_stats(ctx.get_ref()).await?;
    Ok(HttpResponse::Ok().json(stats))
}
