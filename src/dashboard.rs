use serde::Serialize;
use utoipa::ToSchema;

use crate::context::AppContext;
use crate::model::LeaveStatus;
use crate::store::StoreResult;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardStats {
    #[schema(example = 12)]
    pub total_employees: usize,
    #[schema(example = 3)]
    pub total_departments: usize,
    #[schema(example = 2)]
    pub pending_leaves: usize,
    #[schema(example = 5)]
    pub approved_leaves: usize,
    #[schema(example = 1)]
    pub rejected_leaves: usize,
}

/// Counts over full collection scans. Leave requests without a stored status
/// are not counted in any bucket.
pub async fn collect_stats(ctx: &AppContext) -> StoreResult<DashboardStats> {
    let mut stats = DashboardStats {
        total_employees: ctx.employees.find_all().await?.len(),
        total_departments: ctx.departments.find_all().await?.len(),
        ..Default::default()
    };

    for leave in ctx.leaves.find_all().await? {
        match leave.status {
            Some(LeaveStatus::Pending) => stats.pending_leaves += 1,
            Some(LeaveStatus::Approved) => stats.approved_leaves += 1,
            Some(LeaveStatus::Rejected) => stats.rejected_leaves += 1,
            None => {}
        }
    }

    Ok(stats)
}
