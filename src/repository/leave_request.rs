use std::str::FromStr;
use std::sync::Arc;

use mongodb::bson::{Document, doc};
use tracing::{debug, info};

use super::{DocumentRepository, EmployeeRepository, Record};
use crate::model::{LeaveRequest, LeaveStatus};
use crate::store::{DocumentStore, LEAVE_REQUESTS, StoreError, StoreResult};
use crate::utils::db_utils::{date_value, read_date, read_id, read_text, text_value};

impl Record for LeaveRequest {
    const COLLECTION: &'static str = LEAVE_REQUESTS;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    // employee_name is derived and never written
    fn to_document(&self) -> Document {
        doc! {
            "employeeId": text_value(self.employee_id.as_deref()),
            "startDate": date_value(self.start_date),
            "endDate": date_value(self.end_date),
            "reason": text_value(self.reason.as_deref()),
            "status": self.status.unwrap_or_default().to_string(),
        }
    }

    fn from_document(doc: &Document) -> StoreResult<Self> {
        let status = match read_text(doc, "status")? {
            Some(s) => Some(
                LeaveStatus::from_str(&s)
                    .map_err(|_| StoreError::decode("status", format!("unknown status `{s}`")))?,
            ),
            None => None,
        };

        Ok(LeaveRequest {
            id: read_id(doc)?,
            employee_id: read_text(doc, "employeeId")?,
            employee_name: None,
            start_date: read_date(doc, "startDate")?,
            end_date: read_date(doc, "endDate")?,
            reason: read_text(doc, "reason")?,
            status,
        })
    }
}

/// Leave requests plus the employee-name join and the status workflow.
///
/// Every read and save looks the referenced employee up by id (one lookup
/// per request) and copies its name onto `employee_name`. When the employee
/// no longer exists, or the stored reference is not a valid id, the name is
/// left as it was.
#[derive(Clone)]
pub struct LeaveRequestRepository {
    requests: DocumentRepository<LeaveRequest>,
    employees: EmployeeRepository,
}

impl LeaveRequestRepository {
    pub fn new(store: Arc<dyn DocumentStore>, employees: EmployeeRepository) -> Self {
        Self {
            requests: DocumentRepository::new(store),
            employees,
        }
    }

    /// Start/end ordering is not checked here; callers validate first.
    /// Returns `false` when a replace matched nothing.
    pub async fn save(&self, request: &mut LeaveRequest) -> StoreResult<bool> {
        let saved = self.requests.save(request).await?;
        self.enrich(request).await?;
        Ok(saved)
    }

    pub async fn find_all(&self) -> StoreResult<Vec<LeaveRequest>> {
        let mut requests = self.requests.find_all().await?;
        for request in &mut requests {
            self.enrich(request).await?;
        }
        Ok(requests)
    }

    pub async fn find_by_id(&self, id: &str) -> StoreResult<Option<LeaveRequest>> {
        match self.requests.find_by_id(id).await? {
            Some(mut request) => {
                self.enrich(&mut request).await?;
                Ok(Some(request))
            }
            None => Ok(None),
        }
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.requests.delete(id).await
    }

    /// Overwrite only the status field, whatever the current status is.
    /// Unknown ids are a silent no-op.
    pub async fn update_status(&self, id: &str, status: LeaveStatus) -> StoreResult<()> {
        let matched = self
            .requests
            .set_fields(id, doc! { "status": status.to_string() })
            .await?;
        if matched == 0 {
            debug!(id, %status, "Status update matched no leave request");
        } else {
            info!(id, %status, "Leave request status updated");
        }
        Ok(())
    }

    async fn enrich(&self, request: &mut LeaveRequest) -> StoreResult<()> {
        let Some(employee_id) = request.employee_id.as_deref() else {
            return Ok(());
        };

        match self.employees.find_by_id(employee_id).await {
            Ok(Some(employee)) => request.employee_name = employee.name,
            Ok(None) => {}
            // a reference that can never resolve is an orphan, not a failure
            Err(StoreError::MalformedId(bad)) => {
                debug!(
                    leave_id = %request.id,
                    employee_id = %bad,
                    "Unresolvable employee reference"
                );
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}
