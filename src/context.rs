use std::sync::Arc;

use crate::repository::{DepartmentRepository, EmployeeRepository, LeaveRequestRepository};
use crate::store::DocumentStore;

/// Repositories sharing one injected store. Built once in `main` and handed
/// to the HTTP shell as app data.
#[derive(Clone)]
pub struct AppContext {
    pub employees: EmployeeRepository,
    pub departments: DepartmentRepository,
    pub leaves: LeaveRequestRepository,
}

impl AppContext {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let employees = EmployeeRepository::new(store.clone());
        Self {
            departments: DepartmentRepository::new(store.clone()),
            leaves: LeaveRequestRepository::new(store, employees.clone()),
            employees,
        }
    }
}
