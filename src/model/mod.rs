pub mod department;
pub mod employee;
pub mod leave_request;

pub use department::Department;
pub use employee::Employee;
pub use leave_request::{LeaveRequest, LeaveStatus};
