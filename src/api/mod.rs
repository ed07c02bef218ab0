pub mod dashboard;
pub mod department;
pub mod employee;
pub mod error;
pub mod leave_request;

pub use error::ApiError;
