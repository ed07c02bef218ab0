//! Employee, department and leave-request records over a document store.

pub mod api;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod db;
pub mod display;
pub mod docs;
pub mod lookup;
pub mod model;
pub mod repository;
pub mod routes;
pub mod store;
pub mod utils;
pub mod validation;
