//! # Officers Module
//!
//! HR officer accounts: company rosters (with user rows joined in),
//! resigned listings, creation with a per-company uniqueness check,
//! update and delete.

pub mod handlers;
pub mod models;
pub mod routes;


pub use models::Officer;
pub use routes::officer_routes;
