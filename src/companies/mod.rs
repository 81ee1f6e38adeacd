//! # Companies Module
//!
//! Company CRUD: fetch, create with website uniqueness, partial update
//! and delete.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

pub use models::Company;
pub use routes::company_routes;
