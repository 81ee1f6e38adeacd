//! Job postings, company-scoped listings and board search

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::job_routes;
pub use services::JobService;
