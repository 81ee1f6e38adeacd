//! # Users Module
//!
//! Account-level routes: fetch a user, update name and email, change the
//! password against the current one, and delete the account together with
//! every dependent row in a single transaction.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::user_routes;
pub use services::UserService;
