//! Direct messages and the broadcast chat relay

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::message_routes;
pub use services::ChatHub;
