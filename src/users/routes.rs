//! User account routes

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers;

/// Creates and returns the user router
///
/// # Routes
/// - `GET /api/user/:id` - Get a user by id
/// - `PATCH /api/user/:id/info` - Update email and name
/// - `PATCH /api/user/:id/password` - Change password
/// - `DELETE /api/user/:id` - Delete the account and all dependent rows
pub fn user_routes() -> Router {
    Router::new()
        .route(
            "/api/user/:id",
            get(handlers::get_user).delete(handlers::delete_user),
        )
        .route("/api/user/:id/info", patch(handlers::update_info))
        .route("/api/user/:id/password", patch(handlers::change_password))
}
