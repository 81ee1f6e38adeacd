//! Officer routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the officer router
///
/// # Routes
/// - `GET /api/officer/company/:company_id` - Officers of a company with user rows
/// - `GET /api/officer/resign/:company_id` - Resigned officers of a company
/// - `GET /api/officer/:user_id` - Officer by user id
/// - `POST /api/officer` - Create a new officer
/// - `PATCH /api/officer/:id` - Update an officer
/// - `DELETE /api/officer/:id` - Delete an officer
pub fn officer_routes() -> Router {
    Router::new()
        .route(
            "/api/officer/company/:company_id",
            get(handlers::list_company_officers),
        )
        .route(
            "/api/officer/resign/:company_id",
            get(handlers::list_resigned_officers),
        )
        .route("/api/officer", post(handlers::create_officer))
        .route(
            "/api/officer/:id",
            get(handlers::get_officer_by_user)
                .patch(handlers::update_officer)
                .delete(handlers::delete_officer),
        )
}
