//! Company routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the company router
///
/// # Routes
/// - `GET /api/company/:id` - Get a company by id
/// - `POST /api/company` - Create a new company
/// - `PATCH /api/company/:id` - Update a company
/// - `DELETE /api/company/:id` - Delete a company
pub fn company_routes() -> Router {
    Router::new()
        .route("/api/company", post(handlers::create_company))
        .route(
            "/api/company/:id",
            get(handlers::get_company)
                .patch(handlers::update_company)
                .delete(handlers::delete_company),
        )
}
