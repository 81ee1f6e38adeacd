//! Notification routes

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers;

/// Creates and returns the notification router
///
/// # Routes
/// - `GET /api/notification/:user_id` - Notifications for a user
/// - `POST /api/notification` - Create a notification
/// - `PATCH /api/notification/:id` - Mark one read, body names the owner
/// - `PATCH /api/notification/user/:user_id` - Mark all read for a user
/// - `DELETE /api/notification/user/:user_id` - Delete all for a user
pub fn notification_routes() -> Router {
    Router::new()
        .route("/api/notification", post(handlers::create_notification))
        .route(
            "/api/notification/:id",
            get(handlers::list_notifications).patch(handlers::mark_notification_read),
        )
        .route(
            "/api/notification/user/:user_id",
            patch(handlers::mark_all_read).delete(handlers::delete_notifications),
        )
}
