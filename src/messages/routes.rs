//! Message routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{chat, rest};

/// Creates and returns the message router
///
/// # Routes
/// - `GET /api/message/sender/:sender_id/recipient/:recipient_id` - One-way message history
/// - `GET /api/message/:recipient_id/unread` - Unread messages for a recipient
/// - `POST /api/message` - Store a direct message
/// - `GET /ws/chat` - WebSocket upgrade into the broadcast chat room
pub fn message_routes() -> Router {
    Router::new()
        .route("/api/message", post(rest::create_message))
        .route(
            "/api/message/sender/:sender_id/recipient/:recipient_id",
            get(rest::list_from_sender),
        )
        .route("/api/message/:recipient_id/unread", get(rest::list_unread))
        .route("/ws/chat", get(chat::chat_handler))
}
