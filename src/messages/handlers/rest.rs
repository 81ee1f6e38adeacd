//! Direct message handlers

use axum::extract::{Extension, Json, OriginalUri, Path};
use tracing::info;

use super::user_exists;
use crate::common::{
    endpoint_path, generate_message_id, ApiError, ApiResponse, SharedState, Validator,
};
use crate::messages::models::{CreateMessageRequest, Message};
use crate::messages::validators::MessageValidator;

/// GET /api/message/sender/:sender_id/recipient/:recipient_id
pub async fn list_from_sender(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((sender_id, recipient_id)): Path<(String, String)>,
) -> Result<ApiResponse<Vec<Message>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    if !user_exists(&state.db, &recipient_id).await? {
        return Err(ApiError::not_found(&endpoint, "Recipient id not found."));
    }
    if !user_exists(&state.db, &sender_id).await? {
        return Err(ApiError::not_found(&endpoint, "Sender id not found."));
    }

    let messages = sqlx::query_as::<_, Message>(
        "SELECT * FROM messages WHERE recipient_id = ? AND sender_id = ?",
    )
    .bind(&recipient_id)
    .bind(&sender_id)
    .fetch_all(&state.db)
    .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of messages from user {} successfully retrieved.",
            recipient_id
        ),
        messages,
    ))
}

/// GET /api/message/:recipient_id/unread
pub async fn list_unread(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(recipient_id): Path<String>,
) -> Result<ApiResponse<Vec<Message>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    if !user_exists(&state.db, &recipient_id).await? {
        return Err(ApiError::not_found(&endpoint, "Recipient id not found."));
    }

    let messages = sqlx::query_as::<_, Message>(
        "SELECT * FROM messages WHERE recipient_id = ? AND is_read = 0",
    )
    .bind(&recipient_id)
    .fetch_all(&state.db)
    .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of unread messages from user {} successfully retrieved.",
            recipient_id
        ),
        messages,
    ))
}

/// POST /api/message
pub async fn create_message(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateMessageRequest>,
) -> Result<ApiResponse<Message>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let validation = MessageValidator.validate(&payload);
    if !validation.is_valid {
        return Err(ApiError::from_validation(&endpoint, validation));
    }

    let recipient_id = payload.recipient_id.as_deref().unwrap_or("");
    let sender_id = payload.sender_id.as_deref().unwrap_or("");
    if !user_exists(&state.db, recipient_id).await? {
        return Err(ApiError::not_found(&endpoint, "Recipient id not found."));
    }
    if !user_exists(&state.db, sender_id).await? {
        return Err(ApiError::not_found(&endpoint, "Sender id not found."));
    }

    let id = generate_message_id();
    sqlx::query(
        r#"
        INSERT INTO messages (id, content, is_read, created_date, recipient_id, sender_id)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&payload.content)
    .bind(payload.is_read)
    .bind(&payload.created_date)
    .bind(recipient_id)
    .bind(sender_id)
    .execute(&state.db)
    .await?;

    let new_message = sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await?;

    info!(message_id = %id, sender_id = %sender_id, recipient_id = %recipient_id, "Created message");

    Ok(ApiResponse::created(
        &endpoint,
        "Message successfully created.",
        new_message,
    ))
}
