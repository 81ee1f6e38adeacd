//! Notification handlers

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;
use sqlx::SqlitePool;
use tracing::info;

use crate::common::{
    endpoint_path, generate_notification_id, ApiError, ApiResponse, SharedState, Validator,
};
use crate::notifications::models::{
    BatchCount, CreateNotificationRequest, MarkReadRequest, Notification,
};
use crate::notifications::validators::NotificationValidator;

async fn user_exists(db: &SqlitePool, user_id: &str) -> Result<bool, sqlx::Error> {
    let user: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(db)
        .await?;
    Ok(user.is_some())
}

/// GET /api/notification/:user_id
pub async fn list_notifications(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<Vec<Notification>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    if !user_exists(&state.db, &user_id).await? {
        return Err(ApiError::not_found(&endpoint, "User id not found."));
    }

    let notifications =
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE user_id = ?")
            .bind(&user_id)
            .fetch_all(&state.db)
            .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of notifications for user {} successfully retrieved.",
            user_id
        ),
        notifications,
    ))
}

/// POST /api/notification
pub async fn create_notification(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<ApiResponse<Notification>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let validation = NotificationValidator.validate(&payload);
    if !validation.is_valid {
        return Err(ApiError::from_validation(&endpoint, validation));
    }

    let id = generate_notification_id();
    sqlx::query(
        "INSERT INTO notifications (id, content, category, is_read, user_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&payload.content)
    .bind(&payload.category)
    .bind(payload.is_read)
    .bind(&payload.user_id)
    .execute(&state.db)
    .await?;

    let new_notification =
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = ?")
            .bind(&id)
            .fetch_one(&state.db)
            .await?;

    info!(notification_id = %id, "Created notification");

    Ok(ApiResponse::created(
        &endpoint,
        "New notification successfully created.",
        new_notification,
    ))
}

/// PATCH /api/notification/:id
pub async fn mark_notification_read(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    Json(payload): Json<MarkReadRequest>,
) -> Result<ApiResponse<Notification>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let user_id = payload.user_id.as_deref().unwrap_or("");
    if user_id.is_empty() {
        return Err(ApiError::bad_request(&endpoint, "User id is required."));
    }

    // The row must belong to the claiming user
    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM notifications WHERE id = ? AND user_id = ?")
            .bind(&id)
            .bind(user_id)
            .fetch_optional(&state.db)
            .await?;
    if existing.is_none() {
        return Err(ApiError::not_found(
            &endpoint,
            "Notification id is not found.",
        ));
    }

    sqlx::query("UPDATE notifications SET is_read = 1 WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    let updated = sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await?;

    info!(notification_id = %id, user_id = %user_id, "Marked notification read");

    Ok(ApiResponse::ok(
        &endpoint,
        &format!("Notification {} successfully updated.", id),
        updated,
    ))
}

/// PATCH /api/notification/user/:user_id
pub async fn mark_all_read(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<BatchCount>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    if !user_exists(&state.db, &user_id).await? {
        return Err(ApiError::not_found(&endpoint, "User id is not found."));
    }

    let result = sqlx::query("UPDATE notifications SET is_read = 1 WHERE user_id = ?")
        .bind(&user_id)
        .execute(&state.db)
        .await?;

    info!(user_id = %user_id, count = result.rows_affected(), "Marked all notifications read");

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of notifications for {} successfully updated to read.",
            user_id
        ),
        BatchCount {
            count: result.rows_affected(),
        },
    ))
}

/// DELETE /api/notification/user/:user_id
pub async fn delete_notifications(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    if !user_exists(&state.db, &user_id).await? {
        return Err(ApiError::not_found(&endpoint, "User id is not found."));
    }

    sqlx::query("DELETE FROM notifications WHERE user_id = ?")
        .bind(&user_id)
        .execute(&state.db)
        .await?;

    info!(user_id = %user_id, "Deleted notifications");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!(
            "List of notifications for user {} successfully deleted.",
            user_id
        ),
        None,
    ))
}
