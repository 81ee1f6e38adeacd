//! User account handlers

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;

use super::models::{ChangePasswordRequest, UpdateInfoRequest};
use super::services::UserService;
use super::validators::{ChangePasswordValidator, UpdateInfoValidator};
use crate::auth::models::User;
use crate::common::{endpoint_path, ApiError, ApiResponse, SharedState, Validator};

/// GET /api/user/:id
pub async fn get_user(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<ApiResponse<User>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let user = UserService::new(state.db.clone())
        .get_user(&endpoint, &id)
        .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!("User {} successfully retrieved.", id),
        user,
    ))
}

/// PATCH /api/user/:id/info
pub async fn update_info(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    Json(payload): Json<UpdateInfoRequest>,
) -> Result<ApiResponse<User>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let check = UpdateInfoValidator.validate(&payload);
    if !check.is_valid {
        return Err(ApiError::from_validation(&endpoint, check));
    }

    let updated = UserService::new(state.db.clone())
        .update_info(
            &endpoint,
            &id,
            payload.email.as_deref().unwrap_or(""),
            payload.name.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        "User email and name successfully updated.",
        updated,
    ))
}

/// PATCH /api/user/:id/password
pub async fn change_password(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let check = ChangePasswordValidator.validate(&payload);
    if !check.is_valid {
        return Err(ApiError::from_validation(&endpoint, check));
    }

    UserService::new(state.db.clone())
        .change_password(
            &endpoint,
            &id,
            payload.currentpassword.as_deref().unwrap_or(""),
            payload.newpassword.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        "New password successfully applied.",
        None,
    ))
}

/// DELETE /api/user/:id
pub async fn delete_user(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    UserService::new(state.db.clone())
        .delete_user(&endpoint, &id)
        .await?;

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!("User {} successfully deleted.", id),
        None,
    ))
}
