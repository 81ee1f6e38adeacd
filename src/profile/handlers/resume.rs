//! Resume handlers
//!
//! A profile holds at most one resume row. The stored path points at the
//! external file host; deleting the row also tears down the hosted file.

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;
use tracing::{info, warn};

use super::check_candidate_profile;
use crate::common::{
    endpoint_path, generate_resume_id, ApiError, ApiResponse, SharedState, Validator,
};
use crate::profile::models::{CreateResumeRequest, Resume};
use crate::profile::validators::ResumeValidator;
use crate::services::FileHostClient;

/// GET /api/resume/:candidate_profile_id
pub async fn get_resume(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(candidate_profile_id): Path<String>,
) -> Result<ApiResponse<Resume>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let resume =
        sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE candidate_profile_id = ?")
            .bind(&candidate_profile_id)
            .fetch_optional(&state.db)
            .await?
            .ok_or_else(|| ApiError::not_found(&endpoint, "Resume not found."))?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Resume for candidate {} successfully retrieved.",
            candidate_profile_id
        ),
        resume,
    ))
}

/// POST /api/resume
pub async fn create_resume(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateResumeRequest>,
) -> Result<ApiResponse<Resume>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let validation = ResumeValidator.validate(&payload);
    if !validation.is_valid {
        return Err(ApiError::from_validation(&endpoint, validation));
    }

    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM resumes WHERE candidate_profile_id = ?")
            .bind(&payload.candidate_profile_id)
            .fetch_optional(&state.db)
            .await?;
    if existing.is_some() {
        return Err(ApiError::conflict(&endpoint, "Resume has already created."));
    }

    let id = generate_resume_id();
    sqlx::query("INSERT INTO resumes (id, path, candidate_profile_id) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(&payload.path)
        .bind(&payload.candidate_profile_id)
        .execute(&state.db)
        .await?;

    let new_resume = sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await?;

    info!(resume_id = %id, "Created resume record");

    Ok(ApiResponse::created(
        &endpoint,
        "New resume successfully created.",
        new_resume,
    ))
}

/// DELETE /api/resume/:id
pub async fn delete_resume(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let resume = sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE id = ?")
        .bind(&id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found(&endpoint, "Resume id not found."))?;

    let file_id = FileHostClient::extract_file_id(&resume.path)
        .ok_or_else(|| ApiError::not_found(&endpoint, "File id not found."))?;

    // The row goes regardless of whether the remote copy could be removed
    if let Err(e) = state.file_host.delete_file(&file_id).await {
        warn!(resume_id = %id, error = %e, "Hosted resume file could not be deleted");
    }

    sqlx::query("DELETE FROM resumes WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    info!(resume_id = %id, "Deleted resume record");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!("Resume {} successfully deleted.", id),
        None,
    ))
}
