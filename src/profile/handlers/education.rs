//! Education record handlers

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;
use tracing::info;

use super::check_candidate_profile;
use crate::common::{
    endpoint_path, generate_education_id, ApiError, ApiResponse, SharedState, Validator,
};
use crate::profile::models::{CreateEducationRequest, Education};
use crate::profile::validators::EducationValidator;

/// GET /api/education/:candidate_profile_id
pub async fn list_educations(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(candidate_profile_id): Path<String>,
) -> Result<ApiResponse<Vec<Education>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let educations =
        sqlx::query_as::<_, Education>("SELECT * FROM educations WHERE candidate_profile_id = ?")
            .bind(&candidate_profile_id)
            .fetch_all(&state.db)
            .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of educations for candidate {} successfully retrieved.",
            candidate_profile_id
        ),
        educations,
    ))
}

/// POST /api/education
pub async fn create_education(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateEducationRequest>,
) -> Result<ApiResponse<Education>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let validation = EducationValidator.validate(&payload);
    if !validation.is_valid {
        return Err(ApiError::from_validation(&endpoint, validation));
    }

    let id = generate_education_id();
    sqlx::query(
        r#"
        INSERT INTO educations
            (id, graduation_date, qualification, institute_name, institute_address,
             study_field, grade, candidate_profile_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&payload.graduation_date)
    .bind(&payload.qualification)
    .bind(&payload.institute_name)
    .bind(&payload.institute_address)
    .bind(&payload.study_field)
    .bind(&payload.grade)
    .bind(&payload.candidate_profile_id)
    .execute(&state.db)
    .await?;

    let new_education = sqlx::query_as::<_, Education>("SELECT * FROM educations WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await?;

    info!(education_id = %id, "Created education record");

    Ok(ApiResponse::created(
        &endpoint,
        "New education successfully created.",
        new_education,
    ))
}

/// DELETE /api/education/:id
pub async fn delete_education(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM educations WHERE id = ?")
        .bind(&id)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_none() {
        return Err(ApiError::not_found(&endpoint, "Education id not found."));
    }

    sqlx::query("DELETE FROM educations WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    info!(education_id = %id, "Deleted education record");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!("Education {} successfully deleted.", id),
        None,
    ))
}
