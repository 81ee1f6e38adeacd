//! Work experience handlers

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;
use tracing::info;

use super::check_candidate_profile;
use crate::common::{
    endpoint_path, generate_work_experience_id, ApiError, ApiResponse, SharedState, Validator,
};
use crate::profile::models::{CreateWorkExperienceRequest, WorkExperience};
use crate::profile::validators::WorkExperienceValidator;

/// GET /api/work-experience/:candidate_profile_id
pub async fn list_work_experiences(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(candidate_profile_id): Path<String>,
) -> Result<ApiResponse<Vec<WorkExperience>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let work_experiences = sqlx::query_as::<_, WorkExperience>(
        "SELECT * FROM work_experiences WHERE candidate_profile_id = ?",
    )
    .bind(&candidate_profile_id)
    .fetch_all(&state.db)
    .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Work experience for candidate {} successfully retrieved.",
            candidate_profile_id
        ),
        work_experiences,
    ))
}

/// POST /api/work-experience
pub async fn create_work_experience(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateWorkExperienceRequest>,
) -> Result<ApiResponse<WorkExperience>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let validation = WorkExperienceValidator.validate(&payload);
    if !validation.is_valid {
        return Err(ApiError::from_validation(&endpoint, validation));
    }

    let id = generate_work_experience_id();
    sqlx::query(
        r#"
        INSERT INTO work_experiences
            (id, position, start_date, end_date, duration, company_name,
             company_address, monthly_salary, candidate_profile_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&payload.position)
    .bind(&payload.start_date)
    .bind(&payload.end_date)
    .bind(&payload.duration)
    .bind(&payload.company_name)
    .bind(&payload.company_address)
    .bind(payload.monthly_salary)
    .bind(&payload.candidate_profile_id)
    .execute(&state.db)
    .await?;

    let new_work_experience =
        sqlx::query_as::<_, WorkExperience>("SELECT * FROM work_experiences WHERE id = ?")
            .bind(&id)
            .fetch_one(&state.db)
            .await?;

    info!(work_experience_id = %id, "Created work experience record");

    Ok(ApiResponse::created(
        &endpoint,
        "New work experience successfully created.",
        new_work_experience,
    ))
}

/// DELETE /api/work-experience/:id
pub async fn delete_work_experience(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM work_experiences WHERE id = ?")
            .bind(&id)
            .fetch_optional(&state.db)
            .await?;
    if existing.is_none() {
        return Err(ApiError::not_found(
            &endpoint,
            "Work experience id not found.",
        ));
    }

    sqlx::query("DELETE FROM work_experiences WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    info!(work_experience_id = %id, "Deleted work experience record");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!("Work experience {} successfully deleted.", id),
        None,
    ))
}
