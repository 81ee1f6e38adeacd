//! Candidate profile handlers

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;
use tracing::info;

use crate::candidates::models::{
    CandidateProfile, CreateCandidateProfileRequest, UpdateCandidateProfileRequest,
};
use crate::common::{
    endpoint_path, generate_candidate_profile_id, ApiError, ApiResponse, SharedState,
};

/// GET /api/candidate-profile/:user_id
pub async fn get_profile_by_user(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<CandidateProfile>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let profile = sqlx::query_as::<_, CandidateProfile>(
        "SELECT * FROM candidate_profiles WHERE user_id = ?",
    )
    .bind(&user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| ApiError::not_found(&endpoint, "Candidate profile not found."))?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Candidate profile with user id {} successfully retrieved.",
            user_id
        ),
        profile,
    ))
}

/// POST /api/candidate-profile
pub async fn create_profile(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateCandidateProfileRequest>,
) -> Result<ApiResponse<CandidateProfile>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let user_id = payload.user_id.as_deref().unwrap_or("");
    if user_id.is_empty() {
        return Err(ApiError::bad_request(&endpoint, "User id is required."));
    }

    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM candidate_profiles WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&state.db)
            .await?;
    if existing.is_some() {
        return Err(ApiError::conflict(
            &endpoint,
            "User id is already exists. Cannot create another candidate profile.",
        ));
    }

    let id = generate_candidate_profile_id();
    sqlx::query(
        r#"
        INSERT INTO candidate_profiles
            (id, gender, location, date_of_birth, nationality, preferred_salary,
             about, user_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&payload.gender)
    .bind(&payload.location)
    .bind(&payload.date_of_birth)
    .bind(&payload.nationality)
    .bind(payload.preferred_salary)
    .bind(&payload.about)
    .bind(user_id)
    .execute(&state.db)
    .await?;

    let new_profile =
        sqlx::query_as::<_, CandidateProfile>("SELECT * FROM candidate_profiles WHERE id = ?")
            .bind(&id)
            .fetch_one(&state.db)
            .await?;

    info!(candidate_profile_id = %id, user_id = %user_id, "Created candidate profile");

    Ok(ApiResponse::created(
        &endpoint,
        "New candidate profile successfully created.",
        new_profile,
    ))
}

/// PATCH /api/candidate-profile/:id
pub async fn update_profile(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCandidateProfileRequest>,
) -> Result<ApiResponse<CandidateProfile>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM candidate_profiles WHERE id = ?")
            .bind(&id)
            .fetch_optional(&state.db)
            .await?;
    if existing.is_none() {
        return Err(ApiError::not_found(
            &endpoint,
            "Candidate profile id not found.",
        ));
    }

    sqlx::query(
        r#"
        UPDATE candidate_profiles
        SET gender = COALESCE(?, gender),
            location = COALESCE(?, location),
            date_of_birth = COALESCE(?, date_of_birth),
            nationality = COALESCE(?, nationality),
            preferred_salary = COALESCE(?, preferred_salary)
        WHERE id = ?
        "#,
    )
    .bind(&payload.gender)
    .bind(&payload.location)
    .bind(&payload.date_of_birth)
    .bind(&payload.nationality)
    .bind(payload.preferred_salary)
    .bind(&id)
    .execute(&state.db)
    .await?;

    let updated =
        sqlx::query_as::<_, CandidateProfile>("SELECT * FROM candidate_profiles WHERE id = ?")
            .bind(&id)
            .fetch_one(&state.db)
            .await?;

    info!(candidate_profile_id = %id, "Updated candidate profile");

    Ok(ApiResponse::ok(
        &endpoint,
        &format!("Candidate profile {} successfully updated.", id),
        updated,
    ))
}

/// DELETE /api/candidate-profile/:id
pub async fn delete_profile(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM candidate_profiles WHERE id = ?")
            .bind(&id)
            .fetch_optional(&state.db)
            .await?;
    if existing.is_none() {
        return Err(ApiError::not_found(
            &endpoint,
            "Candidate profile id not found.",
        ));
    }

    sqlx::query("DELETE FROM candidate_profiles WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    info!(candidate_profile_id = %id, "Deleted candidate profile");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!("Candidate profile {} successfully deleted.", id),
        None,
    ))
}
