//! Skill record handlers

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;
use tracing::info;

use super::check_candidate_profile;
use crate::common::{
    endpoint_path, generate_skill_id, ApiError, ApiResponse, SharedState, Validator,
};
use crate::profile::models::{CreateSkillRequest, Skill};
use crate::profile::validators::SkillValidator;

/// GET /api/skill/:candidate_profile_id
pub async fn list_skills(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(candidate_profile_id): Path<String>,
) -> Result<ApiResponse<Vec<Skill>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let skills = sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE candidate_profile_id = ?")
        .bind(&candidate_profile_id)
        .fetch_all(&state.db)
        .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of skills for candidate {} successfully retrieved.",
            candidate_profile_id
        ),
        skills,
    ))
}

/// POST /api/skill
pub async fn create_skill(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateSkillRequest>,
) -> Result<ApiResponse<Skill>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let validation = SkillValidator.validate(&payload);
    if !validation.is_valid {
        return Err(ApiError::from_validation(&endpoint, validation));
    }

    let skill_name = payload.skill_name.as_deref().unwrap_or("");

    // Name uniqueness holds across all profiles, not per profile
    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM skills WHERE skill_name = ?")
        .bind(skill_name)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::conflict(
            &endpoint,
            &format!("Skill name {} has already created.", skill_name),
        ));
    }

    let id = generate_skill_id();
    sqlx::query(
        "INSERT INTO skills (id, skill_name, proficiency, candidate_profile_id) VALUES (?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(skill_name)
    .bind(&payload.proficiency)
    .bind(&payload.candidate_profile_id)
    .execute(&state.db)
    .await?;

    let new_skill = sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await?;

    info!(skill_id = %id, "Created skill record");

    Ok(ApiResponse::created(
        &endpoint,
        "New skill successfully created.",
        new_skill,
    ))
}

/// DELETE /api/skill/:id
pub async fn delete_skill(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM skills WHERE id = ?")
        .bind(&id)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_none() {
        return Err(ApiError::not_found(&endpoint, "Skill id not found."));
    }

    sqlx::query("DELETE FROM skills WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    info!(skill_id = %id, "Deleted skill record");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!("Skill {} successfully deleted.", id),
        None,
    ))
}
