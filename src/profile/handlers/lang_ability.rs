//! Language ability handlers

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;
use tracing::info;

use super::check_candidate_profile;
use crate::common::{
    endpoint_path, generate_lang_ability_id, ApiError, ApiResponse, SharedState, Validator,
};
use crate::profile::models::{CreateLangAbilityRequest, LangAbility};
use crate::profile::validators::LangAbilityValidator;

/// GET /api/lang-ability/:candidate_profile_id
pub async fn list_lang_abilities(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(candidate_profile_id): Path<String>,
) -> Result<ApiResponse<Vec<LangAbility>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let lang_abilities = sqlx::query_as::<_, LangAbility>(
        "SELECT * FROM lang_abilities WHERE candidate_profile_id = ?",
    )
    .bind(&candidate_profile_id)
    .fetch_all(&state.db)
    .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of language ability for candidate {} successfully retrieved.",
            candidate_profile_id
        ),
        lang_abilities,
    ))
}

/// POST /api/lang-ability
pub async fn create_lang_ability(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateLangAbilityRequest>,
) -> Result<ApiResponse<LangAbility>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let validation = LangAbilityValidator.validate(&payload);
    if !validation.is_valid {
        return Err(ApiError::from_validation(&endpoint, validation));
    }

    let language_name = payload.language_name.as_deref().unwrap_or("");

    // Name uniqueness holds across all profiles, not per profile
    let existing: Option<(String,)> =
        sqlx::query_as("SELECT id FROM lang_abilities WHERE language_name = ?")
            .bind(language_name)
            .fetch_optional(&state.db)
            .await?;
    if existing.is_some() {
        return Err(ApiError::conflict(
            &endpoint,
            &format!("Language name {} has already created.", language_name),
        ));
    }

    let id = generate_lang_ability_id();
    sqlx::query(
        r#"
        INSERT INTO lang_abilities
            (id, language_name, scale_of_writing, scale_of_speaking, candidate_profile_id)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(language_name)
    .bind(payload.scale_of_writing)
    .bind(payload.scale_of_speaking)
    .bind(&payload.candidate_profile_id)
    .execute(&state.db)
    .await?;

    let new_lang_ability =
        sqlx::query_as::<_, LangAbility>("SELECT * FROM lang_abilities WHERE id = ?")
            .bind(&id)
            .fetch_one(&state.db)
            .await?;

    info!(lang_ability_id = %id, "Created language ability record");

    Ok(ApiResponse::created(
        &endpoint,
        "New language ability successfully created.",
        new_lang_ability,
    ))
}

/// DELETE /api/lang-ability/:id
pub async fn delete_lang_ability(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM lang_abilities WHERE id = ?")
        .bind(&id)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_none() {
        return Err(ApiError::not_found(
            &endpoint,
            "Language ability id not found.",
        ));
    }

    sqlx::query("DELETE FROM lang_abilities WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    info!(lang_ability_id = %id, "Deleted language ability record");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!("Language ability {} successfully deleted.", id),
        None,
    ))
}
