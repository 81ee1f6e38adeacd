//! Successful candidate handlers

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;
use sqlx::SqlitePool;
use tracing::info;

use super::{check_candidate_profile, check_job, pair_not_found};
use crate::candidates::models::{
    CreateSuccessfulRequest, SuccessfulCandidate, SuccessfulWithProfile, UpdateNotesRequest,
    UpdateSuccessfulRequest,
};
use crate::candidates::services::CandidateService;
use crate::common::{
    endpoint_path, generate_successful_candidate_id, ApiError, ApiResponse, SharedState,
};

async fn find_successful(
    db: &SqlitePool,
    job_id: &str,
    candidate_profile_id: &str,
) -> Result<Option<SuccessfulCandidate>, sqlx::Error> {
    sqlx::query_as::<_, SuccessfulCandidate>(
        "SELECT * FROM successful_candidates WHERE job_id = ? AND candidate_profile_id = ?",
    )
    .bind(job_id)
    .bind(candidate_profile_id)
    .fetch_optional(db)
    .await
}

/// GET /api/successful-candidate/:job_id
pub async fn list_successful(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(job_id): Path<String>,
) -> Result<ApiResponse<Vec<SuccessfulWithProfile>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;

    let rows = sqlx::query_as::<_, SuccessfulCandidate>(
        "SELECT * FROM successful_candidates WHERE job_id = ?",
    )
    .bind(&job_id)
    .fetch_all(&state.db)
    .await?;

    let service = CandidateService::new(state.db.clone());
    let mut successful_list = Vec::with_capacity(rows.len());
    for successful in rows {
        let candidate_profile = service
            .expand_profile_by_id(&successful.candidate_profile_id)
            .await?;
        successful_list.push(SuccessfulWithProfile {
            successful,
            candidate_profile,
        });
    }

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of successful candidate for job {} successfully retrieved.",
            job_id
        ),
        successful_list,
    ))
}

/// GET /api/successful-candidate/:job_id/:candidate_profile_id
pub async fn get_successful_candidate(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
) -> Result<ApiResponse<SuccessfulWithProfile>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let successful = find_successful(&state.db, &job_id, &candidate_profile_id)
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    let candidate_profile = CandidateService::new(state.db.clone())
        .expand_profile_by_id(&successful.candidate_profile_id)
        .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Successful candidate {} for job {} successfully retrieved.",
            candidate_profile_id, job_id
        ),
        SuccessfulWithProfile {
            successful,
            candidate_profile,
        },
    ))
}

/// POST /api/successful-candidate
pub async fn create_successful(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateSuccessfulRequest>,
) -> Result<ApiResponse<SuccessfulCandidate>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let candidate_profile_id = payload.candidate_profile_id.as_deref().unwrap_or("");
    let job_id = payload.job_id.as_deref().unwrap_or("");

    if candidate_profile_id.is_empty() || job_id.is_empty() {
        return Err(ApiError::bad_request(
            &endpoint,
            "Monthly salary, Confirmation status, Candidate profile id and  Job id is required.",
        ));
    }

    check_job(&state.db, &endpoint, job_id).await?;
    check_candidate_profile(&state.db, &endpoint, candidate_profile_id).await?;

    let existing = find_successful(&state.db, job_id, candidate_profile_id).await?;
    if existing.is_some() {
        return Err(ApiError::conflict(
            &endpoint,
            &format!(
                "Candidate {} is already in job {} as successful candidate.",
                candidate_profile_id, job_id
            ),
        ));
    }

    let id = generate_successful_candidate_id();
    sqlx::query(
        r#"
        INSERT INTO successful_candidates
            (id, notes, monthly_salary, confirmation_status, candidate_profile_id, job_id)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(payload.notes.as_deref().unwrap_or(""))
    .bind(payload.monthly_salary.unwrap_or(0.0))
    .bind(payload.confirmation_status.as_deref().unwrap_or(""))
    .bind(candidate_profile_id)
    .bind(job_id)
    .execute(&state.db)
    .await?;

    let new_successful = sqlx::query_as::<_, SuccessfulCandidate>(
        "SELECT * FROM successful_candidates WHERE id = ?",
    )
    .bind(&id)
    .fetch_one(&state.db)
    .await?;

    info!(successful_id = %id, job_id = %job_id, "Created successful candidate");

    Ok(ApiResponse::created(
        &endpoint,
        "New successful candidate successfully created.",
        new_successful,
    ))
}

/// PATCH /api/successful-candidate/:job_id/:candidate_profile_id
pub async fn update_successful(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
    Json(payload): Json<UpdateSuccessfulRequest>,
) -> Result<ApiResponse<SuccessfulCandidate>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let successful = find_successful(&state.db, &job_id, &candidate_profile_id)
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    sqlx::query(
        r#"
        UPDATE successful_candidates
        SET confirmation_status = COALESCE(?, confirmation_status),
            monthly_salary = COALESCE(?, monthly_salary)
        WHERE id = ?
        "#,
    )
    .bind(&payload.confirmation_status)
    .bind(payload.monthly_salary)
    .bind(&successful.id)
    .execute(&state.db)
    .await?;

    let updated = sqlx::query_as::<_, SuccessfulCandidate>(
        "SELECT * FROM successful_candidates WHERE id = ?",
    )
    .bind(&successful.id)
    .fetch_one(&state.db)
    .await?;

    info!(successful_id = %successful.id, "Updated successful candidate");

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Candidate {} in job {} successfully updated.",
            candidate_profile_id, job_id
        ),
        updated,
    ))
}

/// PATCH /api/successful-candidate/:job_id/:candidate_profile_id/notes
pub async fn update_notes(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
    Json(payload): Json<UpdateNotesRequest>,
) -> Result<ApiResponse<SuccessfulCandidate>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let successful = find_successful(&state.db, &job_id, &candidate_profile_id)
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    sqlx::query("UPDATE successful_candidates SET notes = COALESCE(?, notes) WHERE id = ?")
        .bind(&payload.notes)
        .bind(&successful.id)
        .execute(&state.db)
        .await?;

    let updated = sqlx::query_as::<_, SuccessfulCandidate>(
        "SELECT * FROM successful_candidates WHERE id = ?",
    )
    .bind(&successful.id)
    .fetch_one(&state.db)
    .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Notes for candidate {} in job {} successfully updated.",
            candidate_profile_id, job_id
        ),
        updated,
    ))
}

/// DELETE /api/successful-candidate/:job_id/:candidate_profile_id
pub async fn delete_successful(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let successful = find_successful(&state.db, &job_id, &candidate_profile_id)
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    sqlx::query("DELETE FROM successful_candidates WHERE id = ?")
        .bind(&successful.id)
        .execute(&state.db)
        .await?;

    info!(successful_id = %successful.id, "Deleted successful candidate");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!(
            "Candidate {} in job {} successfully deleted from successfull candidate.",
            candidate_profile_id, job_id
        ),
        None,
    ))
}
