//! Shortlisted candidate handlers
//!
//! Shortlisted rows carry the interview pipeline: `is_qualified_interview`
//! promotes a row, and the detail fields hold the scheduled slot. Create,
//! detail update and delete only operate on not-yet-qualified rows.

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;
use sqlx::SqlitePool;
use tracing::info;

use super::{check_candidate_profile, check_job, pair_not_found};
use crate::candidates::models::{
    CreateShortlistedRequest, ShortlistedCandidate, ShortlistedWithProfile,
    UpdateInterviewDetailRequest, UpdateInterviewStatusRequest, UpdateNotesRequest,
};
use crate::candidates::services::CandidateService;
use crate::common::{
    endpoint_path, generate_shortlisted_candidate_id, ApiError, ApiResponse, SharedState,
};

async fn find_shortlisted(
    db: &SqlitePool,
    job_id: &str,
    candidate_profile_id: &str,
    qualified_filter: Option<bool>,
) -> Result<Option<ShortlistedCandidate>, sqlx::Error> {
    match qualified_filter {
        Some(is_qualified_interview) => {
            sqlx::query_as::<_, ShortlistedCandidate>(
                "SELECT * FROM shortlisted_candidates WHERE job_id = ? AND candidate_profile_id = ? AND is_qualified_interview = ?",
            )
            .bind(job_id)
            .bind(candidate_profile_id)
            .bind(is_qualified_interview)
            .fetch_optional(db)
            .await
        }
        None => {
            sqlx::query_as::<_, ShortlistedCandidate>(
                "SELECT * FROM shortlisted_candidates WHERE job_id = ? AND candidate_profile_id = ?",
            )
            .bind(job_id)
            .bind(candidate_profile_id)
            .fetch_optional(db)
            .await
        }
    }
}

async fn expand_rows(
    db: &SqlitePool,
    rows: Vec<ShortlistedCandidate>,
) -> Result<Vec<ShortlistedWithProfile>, sqlx::Error> {
    let service = CandidateService::new(db.clone());
    let mut list = Vec::with_capacity(rows.len());
    for shortlisted in rows {
        let candidate_profile = service
            .expand_profile_by_id(&shortlisted.candidate_profile_id)
            .await?;
        list.push(ShortlistedWithProfile {
            shortlisted,
            candidate_profile,
        });
    }
    Ok(list)
}

/// GET /api/shortlisted-candidate/:job_id
pub async fn list_shortlisted(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(job_id): Path<String>,
) -> Result<ApiResponse<Vec<ShortlistedWithProfile>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;

    let rows = sqlx::query_as::<_, ShortlistedCandidate>(
        "SELECT * FROM shortlisted_candidates WHERE job_id = ?",
    )
    .bind(&job_id)
    .fetch_all(&state.db)
    .await?;

    let shortlisted_list = expand_rows(&state.db, rows).await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of shortlisted candidates for job {} successfully retrieved.",
            job_id
        ),
        shortlisted_list,
    ))
}

/// GET /api/shortlisted-candidate/:job_id/interview
pub async fn list_interview_candidates(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(job_id): Path<String>,
) -> Result<ApiResponse<Vec<ShortlistedWithProfile>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;

    let rows = sqlx::query_as::<_, ShortlistedCandidate>(
        "SELECT * FROM shortlisted_candidates WHERE job_id = ? AND is_qualified_interview = 1",
    )
    .bind(&job_id)
    .fetch_all(&state.db)
    .await?;

    let interview_list = expand_rows(&state.db, rows).await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of interview candidate for job {} successfully retrieved.",
            job_id
        ),
        interview_list,
    ))
}

/// GET /api/shortlisted-candidate/:job_id/interview/:candidate_profile_id
pub async fn get_interview_candidate(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
) -> Result<ApiResponse<ShortlistedWithProfile>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let shortlisted = find_shortlisted(&state.db, &job_id, &candidate_profile_id, Some(true))
        .await?
        .ok_or_else(|| {
            ApiError::not_found(
                &endpoint,
                &format!(
                    "Interview candidate id {} is not included in job {}",
                    candidate_profile_id, job_id
                ),
            )
        })?;

    let candidate_profile = CandidateService::new(state.db.clone())
        .expand_profile_by_id(&shortlisted.candidate_profile_id)
        .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Interview candidate {} in job {} successfully retrieved.",
            candidate_profile_id, job_id
        ),
        ShortlistedWithProfile {
            shortlisted,
            candidate_profile,
        },
    ))
}

/// GET /api/shortlisted-candidate/:job_id/:candidate_profile_id
pub async fn get_shortlisted_candidate(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
) -> Result<ApiResponse<ShortlistedWithProfile>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let shortlisted = find_shortlisted(&state.db, &job_id, &candidate_profile_id, None)
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    let candidate_profile = CandidateService::new(state.db.clone())
        .expand_profile_by_id(&shortlisted.candidate_profile_id)
        .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Shortlisted candidate {} in job {} successfully retrieved.",
            candidate_profile_id, job_id
        ),
        ShortlistedWithProfile {
            shortlisted,
            candidate_profile,
        },
    ))
}

/// POST /api/shortlisted-candidate
pub async fn create_shortlisted(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateShortlistedRequest>,
) -> Result<ApiResponse<ShortlistedCandidate>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let candidate_profile_id = payload.candidate_profile_id.as_deref().unwrap_or("");
    let job_id = payload.job_id.as_deref().unwrap_or("");

    if candidate_profile_id.is_empty() || job_id.is_empty() {
        return Err(ApiError::bad_request(
            &endpoint,
            "Is qualified interview, Candidate profile id and Job id is required.",
        ));
    }

    check_job(&state.db, &endpoint, job_id).await?;
    check_candidate_profile(&state.db, &endpoint, candidate_profile_id).await?;

    // Only a not-yet-qualified row blocks re-shortlisting
    let existing = find_shortlisted(&state.db, job_id, candidate_profile_id, Some(false)).await?;
    if existing.is_some() {
        return Err(ApiError::conflict(
            &endpoint,
            &format!(
                "Candidate {} is already in job {} as shortlisted candidate.",
                candidate_profile_id, job_id
            ),
        ));
    }

    let id = generate_shortlisted_candidate_id();
    sqlx::query(
        r#"
        INSERT INTO shortlisted_candidates
            (id, notes, is_qualified_interview, candidate_profile_id, job_id)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(payload.notes.as_deref().unwrap_or(""))
    .bind(payload.is_qualified_interview.unwrap_or(false))
    .bind(candidate_profile_id)
    .bind(job_id)
    .execute(&state.db)
    .await?;

    let new_shortlisted = sqlx::query_as::<_, ShortlistedCandidate>(
        "SELECT * FROM shortlisted_candidates WHERE id = ?",
    )
    .bind(&id)
    .fetch_one(&state.db)
    .await?;

    info!(shortlisted_id = %id, job_id = %job_id, "Created shortlisted candidate");

    Ok(ApiResponse::created(
        &endpoint,
        "New shortlisted candidate successfully created.",
        new_shortlisted,
    ))
}

/// PATCH /api/shortlisted-candidate/:job_id/:candidate_profile_id/notes
pub async fn update_notes(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
    Json(payload): Json<UpdateNotesRequest>,
) -> Result<ApiResponse<ShortlistedCandidate>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let shortlisted = find_shortlisted(&state.db, &job_id, &candidate_profile_id, None)
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    sqlx::query("UPDATE shortlisted_candidates SET notes = COALESCE(?, notes) WHERE id = ?")
        .bind(&payload.notes)
        .bind(&shortlisted.id)
        .execute(&state.db)
        .await?;

    let updated = sqlx::query_as::<_, ShortlistedCandidate>(
        "SELECT * FROM shortlisted_candidates WHERE id = ?",
    )
    .bind(&shortlisted.id)
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

/// PATCH /api/shortlisted-candidate/:job_id/interview-status/:candidate_profile_id
pub async fn update_interview_status(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
    Json(payload): Json<UpdateInterviewStatusRequest>,
) -> Result<ApiResponse<ShortlistedCandidate>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let shortlisted = find_shortlisted(&state.db, &job_id, &candidate_profile_id, None)
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    sqlx::query(
        "UPDATE shortlisted_candidates SET is_qualified_interview = COALESCE(?, is_qualified_interview) WHERE id = ?",
    )
    .bind(payload.is_qualified_interview)
    .bind(&shortlisted.id)
    .execute(&state.db)
    .await?;

    let updated = sqlx::query_as::<_, ShortlistedCandidate>(
        "SELECT * FROM shortlisted_candidates WHERE id = ?",
    )
    .bind(&shortlisted.id)
    .fetch_one(&state.db)
    .await?;

    info!(shortlisted_id = %shortlisted.id, "Updated interview status");

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Interview status for candidate {} in job {} successfully updated.",
            candidate_profile_id, job_id
        ),
        updated,
    ))
}

/// PATCH /api/shortlisted-candidate/:job_id/interview-detail/:candidate_profile_id
pub async fn update_interview_detail(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
    Json(payload): Json<UpdateInterviewDetailRequest>,
) -> Result<ApiResponse<ShortlistedCandidate>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let shortlisted = find_shortlisted(&state.db, &job_id, &candidate_profile_id, Some(false))
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    sqlx::query(
        r#"
        UPDATE shortlisted_candidates
        SET interview_datetime = COALESCE(?, interview_datetime),
            interview_platform = COALESCE(?, interview_platform)
        WHERE id = ?
        "#,
    )
    .bind(&payload.interview_datetime)
    .bind(&payload.interview_platform)
    .bind(&shortlisted.id)
    .execute(&state.db)
    .await?;

    let updated = sqlx::query_as::<_, ShortlistedCandidate>(
        "SELECT * FROM shortlisted_candidates WHERE id = ?",
    )
    .bind(&shortlisted.id)
    .fetch_one(&state.db)
    .await?;

    info!(shortlisted_id = %shortlisted.id, "Updated interview detail");

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Interview status for candidate {} in job {} successfully updated.",
            candidate_profile_id, job_id
        ),
        updated,
    ))
}

/// DELETE /api/shortlisted-candidate/:job_id/:candidate_profile_id
pub async fn delete_shortlisted(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let shortlisted = find_shortlisted(&state.db, &job_id, &candidate_profile_id, Some(false))
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    sqlx::query("DELETE FROM shortlisted_candidates WHERE id = ?")
        .bind(&shortlisted.id)
        .execute(&state.db)
        .await?;

    info!(shortlisted_id = %shortlisted.id, "Deleted shortlisted candidate");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!(
            "Candidate {} in job {} successfully deleted from shortlisted candidate.",
            candidate_profile_id, job_id
        ),
        None,
    ))
}
