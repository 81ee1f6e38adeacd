//! Applicant and wishlist handlers
//!
//! Wishlist entries and real applications live in the same table; the
//! `is_only_wish` flag keeps them apart, and routes filter on it per the
//! contract their messages describe.

use axum::extract::{Extension, Json, OriginalUri, Path};
use axum::http::StatusCode;
use sqlx::SqlitePool;
use tracing::info;

use super::{check_candidate_profile, check_job, pair_not_found};
use crate::candidates::models::{
    Applicant, ApplicantWithProfile, CreateApplicantRequest, UpdateApplyStatusRequest,
    UpdateNotesRequest,
};
use crate::candidates::services::CandidateService;
use crate::common::{endpoint_path, generate_applicant_id, ApiError, ApiResponse, SharedState};

async fn find_applicant(
    db: &SqlitePool,
    job_id: &str,
    candidate_profile_id: &str,
    wish_filter: Option<bool>,
) -> Result<Option<Applicant>, sqlx::Error> {
    match wish_filter {
        Some(is_only_wish) => {
            sqlx::query_as::<_, Applicant>(
                "SELECT * FROM applicants WHERE job_id = ? AND candidate_profile_id = ? AND is_only_wish = ?",
            )
            .bind(job_id)
            .bind(candidate_profile_id)
            .bind(is_only_wish)
            .fetch_optional(db)
            .await
        }
        None => {
            sqlx::query_as::<_, Applicant>(
                "SELECT * FROM applicants WHERE job_id = ? AND candidate_profile_id = ?",
            )
            .bind(job_id)
            .bind(candidate_profile_id)
            .fetch_optional(db)
            .await
        }
    }
}

/// GET /api/applicant/:job_id
pub async fn list_job_applicants(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(job_id): Path<String>,
) -> Result<ApiResponse<Vec<ApplicantWithProfile>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;

    let applicants = sqlx::query_as::<_, Applicant>(
        "SELECT * FROM applicants WHERE job_id = ? AND is_only_wish = 0",
    )
    .bind(&job_id)
    .fetch_all(&state.db)
    .await?;

    let service = CandidateService::new(state.db.clone());
    let mut applicant_list = Vec::with_capacity(applicants.len());
    for applicant in applicants {
        let candidate_profile = service
            .expand_profile_by_id(&applicant.candidate_profile_id)
            .await?;
        applicant_list.push(ApplicantWithProfile {
            applicant,
            candidate_profile,
        });
    }

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of applicants for job {} successfully retrieved.",
            job_id
        ),
        applicant_list,
    ))
}

/// GET /api/applicant/wishlist/:candidate_profile_id
pub async fn list_wishlist(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(candidate_profile_id): Path<String>,
) -> Result<ApiResponse<Vec<Applicant>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let wishlist = sqlx::query_as::<_, Applicant>(
        "SELECT * FROM applicants WHERE candidate_profile_id = ? AND is_only_wish = 1",
    )
    .bind(&candidate_profile_id)
    .fetch_all(&state.db)
    .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of wishlisted job for candidate {} successfully retrieved.",
            candidate_profile_id
        ),
        wishlist,
    ))
}

/// GET /api/applicant/applied-job/:candidate_profile_id
pub async fn list_applied_jobs(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path(candidate_profile_id): Path<String>,
) -> Result<ApiResponse<Vec<Applicant>>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let applied = sqlx::query_as::<_, Applicant>(
        "SELECT * FROM applicants WHERE candidate_profile_id = ? AND is_only_wish = 0",
    )
    .bind(&candidate_profile_id)
    .fetch_all(&state.db)
    .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "List of applied job for candidate {} successfully retrieved.",
            candidate_profile_id
        ),
        applied,
    ))
}

/// GET /api/applicant/:job_id/:candidate_profile_id
pub async fn get_job_applicant(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
) -> Result<ApiResponse<ApplicantWithProfile>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let applicant = find_applicant(&state.db, &job_id, &candidate_profile_id, Some(false))
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    let candidate_profile = CandidateService::new(state.db.clone())
        .expand_profile_by_id(&applicant.candidate_profile_id)
        .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Candidate {} in list of applicants for job {} successfully retrieved.",
            candidate_profile_id, job_id
        ),
        ApplicantWithProfile {
            applicant,
            candidate_profile,
        },
    ))
}

/// POST /api/applicant
pub async fn create_applicant(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<CreateApplicantRequest>,
) -> Result<ApiResponse<Applicant>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let candidate_profile_id = payload.candidate_profile_id.as_deref().unwrap_or("");
    let job_id = payload.job_id.as_deref().unwrap_or("");

    if candidate_profile_id.is_empty() || job_id.is_empty() {
        return Err(ApiError::bad_request(
            &endpoint,
            "Candidate profile id and Job id is required.",
        ));
    }

    check_job(&state.db, &endpoint, job_id).await?;
    check_candidate_profile(&state.db, &endpoint, candidate_profile_id).await?;

    // Duplicate check ignores the wish flag: one row per pair, either kind
    let existing = find_applicant(&state.db, job_id, candidate_profile_id, None).await?;
    if existing.is_some() {
        return Err(ApiError::conflict(
            &endpoint,
            &format!(
                "Candidate {} is already in job {} as applicant.",
                candidate_profile_id, job_id
            ),
        ));
    }

    let id = generate_applicant_id();
    sqlx::query(
        r#"
        INSERT INTO applicants (id, notes, is_only_wish, is_viewed, candidate_profile_id, job_id)
        VALUES (?, ?, ?, 0, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(payload.notes.as_deref().unwrap_or(""))
    .bind(payload.is_only_wish.unwrap_or(false))
    .bind(candidate_profile_id)
    .bind(job_id)
    .execute(&state.db)
    .await?;

    let new_applicant = sqlx::query_as::<_, Applicant>("SELECT * FROM applicants WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await?;

    info!(applicant_id = %id, job_id = %job_id, "Created applicant record");

    Ok(ApiResponse::created(
        &endpoint,
        "New applicant list successfully created.",
        new_applicant,
    ))
}

/// PATCH /api/applicant/:job_id/:candidate_profile_id/notes
pub async fn update_notes(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
    Json(payload): Json<UpdateNotesRequest>,
) -> Result<ApiResponse<Applicant>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let applicant = find_applicant(&state.db, &job_id, &candidate_profile_id, Some(false))
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    sqlx::query("UPDATE applicants SET notes = COALESCE(?, notes) WHERE id = ?")
        .bind(&payload.notes)
        .bind(&applicant.id)
        .execute(&state.db)
        .await?;

    let updated = sqlx::query_as::<_, Applicant>("SELECT * FROM applicants WHERE id = ?")
        .bind(&applicant.id)
        .fetch_one(&state.db)
        .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Notes for candidate {} that applied in job {} successfully updated;",
            candidate_profile_id, job_id
        ),
        updated,
    ))
}

/// PATCH /api/applicant/:job_id/:candidate_profile_id/apply-status
pub async fn update_apply_status(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
    Json(payload): Json<UpdateApplyStatusRequest>,
) -> Result<ApiResponse<Applicant>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    // Any wish state; this is how a wishlist row turns into an application
    let applicant = find_applicant(&state.db, &job_id, &candidate_profile_id, None)
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    sqlx::query("UPDATE applicants SET is_only_wish = COALESCE(?, is_only_wish) WHERE id = ?")
        .bind(payload.is_only_wish)
        .bind(&applicant.id)
        .execute(&state.db)
        .await?;

    let updated = sqlx::query_as::<_, Applicant>("SELECT * FROM applicants WHERE id = ?")
        .bind(&applicant.id)
        .fetch_one(&state.db)
        .await?;

    info!(applicant_id = %applicant.id, "Updated apply status");

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "Apply status for candidate {} that applied in job {} successfully updated;",
            candidate_profile_id, job_id
        ),
        updated,
    ))
}

/// PATCH /api/applicant/:job_id/:candidate_profile_id/view-application
pub async fn view_application(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((job_id, candidate_profile_id)): Path<(String, String)>,
) -> Result<ApiResponse<Applicant>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let applicant = find_applicant(&state.db, &job_id, &candidate_profile_id, Some(false))
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    sqlx::query("UPDATE applicants SET is_viewed = 1 WHERE id = ?")
        .bind(&applicant.id)
        .execute(&state.db)
        .await?;

    let updated = sqlx::query_as::<_, Applicant>("SELECT * FROM applicants WHERE id = ?")
        .bind(&applicant.id)
        .fetch_one(&state.db)
        .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        &format!(
            "HR has viewed the application for candidate {} that applied in job {}",
            candidate_profile_id, job_id
        ),
        updated,
    ))
}

/// DELETE /api/applicant/wishlist/:candidate_profile_id/:job_id
pub async fn delete_wishlist_entry(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((candidate_profile_id, job_id)): Path<(String, String)>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let applicant = find_applicant(&state.db, &job_id, &candidate_profile_id, Some(true))
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    sqlx::query("DELETE FROM applicants WHERE id = ?")
        .bind(&applicant.id)
        .execute(&state.db)
        .await?;

    info!(applicant_id = %applicant.id, "Deleted wishlist entry");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!(
            "Job {} in wishlist from candidate {} successfully deleted.",
            job_id, candidate_profile_id
        ),
        None,
    ))
}

/// DELETE /api/applicant/applied-job/:candidate_profile_id/:job_id
pub async fn delete_applied_entry(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Path((candidate_profile_id, job_id)): Path<(String, String)>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    check_job(&state.db, &endpoint, &job_id).await?;
    check_candidate_profile(&state.db, &endpoint, &candidate_profile_id).await?;

    let applicant = find_applicant(&state.db, &job_id, &candidate_profile_id, Some(false))
        .await?
        .ok_or_else(|| pair_not_found(&endpoint, &candidate_profile_id, &job_id))?;

    sqlx::query("DELETE FROM applicants WHERE id = ?")
        .bind(&applicant.id)
        .execute(&state.db)
        .await?;

    info!(applicant_id = %applicant.id, "Deleted applied-job entry");

    Ok(ApiResponse::new(
        StatusCode::OK,
        &endpoint,
        &format!(
            "Job {} in applied job list from candidate {} successfully deleted.",
            job_id, candidate_profile_id
        ),
        None,
    ))
}
