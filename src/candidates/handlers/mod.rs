// src/candidates/handlers/mod.rs

pub mod applicants;
pub mod profile;
pub mod shortlisted;
pub mod successful;

use sqlx::SqlitePool;

use crate::common::ApiError;

pub(super) async fn check_job(
    db: &SqlitePool,
    endpoint: &str,
    job_id: &str,
) -> Result<(), ApiError> {
    let job: Option<(String,)> = sqlx::query_as("SELECT id FROM jobs WHERE id = ?")
        .bind(job_id)
        .fetch_optional(db)
        .await?;
    if job.is_none() {
        return Err(ApiError::not_found(endpoint, "Job id not found."));
    }
    Ok(())
}

pub(super) async fn check_candidate_profile(
    db: &SqlitePool,
    endpoint: &str,
    candidate_profile_id: &str,
) -> Result<(), ApiError> {
    let profile: Option<(String,)> =
        sqlx::query_as("SELECT id FROM candidate_profiles WHERE id = ?")
            .bind(candidate_profile_id)
            .fetch_optional(db)
            .await?;
    if profile.is_none() {
        return Err(ApiError::not_found(endpoint, "Candidate profile id not found."));
    }
    Ok(())
}

/// The pair-miss message every pipeline table shares; no trailing period
pub(super) fn pair_not_found(endpoint: &str, candidate_profile_id: &str, job_id: &str) -> ApiError {
    ApiError::not_found(
        endpoint,
        &format!(
            "Candidate profile id {} is not included in job {}",
            candidate_profile_id, job_id
        ),
    )
}
