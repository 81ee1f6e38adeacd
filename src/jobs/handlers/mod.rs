// src/jobs/handlers/mod.rs

pub mod listings;
pub mod search;

use sqlx::SqlitePool;

use super::models::Job;
use crate::common::ApiError;

pub(super) async fn check_company(
    db: &SqlitePool,
    endpoint: &str,
    company_id: &str,
) -> Result<(), ApiError> {
    let company: Option<(String,)> = sqlx::query_as("SELECT id FROM companies WHERE id = ?")
        .bind(company_id)
        .fetch_optional(db)
        .await?;
    if company.is_none() {
        return Err(ApiError::not_found(endpoint, "Company id not found."));
    }
    Ok(())
}

/// Looks up a job scoped to one company, the form every pair route uses
pub(super) async fn find_company_job(
    db: &SqlitePool,
    job_id: &str,
    company_id: &str,
) -> Result<Option<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ? AND company_id = ?")
        .bind(job_id)
        .bind(company_id)
        .fetch_optional(db)
        .await
}
