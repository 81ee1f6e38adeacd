// src/profile/handlers/mod.rs

pub mod education;
pub mod lang_ability;
pub mod resume;
pub mod skill;
pub mod work_experience;

use sqlx::SqlitePool;

use crate::common::ApiError;

/// List routes 404 when the profile a record list hangs off does not exist
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
