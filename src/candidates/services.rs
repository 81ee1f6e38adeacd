// src/candidates/services.rs

use sqlx::SqlitePool;

use super::models::{CandidateProfile, CandidateProfileDetail};
use crate::auth::models::User;
use crate::profile::models::{Education, LangAbility, Resume, Skill, WorkExperience};

/// Assembles the full candidate view the recruitment pipeline routes return
///
/// The detail bundles the profile row with its user and every record type
/// hanging off it, fetched in sequence on the shared pool.
pub struct CandidateService {
    db: SqlitePool,
}

impl CandidateService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn expand_profile(
        &self,
        profile: CandidateProfile,
    ) -> Result<CandidateProfileDetail, sqlx::Error> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(&profile.user_id)
            .fetch_one(&self.db)
            .await?;

        let education =
            sqlx::query_as::<_, Education>("SELECT * FROM educations WHERE candidate_profile_id = ?")
                .bind(&profile.id)
                .fetch_all(&self.db)
                .await?;

        let lang_ability = sqlx::query_as::<_, LangAbility>(
            "SELECT * FROM lang_abilities WHERE candidate_profile_id = ?",
        )
        .bind(&profile.id)
        .fetch_all(&self.db)
        .await?;

        let resume =
            sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE candidate_profile_id = ?")
                .bind(&profile.id)
                .fetch_optional(&self.db)
                .await?;

        let skill =
            sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE candidate_profile_id = ?")
                .bind(&profile.id)
                .fetch_all(&self.db)
                .await?;

        let work_experience = sqlx::query_as::<_, WorkExperience>(
            "SELECT * FROM work_experiences WHERE candidate_profile_id = ?",
        )
        .bind(&profile.id)
        .fetch_all(&self.db)
        .await?;

        Ok(CandidateProfileDetail {
            profile,
            user,
            education,
            lang_ability,
            resume,
            skill,
            work_experience,
        })
    }

    pub async fn expand_profile_by_id(
        &self,
        candidate_profile_id: &str,
    ) -> Result<CandidateProfileDetail, sqlx::Error> {
        let profile =
            sqlx::query_as::<_, CandidateProfile>("SELECT * FROM candidate_profiles WHERE id = ?")
                .bind(candidate_profile_id)
                .fetch_one(&self.db)
                .await?;
        self.expand_profile(profile).await
    }
}
