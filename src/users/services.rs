// src/users/services.rs
//! User account lookups, updates and the account-deletion cascade

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::auth::models::User;
use crate::common::ApiError;
use crate::services::passwords;

pub struct UserService {
    db: SqlitePool,
}

impl UserService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, endpoint: &str, id: &str) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| ApiError::not_found(endpoint, "User id is not found."))
    }

    /// Update name and email, returning the updated row
    pub async fn update_info(
        &self,
        endpoint: &str,
        id: &str,
        email: &str,
        name: &str,
    ) -> Result<User, ApiError> {
        self.get_user(endpoint, id).await?;

        sqlx::query("UPDATE users SET email = ?, name = ? WHERE id = ?")
            .bind(email)
            .bind(name)
            .bind(id)
            .execute(&self.db)
            .await?;

        let updated = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.db)
            .await?;

        info!(user_id = %id, "Updated user info");

        Ok(updated)
    }

    /// Verify the current password, then store a new hash
    pub async fn change_password(
        &self,
        endpoint: &str,
        id: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let user = self.get_user(endpoint, id).await?;

        let verified = passwords::verify_password(current_password, &user.password)
            .map_err(|e| ApiError::internal(endpoint, &e.to_string()))?;
        if !verified {
            warn!(user_id = %id, "Password change attempt with wrong current password");
            return Err(ApiError::unauthorized(
                endpoint,
                "Current password is incorrect.",
            ));
        }

        let password_hash = passwords::hash_password(new_password)
            .map_err(|e| ApiError::internal(endpoint, &e.to_string()))?;

        sqlx::query("UPDATE users SET password = ? WHERE id = ?")
            .bind(&password_hash)
            .bind(id)
            .execute(&self.db)
            .await?;

        info!(user_id = %id, "Password changed");

        Ok(())
    }

    /// Delete an account and every row that hangs off it
    ///
    /// Runs in a single transaction so a failure partway leaves the
    /// account intact rather than half-dismantled. Profile-linked rows
    /// go first, then the profile, then messages, notifications and
    /// officer rows, then the user itself.
    pub async fn delete_user(&self, endpoint: &str, id: &str) -> Result<(), ApiError> {
        self.get_user(endpoint, id).await?;

        let mut tx = self.db.begin().await?;

        let profile: Option<(String,)> =
            sqlx::query_as("SELECT id FROM candidate_profiles WHERE user_id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if let Some((profile_id,)) = profile {
            for table in [
                "applicants",
                "shortlisted_candidates",
                "successful_candidates",
                "educations",
                "skills",
                "lang_abilities",
                "work_experiences",
                "resumes",
            ] {
                sqlx::query(&format!(
                    "DELETE FROM {} WHERE candidate_profile_id = ?",
                    table
                ))
                .bind(&profile_id)
                .execute(&mut *tx)
                .await?;
            }

            sqlx::query("DELETE FROM candidate_profiles WHERE id = ?")
                .bind(&profile_id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("DELETE FROM messages WHERE sender_id = ? OR recipient_id = ?")
            .bind(id)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM notifications WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM officers WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(user_id = %id, "Deleted user account and dependents");

        Ok(())
    }
}
