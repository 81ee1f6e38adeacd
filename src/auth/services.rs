// src/auth/services.rs
//! Account creation and credential checks

use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{info, warn};

use super::models::{LoginData, SignupData, User};
use crate::common::{generate_user_id, ApiError};
use crate::services::passwords;
use crate::services::TokenService;

pub struct AuthService {
    db: SqlitePool,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(db: SqlitePool, tokens: Arc<TokenService>) -> Self {
        Self { db, tokens }
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;
        Ok(user)
    }

    /// Create an account and issue its first token pair
    pub async fn signup(
        &self,
        endpoint: &str,
        fullname: &str,
        email: &str,
        raw_password: &str,
        role: &str,
    ) -> Result<SignupData, ApiError> {
        if self.find_user_by_email(email).await?.is_some() {
            return Err(ApiError::conflict(endpoint, "Email is already exists."));
        }

        let password_hash = passwords::hash_password(raw_password)
            .map_err(|e| ApiError::internal(endpoint, &e.to_string()))?;

        let id = generate_user_id();
        sqlx::query("INSERT INTO users (id, name, email, password, role) VALUES (?, ?, ?, ?, ?)")
            .bind(&id)
            .bind(fullname)
            .bind(email)
            .bind(&password_hash)
            .bind(role)
            .execute(&self.db)
            .await?;

        let new_user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(&id)
            .fetch_one(&self.db)
            .await?;

        let access_token = self
            .tokens
            .issue_access_token(&new_user.name, &new_user.email)
            .map_err(|e| ApiError::internal(endpoint, &e.to_string()))?;
        let refresh_token = self
            .tokens
            .issue_refresh_token()
            .map_err(|e| ApiError::internal(endpoint, &e.to_string()))?;

        info!(user_id = %new_user.id, role = %role, "Created user account");

        Ok(SignupData {
            new_user,
            access_token,
            refresh_token,
        })
    }

    /// Verify credentials and issue a token pair
    pub async fn login(
        &self,
        endpoint: &str,
        email: &str,
        raw_password: &str,
    ) -> Result<LoginData, ApiError> {
        let user = self
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| ApiError::not_found(endpoint, "User is not found."))?;

        let verified = passwords::verify_password(raw_password, &user.password)
            .map_err(|e| ApiError::internal(endpoint, &e.to_string()))?;
        if !verified {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(ApiError::unauthorized(
                endpoint,
                "Login failed. Please try again.",
            ));
        }

        let access_token = self
            .tokens
            .issue_access_token(&user.name, &user.email)
            .map_err(|e| ApiError::internal(endpoint, &e.to_string()))?;
        let refresh_token = self
            .tokens
            .issue_refresh_token()
            .map_err(|e| ApiError::internal(endpoint, &e.to_string()))?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginData {
            role: user.role,
            id: user.id,
            access_token,
            refresh_token,
        })
    }

    /// Replace the password of an existing account
    pub async fn change_password(
        &self,
        endpoint: &str,
        email: &str,
        raw_password: &str,
    ) -> Result<User, ApiError> {
        let user = self
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| ApiError::not_found(endpoint, "Email is not found."))?;

        let password_hash = passwords::hash_password(raw_password)
            .map_err(|e| ApiError::internal(endpoint, &e.to_string()))?;

        sqlx::query("UPDATE users SET password = ? WHERE id = ?")
            .bind(&password_hash)
            .bind(&user.id)
            .execute(&self.db)
            .await?;

        let updated = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(&user.id)
            .fetch_one(&self.db)
            .await?;

        info!(user_id = %updated.id, "Password changed");

        Ok(updated)
    }
}
