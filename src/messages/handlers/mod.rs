// src/messages/handlers/mod.rs

pub mod chat;
pub mod rest;

use sqlx::SqlitePool;

pub(super) async fn user_exists(db: &SqlitePool, user_id: &str) -> Result<bool, sqlx::Error> {
    let user: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(db)
        .await?;
    Ok(user.is_some())
}
