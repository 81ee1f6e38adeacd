//! Notification data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Notification database model
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub content: String,
    pub category: String,
    pub is_read: bool,
    pub user_id: String,
}

/// POST /api/notification request body
#[derive(Deserialize, Debug)]
pub struct CreateNotificationRequest {
    pub content: Option<String>,
    pub category: Option<String>,
    pub is_read: Option<bool>,
    pub user_id: Option<String>,
}

/// PATCH /api/notification/:id request body; the owner claims the row
#[derive(Deserialize, Debug)]
pub struct MarkReadRequest {
    pub user_id: Option<String>,
}

/// Row count for the bulk mark-read update
#[derive(Serialize, Debug)]
pub struct BatchCount {
    pub count: u64,
}
