//! Message data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Direct message database model
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub is_read: bool,
    pub created_date: String,
    pub recipient_id: String,
    pub sender_id: String,
}

/// POST /api/message request body
#[derive(Deserialize, Debug)]
pub struct CreateMessageRequest {
    pub content: Option<String>,
    pub is_read: Option<bool>,
    pub created_date: Option<String>,
    pub recipient_id: Option<String>,
    pub sender_id: Option<String>,
}
