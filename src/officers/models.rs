//! Officer data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::auth::models::User;

/// Officer database model, an HR account attached to a company
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Officer {
    pub id: String,
    pub position: String,
    pub is_resigned: bool,
    pub user_id: String,
    pub company_id: String,
}

/// Officer with its user row joined in
#[derive(Serialize, Debug)]
pub struct OfficerWithUser {
    #[serde(flatten)]
    pub officer: Officer,
    pub user: User,
}

/// POST /api/officer request body
#[derive(Deserialize, Debug)]
pub struct CreateOfficerRequest {
    pub position: Option<String>,
    pub user_id: Option<String>,
    pub company_id: Option<String>,
}

/// PATCH /api/officer/:id request body; absent fields keep their value
#[derive(Deserialize, Debug)]
pub struct UpdateOfficerRequest {
    pub position: Option<String>,
    pub is_resigned: Option<bool>,
    pub user_id: Option<String>,
    pub company_id: Option<String>,
}
