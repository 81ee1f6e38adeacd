//! Company data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Company database model
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub website: String,
    pub description: String,
    pub address_line1: String,
    pub address_line2: String,
    pub postal_code: String,
    pub state: String,
    pub city: String,
    pub country: String,
}

/// POST /api/company request body
#[derive(Deserialize, Debug)]
pub struct CreateCompanyRequest {
    pub name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// PATCH /api/company/:id request body
///
/// Absent fields keep their stored value, except `address_line2` which
/// falls back to an empty string like the create route.
#[derive(Deserialize, Debug)]
pub struct UpdateCompanyRequest {
    pub name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}
