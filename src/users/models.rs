//! User account request payloads
//!
//! The user row itself lives in the auth module; this module only adds
//! the bodies of the two PATCH routes.

use serde::Deserialize;

/// PATCH /api/user/:id/info request body
#[derive(Deserialize, Debug)]
pub struct UpdateInfoRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// PATCH /api/user/:id/password request body
#[derive(Deserialize, Debug)]
pub struct ChangePasswordRequest {
    pub currentpassword: Option<String>,
    pub newpassword: Option<String>,
    pub confirmnewpassword: Option<String>,
}
