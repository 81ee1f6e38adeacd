//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User database model
///
/// `password` holds the PHC hash string and never serializes into a
/// response body.
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub created_at: Option<String>,
}

/// POST /api/auth/signup request body
///
/// Fields are optional so presence checks can answer with the route's own
/// 400 messages instead of a deserialization rejection. The invite fields
/// arrive only on signups that follow a mailed officer link.
#[derive(Deserialize, Debug)]
pub struct SignupRequest {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirmpassword: Option<String>,
    pub inv_id: Option<String>,
    #[serde(rename = "inviteToken")]
    pub invite_token: Option<String>,
    pub role_id: Option<String>,
}

/// POST /api/auth/admin request body
#[derive(Deserialize, Debug)]
pub struct AdminSignupRequest {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirmpassword: Option<String>,
    pub role: Option<String>,
}

/// POST /api/auth/login request body
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/auth/link request body
#[derive(Deserialize, Debug)]
pub struct InviteLinkRequest {
    pub email: Option<String>,
    pub role: Option<String>,
    pub company_id: Option<String>,
    #[serde(rename = "sendEmail")]
    pub send_email: Option<bool>,
}

/// POST /api/auth/get-started/email and /api/auth/forgot-password body
#[derive(Deserialize, Debug)]
pub struct EmailRequest {
    pub email: Option<String>,
}

/// Verification body shared by both /verify routes
#[derive(Deserialize, Debug)]
pub struct VerifyCodeRequest {
    pub id: Option<String>,
    #[serde(rename = "verificationCode")]
    pub verification_code: Option<String>,
}

/// POST /api/auth/forgot-password/new-password request body
#[derive(Deserialize, Debug)]
pub struct NewPasswordRequest {
    pub email: Option<String>,
    pub newpassword: Option<String>,
    pub confirmnewpassword: Option<String>,
}

/// PATCH /api/auth/validate-token request body
#[derive(Deserialize, Debug)]
pub struct ValidateTokenRequest {
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// Signup response payload
#[derive(Serialize, Debug)]
pub struct SignupData {
    #[serde(rename = "newUser")]
    pub new_user: User,
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// Login response payload
#[derive(Serialize, Debug)]
pub struct LoginData {
    pub role: String,
    pub id: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// Invite link response payload
#[derive(Serialize, Debug)]
pub struct InviteLinkData {
    pub link: String,
}

/// Verification code response payload
///
/// The code itself is echoed back, matching the behavior the frontend's
/// test mode relies on.
#[derive(Serialize, Debug)]
pub struct VerificationData {
    pub id: String,
    #[serde(rename = "verificationCode")]
    pub verification_code: String,
    pub email: String,
}

/// Rotated refresh token payload
#[derive(Serialize, Debug)]
pub struct RefreshedTokenData {
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}
