//! Authentication handlers

use axum::extract::{Extension, Json, OriginalUri};
use axum::http::StatusCode;
use sha2::{Digest, Sha256};
use tracing::{info, warn};
use uuid::Uuid;

use super::extractors::BearerClaims;
use super::models::{
    AdminSignupRequest, EmailRequest, InviteLinkData, InviteLinkRequest, LoginData, LoginRequest,
    NewPasswordRequest, RefreshedTokenData, SignupData, SignupRequest, ValidateTokenRequest,
    VerificationData, VerifyCodeRequest,
};
use super::services::AuthService;
use super::validators::{
    self, AdminSignupValidator, LoginValidator, NewPasswordValidator, SignupValidator,
};
use crate::common::{endpoint_path, ApiError, ApiResponse, AppState, SharedState, Validator};
use crate::services::code_cache::{generate_verification_code, CodePurpose, RedeemOutcome};

/// POST /api/auth/signup
/// Registers a new account
///
/// A signup that follows a mailed officer link carries `inv_id`,
/// `inviteToken` and `role_id`; the invite is redeemed before the account
/// is created and the cached role replaces the default "applicant".
pub async fn signup(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<SignupRequest>,
) -> Result<ApiResponse<SignupData>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let check = SignupValidator.validate(&payload);
    if !check.is_valid {
        return Err(ApiError::from_validation(&endpoint, check));
    }

    let fullname = payload.fullname.unwrap_or_default();
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let auth = AuthService::new(state.db.clone(), state.tokens.clone());
    if auth.find_user_by_email(&email).await?.is_some() {
        return Err(ApiError::conflict(&endpoint, "Email is already exists."));
    }

    let mut role = "applicant".to_string();
    if let (Some(inv_id), Some(invite_token)) = (&payload.inv_id, &payload.invite_token) {
        match state
            .codes
            .redeem(CodePurpose::OfficerInvite, inv_id, invite_token)
            .await
        {
            RedeemOutcome::Matched => {
                if let Some(role_id) = &payload.role_id {
                    if let Some(cached_role) =
                        state.codes.get(CodePurpose::InviteRole, role_id).await
                    {
                        role = cached_role;
                    }
                }
            }
            _ => {
                warn!("Signup with stale or mismatched invite token");
                return Err(ApiError::bad_request(&endpoint, "Invite token is invalid."));
            }
        }
    }

    let data = auth
        .signup(&endpoint, &fullname, &email, &password, &role)
        .await?;

    Ok(ApiResponse::created(
        &endpoint,
        "Successfully signed up new user.",
        data,
    ))
}

/// POST /api/auth/login
/// Email + password login
pub async fn login(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<LoginRequest>,
) -> Result<ApiResponse<LoginData>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let check = LoginValidator.validate(&payload);
    if !check.is_valid {
        return Err(ApiError::from_validation(&endpoint, check));
    }

    let auth = AuthService::new(state.db.clone(), state.tokens.clone());
    let data = auth
        .login(
            &endpoint,
            payload.email.as_deref().unwrap_or(""),
            payload.password.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        "Successfully logged in for current user.",
        data,
    ))
}

/// POST /api/auth/admin
/// Registers an account carrying an explicit role
pub async fn create_admin(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<AdminSignupRequest>,
) -> Result<ApiResponse<SignupData>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let check = AdminSignupValidator.validate(&payload);
    if !check.is_valid {
        return Err(ApiError::from_validation(&endpoint, check));
    }

    let auth = AuthService::new(state.db.clone(), state.tokens.clone());
    let data = auth
        .signup(
            &endpoint,
            payload.fullname.as_deref().unwrap_or(""),
            payload.email.as_deref().unwrap_or(""),
            payload.password.as_deref().unwrap_or(""),
            payload.role.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(ApiResponse::created(
        &endpoint,
        "Successfully created a new admin.",
        data,
    ))
}

/// POST /api/auth/link
/// Creates an officer signup link, optionally mailing it out
///
/// The link carries two cache ids: `key` resolves the invite digest the
/// signup must echo back, `role` resolves the role the new account gets.
/// Both entries live for an hour. The `access` and `link` fields are decoy
/// uuids keeping the mailed link uniform in shape.
pub async fn create_invite_link(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<InviteLinkRequest>,
) -> Result<ApiResponse<InviteLinkData>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let email = payload.email.as_deref().unwrap_or("");
    let role = payload.role.as_deref().unwrap_or("");
    let company_id = payload.company_id.as_deref().unwrap_or("");

    if email.is_empty() || role.is_empty() || company_id.is_empty() || payload.send_email.is_none()
    {
        return Err(ApiError::bad_request(
            &endpoint,
            "Email, Role, Company id and Method is required.",
        ));
    }
    if !validators::is_valid_email(email) {
        return Err(ApiError::bad_request(&endpoint, "Email is not valid"));
    }

    let auth = AuthService::new(state.db.clone(), state.tokens.clone());
    if auth.find_user_by_email(email).await?.is_some() {
        return Err(ApiError::conflict(&endpoint, "Email is already exists."));
    }

    let company: Option<(String,)> = sqlx::query_as("SELECT id FROM companies WHERE id = ?")
        .bind(company_id)
        .fetch_optional(&state.db)
        .await?;
    if company.is_none() {
        return Err(ApiError::not_found(&endpoint, "Company id is not exists."));
    }

    let inv_id = Uuid::new_v4().to_string();
    let invite_token = hex::encode(Sha256::digest(email.as_bytes()));
    state
        .codes
        .put(CodePurpose::OfficerInvite, &inv_id, &invite_token)
        .await;

    let role_id = Uuid::new_v4().to_string();
    state.codes.put(CodePurpose::InviteRole, &role_id, role).await;

    let link = format!(
        "{}/auth/signup?access={}&link={}&invite={}&email={}&key={}&token={}&role={}",
        state.frontend_base_url,
        Uuid::new_v4(),
        Uuid::new_v4(),
        company_id,
        urlencoding::encode(email),
        inv_id,
        invite_token,
        role_id
    );

    if payload.send_email == Some(false) {
        info!(company_id = %company_id, "Created officer signup link");
        Ok(ApiResponse::created(
            &endpoint,
            "A sign up link for the officer successfully created.",
            InviteLinkData { link },
        ))
    } else {
        state.mailer.send_signup_link(email, &link).await;
        info!(company_id = %company_id, "Mailed officer signup link");
        Ok(ApiResponse::new(
            StatusCode::CREATED,
            &endpoint,
            "A sign up link for the officer successfully sent to via email.",
            None,
        ))
    }
}

/// POST /api/auth/get-started/email
/// Sends a verification code to an address that is not registered yet
pub async fn get_started_email(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<EmailRequest>,
) -> Result<ApiResponse<VerificationData>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let email = payload.email.unwrap_or_default();
    if email.is_empty() {
        return Err(ApiError::bad_request(&endpoint, "Email is required."));
    }
    if !validators::is_valid_email(&email) {
        return Err(ApiError::bad_request(&endpoint, "Email is not valid"));
    }

    let auth = AuthService::new(state.db.clone(), state.tokens.clone());
    if auth.find_user_by_email(&email).await?.is_some() {
        return Err(ApiError::conflict(&endpoint, "Email is already exists."));
    }

    let data = issue_verification_code(&state, CodePurpose::EmailVerification, email).await;
    Ok(ApiResponse::ok(
        &endpoint,
        "A verification code successfully sent to the email.",
        data,
    ))
}

/// POST /api/auth/get-started/verify
/// Checks a signup verification code
pub async fn verify_signup_code(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<VerifyCodeRequest>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();
    verify_code(&state, &endpoint, CodePurpose::EmailVerification, payload).await
}

/// POST /api/auth/forgot-password
/// Sends a reset code to a registered address
pub async fn forgot_password(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<EmailRequest>,
) -> Result<ApiResponse<VerificationData>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let email = payload.email.unwrap_or_default();
    if email.is_empty() {
        return Err(ApiError::bad_request(&endpoint, "Email is required."));
    }
    if !validators::is_valid_email(&email) {
        return Err(ApiError::bad_request(&endpoint, "Email is not valid"));
    }

    let auth = AuthService::new(state.db.clone(), state.tokens.clone());
    if auth.find_user_by_email(&email).await?.is_none() {
        return Err(ApiError::not_found(&endpoint, "Email is not found."));
    }

    let data = issue_verification_code(&state, CodePurpose::PasswordReset, email).await;
    Ok(ApiResponse::ok(
        &endpoint,
        "A verification code successfully sent to the email.",
        data,
    ))
}

/// POST /api/auth/forgot-password/verify
/// Checks a password reset code
pub async fn verify_reset_code(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<VerifyCodeRequest>,
) -> Result<ApiResponse<()>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();
    verify_code(&state, &endpoint, CodePurpose::PasswordReset, payload).await
}

/// POST /api/auth/forgot-password/new-password
/// Applies a new password after a verified reset
pub async fn apply_new_password(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<NewPasswordRequest>,
) -> Result<ApiResponse<super::models::User>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let check = NewPasswordValidator.validate(&payload);
    if !check.is_valid {
        return Err(ApiError::from_validation(&endpoint, check));
    }

    let auth = AuthService::new(state.db.clone(), state.tokens.clone());
    let updated = auth
        .change_password(
            &endpoint,
            payload.email.as_deref().unwrap_or(""),
            payload.newpassword.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(ApiResponse::ok(
        &endpoint,
        "New password successfully applied. Login to continue.",
        updated,
    ))
}

/// DELETE /api/auth/logout
/// Stateless logout; the client drops its tokens
pub async fn logout(OriginalUri(uri): OriginalUri) -> ApiResponse<()> {
    ApiResponse::no_content(
        &endpoint_path(&uri),
        "Logout successful. Redirected to login page.",
    )
}

/// PATCH /api/auth/validate-token
/// Validates the access and refresh tokens and rotates the refresh token
///
/// The access token travels in the Authorization header, the refresh token
/// in the body. A valid pair answers with a freshly minted refresh token,
/// sliding the seven-day window forward.
pub async fn validate_token(
    Extension(state_lock): Extension<SharedState>,
    OriginalUri(uri): OriginalUri,
    BearerClaims(_claims): BearerClaims,
    Json(payload): Json<ValidateTokenRequest>,
) -> Result<ApiResponse<RefreshedTokenData>, ApiError> {
    let endpoint = endpoint_path(&uri);
    let state = state_lock.read().await.clone();

    let refresh_token = payload.refresh_token.as_deref().unwrap_or("");
    if refresh_token.is_empty() {
        return Err(ApiError::unauthorized(
            &endpoint,
            "Token not found! Please provide a token.",
        ));
    }

    if let Err(e) = state.tokens.validate_refresh_token(refresh_token) {
        warn!(error = %e, "Refresh token validation failed");
        return Err(ApiError::forbidden(&endpoint, "Invalid or expired token."));
    }

    let refreshed = state
        .tokens
        .issue_refresh_token()
        .map_err(|e| ApiError::internal(&endpoint, &e.to_string()))?;

    Ok(ApiResponse::ok(
        &endpoint,
        "Token validated.",
        RefreshedTokenData {
            refresh_token: refreshed,
        },
    ))
}

/// Issue a fresh code under a new cache id and mail it out
async fn issue_verification_code(
    state: &AppState,
    purpose: CodePurpose,
    email: String,
) -> VerificationData {
    let verification_code = generate_verification_code();
    let id = Uuid::new_v4().to_string();
    state.codes.put(purpose, &id, &verification_code).await;
    state
        .mailer
        .send_verification_code(&email, &verification_code)
        .await;

    VerificationData {
        id,
        verification_code,
        email,
    }
}

/// Shared verification for both /verify routes
async fn verify_code(
    state: &AppState,
    endpoint: &str,
    purpose: CodePurpose,
    payload: VerifyCodeRequest,
) -> Result<ApiResponse<()>, ApiError> {
    let code = payload.verification_code.as_deref().unwrap_or("");
    if code.is_empty() {
        return Err(ApiError::bad_request(
            endpoint,
            "Verification code is required.",
        ));
    }
    if code.chars().count() != 6 {
        return Err(ApiError::bad_request(
            endpoint,
            "Verification code must be in correct length.",
        ));
    }

    let id = payload.id.as_deref().unwrap_or("");
    match state.codes.redeem(purpose, id, code).await {
        RedeemOutcome::NotFound => Err(ApiError::not_found(
            endpoint,
            "Verification code is not found.",
        )),
        RedeemOutcome::Mismatched => Err(ApiError::bad_request(
            endpoint,
            "Verification code is incorrect.",
        )),
        RedeemOutcome::Matched => Ok(ApiResponse::new(
            StatusCode::OK,
            endpoint,
            "Verification code is correct.",
            None,
        )),
    }
}
