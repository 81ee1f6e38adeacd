//! Authentication routes

use axum::{
    routing::{delete, patch, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /api/auth/signup` - Register a new account
/// - `POST /api/auth/login` - Email and password login
/// - `POST /api/auth/admin` - Register an account with an explicit role
/// - `POST /api/auth/link` - Create or mail an officer signup link
/// - `POST /api/auth/get-started/email` - Send a signup verification code
/// - `POST /api/auth/get-started/verify` - Check a signup verification code
/// - `POST /api/auth/forgot-password` - Send a password reset code
/// - `POST /api/auth/forgot-password/verify` - Check a reset code
/// - `POST /api/auth/forgot-password/new-password` - Apply a new password
/// - `DELETE /api/auth/logout` - Logout (client-side token removal)
/// - `PATCH /api/auth/validate-token` - Validate tokens, rotate the refresh token
pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/auth/signup", post(handlers::signup))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/admin", post(handlers::create_admin))
        .route("/api/auth/link", post(handlers::create_invite_link))
        .route("/api/auth/get-started/email", post(handlers::get_started_email))
        .route("/api/auth/get-started/verify", post(handlers::verify_signup_code))
        .route("/api/auth/forgot-password", post(handlers::forgot_password))
        .route(
            "/api/auth/forgot-password/verify",
            post(handlers::verify_reset_code),
        )
        .route(
            "/api/auth/forgot-password/new-password",
            post(handlers::apply_new_password),
        )
        .route("/api/auth/logout", delete(handlers::logout))
        .route("/api/auth/validate-token", patch(handlers::validate_token))
}
