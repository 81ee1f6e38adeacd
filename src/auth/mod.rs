//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Signup, login and admin account creation
//! - Officer invite links and signup/reset verification codes
//! - JWT access tokens and MAC-backed refresh tokens
//! - BearerClaims extractor for protected routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use extractors::BearerClaims;
pub use models::User;
pub use routes::auth_routes;
