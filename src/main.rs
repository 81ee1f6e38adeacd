// src/main.rs
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json, Router};
use dotenv::dotenv;
use reqwest::Client;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::path::PathBuf;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod auth;
mod candidates;
mod common;
mod companies;
mod jobs;
mod messages;
mod notifications;
mod officers;
mod profile;
mod services;
mod users;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use common::AppState;
use services::{CodeCache, FileHostClient, Mailer, TokenService};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://recruit_api.db".to_string());
    let frontend_base_url =
        env::var("FRONTEND_BASEURL").unwrap_or_else(|_| "http://localhost:5173".to_string());
    let access_secret = env::var("ACCESS_TOKEN_SECRET")
        .unwrap_or_else(|_| "replace_with_strong_secret".to_string());
    let refresh_secret = env::var("REFRESH_TOKEN_SECRET")
        .unwrap_or_else(|_| "replace_with_strong_refresh_secret".to_string());

    // ========================================================================
    // DATABASE SETUP
    // ========================================================================

    if let Some(path_part) = database_url.strip_prefix("sqlite://") {
        let path_without_params = path_part.split('?').next().unwrap_or("");
        if !path_without_params.is_empty() && !path_without_params.starts_with(':') {
            let db_path = PathBuf::from(path_without_params);
            if let Some(parent) = db_path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let connect_options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await?;

    // Run database migrations
    common::migrations::run_migrations(&pool).await?;

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let http_client = Client::builder().no_proxy().build()?;

    let tokens = Arc::new(TokenService::new(access_secret, refresh_secret));
    info!("TokenService initialized");

    let codes = CodeCache::new();
    CodeCache::start_cleanup_task(codes.clone());
    info!("CodeCache initialized, cleanup task started");

    let mailer = Arc::new(Mailer::from_env());
    info!("Mailer initialized");

    let file_host = Arc::new(FileHostClient::from_env(http_client));
    info!("FileHostClient initialized");

    let chat_hub = messages::ChatHub::new();
    messages::ChatHub::start_sweep_task(chat_hub.clone());
    info!("ChatHub initialized, sweep task started");

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let app_state = AppState {
        db: pool,
        frontend_base_url,
        tokens,
        codes: Arc::new(codes),
        mailer,
        file_host,
        chat_hub,
    };

    let shared = Arc::new(RwLock::new(app_state));

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let app = Router::new()
        // ====================================================================
        // AUTHENTICATION ROUTES
        // ====================================================================
        .merge(auth::auth_routes())
        // ====================================================================
        // USER ROUTES (Password, Role, Deletion Cascade)
        // ====================================================================
        .merge(users::user_routes())
        // ====================================================================
        // COMPANY ROUTES
        // ====================================================================
        .merge(companies::company_routes())
        // ====================================================================
        // OFFICER ROUTES
        // ====================================================================
        .merge(officers::officer_routes())
        // ====================================================================
        // PROFILE ROUTES (Profile, Education, Skills, Languages, Work, Resume)
        // ====================================================================
        .merge(profile::profile_routes())
        // ====================================================================
        // CANDIDATE ROUTES (Wishlist, Applications, Hiring Pipeline)
        // ====================================================================
        .merge(candidates::candidate_routes())
        // ====================================================================
        // JOB ROUTES (Listings and Search)
        // ====================================================================
        .merge(jobs::job_routes())
        // ====================================================================
        // MESSAGING ROUTES (WebSocket and REST API)
        // ====================================================================
        .merge(messages::message_routes())
        // ====================================================================
        // NOTIFICATION ROUTES
        // ====================================================================
        .merge(notifications::notification_routes())
        // ====================================================================
        // MIDDLEWARE AND LAYERS
        // ====================================================================
        .fallback(endpoint_not_found)
        .layer(Extension(shared.clone()))
        .layer({
            // Get CORS origins from environment variable
            let cors_origins = std::env::var("CORS_ORIGINS").unwrap_or_else(|_| {
                "http://localhost:3000,http://localhost:5173".to_string()
            });

            let origins: Vec<axum::http::HeaderValue> = cors_origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::PATCH,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                ])
                .allow_credentials(true)
        })
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

// ============================================================================
// FALLBACK HANDLER
// ============================================================================

/// Catch-all for requests no route matched
async fn endpoint_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "status": "404 - Not Found",
            "message": "API endpoint not exists!"
        })),
    )
}
