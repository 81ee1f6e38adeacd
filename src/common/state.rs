// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::messages::services::ChatHub;
use crate::services::{CodeCache, FileHostClient, Mailer, TokenService};

/// Application state containing the database pool and injected services
///
/// Everything here is constructed once in `main` and handed to handlers
/// through an Extension layer; no service reads its own globals.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub frontend_base_url: String,
    pub tokens: Arc<TokenService>,
    pub codes: Arc<CodeCache>,
    pub mailer: Arc<Mailer>,
    pub file_host: Arc<FileHostClient>,
    pub chat_hub: ChatHub,
}

/// Shared handle handed to handlers through the Extension layer
pub type SharedState = Arc<RwLock<AppState>>;
