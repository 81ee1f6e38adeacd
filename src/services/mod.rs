// src/services/mod.rs
//
// Shared services module containing cross-domain clients and helpers
// that can be used across different domain modules

pub mod code_cache;
pub mod file_host;
pub mod mailer;
pub mod passwords;
pub mod tokens;

// Re-export commonly used types for convenience
pub use code_cache::{CodeCache, CodePurpose, RedeemOutcome};
pub use file_host::FileHostClient;
pub use mailer::Mailer;
pub use tokens::TokenService;
