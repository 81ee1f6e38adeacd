// Common module - shared types and utilities across all modules

pub mod error;
pub mod id_generator;
pub mod migrations;
pub mod response;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::ApiError;
pub use id_generator::*;
pub use response::{endpoint_path, ApiResponse};
pub use state::{AppState, SharedState};
pub use validation::{ValidationError, ValidationResult, Validator};
