// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::response::status_line;
use super::validation::ValidationResult;

/// API error types
///
/// Each request-scoped variant carries the endpoint it was raised on so the
/// error body matches the success envelope. Database failures surface without
/// a path; their envelope carries only status and a generic message.
#[derive(Debug)]
pub enum ApiError {
    BadRequest { endpoint: String, message: String },
    Unauthorized { endpoint: String, message: String },
    Forbidden { endpoint: String, message: String },
    NotFound { endpoint: String, message: String },
    Conflict { endpoint: String, message: String },
    Internal { endpoint: String, message: String },
    DatabaseError(sqlx::Error),
}

impl ApiError {
    pub fn bad_request(endpoint: &str, message: &str) -> Self {
        ApiError::BadRequest {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub fn unauthorized(endpoint: &str, message: &str) -> Self {
        ApiError::Unauthorized {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub fn forbidden(endpoint: &str, message: &str) -> Self {
        ApiError::Forbidden {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub fn not_found(endpoint: &str, message: &str) -> Self {
        ApiError::NotFound {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub fn conflict(endpoint: &str, message: &str) -> Self {
        ApiError::Conflict {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub fn internal(endpoint: &str, message: &str) -> Self {
        ApiError::Internal {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    /// Convert a failed ValidationResult into a 400 carrying its first message
    ///
    /// Field checks run in request order, so the first recorded error is the
    /// one the client is expected to see.
    pub fn from_validation(endpoint: &str, result: ValidationResult) -> Self {
        let message = result
            .first_message()
            .unwrap_or("Request validation failed.")
            .to_string();
        ApiError::BadRequest {
            endpoint: endpoint.to_string(),
            message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { message, .. } => write!(f, "Bad Request: {}", message),
            ApiError::Unauthorized { message, .. } => write!(f, "Unauthorized: {}", message),
            ApiError::Forbidden { message, .. } => write!(f, "Forbidden: {}", message),
            ApiError::NotFound { message, .. } => write!(f, "Not Found: {}", message),
            ApiError::Conflict { message, .. } => write!(f, "Conflict: {}", message),
            ApiError::Internal { message, .. } => {
                write!(f, "Internal Server Error: {}", message)
            }
            ApiError::DatabaseError(e) => write!(f, "Database Error: {}", e),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::DatabaseError(e)
    }
}

/// JSON error envelope, same shape as the success envelope minus `data`
#[derive(Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint: Option<String>,
    status: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, endpoint, message) = match self {
            ApiError::BadRequest { endpoint, message } => {
                (StatusCode::BAD_REQUEST, Some(endpoint), message)
            }
            ApiError::Unauthorized { endpoint, message } => {
                (StatusCode::UNAUTHORIZED, Some(endpoint), message)
            }
            ApiError::Forbidden { endpoint, message } => {
                (StatusCode::FORBIDDEN, Some(endpoint), message)
            }
            ApiError::NotFound { endpoint, message } => {
                (StatusCode::NOT_FOUND, Some(endpoint), message)
            }
            ApiError::Conflict { endpoint, message } => {
                (StatusCode::CONFLICT, Some(endpoint), message)
            }
            ApiError::Internal { endpoint, message } => {
                error!(endpoint = %endpoint, message = %message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, Some(endpoint), message)
            }
            ApiError::DatabaseError(e) => {
                error!(error = %e, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    "Database operation failed".to_string(),
                )
            }
        };

        let body = ErrorBody {
            endpoint,
            status: status_line(status),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = ApiError::not_found("/api/user/U_1", "User id is not found.");
        assert_eq!(err.to_string(), "Not Found: User id is not found.");
    }

    #[test]
    fn test_from_validation_takes_first_error() {
        let mut result = ValidationResult::new();
        result.add_error("email", "Email is not valid");
        result.add_error("password", "Password is not valid.");

        let err = ApiError::from_validation("/api/auth/signup", result);
        match err {
            ApiError::BadRequest { endpoint, message } => {
                assert_eq!(endpoint, "/api/auth/signup");
                assert_eq!(message, "Email is not valid");
            }
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }
}
