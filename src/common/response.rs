// Success response envelope shared by every route

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

/// Render a status line like "201 - Created"
///
/// The 200 reason is spelled "Ok" rather than the RFC's all-caps "OK";
/// clients match on these strings.
pub fn status_line(status: StatusCode) -> String {
    let reason = match status {
        StatusCode::OK => "Ok",
        other => other.canonical_reason().unwrap_or("Unknown"),
    };
    format!("{} - {}", status.as_u16(), reason)
}

/// Request path (with query string when present), echoed back as `endpoint`
pub fn endpoint_path(uri: &Uri) -> String {
    match uri.path_and_query() {
        Some(pq) => pq.to_string(),
        None => uri.path().to_string(),
    }
}

/// JSON success envelope
///
/// Every successful route answers with the same shape:
/// `{ "endpoint": "/api/...", "status": "200 - Ok", "message": "...", "data": ... }`
/// where `data` is omitted when a route has nothing to return.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip)]
    code: StatusCode,
    pub endpoint: String,
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(code: StatusCode, endpoint: &str, message: &str, data: Option<T>) -> Self {
        Self {
            code,
            endpoint: endpoint.to_string(),
            status: status_line(code),
            message: message.to_string(),
            data,
        }
    }

    /// 200 with payload
    pub fn ok(endpoint: &str, message: &str, data: T) -> Self {
        Self::new(StatusCode::OK, endpoint, message, Some(data))
    }

    /// 201 with payload
    pub fn created(endpoint: &str, message: &str, data: T) -> Self {
        Self::new(StatusCode::CREATED, endpoint, message, Some(data))
    }
}

impl ApiResponse<()> {
    /// 204; the envelope is built for logging but never sent (no body on 204)
    pub fn no_content(endpoint: &str, message: &str) -> Self {
        Self::new(StatusCode::NO_CONTENT, endpoint, message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let code = self.code;
        if code == StatusCode::NO_CONTENT {
            return code.into_response();
        }
        (code, Json(self)).into_response()
    }
}
