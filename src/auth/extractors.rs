//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::warn;

use crate::common::{endpoint_path, ApiError, SharedState};
use crate::services::tokens::AccessClaims;

/// Bearer access-token extractor
///
/// Routes behind it answer 401 when no token travels in the Authorization
/// header and 403 when the signature check fails. The header format is
/// "Bearer <token>"; the scheme word is ignored, only the second field
/// counts.
#[derive(Debug)]
pub struct BearerClaims(pub AccessClaims);

#[async_trait]
impl<S> FromRequestParts<S> for BearerClaims
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let endpoint = endpoint_path(&parts.uri);

        let Extension(state_lock): Extension<SharedState> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::internal(&endpoint, "missing app state"))?;

        let app_state = state_lock.read().await.clone();

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|value| value.split(' ').nth(1));

        let token = match token {
            Some(t) => t,
            None => {
                warn!("Token validation failed: missing bearer token");
                return Err(ApiError::unauthorized(
                    &endpoint,
                    "Token not found! Please provide a token.",
                ));
            }
        };

        match app_state.tokens.decode_access_token(token) {
            Ok(claims) => Ok(BearerClaims(claims)),
            Err(e) => {
                warn!(error = %e, "Token validation failed: bad access token");
                Err(ApiError::forbidden(&endpoint, "Invalid or expired token."))
            }
        }
    }
}
