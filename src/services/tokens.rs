// src/services/tokens.rs
//! Access and refresh token issuance
//!
//! Access tokens are HS256 JWTs with no expiry claim; session lifetime is
//! governed entirely by the refresh token. A refresh token is three
//! dot-separated hex fields: the issue date, a random nonce, and an
//! HMAC-SHA256 tag over both computed with a server-held secret. Tokens
//! expire seven days after issue; each successful validation is expected
//! to be followed by a re-issue, sliding the window forward.

use chrono::{NaiveDate, Utc};
use hmac::{Hmac, Mac};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Days a refresh token stays valid after issue
const REFRESH_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    SigningFailed(String),

    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature mismatch")]
    BadSignature,

    #[error("Token has expired")]
    Expired,
}

/// Claims carried by an access token
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub name: String,
    pub email: String,
}

pub struct TokenService {
    access_secret: String,
    refresh_secret: String,
}

impl TokenService {
    pub fn new(access_secret: String, refresh_secret: String) -> Self {
        Self {
            access_secret,
            refresh_secret,
        }
    }

    /// Issue an access token for a signed-in user
    ///
    /// `sub` is a fresh UUID per token, not the user id.
    pub fn issue_access_token(&self, name: &str, email: &str) -> Result<String, TokenError> {
        let claims = AccessClaims {
            sub: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.access_secret.as_bytes()),
        )
        .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Check an access token's signature and return its claims
    pub fn decode_access_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // the claims carry no exp; only the signature matters
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.access_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| TokenError::BadSignature)
    }

    /// Mint a refresh token stamped with today's date
    pub fn issue_refresh_token(&self) -> Result<String, TokenError> {
        self.refresh_token_for_date(Utc::now().date_naive())
    }

    fn refresh_token_for_date(&self, issued: NaiveDate) -> Result<String, TokenError> {
        let payload = issued.format("%Y-%m-%d").to_string();
        let mut nonce = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut nonce);
        let tag = self.refresh_tag(payload.as_bytes(), &nonce)?;

        Ok(format!(
            "{}.{}.{}",
            hex::encode(payload.as_bytes()),
            hex::encode(nonce),
            hex::encode(tag)
        ))
    }

    fn refresh_tag(&self, payload: &[u8], nonce: &[u8]) -> Result<Vec<u8>, TokenError> {
        let mut mac = HmacSha256::new_from_slice(self.refresh_secret.as_bytes())
            .map_err(|e| TokenError::SigningFailed(e.to_string()))?;
        mac.update(payload);
        mac.update(nonce);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    /// Validate a refresh token and return its issue date
    ///
    /// The tag check runs before the date parse, and `verify_slice` compares
    /// in constant time.
    pub fn validate_refresh_token(&self, token: &str) -> Result<NaiveDate, TokenError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(TokenError::Malformed);
        }

        let payload = hex::decode(parts[0]).map_err(|_| TokenError::Malformed)?;
        let nonce = hex::decode(parts[1]).map_err(|_| TokenError::Malformed)?;
        let tag = hex::decode(parts[2]).map_err(|_| TokenError::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(self.refresh_secret.as_bytes())
            .map_err(|e| TokenError::SigningFailed(e.to_string()))?;
        mac.update(&payload);
        mac.update(&nonce);
        mac.verify_slice(&tag).map_err(|_| TokenError::BadSignature)?;

        let date_str = String::from_utf8(payload).map_err(|_| TokenError::Malformed)?;
        let issued =
            NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| TokenError::Malformed)?;

        let age_days = Utc::now().date_naive().signed_duration_since(issued).num_days();
        if age_days >= REFRESH_WINDOW_DAYS {
            return Err(TokenError::Expired);
        }

        Ok(issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn service() -> TokenService {
        TokenService::new("access-secret".to_string(), "refresh-secret".to_string())
    }

    #[test]
    fn test_access_token_round_trip() {
        let tokens = service();
        let jwt = tokens.issue_access_token("Aisyah Binti", "aisyah@example.com").unwrap();
        let claims = tokens.decode_access_token(&jwt).unwrap();

        assert_eq!(claims.name, "Aisyah Binti");
        assert_eq!(claims.email, "aisyah@example.com");
        assert!(!claims.sub.is_empty());
    }

    #[test]
    fn test_access_token_sub_is_unique_per_issue() {
        let tokens = service();
        let first = tokens.issue_access_token("A", "a@example.com").unwrap();
        let second = tokens.issue_access_token("A", "a@example.com").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_access_token_wrong_secret_rejected() {
        let jwt = service().issue_access_token("A", "a@example.com").unwrap();
        let other = TokenService::new("different".to_string(), "refresh-secret".to_string());
        assert!(matches!(
            other.decode_access_token(&jwt),
            Err(TokenError::BadSignature)
        ));
    }

    #[test]
    fn test_refresh_token_shape() {
        let token = service().issue_refresh_token().unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        for part in parts {
            assert!(!part.is_empty());
            assert!(part.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_fresh_refresh_token_validates() {
        let tokens = service();
        let token = tokens.issue_refresh_token().unwrap();
        let issued = tokens.validate_refresh_token(&token).unwrap();
        assert_eq!(issued, Utc::now().date_naive());
    }

    #[test]
    fn test_refresh_token_six_days_old_accepted() {
        let tokens = service();
        let issued = Utc::now().date_naive() - Duration::days(6);
        let token = tokens.refresh_token_for_date(issued).unwrap();
        assert_eq!(tokens.validate_refresh_token(&token).unwrap(), issued);
    }

    #[test]
    fn test_refresh_token_seven_days_old_rejected() {
        let tokens = service();
        let issued = Utc::now().date_naive() - Duration::days(7);
        let token = tokens.refresh_token_for_date(issued).unwrap();
        assert!(matches!(
            tokens.validate_refresh_token(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_tampered_refresh_token_rejected() {
        let tokens = service();
        let token = tokens.issue_refresh_token().unwrap();

        // flip one hex digit of the date payload
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let flipped = if parts[0].ends_with('0') { "1" } else { "0" };
        parts[0].pop();
        parts[0].push_str(flipped);
        let tampered = parts.join(".");

        assert!(matches!(
            tokens.validate_refresh_token(&tampered),
            Err(TokenError::BadSignature)
        ));
    }

    #[test]
    fn test_refresh_token_wrong_secret_rejected() {
        let token = service().issue_refresh_token().unwrap();
        let other = TokenService::new("access-secret".to_string(), "another".to_string());
        assert!(matches!(
            other.validate_refresh_token(&token),
            Err(TokenError::BadSignature)
        ));
    }

    #[test]
    fn test_garbage_refresh_token_malformed() {
        let tokens = service();
        assert!(matches!(
            tokens.validate_refresh_token("abc"),
            Err(TokenError::Malformed)
        ));
        assert!(matches!(
            tokens.validate_refresh_token("zz.zz.zz"),
            Err(TokenError::Malformed)
        ));
    }
}
