// src/services/passwords.rs
//! Password hashing with Argon2id
//!
//! Stored credentials are full PHC strings, so the salt and parameters
//! travel with the digest and verification needs no side channel.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Stored password hash is malformed")]
    MalformedHash,
}

/// Hash a raw password with a fresh random salt
pub fn hash_password(raw: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(raw.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashFailed(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a raw password against a stored PHC string
///
/// The digest comparison inside the verifier is constant time.
pub fn verify_password(raw: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(|_| PasswordError::MalformedHash)?;
    Ok(Argon2::default()
        .verify_password(raw.as_bytes(), &parsed)
        .is_ok())
}
