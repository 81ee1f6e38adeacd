// src/services/code_cache.rs
//! In-process store for short-lived verification material
//!
//! Holds OTP codes, invite digests and invite roles for one hour. Keys are
//! namespaced by purpose so an id leaked from one flow cannot redeem a code
//! from another. Redemption is single use: the entry is removed only when
//! the presented value matches, so a mistyped code can be retried.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Entry lifetime, one hour like the verification mails promise
const CODE_TTL: Duration = Duration::from_secs(3600);

/// What a cached value is for; becomes the key namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePurpose {
    EmailVerification,
    PasswordReset,
    OfficerInvite,
    InviteRole,
}

impl CodePurpose {
    fn as_str(&self) -> &'static str {
        match self {
            CodePurpose::EmailVerification => "verify-email",
            CodePurpose::PasswordReset => "reset-password",
            CodePurpose::OfficerInvite => "officer-invite",
            CodePurpose::InviteRole => "invite-role",
        }
    }
}

/// Outcome of a redeem attempt
#[derive(Debug, PartialEq, Eq)]
pub enum RedeemOutcome {
    /// Value matched; the entry is gone now
    Matched,
    /// Value did not match; the entry is retained for another attempt
    Mismatched,
    /// No live entry under this id
    NotFound,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    stored_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() > ttl
    }
}

#[derive(Clone)]
pub struct CodeCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl CodeCache {
    pub fn new() -> Self {
        Self::with_ttl(CODE_TTL)
    }

    fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    fn key(purpose: CodePurpose, id: &str) -> String {
        format!("{}:{}", purpose.as_str(), id)
    }

    /// Store a value under a purpose-namespaced id
    pub async fn put(&self, purpose: CodePurpose, id: &str, value: &str) {
        let entry = CacheEntry {
            value: value.to_string(),
            stored_at: Instant::now(),
        };
        self.entries
            .write()
            .await
            .insert(Self::key(purpose, id), entry);
        debug!(purpose = ?purpose, id = %id, "Cached ephemeral code");
    }

    /// Look up a live value without consuming it
    pub async fn get(&self, purpose: CodePurpose, id: &str) -> Option<String> {
        self.entries
            .read()
            .await
            .get(&Self::key(purpose, id))
            .filter(|entry| !entry.is_expired(self.ttl))
            .map(|entry| entry.value.clone())
    }

    /// Redeem a single-use entry against a presented value
    pub async fn redeem(&self, purpose: CodePurpose, id: &str, candidate: &str) -> RedeemOutcome {
        let key = Self::key(purpose, id);
        let mut entries = self.entries.write().await;

        match entries.get(&key) {
            None => RedeemOutcome::NotFound,
            Some(entry) if entry.is_expired(self.ttl) => {
                entries.remove(&key);
                RedeemOutcome::NotFound
            }
            Some(entry) if entry.value == candidate => {
                entries.remove(&key);
                RedeemOutcome::Matched
            }
            Some(_) => RedeemOutcome::Mismatched,
        }
    }

    /// Drop an entry regardless of its value
    pub async fn remove(&self, purpose: CodePurpose, id: &str) {
        self.entries.write().await.remove(&Self::key(purpose, id));
    }

    /// Purge every expired entry
    pub async fn cleanup_expired(&self) {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(self.ttl));
        let removed = before - entries.len();
        if removed > 0 {
            debug!(removed = removed, "Purged expired ephemeral codes");
        }
    }

    /// Start background task purging expired entries
    pub fn start_cleanup_task(cache: CodeCache) {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(60));
            loop {
                interval.tick().await;
                cache.cleanup_expired().await;
            }
        });
    }
}

impl Default for CodeCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a 6-digit one-time verification code
pub fn generate_verification_code() -> String {
    let mut rng = rand::thread_rng();
    (0..6)
        .map(|_| char::from(b'0' + rng.gen_range(0..=9u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_redeem_is_single_use() {
        let cache = CodeCache::new();
        cache.put(CodePurpose::EmailVerification, "id-1", "483920").await;

        assert_eq!(
            cache.redeem(CodePurpose::EmailVerification, "id-1", "483920").await,
            RedeemOutcome::Matched
        );
        assert_eq!(
            cache.redeem(CodePurpose::EmailVerification, "id-1", "483920").await,
            RedeemOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_mismatch_retains_entry() {
        let cache = CodeCache::new();
        cache.put(CodePurpose::PasswordReset, "id-2", "112233").await;

        assert_eq!(
            cache.redeem(CodePurpose::PasswordReset, "id-2", "000000").await,
            RedeemOutcome::Mismatched
        );
        // still there for the correct attempt
        assert_eq!(
            cache.redeem(CodePurpose::PasswordReset, "id-2", "112233").await,
            RedeemOutcome::Matched
        );
    }

    #[tokio::test]
    async fn test_purposes_do_not_collide() {
        let cache = CodeCache::new();
        cache.put(CodePurpose::EmailVerification, "shared-id", "111111").await;

        assert_eq!(cache.get(CodePurpose::PasswordReset, "shared-id").await, None);
        assert_eq!(
            cache.redeem(CodePurpose::PasswordReset, "shared-id", "111111").await,
            RedeemOutcome::NotFound
        );
        assert_eq!(
            cache.get(CodePurpose::EmailVerification, "shared-id").await,
            Some("111111".to_string())
        );
    }

    #[tokio::test]
    async fn test_expired_entry_is_gone() {
        let cache = CodeCache::with_ttl(Duration::from_millis(0));
        cache.put(CodePurpose::OfficerInvite, "id-3", "digest").await;
        tokio::time::sleep(Duration::from_millis(5)).await;

        assert_eq!(cache.get(CodePurpose::OfficerInvite, "id-3").await, None);
        assert_eq!(
            cache.redeem(CodePurpose::OfficerInvite, "id-3", "digest").await,
            RedeemOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_cleanup_purges_expired_only() {
        let cache = CodeCache::with_ttl(Duration::from_secs(3600));
        cache.put(CodePurpose::InviteRole, "keep", "hr").await;
        cache.cleanup_expired().await;
        assert_eq!(
            cache.get(CodePurpose::InviteRole, "keep").await,
            Some("hr".to_string())
        );
    }

    #[test]
    fn test_verification_code_is_six_digits() {
        for _ in 0..50 {
            let code = generate_verification_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
