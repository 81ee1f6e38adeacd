// src/services/mailer.rs
//! Outbound mail delivery
//!
//! The transport is a structured-log stand-in; callers treat a logged send
//! as delivered. Swapping in a real SMTP or API transport only touches this
//! file since every flow goes through the injected service.

use tracing::info;

#[derive(Clone)]
pub struct Mailer {
    from_address: String,
}

impl Mailer {
    pub fn new(from_address: String) -> Self {
        Self { from_address }
    }

    pub fn from_env() -> Self {
        let from_address =
            std::env::var("MAIL_FROM").unwrap_or_else(|_| "no-reply@recruit.local".to_string());
        Self::new(from_address)
    }

    /// Deliver a one-time verification code
    pub async fn send_verification_code(&self, to: &str, code: &str) {
        info!(
            from = %self.from_address,
            to = %to,
            code = %code,
            "Delivering verification code"
        );
    }

    /// Deliver an officer signup link
    pub async fn send_signup_link(&self, to: &str, link: &str) {
        info!(
            from = %self.from_address,
            to = %to,
            link = %link,
            "Delivering officer signup link"
        );
    }
}
