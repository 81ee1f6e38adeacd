// src/auth/validators.rs

use super::models::{AdminSignupRequest, LoginRequest, NewPasswordRequest, SignupRequest};
use crate::common::{ValidationResult, Validator};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+([\.-]?\w+)*@\w+([\.-]?\w+)*(\.\w{2,})+$").unwrap());

pub const PASSWORD_RULE_MESSAGE: &str = "Password is not valid. Password must contains at least one lowercase letter, one uppercase letter and one number. Password must also has a minimum length of 8 characters.";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least 8 characters with one lowercase letter, one uppercase letter
/// and one digit
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

// ============================================================================
// Signup Validators
// ============================================================================

pub struct SignupValidator;

impl Validator<SignupRequest> for SignupValidator {
    fn validate(&self, data: &SignupRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let fullname = data.fullname.as_deref().unwrap_or("");
        let email = data.email.as_deref().unwrap_or("");
        let password = data.password.as_deref().unwrap_or("");
        let confirm = data.confirmpassword.as_deref().unwrap_or("");

        if fullname.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
            result.add_error(
                "body",
                "Full Name, Email, Password and Confirm Password is required.",
            );
            return result;
        }

        if !is_valid_email(email) {
            result.add_error("email", "Email is not valid");
            return result;
        }

        if !is_valid_password(password) {
            result.add_error("password", PASSWORD_RULE_MESSAGE);
            return result;
        }

        if password != confirm {
            result.add_error("confirmpassword", "Confirm password does not match!");
        }

        result
    }
}

pub struct AdminSignupValidator;

impl Validator<AdminSignupRequest> for AdminSignupValidator {
    fn validate(&self, data: &AdminSignupRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.role.as_deref().unwrap_or("").is_empty() {
            result.add_error(
                "body",
                "Full Name, Email, Password, Confirm Password and Role is required.",
            );
            return result;
        }

        let as_signup = SignupRequest {
            fullname: data.fullname.clone(),
            email: data.email.clone(),
            password: data.password.clone(),
            confirmpassword: data.confirmpassword.clone(),
            inv_id: None,
            invite_token: None,
            role_id: None,
        };
        result.merge(SignupValidator.validate(&as_signup));
        result
    }
}

// ============================================================================
// Login Validator
// ============================================================================

pub struct LoginValidator;

impl Validator<LoginRequest> for LoginValidator {
    fn validate(&self, data: &LoginRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let email = data.email.as_deref().unwrap_or("");
        let password = data.password.as_deref().unwrap_or("");

        if email.is_empty() || password.is_empty() {
            result.add_error("body", "Email and Password is required.");
            return result;
        }

        if !is_valid_email(email) {
            result.add_error("email", "Email is not valid.");
        }

        result
    }
}

// ============================================================================
// Password Reset Validator
// ============================================================================

pub struct NewPasswordValidator;

impl Validator<NewPasswordRequest> for NewPasswordValidator {
    fn validate(&self, data: &NewPasswordRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let email = data.email.as_deref().unwrap_or("");
        let password = data.newpassword.as_deref().unwrap_or("");
        let confirm = data.confirmnewpassword.as_deref().unwrap_or("");

        if email.is_empty() || password.is_empty() || confirm.is_empty() {
            result.add_error(
                "body",
                "Email, New Password and Confirm password is required.",
            );
            return result;
        }

        if !is_valid_email(email) {
            result.add_error("email", "Email is not valid");
            return result;
        }

        if !is_valid_password(password) {
            result.add_error("newpassword", PASSWORD_RULE_MESSAGE);
            return result;
        }

        if password != confirm {
            result.add_error("confirmnewpassword", "Confirm password does not match!");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(is_valid_email("user-name@my-host.io"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@host"));
        assert!(!is_valid_email("user@host.c"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_password_rules() {
        assert!(is_valid_password("Abcdef12"));
        assert!(is_valid_password("longerPassw0rd"));

        assert!(!is_valid_password("Ab1"));           // too short
        assert!(!is_valid_password("abcdefg1"));      // no uppercase
        assert!(!is_valid_password("ABCDEFG1"));      // no lowercase
        assert!(!is_valid_password("Abcdefgh"));      // no digit
    }

    #[test]
    fn test_signup_validator_order() {
        let mut request = SignupRequest {
            fullname: None,
            email: None,
            password: None,
            confirmpassword: None,
            inv_id: None,
            invite_token: None,
            role_id: None,
        };

        let result = SignupValidator.validate(&request);
        assert_eq!(
            result.first_message(),
            Some("Full Name, Email, Password and Confirm Password is required.")
        );

        request.fullname = Some("Tan Mei Ling".to_string());
        request.email = Some("not-an-email".to_string());
        request.password = Some("Abcdef12".to_string());
        request.confirmpassword = Some("Abcdef12".to_string());
        let result = SignupValidator.validate(&request);
        assert_eq!(result.first_message(), Some("Email is not valid"));

        request.email = Some("mei.ling@example.com".to_string());
        request.password = Some("weak".to_string());
        let result = SignupValidator.validate(&request);
        assert!(result
            .first_message()
            .unwrap()
            .starts_with("Password is not valid."));

        request.password = Some("Abcdef12".to_string());
        request.confirmpassword = Some("Abcdef13".to_string());
        let result = SignupValidator.validate(&request);
        assert_eq!(
            result.first_message(),
            Some("Confirm password does not match!")
        );

        request.confirmpassword = Some("Abcdef12".to_string());
        assert!(SignupValidator.validate(&request).is_valid);
    }

    #[test]
    fn test_login_validator() {
        let result = LoginValidator.validate(&LoginRequest {
            email: Some("user@example.com".to_string()),
            password: None,
        });
        assert_eq!(result.first_message(), Some("Email and Password is required."));

        let result = LoginValidator.validate(&LoginRequest {
            email: Some("bad".to_string()),
            password: Some("whatever".to_string()),
        });
        assert_eq!(result.first_message(), Some("Email is not valid."));
    }

    #[test]
    fn test_admin_validator_requires_role() {
        let result = AdminSignupValidator.validate(&AdminSignupRequest {
            fullname: Some("Admin".to_string()),
            email: Some("admin@example.com".to_string()),
            password: Some("Abcdef12".to_string()),
            confirmpassword: Some("Abcdef12".to_string()),
            role: None,
        });
        assert_eq!(
            result.first_message(),
            Some("Full Name, Email, Password, Confirm Password and Role is required.")
        );
    }
}
