// src/users/validators.rs

use super::models::{ChangePasswordRequest, UpdateInfoRequest};
use crate::auth::validators::{is_valid_email, is_valid_password, PASSWORD_RULE_MESSAGE};
use crate::common::{ValidationResult, Validator};

pub struct UpdateInfoValidator;

impl Validator<UpdateInfoRequest> for UpdateInfoValidator {
    fn validate(&self, data: &UpdateInfoRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let email = data.email.as_deref().unwrap_or("");
        let name = data.name.as_deref().unwrap_or("");

        if email.is_empty() || name.is_empty() {
            result.add_error("body", "Email and Name is required.");
            return result;
        }

        if !is_valid_email(email) {
            result.add_error("email", "Email is not valid");
        }

        result
    }
}

pub struct ChangePasswordValidator;

impl Validator<ChangePasswordRequest> for ChangePasswordValidator {
    fn validate(&self, data: &ChangePasswordRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let current = data.currentpassword.as_deref().unwrap_or("");
        let new = data.newpassword.as_deref().unwrap_or("");
        let confirm = data.confirmnewpassword.as_deref().unwrap_or("");

        if current.is_empty() || new.is_empty() || confirm.is_empty() {
            result.add_error("body", "New Password and Confirm password is required.");
            return result;
        }

        if !is_valid_password(new) {
            result.add_error("newpassword", PASSWORD_RULE_MESSAGE);
            return result;
        }

        if confirm != new {
            result.add_error("confirmnewpassword", "Confirm password does not match!");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_info_requires_both_fields() {
        let result = UpdateInfoValidator.validate(&UpdateInfoRequest {
            email: Some("jane@example.com".to_string()),
            name: None,
        });
        assert!(!result.is_valid);
        assert_eq!(result.first_message(), Some("Email and Name is required."));
    }

    #[test]
    fn test_update_info_rejects_bad_email() {
        let result = UpdateInfoValidator.validate(&UpdateInfoRequest {
            email: Some("not-an-email".to_string()),
            name: Some("Jane".to_string()),
        });
        assert!(!result.is_valid);
        assert_eq!(result.first_message(), Some("Email is not valid"));
    }

    #[test]
    fn test_change_password_requires_all_fields() {
        let result = ChangePasswordValidator.validate(&ChangePasswordRequest {
            currentpassword: Some("OldPassw0rd".to_string()),
            newpassword: Some("NewPassw0rd".to_string()),
            confirmnewpassword: None,
        });
        assert!(!result.is_valid);
        assert_eq!(
            result.first_message(),
            Some("New Password and Confirm password is required.")
        );
    }

    #[test]
    fn test_change_password_checks_confirm() {
        let result = ChangePasswordValidator.validate(&ChangePasswordRequest {
            currentpassword: Some("OldPassw0rd".to_string()),
            newpassword: Some("NewPassw0rd".to_string()),
            confirmnewpassword: Some("Different1".to_string()),
        });
        assert!(!result.is_valid);
        assert_eq!(
            result.first_message(),
            Some("Confirm password does not match!")
        );
    }

    #[test]
    fn test_change_password_accepts_valid_body() {
        let result = ChangePasswordValidator.validate(&ChangePasswordRequest {
            currentpassword: Some("OldPassw0rd".to_string()),
            newpassword: Some("NewPassw0rd".to_string()),
            confirmnewpassword: Some("NewPassw0rd".to_string()),
        });
        assert!(result.is_valid);
    }
}
