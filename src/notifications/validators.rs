// src/notifications/validators.rs

use super::models::CreateNotificationRequest;
use crate::common::{ValidationResult, Validator};

pub struct NotificationValidator;

impl Validator<CreateNotificationRequest> for NotificationValidator {
    fn validate(&self, data: &CreateNotificationRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.content.as_deref().unwrap_or("").is_empty()
            || data.category.as_deref().unwrap_or("").is_empty()
            || data.is_read.is_none()
            || data.user_id.as_deref().unwrap_or("").is_empty()
        {
            result.add_error(
                "body",
                "Content, Category, Is read and User id is required.",
            );
        }

        result
    }
}
