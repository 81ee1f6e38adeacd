// src/messages/validators.rs

use super::models::CreateMessageRequest;
use crate::common::{ValidationResult, Validator};

pub struct MessageValidator;

impl Validator<CreateMessageRequest> for MessageValidator {
    fn validate(&self, data: &CreateMessageRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let required = [
            data.content.as_deref().unwrap_or(""),
            data.created_date.as_deref().unwrap_or(""),
            data.recipient_id.as_deref().unwrap_or(""),
            data.sender_id.as_deref().unwrap_or(""),
        ];

        if required.iter().any(|field| field.is_empty()) || data.is_read.is_none() {
            result.add_error(
                "body",
                "Content, Is read, Created date, Recipient id and Sender id is required.",
            );
        }

        result
    }
}
