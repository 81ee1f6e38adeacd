// src/companies/validators.rs

use super::models::CreateCompanyRequest;
use crate::common::{ValidationResult, Validator};

pub struct CreateCompanyValidator;

impl Validator<CreateCompanyRequest> for CreateCompanyValidator {
    fn validate(&self, data: &CreateCompanyRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        // address_line2 is the only optional field
        let required = [
            data.name.as_deref().unwrap_or(""),
            data.website.as_deref().unwrap_or(""),
            data.description.as_deref().unwrap_or(""),
            data.address_line1.as_deref().unwrap_or(""),
            data.postal_code.as_deref().unwrap_or(""),
            data.state.as_deref().unwrap_or(""),
            data.city.as_deref().unwrap_or(""),
            data.country.as_deref().unwrap_or(""),
        ];

        if required.iter().any(|field| field.is_empty()) {
            result.add_error(
                "body",
                "Name, Website, Description, Address Line 1, Postal code, State, City and Country is required.",
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateCompanyRequest {
        CreateCompanyRequest {
            name: Some("Acme".to_string()),
            website: Some("https://acme.example".to_string()),
            description: Some("Widgets".to_string()),
            address_line1: Some("1 Acme Way".to_string()),
            address_line2: None,
            postal_code: Some("00100".to_string()),
            state: Some("Central".to_string()),
            city: Some("Metro".to_string()),
            country: Some("Freedonia".to_string()),
        }
    }

    #[test]
    fn test_accepts_request_without_address_line2() {
        assert!(CreateCompanyValidator.validate(&full_request()).is_valid);
    }

    #[test]
    fn test_rejects_missing_required_field() {
        let mut request = full_request();
        request.country = None;

        let result = CreateCompanyValidator.validate(&request);
        assert!(!result.is_valid);
        assert_eq!(
            result.first_message(),
            Some(
                "Name, Website, Description, Address Line 1, Postal code, State, City and Country is required."
            )
        );
    }
}
