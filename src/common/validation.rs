// Common validation types and traits

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Accumulated outcome of a validator run
///
/// Checks record errors in the order the route documents them, so
/// `first_message` is the message a client sees for a 400.
#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
            self.errors.extend(other.errors);
        }
    }

    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.first_message().is_none());
    }

    #[test]
    fn test_add_error_marks_invalid() {
        let mut result = ValidationResult::new();
        result.add_error("email", "Email is not valid");

        assert!(!result.is_valid);
        assert_eq!(result.first_message(), Some("Email is not valid"));
    }

    #[test]
    fn test_merge_carries_errors_over() {
        let mut base = ValidationResult::new();
        let mut other = ValidationResult::new();
        other.add_error("password", "too short");

        base.merge(other);
        assert!(!base.is_valid);
        assert_eq!(base.errors.len(), 1);

        // merging a clean result changes nothing
        base.merge(ValidationResult::new());
        assert_eq!(base.errors.len(), 1);
    }
}
