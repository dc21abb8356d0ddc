//! Signup response bodies
//!
//! Successful responses pass the provider's JSON through untouched, so only
//! the error shapes are defined here.

use serde::{Deserialize, Serialize};

use core_kernel::{FieldViolation, ValidationResult};

/// Generic error body: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Validation failure body: `{"errors": [{"path", "message"}, ...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub errors: Vec<FieldViolation>,
}

impl From<ValidationResult> for ValidationErrorBody {
    fn from(result: ValidationResult) -> Self {
        Self {
            errors: result.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_body_shape() {
        let mut result = ValidationResult::ok();
        result.add_error("address.state", "Invalid US state or territory abbreviation");
        result.add_error("", "A valid SSN or passport is required");

        let body = serde_json::to_value(ValidationErrorBody::from(result)).unwrap();
        assert_eq!(
            body,
            json!({
                "errors": [
                    {
                        "path": "address.state",
                        "message": "Invalid US state or territory abbreviation"
                    },
                    { "path": "", "message": "A valid SSN or passport is required" }
                ]
            })
        );
    }
}
