//! Entity validation rules
//!
//! Checks the shape and format of a signup payload before anything is sent
//! to the provider. Validation runs in a single pass and collects every
//! violation instead of stopping at the first one.
//!
//! # Validation Rules
//!
//! ## Person
//! - `first_name`, `last_name`, `email`, `date_of_birth` are required strings
//! - `middle_name` is an optional string
//! - `date_of_birth` is literally `YYYY-MM-DD` (no calendar check)
//! - `ssn`, if present, is `XXX-XX-XXXX` or `XXXXXXXXX`
//! - `passport`, if present, has a non-empty `number` and a `country_code`
//! - `email` has a standard address shape
//! - An SSN or a passport must be present
//!
//! ## Address
//! - `line_1`, `city`, `country_code` are required strings
//! - `country_code` is two upper-case letters
//! - `state`, if present, is a US state or territory abbreviation (any case)
//! - US addresses must carry a state

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;
use validator::ValidateEmail;

use core_kernel::validation::{join_path, FieldViolation, ValidationResult};

use crate::address::UsState;
use crate::entity::EntityCreationRequest;

/// Violation messages reported by the validator
pub mod messages {
    pub const EXPECTED_OBJECT: &str = "Expected object";
    pub const EXPECTED_STRING: &str = "Expected string";
    pub const REQUIRED: &str = "Required";
    pub const INVALID_DATE_OF_BIRTH: &str = "Invalid date of birth format (YYYY-MM-DD)";
    pub const INVALID_SSN: &str = "Invalid SSN format (XXX-XX-XXXX or XXXXXXXXX)";
    pub const INVALID_EMAIL: &str = "Invalid email";
    pub const INVALID_COUNTRY_CODE: &str = "Invalid ISO 3166-1 Alpha-2 country code";
    pub const INVALID_STATE: &str = "Invalid US state or territory abbreviation";
    pub const PASSPORT_NUMBER_REQUIRED: &str = "Passport number is required";
    pub const INVALID_ADDRESS: &str = "Invalid address";
    pub const IDENTITY_DOCUMENT_REQUIRED: &str = "A valid SSN or passport is required";
}

use messages::*;

static DATE_OF_BIRTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date of birth pattern is valid")
});

static SSN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-?[0-9]{2}-?[0-9]{4}$").expect("SSN pattern is valid"));

static COUNTRY_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}$").expect("country code pattern is valid"));

/// Returns true if `dob` is shaped `YYYY-MM-DD`
pub fn is_valid_date_of_birth(dob: &str) -> bool {
    DATE_OF_BIRTH.is_match(dob)
}

/// Returns true if `ssn` is `XXX-XX-XXXX` or nine bare digits (dashes optional)
pub fn is_valid_ssn(ssn: &str) -> bool {
    SSN.is_match(ssn)
}

/// Returns true if `code` is two upper-case ASCII letters
pub fn is_valid_country_code(code: &str) -> bool {
    COUNTRY_CODE.is_match(code)
}

pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

/// Validator for person entity payloads
///
/// # Examples
///
/// ```rust
/// use domain_entity::validation::EntityValidator;
/// use serde_json::json;
///
/// let payload = json!({
///     "first_name": "Ada",
///     "last_name": "Lovelace",
///     "ssn": "123-45-6789",
///     "date_of_birth": "1985-12-10",
///     "email": "ada@example.com",
///     "address": {
///         "line_1": "1 Market St",
///         "city": "San Francisco",
///         "state": "ca",
///         "country_code": "US"
///     }
/// });
///
/// let request = EntityValidator::validate_value(&payload).unwrap();
/// assert_eq!(request.address.state.unwrap().code(), "CA");
/// ```
pub struct EntityValidator;

impl EntityValidator {
    /// Validates an untyped payload and converts it into a typed request
    ///
    /// # Arguments
    ///
    /// * `input` - The decoded JSON body
    ///
    /// # Returns
    ///
    /// The typed request, or a `ValidationResult` listing every violation
    pub fn validate_value(input: &Value) -> Result<EntityCreationRequest, ValidationResult> {
        let mut result = ValidationResult::ok();

        let Some(entity) = input.as_object() else {
            result.add_error("", EXPECTED_OBJECT);
            return Err(result);
        };

        required_str(entity, "", "first_name", &mut result);
        optional_str(entity, "", "middle_name", &mut result);
        required_str(entity, "", "last_name", &mut result);

        let ssn = optional_str(entity, "", "ssn", &mut result);
        if let Some(ssn) = ssn {
            if !is_valid_ssn(ssn) {
                result.add_error("ssn", INVALID_SSN);
            }
        }

        let has_passport = Self::check_passport_value(entity, &mut result);

        if let Some(dob) = required_str(entity, "", "date_of_birth", &mut result) {
            if !is_valid_date_of_birth(dob) {
                result.add_error("date_of_birth", INVALID_DATE_OF_BIRTH);
            }
        }

        if let Some(email) = required_str(entity, "", "email", &mut result) {
            if !is_valid_email(email) {
                result.add_error("email", INVALID_EMAIL);
            }
        }

        Self::check_address_value(entity, &mut result);

        if !is_present(entity, "ssn") && !has_passport {
            result.add_error("", IDENTITY_DOCUMENT_REQUIRED);
        }

        if !result.is_valid {
            debug!(violations = result.errors.len(), "Entity payload rejected");
            return Err(result);
        }

        serde_json::from_value(input.clone())
            .map_err(|e| ValidationResult::fail(vec![FieldViolation::new("", e.to_string())]))
    }

    /// Validates an already-typed request
    ///
    /// Applies the format and cross-field rules; shape rules are enforced
    /// by the type itself.
    pub fn validate(request: &EntityCreationRequest) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if let Some(ssn) = &request.ssn {
            if !is_valid_ssn(ssn) {
                result.add_error("ssn", INVALID_SSN);
            }
        }

        if let Some(passport) = &request.passport {
            if passport.number.is_empty() {
                result.add_error("passport.number", PASSPORT_NUMBER_REQUIRED);
            }
        }

        if !is_valid_date_of_birth(&request.date_of_birth) {
            result.add_error("date_of_birth", INVALID_DATE_OF_BIRTH);
        }

        if !is_valid_email(&request.email) {
            result.add_error("email", INVALID_EMAIL);
        }

        let address = &request.address;
        if !is_valid_country_code(&address.country_code) {
            result.add_error("address.country_code", INVALID_COUNTRY_CODE);
        }
        if address.state.is_none() && address.is_us() {
            result.add_error("address", INVALID_ADDRESS);
        }

        if !request.has_identity_document() {
            result.add_error("", IDENTITY_DOCUMENT_REQUIRED);
        }

        result
    }

    /// Checks the passport object; returns true if one was supplied
    fn check_passport_value(entity: &Map<String, Value>, result: &mut ValidationResult) -> bool {
        let passport = match entity.get("passport") {
            None => return false,
            Some(Value::Null) => {
                result.add_error("passport", EXPECTED_OBJECT);
                return false;
            }
            Some(Value::Object(passport)) => passport,
            Some(_) => {
                result.add_error("passport", EXPECTED_OBJECT);
                return true;
            }
        };

        if let Some(number) = required_str(passport, "passport", "number", result) {
            if number.is_empty() {
                result.add_error("passport.number", PASSPORT_NUMBER_REQUIRED);
            }
        }
        required_str(passport, "passport", "country_code", result);
        true
    }

    fn check_address_value(entity: &Map<String, Value>, result: &mut ValidationResult) {
        let address = match entity.get("address") {
            None | Some(Value::Null) => {
                result.add_error("address", REQUIRED);
                return;
            }
            Some(Value::Object(address)) => address,
            Some(_) => {
                result.add_error("address", EXPECTED_OBJECT);
                return;
            }
        };

        required_str(address, "address", "line_1", result);
        optional_str(address, "address", "line_2", result);
        required_str(address, "address", "city", result);
        optional_str(address, "address", "postal_code", result);

        if let Some(state) = optional_str(address, "address", "state", result) {
            if state.parse::<UsState>().is_err() {
                result.add_error("address.state", INVALID_STATE);
            }
        }

        let country_code = required_str(address, "address", "country_code", result);
        if let Some(code) = country_code {
            if !is_valid_country_code(code) {
                result.add_error("address.country_code", INVALID_COUNTRY_CODE);
            }
        }

        if !is_present(address, "state") && country_code == Some("US") {
            result.add_error("address", INVALID_ADDRESS);
        }
    }
}

/// Reads a required string field, recording a violation if absent or mistyped
fn required_str<'a>(
    object: &'a Map<String, Value>,
    parent: &str,
    key: &str,
    result: &mut ValidationResult,
) -> Option<&'a str> {
    match object.get(key) {
        None => {
            result.add_error(join_path(parent, key), REQUIRED);
            None
        }
        Some(Value::String(value)) => Some(value.as_str()),
        Some(_) => {
            result.add_error(join_path(parent, key), EXPECTED_STRING);
            None
        }
    }
}

/// Reads an optional string field; `null` is rejected like any other non-string
fn optional_str<'a>(
    object: &'a Map<String, Value>,
    parent: &str,
    key: &str,
    result: &mut ValidationResult,
) -> Option<&'a str> {
    match object.get(key) {
        None => None,
        Some(Value::String(value)) => Some(value.as_str()),
        Some(_) => {
            result.add_error(join_path(parent, key), EXPECTED_STRING);
            None
        }
    }
}

/// A field counts as present unless it is missing, `null` or an empty string
fn is_present(object: &Map<String, Value>, key: &str) -> bool {
    match object.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::String(value)) => !value.is_empty(),
        Some(_) => true,
    }
}
