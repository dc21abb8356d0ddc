//! Tests for the field-level validation aggregate

use core_kernel::validation::{join_path, FieldViolation, ValidationResult};
use proptest::prelude::*;

#[test]
fn test_ok_result_is_valid() {
    let result = ValidationResult::ok();
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.into_result().is_ok());
}

#[test]
fn test_add_error_marks_invalid() {
    let mut result = ValidationResult::ok();
    result.add_error("date_of_birth", "Invalid date of birth format (YYYY-MM-DD)");

    assert!(!result.is_valid);
    assert!(result.has_error_at("date_of_birth"));
    assert!(!result.has_error_at("email"));
}

#[test]
fn test_fail_with_no_errors_is_valid() {
    let result = ValidationResult::fail(vec![]);
    assert!(result.is_valid);
}

#[test]
fn test_merge_keeps_all_errors() {
    let mut outer = ValidationResult::ok();
    outer.add_error("", "A valid SSN or passport is required");

    let mut inner = ValidationResult::ok();
    inner.add_error("address.country_code", "Invalid ISO 3166-1 Alpha-2 country code");
    inner.add_error("address", "Invalid address");

    outer.merge(inner);

    assert!(!outer.is_valid);
    assert_eq!(outer.errors.len(), 3);
    assert_eq!(
        outer.messages_at("address").collect::<Vec<_>>(),
        vec!["Invalid address"]
    );
}

#[test]
fn test_merge_valid_into_valid_stays_valid() {
    let mut outer = ValidationResult::ok();
    outer.merge(ValidationResult::default());
    assert!(outer.is_valid);
}

#[test]
fn test_display_joins_violations() {
    let result = ValidationResult::fail(vec![
        FieldViolation::new("email", "Invalid email"),
        FieldViolation::new("", "A valid SSN or passport is required"),
    ]);

    assert_eq!(
        result.to_string(),
        "email: Invalid email; A valid SSN or passport is required"
    );
}

#[test]
fn test_violation_serializes_path_and_message() {
    let violation = FieldViolation::new("ssn", "Invalid SSN format (XXX-XX-XXXX or XXXXXXXXX)");
    let json = serde_json::to_value(&violation).unwrap();

    assert_eq!(json["path"], "ssn");
    assert_eq!(json["message"], "Invalid SSN format (XXX-XX-XXXX or XXXXXXXXX)");
}

#[test]
fn test_join_path() {
    assert_eq!(join_path("", "first_name"), "first_name");
    assert_eq!(join_path("passport", "number"), "passport.number");
}

proptest! {
    #[test]
    fn prop_error_count_matches_additions(
        paths in proptest::collection::vec("[a-z_]{1,12}", 0..8)
    ) {
        let mut result = ValidationResult::ok();
        for path in &paths {
            result.add_error(path.clone(), "bad");
        }
        prop_assert_eq!(result.errors.len(), paths.len());
        prop_assert_eq!(result.is_valid, paths.is_empty());
    }
}
