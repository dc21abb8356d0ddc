//! Tests for core_kernel error types

use core_kernel::error::CoreError;

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("provider API key is required");

    assert!(error.is_configuration());
    let CoreError::Configuration(msg) = error;
    assert_eq!(msg, "provider API key is required");
}

#[test]
fn test_configuration_error_display() {
    let error = CoreError::configuration("missing base URL");
    assert_eq!(error.to_string(), "Configuration error: missing base URL");
}
