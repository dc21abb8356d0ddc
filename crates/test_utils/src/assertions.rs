//! Custom Test Assertions
//!
//! Provides assertion helpers for validation results that print every
//! recorded violation when they fail.

use core_kernel::ValidationResult;

/// Asserts that a violation containing `message` was recorded at `path`
///
/// # Panics
///
/// Panics if no violation at `path` contains `message`
pub fn assert_violation(result: &ValidationResult, path: &str, message: &str) {
    assert!(
        result.messages_at(path).any(|m| m.contains(message)),
        "Expected violation at {:?} containing {:?}, found: {}",
        path,
        message,
        result
    );
}

/// Asserts that no violation was recorded at `path`
///
/// # Panics
///
/// Panics if any violation is recorded at `path`
pub fn assert_no_violation_at(result: &ValidationResult, path: &str) {
    assert!(
        !result.has_error_at(path),
        "Expected no violation at {:?}, found: {}",
        path,
        result
    );
}
