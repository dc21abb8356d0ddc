//! Field-level validation results
//!
//! Validators never stop at the first problem. Each rule that fails records
//! a [`FieldViolation`] naming the offending field by its dotted path, and
//! the caller receives the whole aggregate in one [`ValidationResult`].
//!
//! Paths follow the shape of the input document: `first_name`,
//! `address.country_code`, `passport.number`. Rules that span several
//! fields are reported against the object that owns them, so the empty
//! path denotes the document root.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Dotted path of the offending field (empty for the document root)
    pub path: String,
    /// Human readable description of the rule that failed
    pub message: String,
}

impl FieldViolation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Result of validating an input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the document is valid
    pub is_valid: bool,
    /// Every violation found, in the order the rules ran
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Creates a failed validation result with errors
    pub fn fail(errors: Vec<FieldViolation>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Records a violation against the field at `path`
    pub fn add_error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldViolation::new(path, message));
        self.is_valid = false;
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
    }

    /// Returns true if any violation was recorded against `path`
    pub fn has_error_at(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }

    /// Returns the messages recorded against `path`
    pub fn messages_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.path == path)
            .map(|e| e.message.as_str())
    }

    /// Converts into a `Result`, keeping the aggregate as the error
    pub fn into_result(self) -> Result<(), ValidationResult> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "valid");
        }
        let joined = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// Joins a parent path and a field name into a dotted path
///
/// # Examples
///
/// ```rust
/// use core_kernel::validation::join_path;
///
/// assert_eq!(join_path("", "email"), "email");
/// assert_eq!(join_path("address", "city"), "address.city");
/// ```
pub fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}
