//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
///
/// Field-level input problems are reported through
/// [`ValidationResult`](crate::ValidationResult) instead.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }

    /// Returns true if this error was raised while assembling configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, CoreError::Configuration(_))
    }
}
