//! Entity domain errors
//!
//! Every failure of the signup flow falls into exactly one of three cases,
//! so callers can branch exhaustively:
//!
//! - **Validation**: the submitted payload broke one or more field rules
//! - **Provider**: the provider received the call and rejected it
//! - **Transport**: anything else between us and the provider (network,
//!   unreadable bodies)

use std::fmt;

use core_kernel::ValidationResult;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur in the entity domain
#[derive(Debug, Error)]
pub enum EntityError {
    /// The payload failed validation
    #[error("Validation failed: {0}")]
    Validation(ValidationResult),

    /// The provider rejected the request
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// The provider could not be reached or answered with something unreadable
    #[error("Transport error: {0}")]
    Transport(String),
}

impl EntityError {
    /// Creates a Transport error with a message
    pub fn transport(message: impl Into<String>) -> Self {
        EntityError::Transport(message.into())
    }

    /// Returns the provider error, if the provider rejected the call
    pub fn as_provider(&self) -> Option<&ProviderError> {
        match self {
            EntityError::Provider(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationResult> for EntityError {
    fn from(result: ValidationResult) -> Self {
        EntityError::Validation(result)
    }
}

/// Error returned by the provider on a non-success status
///
/// Mirrors the provider's error envelope field for field, plus the HTTP
/// status it arrived with. `details` is kept exactly as the provider sent
/// it. The string form is the JSON encoding, so
/// `serde_json::from_str(&err.to_string())` yields an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderError {
    pub status_code: u16,
    #[serde(rename = "type")]
    pub error_type: String,
    pub code: String,
    pub message: String,
    pub documentation_url: String,
    pub details: Value,
}

impl ProviderError {
    /// Builds the error from a status code and the parsed envelope
    pub fn from_envelope(status_code: u16, envelope: ProviderErrorEnvelope) -> Self {
        Self {
            status_code,
            error_type: envelope.error_type,
            code: envelope.code,
            message: envelope.message,
            documentation_url: envelope.documentation_url,
            details: envelope.details,
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl std::error::Error for ProviderError {}

/// Error body as sent by the provider
///
/// Any JSON object decodes. Text fields that are missing or `null` read as
/// empty strings and non-string values keep their JSON text. A missing
/// `details` reads as an empty string; a present one is kept verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorEnvelope {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub error_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub documentation_url: String,
    #[serde(default = "empty_details")]
    pub details: Value,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(value) => value,
        other => other.to_string(),
    })
}

fn empty_details() -> Value {
    Value::String(String::new())
}
