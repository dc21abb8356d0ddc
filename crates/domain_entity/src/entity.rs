//! Person entity creation request
//!
//! The request submitted at signup and forwarded to the provider's
//! `POST /entities/person` endpoint. A request is built once, validated,
//! sent, and dropped; nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::address::Address;

/// The provider's representation of an entity
///
/// Returned to callers exactly as the provider sent it.
pub type ProviderEntity = serde_json::Value;

/// Passport used as the identity document when no SSN is given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passport {
    pub number: String,
    /// Issuing country (ISO 3166-1 alpha-2)
    pub country_code: String,
}

/// Request to create a person entity with the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCreationRequest {
    /// Legal first name
    pub first_name: String,
    /// Middle name(s), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Legal last name / surname
    pub last_name: String,
    /// Social security number, with or without dashes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport: Option<Passport>,
    /// Date of birth as `YYYY-MM-DD`
    pub date_of_birth: String,
    pub email: String,
    pub address: Address,
}

impl EntityCreationRequest {
    /// Returns true if a non-empty SSN or a passport is attached
    pub fn has_identity_document(&self) -> bool {
        self.ssn.as_deref().is_some_and(|ssn| !ssn.is_empty()) || self.passport.is_some()
    }
}
