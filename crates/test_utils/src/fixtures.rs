//! Pre-built Test Fixtures
//!
//! Provides ready-to-use signup payloads and provider responses. Fixtures
//! are fixed and predictable, except [`EntityFixtures::random_person`]
//! which draws names from `fake`.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use serde_json::{json, Value};

use crate::builders::TestEntityPayloadBuilder;

/// Fixture for signup payloads
pub struct EntityFixtures;

impl EntityFixtures {
    /// A US resident identified by SSN
    pub fn us_person() -> Value {
        TestEntityPayloadBuilder::new().build()
    }

    /// A Canadian resident identified by passport, no state
    pub fn passport_holder() -> Value {
        TestEntityPayloadBuilder::new()
            .with_first_name("Pierre")
            .with_last_name("Tremblay")
            .without_ssn()
            .with_passport("GA123456", "CA")
            .with_line_2("Suite 400")
            .with_city("Montreal")
            .without_state()
            .with_postal_code("H3B 1A7")
            .with_country_code("CA")
            .with_email("pierre.tremblay@example.ca")
            .build()
    }

    /// A US resident with a randomly generated name and email
    pub fn random_person() -> Value {
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        let email: String = SafeEmail().fake();
        TestEntityPayloadBuilder::new()
            .with_first_name(first)
            .with_last_name(last)
            .with_email(email)
            .build()
    }

    /// A payload whose date of birth uses the wrong format
    pub fn bad_date_of_birth() -> Value {
        TestEntityPayloadBuilder::new()
            .with_date_of_birth("01/02/2000")
            .build()
    }
}

/// Fixture for provider responses
pub struct ProviderFixtures;

impl ProviderFixtures {
    /// API key used by test adapters
    pub const API_KEY: &'static str = "test_api_key";

    /// `Authorization` header the provider should receive for [`Self::API_KEY`]
    pub const AUTHORIZATION: &'static str = "Basic dGVzdF9hcGlfa2V5";

    /// Minimal created entity
    pub fn created_entity() -> Value {
        json!({ "id": "ent_1" })
    }

    /// A page of two entities as returned by `GET /entities`
    pub fn entity_page() -> Value {
        json!({
            "entities": [
                { "id": "ent_1", "type": "PERSON" },
                { "id": "ent_2", "type": "PERSON" }
            ],
            "has_more": false
        })
    }

    /// Provider error envelope for a rejected SSN
    pub fn validation_error_envelope() -> Value {
        json!({
            "type": "validation_error",
            "code": "invalid_field",
            "message": "bad ssn",
            "documentation_url": "https://docs.provider.example/errors#invalid_field",
            "details": "ssn failed verification"
        })
    }

    /// Provider error envelope for an unauthenticated call
    pub fn unauthorized_envelope() -> Value {
        json!({
            "type": "authentication_error",
            "code": "unauthorized",
            "message": "API key is invalid",
            "documentation_url": "https://docs.provider.example/errors#unauthorized",
            "details": ""
        })
    }
}
