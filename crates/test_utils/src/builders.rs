//! Test Data Builders
//!
//! Provides a builder for signup payloads with sensible defaults. Tests
//! specify only the fields they care about; everything else is a valid
//! US person with an SSN.
//!
//! Payloads are built as untyped JSON so tests can also express inputs the
//! typed model cannot hold (missing fields, wrong types, bad state codes).

use serde_json::{json, Map, Value};

/// Builder for constructing signup payloads
#[derive(Debug, Clone)]
pub struct TestEntityPayloadBuilder {
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    ssn: Option<String>,
    passport: Option<(String, String)>,
    date_of_birth: String,
    email: String,
    line_1: String,
    line_2: Option<String>,
    city: String,
    state: Option<String>,
    postal_code: Option<String>,
    country_code: String,
}

impl Default for TestEntityPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEntityPayloadBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            first_name: "Jane".to_string(),
            middle_name: None,
            last_name: "Doe".to_string(),
            ssn: Some("123-45-6789".to_string()),
            passport: None,
            date_of_birth: "1990-04-12".to_string(),
            email: "jane.doe@example.com".to_string(),
            line_1: "101 Market St".to_string(),
            line_2: None,
            city: "San Francisco".to_string(),
            state: Some("CA".to_string()),
            postal_code: Some("94105".to_string()),
            country_code: "US".to_string(),
        }
    }

    /// Sets the first name
    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = name.into();
        self
    }

    /// Sets the middle name
    pub fn with_middle_name(mut self, name: impl Into<String>) -> Self {
        self.middle_name = Some(name.into());
        self
    }

    /// Sets the last name
    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = name.into();
        self
    }

    /// Sets the SSN
    pub fn with_ssn(mut self, ssn: impl Into<String>) -> Self {
        self.ssn = Some(ssn.into());
        self
    }

    /// Removes the SSN
    pub fn without_ssn(mut self) -> Self {
        self.ssn = None;
        self
    }

    /// Attaches a passport
    pub fn with_passport(
        mut self,
        number: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        self.passport = Some((number.into(), country_code.into()));
        self
    }

    /// Sets the date of birth
    pub fn with_date_of_birth(mut self, dob: impl Into<String>) -> Self {
        self.date_of_birth = dob.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the second address line
    pub fn with_line_2(mut self, line: impl Into<String>) -> Self {
        self.line_2 = Some(line.into());
        self
    }

    /// Sets the city
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the state, verbatim
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Removes the state
    pub fn without_state(mut self) -> Self {
        self.state = None;
        self
    }

    /// Sets the postal code
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Sets the address country code
    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = code.into();
        self
    }

    /// Builds the payload
    pub fn build(self) -> Value {
        let mut address = Map::new();
        address.insert("line_1".to_string(), json!(self.line_1));
        if let Some(line_2) = self.line_2 {
            address.insert("line_2".to_string(), json!(line_2));
        }
        address.insert("city".to_string(), json!(self.city));
        if let Some(state) = self.state {
            address.insert("state".to_string(), json!(state));
        }
        if let Some(postal_code) = self.postal_code {
            address.insert("postal_code".to_string(), json!(postal_code));
        }
        address.insert("country_code".to_string(), json!(self.country_code));

        let mut entity = Map::new();
        entity.insert("first_name".to_string(), json!(self.first_name));
        if let Some(middle_name) = self.middle_name {
            entity.insert("middle_name".to_string(), json!(middle_name));
        }
        entity.insert("last_name".to_string(), json!(self.last_name));
        if let Some(ssn) = self.ssn {
            entity.insert("ssn".to_string(), json!(ssn));
        }
        if let Some((number, country_code)) = self.passport {
            entity.insert(
                "passport".to_string(),
                json!({ "number": number, "country_code": country_code }),
            );
        }
        entity.insert("date_of_birth".to_string(), json!(self.date_of_birth));
        entity.insert("email".to_string(), json!(self.email));
        entity.insert("address".to_string(), Value::Object(address));

        Value::Object(entity)
    }
}
