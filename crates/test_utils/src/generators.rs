//! Property-Based Test Generators
//!
//! Provides proptest strategies for signup payloads. Strategies named
//! `valid_*` only produce inputs the validator must accept.

use domain_entity::UsState;
use proptest::prelude::*;
use serde_json::Value;

use crate::builders::TestEntityPayloadBuilder;

/// Which identity documents a payload carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityDocuments {
    SsnOnly,
    PassportOnly,
    Both,
}

/// Strategy for capitalised names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,11}"
}

/// Strategy for well-formed SSNs, with or without dashes
pub fn ssn_strategy() -> impl Strategy<Value = String> {
    (0u32..1000, 0u32..100, 0u32..10000, any::<bool>()).prop_map(|(area, group, serial, dashed)| {
        if dashed {
            format!("{:03}-{:02}-{:04}", area, group, serial)
        } else {
            format!("{:03}{:02}{:04}", area, group, serial)
        }
    })
}

/// Strategy for `YYYY-MM-DD` dates of birth
pub fn date_of_birth_strategy() -> impl Strategy<Value = String> {
    (1900u32..2010, 1u32..13, 1u32..29)
        .prop_map(|(year, month, day)| format!("{:04}-{:02}-{:02}", year, month, day))
}

/// Strategy for state abbreviations in arbitrary letter case
pub fn state_code_any_case_strategy() -> impl Strategy<Value = String> {
    (proptest::sample::select(UsState::ALL.to_vec()), any::<(bool, bool)>()).prop_map(
        |(state, (upper_first, upper_second))| {
            let mut chars = state.code().chars();
            let first = chars.next().unwrap_or('A');
            let second = chars.next().unwrap_or('A');
            let case = |c: char, upper: bool| {
                if upper {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            };
            format!("{}{}", case(first, upper_first), case(second, upper_second))
        },
    )
}

/// Strategy for two-letter country codes other than `US`
pub fn non_us_country_code_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{2}".prop_filter("not US", |code| code != "US")
}

/// Strategy for the identity documents attached to a payload
pub fn identity_documents_strategy() -> impl Strategy<Value = IdentityDocuments> {
    prop_oneof![
        Just(IdentityDocuments::SsnOnly),
        Just(IdentityDocuments::PassportOnly),
        Just(IdentityDocuments::Both),
    ]
}

/// Strategy for payloads with the personal fields randomised
fn person_builder_strategy() -> impl Strategy<Value = TestEntityPayloadBuilder> {
    (name_strategy(), name_strategy(), date_of_birth_strategy()).prop_map(|(first, last, dob)| {
        TestEntityPayloadBuilder::new()
            .with_email(format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()))
            .with_first_name(first)
            .with_last_name(last)
            .with_date_of_birth(dob)
    })
}

/// Strategy for payloads the validator must accept
pub fn valid_payload_strategy() -> impl Strategy<Value = Value> {
    (
        person_builder_strategy(),
        identity_documents_strategy(),
        ssn_strategy(),
        "[A-Z][0-9]{7}",
        prop_oneof![
            state_code_any_case_strategy().prop_map(|state| ("US".to_string(), Some(state))),
            non_us_country_code_strategy().prop_map(|code| (code, None)),
        ],
    )
        .prop_map(|(builder, documents, ssn, passport_number, (country, state))| {
            let builder = match documents {
                IdentityDocuments::SsnOnly => builder.with_ssn(ssn),
                IdentityDocuments::PassportOnly => {
                    builder.without_ssn().with_passport(passport_number, "GB")
                }
                IdentityDocuments::Both => {
                    builder.with_ssn(ssn).with_passport(passport_number, "GB")
                }
            };
            let builder = builder.with_country_code(country);
            match state {
                Some(state) => builder.with_state(state),
                None => builder.without_state(),
            }
            .build()
        })
}

/// Strategy for otherwise valid payloads carrying neither SSN nor passport
pub fn payload_without_identity_strategy() -> impl Strategy<Value = Value> {
    person_builder_strategy().prop_map(|builder| builder.without_ssn().build())
}
