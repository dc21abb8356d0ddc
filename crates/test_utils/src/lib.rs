//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! signup service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built payloads and provider responses
//! - `builders`: Builder for signup payloads with sensible defaults
//! - `assertions`: Custom assertion helpers for validation results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
