//! Core Kernel - Foundational types for the signup service
//!
//! This crate provides the building blocks shared by the domain and API crates:
//! - Core error type for configuration and validation failures
//! - Field-level validation results that aggregate every rule violation
//! - Port marker trait for adapters to external systems

pub mod error;
pub mod ports;
pub mod validation;

pub use error::CoreError;
pub use ports::DomainPort;
pub use validation::{FieldViolation, ValidationResult};
