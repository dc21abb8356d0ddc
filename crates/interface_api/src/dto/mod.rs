//! Data transfer objects for the HTTP boundary

pub mod signup;

pub use signup::{ErrorBody, ValidationErrorBody};
