//! Person Entity Domain
//!
//! This crate covers everything between a raw signup payload and the
//! provider's entity record:
//!
//! - **Model**: [`EntityCreationRequest`] with its [`Passport`] and [`Address`]
//! - **Validation**: [`EntityValidator`] collects every rule violation in one pass
//! - **Port**: [`EntityPort`], the async seam the HTTP layer calls through
//! - **Adapter**: [`ProviderAdapter`], the Basic-authenticated provider client
//! - **Errors**: [`EntityError`], one case per failure class
//!
//! # Examples
//!
//! ```rust
//! use domain_entity::{EntityValidator, EntityError};
//! use serde_json::json;
//!
//! let payload = json!({
//!     "first_name": "Ada",
//!     "last_name": "Lovelace",
//!     "date_of_birth": "01/02/2000",
//!     "email": "ada@example.com",
//!     "address": { "line_1": "1 Yonge St", "city": "Toronto", "country_code": "CA" }
//! });
//!
//! let err: EntityError = EntityValidator::validate_value(&payload).unwrap_err().into();
//! match err {
//!     EntityError::Validation(result) => {
//!         assert!(result.has_error_at("date_of_birth"));
//!         assert!(result.has_error_at(""));
//!     }
//!     EntityError::Provider(_) | EntityError::Transport(_) => unreachable!(),
//! }
//! ```

pub mod adapters;
pub mod address;
pub mod entity;
pub mod error;
pub mod ports;
pub mod validation;

pub use adapters::{ProviderAdapter, ProviderConfig};
pub use address::{Address, UsState};
pub use entity::{EntityCreationRequest, Passport, ProviderEntity};
pub use error::{EntityError, ProviderError};
pub use ports::EntityPort;
pub use validation::EntityValidator;

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockEntityPort;
