//! External Adapters for the Entity Domain
//!
//! Adapter implementations of the `EntityPort` trait for systems outside
//! this service.
//!
//! # Available Adapters
//!
//! - **ProviderAdapter**: The provider's entity REST API, Basic-authenticated
//! - **MockEntityPort**: In-memory mock for testing (re-exported from ports module)
//!
//! # Usage
//!
//! Build the configuration once at start-up and share the adapter:
//!
//! ```rust,ignore
//! use domain_entity::adapters::{ProviderAdapter, ProviderConfig};
//! use domain_entity::EntityPort;
//! use std::sync::Arc;
//!
//! let config = ProviderConfig::new("https://api.provider.example", "test_key")?;
//! let adapter = ProviderAdapter::new(config)?;
//! let port: Arc<dyn EntityPort> = Arc::new(adapter);
//! ```

pub mod provider;

pub use provider::{ProviderAdapter, ProviderConfig};
