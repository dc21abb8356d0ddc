//! Ports and Adapters Infrastructure
//!
//! Domain crates define port traits describing what they need from the
//! outside world; adapters (the provider HTTP client, in-memory mocks)
//! implement them.
//!
//! ```text
//!        ┌──────────────────────────┐
//!        │   HTTP handlers (API)    │
//!        └────────────┬─────────────┘
//!                     ▼
//!        ┌──────────────────────────┐
//!        │  Port traits (EntityPort)│
//!        └──────┬────────────┬──────┘
//!               ▲            ▲
//!     ┌─────────┴───┐  ┌─────┴────────┐
//!     │  Provider   │  │  In-memory   │
//!     │  REST API   │  │  mock        │
//!     └─────────────┘  └──────────────┘
//! ```

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be shared across async request handlers.
pub trait DomainPort: Send + Sync + 'static {}
