//! Entity Domain Ports
//!
//! Defines the port trait through which the signup flow talks to whoever
//! keeps entity records. The production adapter is the provider's REST API
//! ([`crate::adapters::ProviderAdapter`]); an in-memory mock stands in for
//! it in tests.
//!
//! - **Provider Adapter**: HTTP calls against the provider's entity API
//! - **Mock Adapter**: For testing without external dependencies

use async_trait::async_trait;

use core_kernel::DomainPort;

use crate::entity::{EntityCreationRequest, ProviderEntity};
use crate::error::EntityError;

/// The port trait for entity operations
///
/// Both operations are single calls: no retries, no batching.
#[async_trait]
pub trait EntityPort: DomainPort {
    /// Creates a person entity
    ///
    /// # Arguments
    ///
    /// * `request` - A request that has already passed validation
    ///
    /// # Returns
    ///
    /// The entity exactly as the provider returned it
    async fn create_person(
        &self,
        request: &EntityCreationRequest,
    ) -> Result<ProviderEntity, EntityError>;

    /// Lists the entities known to the provider
    ///
    /// # Returns
    ///
    /// The listing exactly as the provider returned it
    async fn list_entities(&self) -> Result<ProviderEntity, EntityError>;
}

/// Mock implementation of EntityPort for testing
///
/// Stores created entities in memory. A failure can be queued so the next
/// call returns it instead of touching the store.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of EntityPort
    #[derive(Debug, Default)]
    pub struct MockEntityPort {
        entities: Arc<RwLock<Vec<ProviderEntity>>>,
        next_failure: Arc<RwLock<Option<EntityError>>>,
    }

    impl MockEntityPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with entities for testing
        pub async fn with_entities(entities: Vec<ProviderEntity>) -> Self {
            let port = Self::new();
            port.entities.write().await.extend(entities);
            port
        }

        /// Makes the next call fail with `error`
        pub async fn fail_next(&self, error: EntityError) {
            *self.next_failure.write().await = Some(error);
        }

        /// Returns the number of stored entities
        pub async fn len(&self) -> usize {
            self.entities.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }

        async fn take_failure(&self) -> Result<(), EntityError> {
            match self.next_failure.write().await.take() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }
    }

    impl DomainPort for MockEntityPort {}

    #[async_trait]
    impl EntityPort for MockEntityPort {
        async fn create_person(
            &self,
            request: &EntityCreationRequest,
        ) -> Result<ProviderEntity, EntityError> {
            self.take_failure().await?;

            let mut entities = self.entities.write().await;
            let entity = json!({
                "id": format!("ent_{}", entities.len() + 1),
                "type": "PERSON",
                "person": request,
            });
            entities.push(entity.clone());
            Ok(entity)
        }

        async fn list_entities(&self) -> Result<ProviderEntity, EntityError> {
            self.take_failure().await?;
            Ok(ProviderEntity::Array(self.entities.read().await.clone()))
        }
    }
}
