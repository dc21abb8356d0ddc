//! Signup handlers
//!
//! `GET /signup` lists the provider's entities; `POST /signup` validates the
//! body and creates a person entity. Both return the provider's JSON as-is.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use tracing::{info, warn};

use domain_entity::{EntityValidator, ProviderEntity};

use crate::error::ApiError;
use crate::AppState;

/// Lists provider entities
pub async fn list_entities(
    State(state): State<AppState>,
) -> Result<Json<ProviderEntity>, ApiError> {
    let listing = state.entities.list_entities().await?;
    info!("Listed entities");
    Ok(Json(listing))
}

/// Validates the payload and creates a person entity
pub async fn create_entity(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProviderEntity>, ApiError> {
    let Json(payload) = payload?;

    let request = EntityValidator::validate_value(&payload).map_err(|result| {
        warn!(violations = result.errors.len(), "Signup payload rejected");
        ApiError::Validation(result)
    })?;

    let entity = state.entities.create_person(&request).await?;
    info!(entity_id = ?entity.get("id"), "Person entity created");
    Ok(Json(entity))
}
