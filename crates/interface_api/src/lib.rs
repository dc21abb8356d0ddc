//! HTTP API Layer
//!
//! This crate exposes the person-entity signup flow over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: `GET /signup`, `POST /signup` and `GET /health`
//! - **Middleware**: optional authentication, audit logging, tracing
//! - **DTOs**: error response bodies
//! - **Error Handling**: every failure mapped to a status and a JSON body
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{config::ApiConfig, create_router, AppState};
//!
//! let state = AppState::from_config(ApiConfig::from_env()?)?;
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::CoreError;
use domain_entity::{EntityPort, ProviderAdapter};

use crate::auth::{build_authenticator, Authenticator};
use crate::config::ApiConfig;
use crate::handlers::{health, signup};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub entities: Arc<dyn EntityPort>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
}

impl AppState {
    /// Creates state around an entity port, with authentication off
    pub fn new(entities: Arc<dyn EntityPort>) -> Self {
        Self {
            entities,
            authenticator: None,
        }
    }

    /// Requires every signup request to pass `authenticator`
    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Builds the production state: provider adapter plus configured auth
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if the provider or auth settings
    /// are incomplete.
    pub fn from_config(config: &ApiConfig) -> Result<Self, CoreError> {
        let adapter = ProviderAdapter::new(config.provider_config()?)?;
        Ok(Self {
            entities: Arc::new(adapter),
            authenticator: build_authenticator(&config.auth)?,
        })
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Entity port and optional authenticator
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new().route("/health", get(health::health_check));

    let signup_routes = Router::new()
        .route(
            "/signup",
            get(signup::list_entities).post(signup::create_entity),
        )
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(signup_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
