//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::AppState;

/// Authentication middleware
///
/// Resolves the caller through the configured authenticator and stores the
/// [`Identity`] in request extensions. Passes everything through when no
/// authenticator is configured.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(authenticator) = state.authenticator.as_ref() else {
        return next.run(request).await;
    };

    match authenticator.authenticate(request.headers()).await {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(e) => {
            warn!(error = %e, "Authentication failed");
            ApiError::Unauthorized.into_response()
        }
    }
}

/// Audit logging middleware
///
/// Logs every signup request with the caller, status and latency
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let user_id = request
        .extensions()
        .get::<Identity>()
        .map(|identity| identity.user_id.clone())
        .unwrap_or_else(|| "anonymous".to_string());

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        user = %user_id,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
