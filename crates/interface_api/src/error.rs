//! API error handling
//!
//! Every failure leaves the service as a 400, except authentication which
//! is a 401. The body shape tells the caller which kind it was.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use core_kernel::ValidationResult;
use domain_entity::{EntityError, ProviderError};

use crate::dto::{ErrorBody, ValidationErrorBody};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(ValidationResult),

    #[error("{0}")]
    Provider(ProviderError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(result) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorBody::from(result)),
            )
                .into_response(),
            ApiError::Provider(err) => (StatusCode::BAD_REQUEST, Json(err)).into_response(),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorBody::new("Unauthorized")),
            )
                .into_response(),
        }
    }
}

impl From<EntityError> for ApiError {
    fn from(err: EntityError) -> Self {
        match err {
            EntityError::Validation(result) => ApiError::Validation(result),
            EntityError::Provider(err) => ApiError::Provider(err),
            EntityError::Transport(message) => ApiError::BadRequest(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
