//! Authentication
//!
//! Authentication is an optional, pluggable step that runs before the
//! signup handlers. An [`Authenticator`] turns the request headers into an
//! [`Identity`] or refuses the caller.
//!
//! Two implementations are provided:
//! - [`JwtAuthenticator`] verifies an HS256 bearer token locally
//! - [`RemoteUserAuthenticator`] looks the bearer token up against the auth
//!   backend's user endpoint

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use core_kernel::CoreError;

use crate::config::{AuthMode, AuthSettings};

/// The authenticated caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingCredentials,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Auth backend error: {0}")]
    Backend(String),
}

/// Resolves the caller of a request
#[async_trait]
pub trait Authenticator: Send + Sync + 'static {
    /// Returns the caller's identity, or why they are unauthenticated
    async fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, AuthError>;
}

/// Extracts the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingCredentials)
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Identity {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Creates a new JWT token
///
/// # Arguments
///
/// * `identity` - The caller the token is issued to
/// * `secret` - JWT secret key
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(
    identity: &Identity,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(i64::try_from(expiration_secs).unwrap_or(i64::MAX / 1000));

    let claims = Claims {
        sub: identity.user_id.clone(),
        email: identity.email.clone(),
        role: identity.role.clone(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT token
///
/// # Arguments
///
/// * `token` - The JWT token to validate
/// * `secret` - JWT secret key
/// * `audience` - Required `aud` claim, if any
pub fn validate_token(
    token: &str,
    secret: &str,
    audience: Option<&str>,
) -> Result<Claims, AuthError> {
    let mut validation = Validation::default();
    match audience {
        Some(aud) => validation.set_audience(&[aud]),
        None => validation.validate_aud = false,
    }

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

/// Verifies bearer tokens locally with a shared secret
pub struct JwtAuthenticator {
    secret: String,
    audience: Option<String>,
}

impl JwtAuthenticator {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            audience: None,
        }
    }

    /// Requires tokens to carry this `aud` claim
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }
}

#[async_trait]
impl Authenticator for JwtAuthenticator {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, AuthError> {
        let token = bearer_token(headers)?;
        let claims = validate_token(token, &self.secret, self.audience.as_deref())?;
        Ok(claims.into())
    }
}

/// User record returned by the auth backend
#[derive(Debug, Deserialize)]
struct RemoteUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

/// Looks bearer tokens up against the auth backend
///
/// Forwards the caller's token to `GET {user_url}`; a 200 with a user body
/// authenticates, 401/403 refuse, anything else is a backend error.
pub struct RemoteUserAuthenticator {
    http: reqwest::Client,
    user_url: String,
    api_key: Option<String>,
}

impl RemoteUserAuthenticator {
    pub fn new(user_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            user_url: user_url.into(),
            api_key,
        }
    }
}

#[async_trait]
impl Authenticator for RemoteUserAuthenticator {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, AuthError> {
        let token = bearer_token(headers)?;

        let mut request = self.http.get(&self.user_url).bearer_auth(token);
        if let Some(api_key) = &self.api_key {
            request = request.header("apikey", api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Auth backend responded");

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(AuthError::InvalidToken);
        }
        if !status.is_success() {
            return Err(AuthError::Backend(format!("user lookup returned {}", status)));
        }

        let user: RemoteUser = response
            .json()
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        Ok(Identity {
            user_id: user.id,
            email: user.email,
            role: user.role,
        })
    }
}

/// Builds the configured authenticator, or `None` when authentication is off
///
/// # Errors
///
/// Returns `CoreError::Configuration` if the selected mode lacks its setting.
pub fn build_authenticator(
    settings: &AuthSettings,
) -> Result<Option<Arc<dyn Authenticator>>, CoreError> {
    if !settings.enabled {
        return Ok(None);
    }

    let authenticator: Arc<dyn Authenticator> = match settings.mode {
        AuthMode::Jwt => {
            let secret = settings
                .jwt_secret
                .as_deref()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    CoreError::configuration("auth.jwt_secret is required in jwt mode")
                })?;
            let authenticator = JwtAuthenticator::new(secret);
            Arc::new(match &settings.audience {
                Some(aud) => authenticator.with_audience(aud.clone()),
                None => authenticator,
            })
        }
        AuthMode::Remote => {
            let user_url = settings
                .user_url
                .as_deref()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    CoreError::configuration("auth.user_url is required in remote mode")
                })?;
            Arc::new(RemoteUserAuthenticator::new(user_url, settings.api_key.clone()))
        }
    };

    Ok(Some(authenticator))
}
