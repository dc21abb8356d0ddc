//! Provider Entity Adapter
//!
//! Connects the entity domain to the provider's REST API. Every call is a
//! single request: no retries, no backoff, no circuit breaker.
//!
//! # Wire contract
//!
//! - URL: configured base URL followed by the operation path
//! - `Authorization: Basic base64(api_key)` (the key alone, no password part)
//! - Bodies are JSON and labelled `Content-Type: application/json`
//!
//! # Error Handling
//!
//! - 2xx -> body parsed as JSON and returned untouched, whatever its shape
//! - other status with a JSON object body -> `EntityError::Provider`
//! - other status with any other body -> `EntityError::Transport`
//! - DNS, connect, timeout and body read failures -> `EntityError::Transport`

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use core_kernel::{CoreError, DomainPort};

use crate::entity::{EntityCreationRequest, ProviderEntity};
use crate::error::{EntityError, ProviderError, ProviderErrorEnvelope};
use crate::ports::EntityPort;

const CREATE_PERSON_PATH: &str = "/entities/person";
const LIST_ENTITIES_PATH: &str = "/entities";

/// Configuration for the provider adapter
///
/// Built once at start-up; construction fails if the key or URL is unusable.
/// The `Debug` output redacts the API key.
#[derive(Clone)]
pub struct ProviderConfig {
    base_url: Url,
    api_key: String,
    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    /// Creates a configuration from a base URL and API key
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if the key is empty or the URL
    /// does not parse as an absolute http(s) URL.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, CoreError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CoreError::configuration("provider API key is required"));
        }
        if base_url.trim().is_empty() {
            return Err(CoreError::configuration("provider base URL is required"));
        }

        let base_url = Url::parse(base_url).map_err(|e| {
            CoreError::configuration(format!("invalid provider base URL {}: {}", base_url, e))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(CoreError::configuration(format!(
                "provider base URL must be http or https, got {}",
                base_url.scheme()
            )));
        }

        Ok(Self {
            base_url,
            api_key,
            timeout_secs: None,
        })
    }

    /// Sets a request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the full URL for an operation path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Value of the `Authorization` header sent with every call
    pub fn authorization(&self) -> String {
        format!("Basic {}", STANDARD.encode(self.api_key.as_bytes()))
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Provider adapter implementing the EntityPort trait
///
/// # Example
///
/// ```rust,ignore
/// use domain_entity::adapters::{ProviderAdapter, ProviderConfig};
///
/// let adapter = ProviderAdapter::new(ProviderConfig::new(
///     "https://api.provider.example",
///     "your-api-key",
/// )?)?;
///
/// let listing = adapter.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProviderAdapter {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl ProviderAdapter {
    /// Content type of every request body sent to the provider
    pub const CONTENT_TYPE: &'static str = "application/json";

    /// Creates a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if the credentials cannot be
    /// encoded as a header or the HTTP client cannot be built.
    pub fn new(config: ProviderConfig) -> Result<Self, CoreError> {
        let mut authorization = HeaderValue::from_str(&config.authorization())
            .map_err(|_| CoreError::configuration("provider API key is not a valid header value"))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(Self::CONTENT_TYPE));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| CoreError::configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Creates a person entity (`POST /entities/person`)
    pub async fn create(
        &self,
        request: &EntityCreationRequest,
    ) -> Result<ProviderEntity, EntityError> {
        self.send(Method::POST, CREATE_PERSON_PATH, Some(request)).await
    }

    /// Lists entities (`GET /entities`), returning the listing body as sent
    pub async fn list(&self) -> Result<ProviderEntity, EntityError> {
        self.send::<()>(Method::GET, LIST_ENTITIES_PATH, None).await
    }

    /// Issues one request and maps the response
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, EntityError>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = format!("{} {}", method, path);
        let mut request = self.http.request(method, self.config.endpoint(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| EntityError::transport(format!("{}: {}", endpoint, e)))?;

        let status = response.status();
        debug!(endpoint = %endpoint, status = status.as_u16(), "Provider responded");

        if status.is_success() {
            return response.json::<Value>().await.map_err(|e| {
                EntityError::transport(format!("{}: unreadable response body: {}", endpoint, e))
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            EntityError::transport(format!("{}: unreadable error body: {}", endpoint, e))
        })?;

        let envelope = match serde_json::from_slice::<Value>(&bytes) {
            Ok(body @ Value::Object(_)) => serde_json::from_value::<ProviderErrorEnvelope>(body),
            _ => {
                return Err(EntityError::transport(format!(
                    "{}: provider returned {} without a JSON error body",
                    endpoint, status
                )));
            }
        };

        match envelope {
            Ok(envelope) => {
                let error = ProviderError::from_envelope(status.as_u16(), envelope);
                warn!(
                    endpoint = %endpoint,
                    status = error.status_code,
                    code = %error.code,
                    "Provider rejected request"
                );
                Err(EntityError::Provider(error))
            }
            Err(e) => Err(EntityError::transport(format!(
                "{}: provider returned {} with an unreadable error body: {}",
                endpoint, status, e
            ))),
        }
    }
}

impl DomainPort for ProviderAdapter {}

#[async_trait]
impl EntityPort for ProviderAdapter {
    async fn create_person(
        &self,
        request: &EntityCreationRequest,
    ) -> Result<ProviderEntity, EntityError> {
        self.create(request).await
    }

    async fn list_entities(&self) -> Result<ProviderEntity, EntityError> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_api_key() {
        let err = ProviderConfig::new("https://api.example.com", "  ").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_config_requires_valid_url() {
        assert!(ProviderConfig::new("", "key").is_err());
        assert!(ProviderConfig::new("not a url", "key").is_err());
        assert!(ProviderConfig::new("ftp://example.com", "key").is_err());
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ProviderConfig::new("https://api.example.com/", "key").unwrap();
        assert_eq!(config.endpoint("/entities"), "https://api.example.com/entities");

        let config = ProviderConfig::new("https://api.example.com/v1", "key").unwrap();
        assert_eq!(
            config.endpoint("/entities/person"),
            "https://api.example.com/v1/entities/person"
        );
    }

    #[test]
    fn test_authorization_is_base64_of_key_only() {
        let config = ProviderConfig::new("https://api.example.com", "test_key").unwrap();
        assert_eq!(config.authorization(), "Basic dGVzdF9rZXk=");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ProviderConfig::new("https://api.example.com", "super-secret").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_timeout_defaults_to_none() {
        let config = ProviderConfig::new("https://api.example.com", "key").unwrap();
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.with_timeout(10).timeout_secs, Some(10));
    }}
