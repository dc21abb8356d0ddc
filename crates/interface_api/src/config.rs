//! API configuration
//!
//! Loaded once at start-up from `SIGNUP_`-prefixed environment variables,
//! nested with `__`:
//!
//! * `SIGNUP_HOST`, `SIGNUP_PORT`, `SIGNUP_LOG_LEVEL`
//! * `SIGNUP_PROVIDER__BASE_URL`, `SIGNUP_PROVIDER__API_KEY`,
//!   `SIGNUP_PROVIDER__TIMEOUT_SECS`
//! * `SIGNUP_AUTH__ENABLED`, `SIGNUP_AUTH__MODE` (`jwt` | `remote`),
//!   `SIGNUP_AUTH__JWT_SECRET`, `SIGNUP_AUTH__AUDIENCE`,
//!   `SIGNUP_AUTH__USER_URL`, `SIGNUP_AUTH__API_KEY`
//!
//! `COLUMN_API_URL` and `COLUMN_API_KEY` are read as fallbacks for the
//! provider settings.

use std::collections::HashMap;
use std::fmt;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use core_kernel::CoreError;
use domain_entity::ProviderConfig;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Provider connection settings
    pub provider: ProviderSettings,
    /// Optional caller authentication
    #[serde(default)]
    pub auth: AuthSettings,
}

/// Provider connection settings
#[derive(Clone, Deserialize)]
pub struct ProviderSettings {
    pub base_url: String,
    pub api_key: String,
    /// Request timeout; unset waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// How callers are authenticated when authentication is enabled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Verify the bearer token locally with a shared secret
    #[default]
    Jwt,
    /// Look the bearer token up against the auth backend
    Remote,
}

/// Caller authentication settings
#[derive(Clone, Default, Deserialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub mode: AuthMode,
    /// HS256 secret for `jwt` mode
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Expected `aud` claim for `jwt` mode
    #[serde(default)]
    pub audience: Option<String>,
    /// User lookup endpoint for `remote` mode
    #[serde(default)]
    pub user_url: Option<String>,
    /// Key sent to the auth backend in `remote` mode
    #[serde(default)]
    pub api_key: Option<String>,
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("enabled", &self.enabled)
            .field("mode", &self.mode)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("audience", &self.audience)
            .field("user_url", &self.user_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl ApiConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_map(std::env::vars().collect())
    }

    /// Loads configuration from an explicit set of variables
    pub fn from_map(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let legacy_url = vars.get("COLUMN_API_URL").cloned().unwrap_or_default();
        let legacy_key = vars.get("COLUMN_API_KEY").cloned().unwrap_or_default();

        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080_i64)?
            .set_default("log_level", "info")?
            .set_default("provider.base_url", legacy_url)?
            .set_default("provider.api_key", legacy_key)?
            .add_source(
                Environment::with_prefix("SIGNUP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .build()?
            .try_deserialize()
    }

    /// Builds the provider adapter configuration
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if the key or base URL is missing
    /// or malformed.
    pub fn provider_config(&self) -> Result<ProviderConfig, CoreError> {
        let config = ProviderConfig::new(&self.provider.base_url, self.provider.api_key.clone())?;
        Ok(match self.provider.timeout_secs {
            Some(secs) => config.with_timeout(secs),
            None => config,
        })
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_and_provider_settings() {
        let config = ApiConfig::from_map(vars(&[
            ("SIGNUP_PROVIDER__BASE_URL", "https://api.provider.example"),
            ("SIGNUP_PROVIDER__API_KEY", "test_key"),
        ]))
        .unwrap();

        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.provider.api_key, "test_key");
        assert!(!config.auth.enabled);
        assert!(config.provider_config().is_ok());
    }

    #[test]
    fn test_legacy_provider_variables() {
        let config = ApiConfig::from_map(vars(&[
            ("COLUMN_API_URL", "https://legacy.provider.example"),
            ("COLUMN_API_KEY", "legacy_key"),
            ("SIGNUP_PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.provider.base_url, "https://legacy.provider.example");
        assert_eq!(config.provider.api_key, "legacy_key");
    }

    #[test]
    fn test_missing_api_key_fails_provider_config() {
        let config = ApiConfig::from_map(vars(&[(
            "SIGNUP_PROVIDER__BASE_URL",
            "https://api.provider.example",
        )]))
        .unwrap();

        let err = config.provider_config().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_auth_settings() {
        let config = ApiConfig::from_map(vars(&[
            ("SIGNUP_PROVIDER__BASE_URL", "https://api.provider.example"),
            ("SIGNUP_PROVIDER__API_KEY", "test_key"),
            ("SIGNUP_PROVIDER__TIMEOUT_SECS", "15"),
            ("SIGNUP_AUTH__ENABLED", "true"),
            ("SIGNUP_AUTH__MODE", "remote"),
            ("SIGNUP_AUTH__USER_URL", "https://auth.example/auth/v1/user"),
        ]))
        .unwrap();

        assert!(config.auth.enabled);
        assert_eq!(config.auth.mode, AuthMode::Remote);
        assert_eq!(config.provider.timeout_secs, Some(15));
        assert_eq!(config.provider_config().unwrap().timeout_secs, Some(15));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ApiConfig::from_map(vars(&[
            ("SIGNUP_PROVIDER__BASE_URL", "https://api.provider.example"),
            ("SIGNUP_PROVIDER__API_KEY", "very-secret-key"),
            ("SIGNUP_AUTH__JWT_SECRET", "very-secret-jwt"),
        ]))
        .unwrap();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("very-secret-key"));
        assert!(!debug.contains("very-secret-jwt"));
    }
}
