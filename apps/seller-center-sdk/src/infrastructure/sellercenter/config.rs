//! Seller center transport configuration.

use std::time::Duration;

/// API version sent when none is configured.
pub const DEFAULT_API_VERSION: &str = "1.0";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Signing credentials. `Debug` never prints the key.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    /// Create new credentials.
    #[must_use]
    pub const fn new(api_key: String) -> Self {
        Self { api_key }
    }

    /// Get the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Configuration for the seller center HTTP transport.
#[derive(Debug, Clone)]
pub struct SellerCenterConfig {
    /// API endpoint, e.g. `https://sellercenter-api.example.com/`.
    pub endpoint: String,
    /// Seller account identifier sent as `UserID`.
    pub user_id: String,
    /// Signing credentials.
    pub credentials: Credentials,
    /// API version sent as `Version`.
    pub version: String,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Retry policy for read-only actions.
    pub retry: RetryConfig,
}

impl SellerCenterConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(endpoint: String, user_id: String, api_key: String) -> Self {
        Self {
            endpoint,
            user_id,
            credentials: Credentials::new(api_key),
            version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryConfig::default(),
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Set the API version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SELLER_CENTER_ENDPOINT`, `SELLER_CENTER_USER_ID`
    /// or `SELLER_CENTER_API_KEY` is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = required_env("SELLER_CENTER_ENDPOINT")?;
        let user_id = required_env("SELLER_CENTER_USER_ID")?;
        let api_key = required_env("SELLER_CENTER_API_KEY")?;

        let version = std::env::var("SELLER_CENTER_API_VERSION")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let retry = RetryConfig {
            max_attempts: parse_env_u32(
                "SELLER_CENTER_MAX_ATTEMPTS",
                RetryConfig::default().max_attempts,
            ),
            ..RetryConfig::default()
        };

        Ok(Self::new(endpoint, user_id, api_key)
            .with_version(version)
            .with_timeout(parse_env_duration_secs(
                "SELLER_CENTER_TIMEOUT_SECS",
                DEFAULT_TIMEOUT,
            ))
            .with_retry(retry))
    }
}

/// Retry configuration.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub multiplier: f64,
}

impl RetryConfig {
    /// A policy that never retries.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(10),
            multiplier: 2.0,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
}

fn required_env(key: &str) -> Result<String, ConfigError> {
    let value = std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))?;
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyValue(key.to_string()));
    }
    Ok(value)
}

fn parse_env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_env_duration_secs(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(default, Duration::from_secs)
}
