//! Directions service configuration

use config::builder::{ConfigBuilder, DefaultState};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Default public endpoint of the legacy Directions API
pub const DEFAULT_DIRECTIONS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Configuration for the directions client
#[derive(Clone, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Provider API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Directions endpoint, overridable for testing
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of response body bytes read
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl std::fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_body_bytes", &self.max_body_bytes)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_DIRECTIONS_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_max_body_bytes() -> usize {
    1 << 20
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_body_bytes: default_max_body_bytes(),
            user_agent: default_user_agent(),
        }
    }
}

impl DirectionsConfig {
    /// Create a configuration with the given API key and default settings
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Self::with_api_key("test-key")
        }
    }

    /// Load configuration from an optional `directions` file and the environment
    ///
    /// Environment variables use the `DIRECTIONS_` prefix, e.g.
    /// `DIRECTIONS_API_KEY` or `DIRECTIONS_BASE_URL`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name("directions").required(false))
                .add_source(config::Environment::with_prefix("DIRECTIONS").try_parsing(true)),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }

    /// Get the API key, if one is configured and not blank
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .filter(|key| !key.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// A missing API key is not a configuration error here; it is reported
    /// when a query is built.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.max_body_bytes == 0 {
            return Err("max_body_bytes must be greater than 0".to_string());
        }

        Ok(())
    }
}
