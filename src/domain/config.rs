//! Client configuration models and loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Environment variable holding the service API key.
pub const API_KEY_ENV: &str = "NEDOTO_API_KEY";

/// Configuration loaded from a `nedoto.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// HTTP transport configuration.
    #[serde(default)]
    pub http: TransportConfig,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.http.validate()
    }
}

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransportConfig {
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl TransportConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.connect_timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "connect_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.connect_timeout_secs > self.timeout_secs {
            return Err(AppError::InvalidConfig(
                "connect_timeout_secs must not exceed timeout_secs".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(AppError::InvalidConfig("user_agent must not be blank".to_string()));
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("nedoto-rust/{}", env!("CARGO_PKG_VERSION"))
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ClientConfig, AppError> {
    let config: ClientConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load and parse configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, AppError> {
    let content = std::fs::read_to_string(path)?;
    parse_config_content(&content)
}

/// Read the API key from [`API_KEY_ENV`].
pub fn api_key_from_env() -> Result<String, AppError> {
    std::env::var(API_KEY_ENV)
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))
}
