use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_MS,
    MAX_API_TIMEOUT_MS, MIN_API_TIMEOUT_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Backend connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            timeout_ms: DEFAULT_API_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if !(MIN_API_TIMEOUT_MS..=MAX_API_TIMEOUT_MS).contains(&self.timeout_ms) {
            return Err(ConfigError::api(format!(
                "api.timeout_ms must be {}-{}, got {}",
                MIN_API_TIMEOUT_MS, MAX_API_TIMEOUT_MS, self.timeout_ms
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Base URL without a trailing slash.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
