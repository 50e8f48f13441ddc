use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, CaptchaConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, HostConfig, LoggingConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub host: HostConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub captcha: CaptchaConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PORTAL_CONFIG_DIR env var, else use ./.portal/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PORTAL_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PORTAL_CONFIG_DIR env var > ./.portal/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Absolute directory holding the persisted session.
    pub fn storage_dir(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(self.storage.resolve(&config_dir))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}ms)",
            self.api.normalized_base_url(),
            self.api.timeout_ms
        );
        info!("  host: {}", self.host.resolve());
        info!("  storage: {}", self.storage.dir);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  captcha: {} (action: {})",
            if self.captcha.token.is_some() {
                "configured"
            } else {
                "not configured"
            },
            self.captcha.action
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Api
        Self::apply_env_string("PORTAL_API_URL", &mut self.api.base_url);
        Self::apply_env_parse("PORTAL_API_TIMEOUT_MS", &mut self.api.timeout_ms);

        // Host
        if let Ok(val) = std::env::var("PORTAL_HOST") {
            self.host.kind = val.parse()?;
        }
        Self::apply_env_option_string("PORTAL_USER_AGENT", &mut self.host.user_agent);

        // Storage
        Self::apply_env_string("PORTAL_STORAGE_DIR", &mut self.storage.dir);

        // Logging
        Self::apply_env_parse("PORTAL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PORTAL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PORTAL_LOG_FILE", &mut self.logging.file);

        // Captcha
        Self::apply_env_option_string("PORTAL_RECAPTCHA_TOKEN", &mut self.captcha.token);

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
