mod api_config;
mod captcha_config;
mod config;
mod error;
mod host_config;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use captcha_config::CaptchaConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use host_config::{HostConfig, HostKind, HostSetting};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

pub const CONFIG_DIR_ENV: &str = "PORTAL_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".portal";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_API_TIMEOUT_MS: u64 = 5000;
const MIN_API_TIMEOUT_MS: u64 = 100;
const MAX_API_TIMEOUT_MS: u64 = 120_000;
const DEFAULT_STORAGE_DIR: &str = "session";
const DEFAULT_CAPTCHA_ACTION: &str = "register";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
