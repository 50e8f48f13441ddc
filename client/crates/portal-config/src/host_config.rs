use crate::{ConfigError, ConfigErrorResult};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Runtime that hosts the client.
///
/// A browser host owns navigation, so an authorization failure sends the user
/// to the login view. An embedded desktop host manages navigation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    Browser,
    Desktop,
}

impl HostKind {
    /// Embedded desktop shells identify themselves in the user agent.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.to_lowercase().contains("electron") {
            Self::Desktop
        } else {
            Self::Browser
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Desktop)
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Browser => f.write_str("browser"),
            Self::Desktop => f.write_str("desktop"),
        }
    }
}

/// Configured host: explicit, or detected from the user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostSetting {
    #[default]
    Auto,
    Browser,
    Desktop,
}

impl FromStr for HostSetting {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "browser" => Ok(Self::Browser),
            "desktop" | "electron" => Ok(Self::Desktop),
            other => Err(ConfigError::host(format!(
                "host must be auto, browser or desktop, got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub kind: HostSetting,
    /// User agent reported by the embedding runtime, used when `kind = "auto"`
    pub user_agent: Option<String>,
}

impl HostConfig {
    pub fn resolve(&self) -> HostKind {
        match self.kind {
            HostSetting::Browser => HostKind::Browser,
            HostSetting::Desktop => HostKind::Desktop,
            HostSetting::Auto => self
                .user_agent
                .as_deref()
                .map(HostKind::from_user_agent)
                .unwrap_or(HostKind::Browser),
        }
    }
}
