use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Account fields that can be edited one at a time from the settings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsField {
    Name,
    Email,
    Password,
    Dni,
    Celular,
}

impl SettingsField {
    pub const ALL: [SettingsField; 5] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::Dni,
        Self::Celular,
    ];

    /// Key used in the `PUT /user/{id}` body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Dni => "dni",
            Self::Celular => "celular",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }
}

impl FromStr for SettingsField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "dni" => Ok(Self::Dni),
            "celular" | "phone" => Ok(Self::Celular),
            _ => Err(CoreError::InvalidSettingsField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SettingsField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
