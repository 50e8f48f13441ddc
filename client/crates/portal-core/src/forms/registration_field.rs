use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Inputs of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    Name,
    Email,
    Dni,
    Celular,
    Password,
    PasswordConfirmation,
}

impl RegistrationField {
    pub const ALL: [RegistrationField; 6] = [
        Self::Name,
        Self::Email,
        Self::Dni,
        Self::Celular,
        Self::Password,
        Self::PasswordConfirmation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Dni => "dni",
            Self::Celular => "celular",
            Self::Password => "password",
            Self::PasswordConfirmation => "password_confirmation",
        }
    }
}

impl FromStr for RegistrationField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::InvalidRegistrationField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
