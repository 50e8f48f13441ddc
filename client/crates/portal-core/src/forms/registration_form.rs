use crate::forms::password_strength::{MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS};
use crate::{FieldErrors, RegistrationField};

use serde::{Deserialize, Serialize};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_INVALID: &str = "Invalid email";
pub const DNI_INVALID: &str = "DNI must have 8 digits";
pub const CELULAR_INVALID: &str = "Must start with 9 and have 9 digits";
pub const PASSWORD_TOO_SHORT: &str = "At least 8 characters";
pub const PASSWORD_TOO_WEAK: &str = "Requires uppercase, lowercase, number and symbol";
pub const CONFIRMATION_MISMATCH: &str = "Does not match";

/// Values typed into the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub dni: String,
    pub celular: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegistrationForm {
    pub fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Email => &self.email,
            RegistrationField::Dni => &self.dni,
            RegistrationField::Celular => &self.celular,
            RegistrationField::Password => &self.password,
            RegistrationField::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RegistrationField::Name => self.name = value,
            RegistrationField::Email => self.email = value,
            RegistrationField::Dni => self.dni = value,
            RegistrationField::Celular => self.celular = value,
            RegistrationField::Password => self.password = value,
            RegistrationField::PasswordConfirmation => self.password_confirmation = value,
        }
    }

    /// Message for a single field, `None` when the value is acceptable.
    pub fn check(&self, field: RegistrationField) -> Option<&'static str> {
        let value = self.value(field);
        match field {
            RegistrationField::Name => value.trim().is_empty().then_some(NAME_REQUIRED),
            RegistrationField::Email => (!is_email(value)).then_some(EMAIL_INVALID),
            RegistrationField::Dni => (!is_digits(value, 8)).then_some(DNI_INVALID),
            RegistrationField::Celular => {
                let valid = value.starts_with('9') && is_digits(value, 9);
                (!valid).then_some(CELULAR_INVALID)
            }
            RegistrationField::Password => check_password(value),
            RegistrationField::PasswordConfirmation => {
                (value != self.password).then_some(CONFIRMATION_MISMATCH)
            }
        }
    }

    /// Check every field.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in RegistrationField::ALL {
            if let Some(message) = self.check(field) {
                errors.set(field.as_str(), message);
            }
        }
        errors
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn check_password(value: &str) -> Option<&'static str> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Some(PASSWORD_TOO_SHORT);
    }

    let complete = value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    (!complete).then_some(PASSWORD_TOO_WEAK)
}
