use serde::Serialize;

/// Characters the backend accepts as password symbols.
pub const PASSWORD_SYMBOLS: &str = "@$!%*#?&";

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Rough strength score from 0 to 4: one point each for length, an
/// uppercase letter, a digit and a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PasswordStrength(u8);

impl PasswordStrength {
    pub fn score(password: &str) -> Self {
        let checks = [
            password.chars().count() >= MIN_PASSWORD_LENGTH,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)),
        ];
        Self(checks.into_iter().filter(|passed| *passed).count() as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            0 | 1 => "weak",
            2 | 3 => "moderate",
            _ => "strong",
        }
    }
}
