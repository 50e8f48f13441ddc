use crate::DEFAULT_CAPTCHA_ACTION;

use serde::Deserialize;

/// Captcha settings for registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CaptchaConfig {
    /// Pre-issued captcha response token
    pub token: Option<String>,
    pub action: String,
}

impl Default for CaptchaConfig {
    fn default() -> Self {
        Self {
            token: None,
            action: String::from(DEFAULT_CAPTCHA_ACTION),
        }
    }
}
