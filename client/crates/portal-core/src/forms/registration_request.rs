use crate::RegistrationForm;

use serde::Serialize;

/// Body of `POST /register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationRequest {
    #[serde(flatten)]
    pub form: RegistrationForm,
    #[serde(rename = "g-recaptcha-response")]
    pub captcha_token: String,
}

impl RegistrationRequest {
    pub fn new(form: RegistrationForm, captcha_token: impl Into<String>) -> Self {
        Self {
            form,
            captcha_token: captcha_token.into(),
        }
    }
}
