use crate::{AppResult, CaptchaProvider};

use portal_api::{ApiClient, ClientError};
use portal_core::{
    FieldErrors, PasswordStrength, RegistrationField, RegistrationForm, RegistrationRequest, Route,
};
use portal_session::ViewScope;

use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;

pub const FORM_HAS_ERRORS: &str = "Please fix the errors in the form";
pub const REGISTERED: &str = "Registration successful! Redirecting...";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const CAPTCHA_UNAVAILABLE: &str = "reCAPTCHA is not available";
pub const CAPTCHA_FIELD: &str = "g-recaptcha-response";

/// Result of a submit, with everything the view needs to redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RegisterOutcome {
    /// Local validation failed; nothing was sent.
    Invalid {
        message: String,
        errors: FieldErrors,
    },
    Registered {
        message: String,
        next: String,
    },
    /// The backend refused some fields.
    Rejected {
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        errors: FieldErrors,
    },
    Failed {
        message: String,
    },
}

/// Registration view with live per-field validation.
pub struct RegisterView {
    form: RegistrationForm,
    errors: FieldErrors,
    captcha: Option<Arc<dyn CaptchaProvider>>,
    captcha_action: String,
    scope: ViewScope,
}

impl RegisterView {
    pub fn new(
        captcha: Option<Arc<dyn CaptchaProvider>>,
        captcha_action: impl Into<String>,
    ) -> Self {
        Self {
            form: RegistrationForm::default(),
            errors: FieldErrors::new(),
            captcha,
            captcha_action: captcha_action.into(),
            scope: ViewScope::new(),
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn password_strength(&self) -> PasswordStrength {
        PasswordStrength::score(&self.form.password)
    }

    /// Update one input and re-check it.
    pub fn set(&mut self, field: RegistrationField, value: impl Into<String>) {
        self.form.set(field, value);
        self.recheck(field);

        // A new password can fix or break the confirmation.
        if field == RegistrationField::Password && !self.form.password_confirmation.is_empty() {
            self.recheck(RegistrationField::PasswordConfirmation);
        }
    }

    /// Replace every input at once, checking each.
    pub fn fill(&mut self, form: RegistrationForm) {
        self.form = form;
        for field in RegistrationField::ALL {
            self.recheck(field);
        }
    }

    fn recheck(&mut self, field: RegistrationField) {
        self.errors
            .set(field.as_str(), self.form.check(field).unwrap_or_default());
    }

    pub async fn submit(&mut self, api: &ApiClient) -> AppResult<RegisterOutcome> {
        self.errors.clear(CAPTCHA_FIELD);
        for field in RegistrationField::ALL {
            self.recheck(field);
        }

        if !self.form.validate().is_empty() {
            return Ok(RegisterOutcome::Invalid {
                message: FORM_HAS_ERRORS.to_string(),
                errors: self.errors.clone(),
            });
        }

        let Some(captcha) = self.captcha.clone() else {
            warn!("Registration attempted without a captcha provider");
            return Ok(RegisterOutcome::Failed {
                message: CAPTCHA_UNAVAILABLE.to_string(),
            });
        };

        let token = match self.scope.run(captcha.token(&self.captcha_action)).await? {
            Ok(token) => token,
            Err(e) => {
                warn!("Captcha token unavailable: {e}");
                return Ok(RegisterOutcome::Failed {
                    message: CAPTCHA_UNAVAILABLE.to_string(),
                });
            }
        };

        let request = RegistrationRequest::new(self.form.clone(), token);
        let response = self.scope.run(api.register(&request)).await?;

        Ok(match response {
            Ok(_) => {
                info!("Registered {}", self.form.email);
                RegisterOutcome::Registered {
                    message: REGISTERED.to_string(),
                    next: Route::Login.path().to_string(),
                }
            }
            Err(ClientError::Validation { errors, .. }) => {
                let message = errors
                    .get(CAPTCHA_FIELD)
                    .map(|captcha| format!("Security error: {captcha}"));
                self.errors.merge(errors);
                RegisterOutcome::Rejected {
                    message,
                    errors: self.errors.clone(),
                }
            }
            Err(e) => {
                warn!("Registration failed: {e}");
                let message = match e {
                    ClientError::Api { message, .. } if !message.trim().is_empty() => message,
                    _ => REGISTER_FAILED.to_string(),
                };
                RegisterOutcome::Failed { message }
            }
        })
    }
}
