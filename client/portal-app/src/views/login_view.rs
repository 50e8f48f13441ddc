use crate::{AppError, AppResult};

use portal_api::ApiClient;
use portal_core::{FieldErrors, UserProfile};
use portal_session::{SessionStore, ViewScope};

use std::sync::Arc;

use log::info;

pub const CREDENTIALS_REQUIRED: &str = "Email and password are required";
pub const FIELD_REQUIRED: &str = "Required";

/// Sign-in view: exchanges credentials and opens the session.
pub struct LoginView {
    store: Arc<SessionStore>,
    scope: ViewScope,
}

impl LoginView {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            store,
            scope: ViewScope::new(),
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub async fn submit(
        &self,
        api: &ApiClient,
        email: &str,
        password: &str,
    ) -> AppResult<UserProfile> {
        let mut errors = FieldErrors::new();
        if email.trim().is_empty() {
            errors.set("email", FIELD_REQUIRED);
        }
        if password.is_empty() {
            errors.set("password", FIELD_REQUIRED);
        }
        if !errors.is_empty() {
            return Err(AppError::invalid_form(CREDENTIALS_REQUIRED, errors));
        }

        let response = self.scope.run(api.login(email.trim(), password)).await??;

        let user = response.user.clone();
        self.store.login(response.user, response.token)?;
        info!("Signed in as user {}", user.id);

        Ok(user)
    }
}
