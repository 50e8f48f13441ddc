use crate::{AppError, AppResult};

use portal_api::ApiClient;
use portal_core::DashboardSummary;
use portal_session::ViewScope;

use chrono::Utc;

pub const UNEXPECTED_STRUCTURE: &str = "Unexpected response structure";

/// Member overview built from a fresh copy of the profile.
#[derive(Default)]
pub struct DashboardView {
    scope: ViewScope,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    /// A 401 or missing token has already closed the session when this fails
    /// with an authorization error.
    pub async fn load(&self, api: &ApiClient) -> AppResult<DashboardSummary> {
        let user = self
            .scope
            .run(api.current_user())
            .await??
            .ok_or_else(|| AppError::unexpected_response(UNEXPECTED_STRUCTURE))?;

        Ok(DashboardSummary::from_profile(&user, Utc::now()))
    }
}
