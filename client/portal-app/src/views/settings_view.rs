use crate::AppResult;

use portal_api::ApiClient;
use portal_core::{SettingsField, UserProfile};
use portal_session::ViewScope;

use std::collections::BTreeMap;

use log::info;
use serde_json::Value;

/// Account settings: one draft per field, saved one field at a time.
///
/// A successful save does not touch the session's identity; the new value
/// shows up after the next profile refresh.
pub struct SettingsView {
    user_id: u64,
    drafts: BTreeMap<SettingsField, String>,
    scope: ViewScope,
}

impl SettingsView {
    /// Seed drafts from the current identity. The password draft starts empty.
    pub fn new(identity: &UserProfile) -> Self {
        let drafts = SettingsField::ALL
            .into_iter()
            .map(|field| {
                let value = match field {
                    SettingsField::Name => identity.name.clone(),
                    SettingsField::Email => identity.email.clone().unwrap_or_default(),
                    SettingsField::Password => String::new(),
                    SettingsField::Dni => identity.dni.clone().unwrap_or_default(),
                    SettingsField::Celular => identity.celular.clone().unwrap_or_default(),
                };
                (field, value)
            })
            .collect();

        Self {
            user_id: identity.id,
            drafts,
            scope: ViewScope::new(),
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn draft(&self, field: SettingsField) -> &str {
        self.drafts.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set_draft(&mut self, field: SettingsField, value: impl Into<String>) {
        self.drafts.insert(field, value.into());
    }

    /// Drafts safe to display; secrets are left out.
    pub fn visible_drafts(&self) -> BTreeMap<&'static str, &str> {
        self.drafts
            .iter()
            .filter(|(field, _)| !field.is_secret())
            .map(|(field, value)| (field.as_str(), value.as_str()))
            .collect()
    }

    /// Submit the draft of a single field.
    pub async fn save(&self, api: &ApiClient, field: SettingsField) -> AppResult<Value> {
        let body = self
            .scope
            .run(api.update_user_field(self.user_id, field, self.draft(field)))
            .await??;

        info!("Saved {field} for user {}", self.user_id);
        Ok(body)
    }
}
