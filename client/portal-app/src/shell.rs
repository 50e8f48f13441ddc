use crate::{
    AppError, AppResult, CaptchaProvider, DashboardView, LoginView, RegisterView, SettingsView,
    StaticCaptcha, commands::Commands, settings_commands::SettingsCommands,
};

use portal_api::{ApiClient, Navigator};
use portal_config::{Config, HostSetting};
use portal_core::{RegistrationForm, Route, SessionState, SettingsField};
use portal_session::{FileStorage, GuardDecision, SessionStorage, SessionStore, resolve};

use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info};
use serde_json::{Value, json};

/// Remembers the last route the client asked the shell to show.
#[derive(Debug, Default)]
pub struct ShellNavigator {
    pending: Mutex<Option<Route>>,
}

impl ShellNavigator {
    pub fn take(&self) -> Option<Route> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Navigator for ShellNavigator {
    fn navigate(&self, route: Route) {
        info!("Navigating to {route}");
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(route);
    }
}

/// Apply command-line flags on top of the loaded config.
pub fn apply_overrides(
    config: &mut Config,
    api_url: Option<String>,
    host: Option<&str>,
) -> AppResult<()> {
    if let Some(url) = api_url {
        config.api.base_url = url;
    }
    if let Some(host) = host {
        config.host.kind = HostSetting::from_str(host)?;
    }
    Ok(())
}

/// Wires config, session store and API client, then runs commands.
pub struct Shell {
    config: Config,
    store: Arc<SessionStore>,
    api: ApiClient,
    navigator: Arc<ShellNavigator>,
}

impl Shell {
    /// Shell over the session file in the configured storage directory.
    pub fn new(config: Config) -> AppResult<Self> {
        let storage_dir = config.storage_dir()?;
        Self::with_storage(config, Arc::new(FileStorage::new(storage_dir)))
    }

    pub fn with_storage(config: Config, storage: Arc<dyn SessionStorage>) -> AppResult<Self> {
        let host = config.host.resolve();
        let store = Arc::new(SessionStore::new(storage));
        let navigator = Arc::new(ShellNavigator::default());

        let api = ApiClient::new(&config.api, host, store.clone())?
            .with_navigator(navigator.clone());

        Ok(Self {
            config,
            store,
            api,
            navigator,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn navigator(&self) -> &ShellNavigator {
        &self.navigator
    }

    /// Restore the persisted session; must run before any protected view.
    pub async fn start(&self) -> SessionState {
        self.store.restore(&self.api).await
    }

    pub fn open(&self, location: &str) -> GuardDecision {
        resolve(&self.store.state(), &Route::parse(location))
    }

    /// JSON describing where to go instead, when `route` may not render now.
    fn redirect_for(&self, route: &Route) -> Option<Value> {
        match resolve(&self.store.state(), route) {
            GuardDecision::Render(_) => None,
            decision => {
                debug!("{route} not available: {decision:?}");
                Some(decision.to_json())
            }
        }
    }

    pub async fn run(&self, command: Commands) -> AppResult<Value> {
        match command {
            Commands::Login { email, password } => {
                if let Some(redirect) = self.redirect_for(&Route::Login) {
                    return Ok(redirect);
                }

                LoginView::new(self.store.clone())
                    .submit(&self.api, &email, &password)
                    .await?;
                Ok(json!({ "session": self.store.state() }))
            }

            Commands::Register {
                name,
                email,
                dni,
                celular,
                password,
                password_confirmation,
                captcha_token,
            } => {
                if let Some(redirect) = self.redirect_for(&Route::Register) {
                    return Ok(redirect);
                }

                let captcha: Option<Arc<dyn CaptchaProvider>> = match captcha_token {
                    Some(token) => Some(Arc::new(StaticCaptcha::new(token))),
                    None => StaticCaptcha::from_config(&self.config.captcha),
                };

                let mut view = RegisterView::new(captcha, self.config.captcha.action.clone());
                view.fill(RegistrationForm {
                    name,
                    email,
                    dni,
                    celular,
                    password,
                    password_confirmation,
                });

                let outcome = view.submit(&self.api).await?;
                Ok(json!({
                    "result": outcome,
                    "password_strength": view.password_strength().label(),
                }))
            }

            Commands::Dashboard => {
                if let Some(redirect) = self.redirect_for(&Route::Dashboard) {
                    return Ok(redirect);
                }

                let summary = DashboardView::new().load(&self.api).await?;
                Ok(serde_json::to_value(summary)?)
            }

            Commands::Settings { action } => {
                if let Some(redirect) = self.redirect_for(&Route::Settings) {
                    return Ok(redirect);
                }

                let session = self.store.session();
                let identity = session
                    .identity()
                    .cloned()
                    .ok_or_else(AppError::session_closed)?;
                let mut view = SettingsView::new(&identity);

                match action {
                    SettingsCommands::Show => Ok(json!({
                        "user_id": identity.id,
                        "fields": view.visible_drafts(),
                    })),
                    SettingsCommands::Set { field, value } => {
                        let field = SettingsField::from_str(&field)?;
                        view.set_draft(field, value);
                        let response = view.save(&self.api, field).await?;
                        Ok(json!({ "saved": field.as_str(), "response": response }))
                    }
                }
            }

            Commands::Logout => Ok(json!({ "logged_out": self.store.logout() })),

            Commands::Status => Ok(json!({
                "session": self.store.state(),
                "host": self.api.host().to_string(),
            })),

            Commands::Open { path } => Ok(self.open(&path).to_json()),
        }
    }
}
