use crate::{ApiResult, ClientError, LoginResponse, Navigator, SessionHandle};

use portal_config::{ApiConfig, HostKind};
use portal_core::{FieldErrors, RegistrationRequest, Route, SettingsField, UserProfile};

use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};

/// HTTP client for the portal backend
pub struct ApiClient {
    base_url: String,
    host: HostKind,
    session: Arc<dyn SessionHandle>,
    navigator: Option<Arc<dyn Navigator>>,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `config` - Base URL and timeout
    /// * `host` - Runtime host; decides whether a 401 navigates to login
    /// * `session` - Token source and authorization-failure sink
    pub fn new(
        config: &ApiConfig,
        host: HostKind,
        session: Arc<dyn SessionHandle>,
    ) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = ReqwestClient::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: config.normalized_base_url().to_string(),
            host,
            session,
            navigator: None,
            client,
        })
    }

    /// Attach the host's navigator, used to reach the login view after a 401.
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn host(&self) -> HostKind {
        self.host
    }

    /// Build a request, stamping the current token when there is one
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match self.session.bearer_token() {
            Some(token) if !token.is_empty() => req.header(AUTHORIZATION, token.header_value()),
            _ => req,
        }
    }

    /// Build a request for an endpoint that needs a token.
    ///
    /// Without a token no request is sent; the session is closed as if the
    /// backend had answered 401.
    fn authorized_request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let has_token = self
            .session
            .bearer_token()
            .is_some_and(|token| !token.is_empty());

        if !has_token {
            warn!("No stored token for {method} {path}; closing session");
            self.session.authorization_failed();
            return Err(ClientError::missing_token());
        }

        Ok(self.request(method, path))
    }

    /// Execute request and handle errors
    async fn execute(&self, req: RequestBuilder) -> ApiResult<Value> {
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            return Err(ClientError::unauthorized());
        }

        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::failure(status, &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    fn handle_unauthorized(&self) {
        warn!("Backend rejected the session token (401)");
        self.session.authorization_failed();

        match (self.host, &self.navigator) {
            (HostKind::Browser, Some(navigator)) => navigator.navigate(Route::Login),
            (HostKind::Browser, None) => debug!("No navigator attached; staying on current view"),
            (HostKind::Desktop, _) => info!("Redirect to login suppressed in desktop host"),
        }
    }

    /// Translate a non-401 error response
    fn failure(status: StatusCode, text: &str) -> ClientError {
        let body: Value = serde_json::from_str(text).unwrap_or(Value::Null);

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| {
                body.get("error")
                    .and_then(|error| error.get("message"))
                    .and_then(Value::as_str)
            })
            .or_else(|| status.canonical_reason())
            .unwrap_or("Unknown error")
            .to_string();

        if let Some(errors) = body.get("errors") {
            let errors = FieldErrors::from_backend(errors);
            if !errors.is_empty() {
                return ClientError::validation(message, errors);
            }
        }

        ClientError::api_error(status.as_u16(), message)
    }

    // =========================================================================
    // Session Operations
    // =========================================================================

    /// Exchange credentials for a profile and token
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/login").json(&body);
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch the authoritative profile of the current user.
    ///
    /// `Ok(None)` when the response carries no usable `user` object.
    pub async fn current_user(&self) -> ApiResult<Option<UserProfile>> {
        let req = self.authorized_request(Method::GET, "/user")?;
        let body = self.execute(req).await?;

        let user = match body.get("user") {
            None | Some(Value::Null) => {
                warn!("GET /user response has no user object");
                None
            }
            Some(raw) => match serde_json::from_value::<UserProfile>(raw.clone()) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("GET /user returned an incomplete user: {e}");
                    None
                }
            },
        };

        if let Some(ref user) = user {
            self.session.identity_refreshed(user);
        }

        Ok(user)
    }

    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Update a single account field
    pub async fn update_user_field(
        &self,
        user_id: u64,
        field: SettingsField,
        value: &str,
    ) -> ApiResult<Value> {
        let mut body = Map::new();
        body.insert(field.as_str().to_string(), Value::String(value.to_string()));

        let req = self
            .authorized_request(Method::PUT, &format!("/user/{user_id}"))?
            .json(&body);
        self.execute(req).await
    }

    /// Create a new account
    pub async fn register(&self, request: &RegistrationRequest) -> ApiResult<Value> {
        let req = self.request(Method::POST, "/register").json(request);
        self.execute(req).await
    }
}
