use crate::{AppError, AppResult};

use portal_config::CaptchaConfig;

use std::sync::Arc;

use async_trait::async_trait;

/// Source of the anti-bot token sent with a registration.
#[async_trait]
pub trait CaptchaProvider: Send + Sync {
    async fn token(&self, action: &str) -> AppResult<String>;
}

/// Hands out a token issued ahead of time.
#[derive(Debug, Clone)]
pub struct StaticCaptcha {
    token: String,
}

impl StaticCaptcha {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Provider for the configured token, if there is one.
    pub fn from_config(config: &CaptchaConfig) -> Option<Arc<dyn CaptchaProvider>> {
        config
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| Arc::new(Self::new(token)) as Arc<dyn CaptchaProvider>)
    }
}

#[async_trait]
impl CaptchaProvider for StaticCaptcha {
    async fn token(&self, _action: &str) -> AppResult<String> {
        if self.token.trim().is_empty() {
            return Err(AppError::captcha("captcha token is empty"));
        }
        Ok(self.token.clone())
    }
}
