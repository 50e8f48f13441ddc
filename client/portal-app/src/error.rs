use crate::Feedback;

use portal_api::ClientError;
use portal_config::ConfigError;
use portal_core::{CoreError, FieldErrors};
use portal_session::SessionError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Client {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    InvalidForm {
        message: String,
        errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("No open session {location}")]
    SessionClosed { location: ErrorLocation },

    #[error("Unexpected response: {message} {location}")]
    UnexpectedResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Captcha unavailable: {message} {location}")]
    Captcha {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl AppError {
    #[track_caller]
    pub fn invalid_form(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self::InvalidForm {
            message: message.into(),
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The session closed while a command that needs it was running.
    #[track_caller]
    pub fn session_closed() -> Self {
        Self::SessionClosed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_response(message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn captcha(message: impl Into<String>) -> Self {
        Self::Captcha {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// How a view should surface this error, if it came from the user's action.
    pub fn feedback(&self) -> Option<Feedback> {
        match self {
            Self::Client { source, .. } => Some(Feedback::from_client_error(source)),
            Self::SessionClosed { .. } => Some(Feedback::session_expired()),
            Self::InvalidForm {
                message, errors, ..
            } => Some(Feedback::Inline {
                message: Some(message.clone()),
                errors: errors.clone(),
            }),
            Self::UnexpectedResponse { message, .. } | Self::Captcha { message, .. } => {
                Some(Feedback::dismissible(message.clone()))
            }
            _ => None,
        }
    }

    pub fn is_abandoned(&self) -> bool {
        matches!(self, Self::Session { source, .. } if source.is_abandoned())
    }
}

impl From<ConfigError> for AppError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for AppError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::Client {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for AppError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AppError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
