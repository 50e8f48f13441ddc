use portal_core::FieldErrors;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Authorization expired (401) {location}")]
    Unauthorized { location: ErrorLocation },

    #[error("No stored token for an authenticated request {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification used to decide how a failure is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Backend answered 401; the session has been closed.
    AuthorizationExpired,
    /// Structured per-field errors; shown inline, never fatal.
    ValidationFailed,
    /// Anything else; session left untouched.
    NetworkOrServer,
    /// Authenticated action without a stored token; handled like a 401.
    MissingToken,
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn unauthorized() -> Self {
        ClientError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_token() -> Self {
        ClientError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: String, errors: FieldErrors) -> Self {
        ClientError::Validation {
            message,
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api_error(status: u16, message: String) -> Self {
        ClientError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized { .. } => ErrorKind::AuthorizationExpired,
            Self::MissingToken { .. } => ErrorKind::MissingToken,
            Self::Validation { .. } => ErrorKind::ValidationFailed,
            Self::Http { .. } | Self::Api { .. } | Self::Json { .. } => ErrorKind::NetworkOrServer,
        }
    }

    /// True for failures that close the session.
    pub fn is_authorization_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::AuthorizationExpired | ErrorKind::MissingToken
        )
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
