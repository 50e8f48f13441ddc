use portal_api::{ClientError, ErrorKind};
use portal_core::FieldErrors;

use serde::Serialize;

pub const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// What a view shows after a failed action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feedback {
    /// The session is already closed; the view should leave.
    SessionExpired { message: String },
    /// Per-field messages next to the inputs.
    Inline {
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        errors: FieldErrors,
    },
    /// A message the user can close; session untouched.
    Dismissible { message: String },
}

impl Feedback {
    pub fn from_client_error(err: &ClientError) -> Self {
        match err.kind() {
            ErrorKind::AuthorizationExpired | ErrorKind::MissingToken => Self::session_expired(),
            ErrorKind::ValidationFailed => Self::Inline {
                message: None,
                errors: err.field_errors().cloned().unwrap_or_default(),
            },
            ErrorKind::NetworkOrServer => match err {
                ClientError::Api { message, .. } if !message.trim().is_empty() => {
                    Self::dismissible(message.clone())
                }
                _ => Self::dismissible(GENERIC_FAILURE),
            },
        }
    }

    pub fn session_expired() -> Self {
        Self::SessionExpired {
            message: SESSION_EXPIRED.to_string(),
        }
    }

    pub fn dismissible(message: impl Into<String>) -> Self {
        Self::Dismissible {
            message: message.into(),
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired { .. })
    }
}
