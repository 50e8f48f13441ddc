use crate::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session storage failed: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("Refusing to open a session with an empty token {location}")]
    EmptyToken { location: ErrorLocation },

    #[error("View was closed before the operation finished {location}")]
    Abandoned { location: ErrorLocation },
}

impl SessionError {
    #[track_caller]
    pub fn empty_token() -> Self {
        Self::EmptyToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn abandoned() -> Self {
        Self::Abandoned {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_abandoned(&self) -> bool {
        matches!(self, Self::Abandoned { .. })
    }
}

impl From<StorageError> for SessionError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
