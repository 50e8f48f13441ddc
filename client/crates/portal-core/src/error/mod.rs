use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid settings field: {value} {location}")]
    InvalidSettingsField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid registration field: {value} {location}")]
    InvalidRegistrationField {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
