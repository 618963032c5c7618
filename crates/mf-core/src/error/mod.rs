use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid birthday: {value} {location}")]
    InvalidBirthday {
        value: String,
        location: ErrorLocation,
    },
}

pub type CoreResult<T> = StdResult<T, CoreError>;
