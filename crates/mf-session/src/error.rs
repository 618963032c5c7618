use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session storage IO error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Session slot '{key}' holds malformed JSON: {source} {location}")]
    Serde {
        key: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid session key '{key}' {location}")]
    InvalidKey { key: String, location: ErrorLocation },
}

impl SessionError {
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SessionError::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serde(key: &str, source: serde_json::Error) -> Self {
        SessionError::Serde {
            key: key.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_key(key: &str) -> Self {
        SessionError::InvalidKey {
            key: key.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type SessionErrorResult<T> = StdResult<T, SessionError>;
