use error_location::ErrorLocation;
use mf_core::{CoreError, GENERIC_ERROR_MESSAGE};
use mf_session::SessionError;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur during API calls
///
/// The variants keep enough detail for the log. What reaches the user is
/// always [`ClientError::user_message`].
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected status {status}: {body} {location}")]
    Status {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session error: {source}")]
    Session {
        #[source]
        source: SessionError,
    },

    #[error("Invalid request: {source}")]
    Core {
        #[source]
        source: CoreError,
    },

    #[error("Invalid API URL '{url}' {location}")]
    InvalidUrl { url: String, location: ErrorLocation },
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

    /// Create an API error carrying the server's first structured message
    #[track_caller]
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an error for a failed status without a structured message
    #[track_caller]
    pub fn status_error(status: u16, body: impl Into<String>) -> Self {
        ClientError::Status {
            status,
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url(url: impl Into<String>) -> Self {
        ClientError::InvalidUrl {
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The single string shown to the user.
    ///
    /// A structured API message is passed through verbatim. Local
    /// validation explains itself. Everything else is the fixed fallback.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Core {
                source: CoreError::Validation { message, .. },
            } => message.clone(),
            ClientError::Core {
                source: CoreError::InvalidBirthday { value, .. },
            } => format!("Invalid birthday: {value}"),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
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

impl From<SessionError> for ClientError {
    fn from(source: SessionError) -> Self {
        ClientError::Session { source }
    }
}

impl From<CoreError> for ClientError {
    fn from(source: CoreError) -> Self {
        ClientError::Core { source }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
