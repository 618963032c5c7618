use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Profile edit payload. Only the fields that are set go over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Birthday", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.email.is_none()
            && self.birthday.is_none()
    }

    /// Reject an edit that would send nothing.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.is_empty() {
            return Err(CoreError::Validation {
                message: "at least one of Username, Password, Email or Birthday must be set"
                    .to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
