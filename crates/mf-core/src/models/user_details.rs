use serde::{Deserialize, Serialize};

/// Registration form payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Birthday")]
    pub birthday: String,
}
