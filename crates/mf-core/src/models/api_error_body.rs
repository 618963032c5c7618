use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured validation failure: `{"errors": [{"msg": "..."}, ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorEntry {
    #[serde(default)]
    pub msg: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiErrorBody {
    /// Try to read a structured error out of a raw response body.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Message of the first entry, the only one ever shown to the user.
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().and_then(|entry| entry.msg.as_deref())
    }
}
