use crate::{Director, Genre};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog entry. Read only on the client.
///
/// The body is kept exactly as the server sent it, including `null`s and
/// fields of unexpected types. Accessors give typed views of the known
/// fields and return `None` when a field is absent or not of that type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Movie {
    fields: Map<String, Value>,
}

impl Movie {
    pub fn id(&self) -> Option<&str> {
        self.fields.get("_id").and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("Title").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.fields.get("Description").and_then(Value::as_str)
    }

    pub fn image_path(&self) -> Option<&str> {
        self.fields.get("ImagePath").and_then(Value::as_str)
    }

    pub fn featured(&self) -> Option<bool> {
        self.fields.get("Featured").and_then(Value::as_bool)
    }

    pub fn genre(&self) -> Option<Genre> {
        self.fields
            .get("Genre")
            .and_then(Value::as_object)
            .map(|fields| Genre::from(fields.clone()))
    }

    pub fn director(&self) -> Option<Director> {
        self.fields
            .get("Director")
            .and_then(Value::as_object)
            .map(|fields| Director::from(fields.clone()))
    }

    /// Raw value of any field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for Movie {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
