use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genre {
    fields: Map<String, Value>,
}

impl Genre {
    pub fn name(&self) -> Option<&str> {
        self.fields.get("Name").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.fields.get("Description").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl From<Map<String, Value>> for Genre {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
