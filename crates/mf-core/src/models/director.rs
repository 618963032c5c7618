use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Director details, kept as sent. `Birth` and `Death` are free-form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Director {
    fields: Map<String, Value>,
}

impl Director {
    pub fn name(&self) -> Option<&str> {
        self.fields.get("Name").and_then(Value::as_str)
    }

    pub fn bio(&self) -> Option<&str> {
        self.fields.get("Bio").and_then(Value::as_str)
    }

    pub fn birth(&self) -> Option<&Value> {
        self.fields.get("Birth")
    }

    pub fn death(&self) -> Option<&Value> {
        self.fields.get("Death")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl From<Map<String, Value>> for Director {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
