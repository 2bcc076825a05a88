//! Structured key/value document used for persistence and config snapshots
//!
//! The document is shared with configuration the effect engine does not own
//! (brightness, network identity, ...). Effects only touch their own keys and
//! leave everything else in place.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::DocumentError;

/// Key holding the numeric effect kind
pub const MODE_KEY: &str = "mode";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted JSON object
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw mode code, if present and an unsigned integer
    pub fn mode(&self) -> Option<u64> {
        self.get(MODE_KEY).and_then(Value::as_u64)
    }

    /// Merge the fields of a serializable struct into the document
    pub fn write_fields<T: Serialize>(&mut self, fields: &T) {
        match serde_json::to_value(fields) {
            Ok(Value::Object(map)) => self.0.extend(map),
            Ok(_) => {}
            Err(err) => log::warn!("Failed to write document fields: {err}"),
        }
    }

    /// Read a struct out of the document, ignoring keys it does not declare
    pub fn read_fields<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0.clone()))
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        Value::Object(document.0)
    }
}
