use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A quote as returned by the service, normally `{"quote": "<text>"}`.
///
/// The body is kept exactly as parsed. Nothing checks that it is an object or
/// that the `quote` key exists; use [`Quote::text`] to read it when it does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quote(Value);

impl Quote {
    /// The `quote` field, if the body is an object holding a string under that key.
    pub fn text(&self) -> Option<&str> {
        self.0.get("quote").and_then(Value::as_str)
    }

    /// Look up a top-level key. `None` if absent or the body is not an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Quote {
    fn from(v: Value) -> Self {
        Self(v)
    }
}

impl From<Quote> for Value {
    fn from(q: Quote) -> Self {
        q.0
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(t) => f.write_str(t),
            None => write!(f, "{}", self.0),
        }
    }
}
