//! Decoded message payloads.
//!
//! Inbound bytes are decoded exactly once, at the edge of the dispatch
//! loop. A payload that does not parse as JSON is never dropped: it is
//! carried as raw text and persisted as `{"raw": "<text>"}`.

use serde_json::{Number, Value};

/// A decoded inbound payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The bytes parsed as a JSON value.
    Json(Value),
    /// The bytes were not valid JSON; the lossy UTF-8 text is kept.
    Raw(String),
}

impl Payload {
    /// Decode raw bytes: JSON if they parse, raw text otherwise.
    #[must_use]
    pub fn decode(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Raw(text.into_owned()),
        }
    }

    /// Look up a top-level key.
    ///
    /// Returns `None` unless the payload is a JSON object containing the
    /// key. Handlers pattern-match on presence and type instead of
    /// trusting the payload shape.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Json(Value::Object(map)) => map.get(key),
            _ => None,
        }
    }

    /// Look up a top-level key as a JSON number.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<&Number> {
        self.get(key).and_then(Value::as_number)
    }

    /// The JSON value persisted for this payload.
    #[must_use]
    pub fn to_stored_json(&self) -> Value {
        match self {
            Self::Json(value) => value.clone(),
            Self::Raw(text) => serde_json::json!({ "raw": text }),
        }
    }
}
