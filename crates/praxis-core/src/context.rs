//! Read-only view over a request's context mapping.
//!
//! Context fields are never validated. Every accessor coerces whatever it
//! finds and leaves the defaulting to the caller.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    fields: Map<String, Value>,
}

impl Context {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build from an arbitrary value. `null` and non-mappings give an empty
    /// context.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            Value::Null => Self::default(),
            other => {
                tracing::warn!(
                    kind = value_kind(&other),
                    "context is not a mapping; treating it as empty"
                );
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The value under `key`, only if it is truthy.
    pub fn truthy(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| is_truthy(v))
    }

    /// The value under `key` as a string list, only if it is truthy.
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        self.truthy(key).map(string_list)
    }

    /// The value under `key` as text, only if it is truthy.
    pub fn text(&self, key: &str) -> Option<String> {
        self.truthy(key).map(text_of)
    }

    /// Number of entries when `key` holds an array, 0 otherwise.
    pub fn count(&self, key: &str) -> usize {
        match self.get(key) {
            Some(Value::Array(items)) => items.len(),
            Some(Value::Null) | None => 0,
            Some(other) => {
                tracing::warn!(key, kind = value_kind(other), "expected a list; counting as 0");
                0
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for Context {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// `null`, `false`, zero, and empty strings, arrays, and mappings are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Strings verbatim; anything else as compact JSON.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Arrays map element-wise through [`text_of`]; a scalar becomes a single entry.
pub fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(text_of).collect(),
        Value::Null => Vec::new(),
        other => vec![text_of(other)],
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}
