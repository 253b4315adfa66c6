/// Document — the result of parsing flat `key: value` / `- item` text.
///
/// A document is a single flat level of keys, each bound to either a scalar
/// string or an ordered list of strings. It is produced fresh by every parse
/// and only the parser mutates it.
use std::collections::BTreeMap;

use serde::Serialize;

// ─── Value ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            Value::Scalar(_) => None,
        }
    }
}

// ─── Document ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    entries: BTreeMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The scalar bound to `key`, if `key` holds a scalar.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_scalar)
    }

    /// The list bound to `key`, if `key` holds a list.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(Value::as_list)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Bind `key` to a scalar, discarding whatever was there before.
    pub(crate) fn set_scalar(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), Value::Scalar(value.to_string()));
    }

    /// Append `item` to the list under `key`.
    ///
    /// A missing key or a key holding a scalar is rebound to a fresh list.
    pub(crate) fn push_item(&mut self, key: &str, item: &str) {
        match self.entries.get_mut(key) {
            Some(Value::List(items)) => items.push(item.to_string()),
            _ => {
                self.entries
                    .insert(key.to_string(), Value::List(vec![item.to_string()]));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_document.rs"]
mod tests;
