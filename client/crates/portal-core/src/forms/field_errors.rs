use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Per-field messages shown next to the offending input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the backend's `errors` object.
    ///
    /// Each entry is either a string or a list of strings; lists are joined
    /// with a single space. Anything else is ignored.
    pub fn from_backend(errors: &Value) -> Self {
        let mut parsed = Self::new();

        let Some(entries) = errors.as_object() else {
            return parsed;
        };

        for (field, messages) in entries {
            let message = match messages {
                Value::String(message) => message.clone(),
                Value::Array(list) => list
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(" "),
                _ => continue,
            };
            parsed.set(field.as_str(), message);
        }

        parsed
    }

    /// Record a message; an empty message clears the field.
    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.0.remove(field);
        } else {
            self.0.insert(field.to_string(), message);
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Overlay `other`, replacing messages for fields present in both.
    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
