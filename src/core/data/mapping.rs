use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ScalarValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
}

impl KeyAction {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
        }
    }
}

/// The flat key/value object a message bundle exports by default.
///
/// Keys are unique; inserting an existing key overwrites its value in place,
/// so the original key order survives a rewrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportedMapping {
    entries: IndexMap<String, ScalarValue>,
}

impl ExportedMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a parsed JSON object into a mapping, member by member.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let entries = object
            .iter()
            .map(|(key, value)| (key.clone(), ScalarValue::from_json(value)))
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ScalarValue>) -> KeyAction {
        match self.entries.insert(key.into(), value.into()) {
            Some(_) => KeyAction::Updated,
            None => KeyAction::Added,
        }
    }

    pub fn get(&self, key: &str) -> Option<&ScalarValue> {
        self.entries.get(key)
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

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn to_json_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for ExportedMapping
where
    K: Into<String>,
    V: Into<ScalarValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = ExportedMapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}
