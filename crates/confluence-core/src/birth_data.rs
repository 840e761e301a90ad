//! The caller-supplied birth-data bag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque JSON object describing the subject of a reading.
///
/// The orchestrator does not validate it. Accessors look up both camelCase
/// and snake_case spellings and return `None` for absent or non-string
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthData(Map<String, Value>);

impl BirthData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value; anything other than an object yields an empty bag.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Set a field, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// First string value found under any of `keys`.
    #[must_use]
    pub fn str_field(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|k| self.0.get(*k))
            .find_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// First value (of any type) found under any of `keys`.
    #[must_use]
    pub fn value_field(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|k| self.0.get(*k))
            .find(|v| !v.is_null())
    }

    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.str_field(&["fullName", "full_name", "name"])
    }

    #[must_use]
    pub fn birth_date(&self) -> Option<&str> {
        self.str_field(&["birthDate", "birth_date", "date"])
    }

    #[must_use]
    pub fn birth_time(&self) -> Option<&str> {
        self.str_field(&["birthTime", "birth_time", "time"])
    }

    #[must_use]
    pub fn birth_location(&self) -> Option<&Value> {
        self.value_field(&["birthLocation", "birth_location", "location"])
    }

    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.str_field(&["timezone", "timeZone", "tz"])
    }

    #[must_use]
    pub fn question(&self) -> Option<&str> {
        self.str_field(&["question"])
    }

    #[must_use]
    pub fn intention(&self) -> Option<&str> {
        self.str_field(&["intention"])
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}
