//! Current user record and its set/clear events.
//!
//! DESIGN
//! ======
//! The remote profile payload is consumed but not validated, so the record is
//! kept as an open JSON object. Typed accessors cover the keys the profile
//! form reads; every other key (ids, provider metadata) rides along untouched
//! and survives a form submit.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User record as returned by the remote profile service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Map<String, Value>);

impl UserRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from an arbitrary JSON value; `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// String value for `key`, or `None` when absent or not a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Boolean value for `key`, or `None` when absent or not a boolean.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Copy of this record with every key of `overrides` written over it.
    #[must_use]
    pub fn merged_with(&self, overrides: &Map<String, Value>) -> Self {
        let mut merged = self.0.clone();
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
        Self(merged)
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for UserRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Companion events emitted alongside the auth outcomes.
#[derive(Clone, Debug, PartialEq)]
pub enum UserEvent {
    Set(UserRecord),
    Clear,
}

/// Apply a [`UserEvent`] to the user slice.
#[must_use]
pub fn reduce_user(_current: Option<UserRecord>, event: &UserEvent) -> Option<UserRecord> {
    match event {
        UserEvent::Set(record) => Some(record.clone()),
        UserEvent::Clear => None,
    }
}
