//! Persistent key-value store contract and an in-memory implementation.
//!
//! Every collection of the application is mirrored under its own string key.
//! Values are JSON documents, except `theme` and `accentColor`, which are
//! stored as raw strings.

use crate::errors::AppResult;
use std::collections::HashMap;

pub const KEY_CLASSES: &str = "classes";
pub const KEY_ASSIGNMENTS: &str = "assignments";
pub const KEY_EXAMS: &str = "exams";
pub const KEY_USER: &str = "user";
pub const KEY_THEME: &str = "theme";
pub const KEY_ACCENT: &str = "accentColor";
pub const KEY_GPA: &str = "gpa_data";

/// Synchronous string-keyed storage, durable for the lifetime of its medium.
///
/// Implementations must never expose a partially written value: a `get`
/// observes either the previous or the new value of a `set`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// Volatile store, used by tests and by callers that do not need durability.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a value, as if it had been written by a previous session.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
