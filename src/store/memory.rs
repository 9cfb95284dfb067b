use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;

use super::KeyValueStore;
use crate::error::StoreError;

/// Process-local store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }
}
