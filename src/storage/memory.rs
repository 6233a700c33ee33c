use std::{collections::HashMap, sync::RwLock};

use crate::errors::{LedgerError, Result};

use super::KeyValueStore;

/// In-process key-value store, used by tests and embedders that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an initial value for `key`.
    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.write() {
            values.insert(key.to_string(), value.into());
        }
        store
    }
}

fn poisoned() -> LedgerError {
    LedgerError::Storage("memory store lock poisoned".into())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(|_| poisoned())?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| poisoned())?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| poisoned())?;
        values.remove(key);
        Ok(())
    }
}
