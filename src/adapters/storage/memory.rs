use std::collections::HashMap;
use std::sync::Mutex;

use crate::{app_error::AppResult, application::ports::key_value_store::KeyValueStore};

/// Process-local storage, gone when the process exits.
#[derive(Default)]
pub struct InMemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one key, as if an earlier page load had written it.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        if let Ok(mut items) = storage.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl KeyValueStore for InMemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .ok()
            .and_then(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| crate::app_error::AppError::Internal(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
