//! In-memory key-value storage
//!
//! Used by tests and anywhere the widget state does not need to outlive the
//! process.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::storage::KeyValueStorage;
use crate::Result;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage with one slot already filled
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self {
            slots: RwLock::new(slots),
        }
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.read().await;
        Ok(slots.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.write().await;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
