//! Key-value storage trait
//!
//! Defines the interface for the persisted slot backing a task store.

use async_trait::async_trait;

use crate::Result;

/// String-keyed storage for serialized widget state
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing was written yet
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    async fn write(&self, key: &str, value: &str) -> Result<()>;
}
