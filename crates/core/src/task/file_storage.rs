//! File-based key-value storage
//!
//! Stores every slot as its own file inside a data directory.

use async_trait::async_trait;
use std::path::PathBuf;

use super::storage::KeyValueStorage;
use crate::{Error, Result};

/// File-based storage, one `<key>.json` file per slot
pub struct FileStorage {
    /// Directory holding the slot files
    dir: PathBuf,
}

impl FileStorage {
    /// Create a new FileStorage
    ///
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(Error::InvalidInput(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        // Ensure parent directory exists
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            Error::Storage(format!("Failed to create directory: {}", e))
        })?;

        tokio::fs::write(&path, value).await.map_err(|e| {
            Error::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_missing_slot() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(storage.read("tasks").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("data");
        let storage = FileStorage::new(&dir);

        storage.write("tasks", "[]").await.unwrap();

        assert!(dir.join("tasks.json").exists());
        assert_eq!(storage.read("tasks").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_persistence_across_instances() {
        let temp_dir = TempDir::new().unwrap();

        FileStorage::new(temp_dir.path())
            .write("tasks", r#"[{"id":1}]"#)
            .await
            .unwrap();

        let reopened = FileStorage::new(temp_dir.path());
        assert_eq!(
            reopened.read("tasks").await.unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let storage = FileStorage::new("/tmp/data");

        for key in ["", "../escape", "a/b", ".hidden"] {
            match storage.slot_path(key) {
                Err(Error::InvalidInput(_)) => {}
                other => panic!("Expected InvalidInput for {:?}, got: {:?}", key, other),
            }
        }
    }
}
