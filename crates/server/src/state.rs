//! Application state

use std::path::{Path, PathBuf};
use std::sync::Arc;

use todo_core::task::{FileStorage, KeyValueStorage, TaskStore};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: TaskStore,
    data_dir: PathBuf,
}

impl AppState {
    /// Create a new AppState backed by files in the configured data directory
    pub async fn new(config: &Config) -> todo_core::Result<Self> {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(&config.data_dir));
        Self::with_storage(storage, config.data_dir.clone(), config.categories_enabled).await
    }

    /// Create a new AppState over any storage
    pub async fn with_storage(
        storage: Arc<dyn KeyValueStorage>,
        data_dir: PathBuf,
        categories_enabled: bool,
    ) -> todo_core::Result<Self> {
        let task_store = if categories_enabled {
            TaskStore::load(storage).await?
        } else {
            TaskStore::load_uncategorized(storage).await?
        };

        Ok(Self {
            inner: Arc::new(AppStateInner {
                task_store,
                data_dir,
            }),
        })
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &TaskStore {
        &self.inner.task_store
    }

    pub fn data_dir(&self) -> &Path {
        &self.inner.data_dir
    }

    pub fn categories_enabled(&self) -> bool {
        self.task_store().categories().len() > 1
    }
}
