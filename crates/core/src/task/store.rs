//! Task store
//!
//! Owns the widget's task collection and writes every change through to the
//! persisted slot.

use chrono::Utc;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::model::{Category, StoredTask, Task, DEFAULT_CATEGORY, MAX_TASKS};
use super::storage::KeyValueStorage;
use crate::view::{group_by_category, CapacityIndicator, TaskListView};
use crate::Result;

/// Key of the persisted slot holding the serialized collection
pub const STORAGE_KEY: &str = "astro_vr_todo_tasks";

/// Category list of the uncategorized widget
pub const UNCATEGORIZED: &[Category] = &[DEFAULT_CATEGORY];

/// Raised when a task is added to a full collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityNotice {
    pub count: usize,
    pub max: usize,
}

impl CapacityNotice {
    /// Text shown to the user
    pub fn message(&self) -> String {
        format!("You can add at most {} tasks", self.max)
    }
}

/// Result of [`TaskStore::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The task was appended and persisted
    Added(Task),
    /// The text was blank; nothing happened
    Ignored,
    /// The collection is full; nothing happened
    AtCapacity(CapacityNotice),
}

/// Thread-safe task store with write-through persistence
#[derive(Clone)]
pub struct TaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
    storage: Arc<dyn KeyValueStorage>,
    categories: &'static [Category],
    default_category: Category,
}

impl TaskStore {
    /// Hydrate a categorized store from `storage`
    pub async fn load(storage: Arc<dyn KeyValueStorage>) -> Result<Self> {
        Self::load_with_categories(storage, &Category::ALL).await
    }

    /// Hydrate a store whose tasks all live in the default category
    pub async fn load_uncategorized(storage: Arc<dyn KeyValueStorage>) -> Result<Self> {
        Self::load_with_categories(storage, UNCATEGORIZED).await
    }

    /// Hydrate a store that accepts only `categories`.
    ///
    /// The default category is [`DEFAULT_CATEGORY`] when enabled, otherwise
    /// the first enabled one. An empty list means uncategorized.
    pub async fn load_with_categories(
        storage: Arc<dyn KeyValueStorage>,
        categories: &'static [Category],
    ) -> Result<Self> {
        let categories = if categories.is_empty() {
            UNCATEGORIZED
        } else {
            categories
        };
        let default_category = if categories.contains(&DEFAULT_CATEGORY) {
            DEFAULT_CATEGORY
        } else {
            categories[0]
        };

        let tasks = read_collection(storage.as_ref(), categories, default_category).await?;
        info!(count = tasks.len(), "Loaded tasks from persisted slot");

        Ok(Self {
            tasks: Arc::new(RwLock::new(tasks)),
            storage,
            categories,
            default_category,
        })
    }

    /// Add a task.
    ///
    /// Blank text is ignored and a full collection rejects the task; neither
    /// is an error. A category the store does not enable becomes the default.
    pub async fn add(&self, text: &str, category: Option<Category>) -> Result<AddOutcome> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank task text");
            return Ok(AddOutcome::Ignored);
        }

        let mut tasks = self.tasks.write().await;
        if tasks.len() >= MAX_TASKS {
            warn!(count = tasks.len(), max = MAX_TASKS, "Task list is full");
            return Ok(AddOutcome::AtCapacity(CapacityNotice {
                count: tasks.len(),
                max: MAX_TASKS,
            }));
        }

        let category = category
            .filter(|category| self.categories.contains(category))
            .unwrap_or(self.default_category);
        let task = Task::new(next_id(&tasks), text).with_category(category);

        let mut updated = tasks.clone();
        updated.push(task.clone());
        self.persist(&updated).await?;
        *tasks = updated;

        debug!(id = task.id, category = %task.category, "Added task");
        Ok(AddOutcome::Added(task))
    }

    /// Flip `completed` on a task, returning the updated task
    pub async fn toggle(&self, id: u64) -> Result<Option<Task>> {
        let mut tasks = self.tasks.write().await;
        let Some(index) = tasks.iter().position(|t| t.id == id) else {
            return Ok(None);
        };

        let mut updated = tasks.clone();
        updated[index].completed = !updated[index].completed;
        let task = updated[index].clone();
        self.persist(&updated).await?;
        *tasks = updated;

        debug!(id, completed = task.completed, "Toggled task");
        Ok(Some(task))
    }

    /// Delete a task, returning it if it existed
    pub async fn delete(&self, id: u64) -> Result<Option<Task>> {
        let mut tasks = self.tasks.write().await;
        let Some(index) = tasks.iter().position(|t| t.id == id) else {
            return Ok(None);
        };

        let mut updated = tasks.clone();
        let task = updated.remove(index);
        self.persist(&updated).await?;
        *tasks = updated;

        debug!(id, "Deleted task");
        Ok(Some(task))
    }

    /// Snapshot of the collection in insertion order
    pub async fn tasks(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Get a task by ID
    pub async fn get(&self, id: u64) -> Option<Task> {
        let tasks = self.tasks.read().await;
        tasks.iter().find(|t| t.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }

    /// Whether `add` would be rejected
    pub async fn is_full(&self) -> bool {
        self.tasks.read().await.len() >= MAX_TASKS
    }

    pub async fn capacity(&self) -> CapacityIndicator {
        CapacityIndicator::new(self.tasks.read().await.len())
    }

    /// Grouped view of the current collection
    pub async fn view(&self) -> TaskListView {
        let tasks = self.tasks.read().await;
        TaskListView {
            capacity: CapacityIndicator::new(tasks.len()),
            groups: group_by_category(&tasks, self.categories),
            is_empty: tasks.is_empty(),
        }
    }

    /// Categories this store accepts, in display order
    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn default_category(&self) -> Category {
        self.default_category
    }

    /// Overwrite the persisted slot with `tasks`
    async fn persist(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string(tasks)?;
        self.storage.write(STORAGE_KEY, &content).await
    }
}

/// Read and normalize the persisted collection.
///
/// A missing slot or content that is not a JSON array yields an empty
/// collection. Records that do not parse are dropped one by one.
async fn read_collection(
    storage: &dyn KeyValueStorage,
    categories: &[Category],
    default_category: Category,
) -> Result<Vec<Task>> {
    let Some(content) = storage.read(STORAGE_KEY).await? else {
        return Ok(Vec::new());
    };

    let records: Vec<serde_json::Value> = match serde_json::from_str(&content) {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, "Discarding malformed persisted tasks");
            return Ok(Vec::new());
        }
    };

    let mut seen = HashSet::new();
    let tasks = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let record: StoredTask = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(e) => {
                    warn!(index, error = %e, "Dropping malformed persisted task");
                    return None;
                }
            };
            if !seen.insert(record.id) {
                warn!(id = record.id, "Dropping persisted task with duplicate id");
                return None;
            }
            Some(record.normalize(categories, default_category))
        })
        .collect();

    Ok(tasks)
}

/// Creation timestamp in milliseconds, bumped past every existing id.
///
/// Once `u64::MAX` is taken the highest free id is used instead.
fn next_id(tasks: &[Task]) -> u64 {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let Some(max) = tasks.iter().map(|t| t.id).max() else {
        return now;
    };

    match max.checked_add(1) {
        Some(floor) => now.max(floor),
        None => {
            let taken: HashSet<u64> = tasks.iter().map(|t| t.id).collect();
            (0..=u64::MAX)
                .rev()
                .find(|id| !taken.contains(id))
                .unwrap_or(0)
        }
    }
}
