//! Task module
//!
//! This module contains the task model, the storage seam and the task store.

mod file_storage;
mod memory_storage;
mod model;
mod storage;
mod store;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use model::*;
pub use storage::KeyValueStorage;
pub use store::*;
