//! Storage module
//!
//! Persists the word map and the progress log as flat JSON documents.

mod file_storage;
mod models;

pub use file_storage::{Result, Storage, StorageError};
pub use models::{DayCounters, ProgressMap, WordMap};
