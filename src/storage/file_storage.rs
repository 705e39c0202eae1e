use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::models::{ProgressMap, WordMap};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupt data file {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// File-backed storage for the two glossary documents.
///
/// Every save rewrites the whole document. There is no locking; the
/// single-process assumption makes last-writer-wins acceptable.
#[derive(Clone)]
pub struct Storage {
    base_path: PathBuf,
}

impl Storage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("glossa"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Initialize the data directory
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    /// Path to word_data.json
    pub fn word_data_path(&self) -> PathBuf {
        self.base_path.join("word_data.json")
    }

    /// Path to progress_log.json
    pub fn progress_log_path(&self) -> PathBuf {
        self.base_path.join("progress_log.json")
    }

    /// Read the word map; a missing file yields an empty map.
    pub fn load_dictionary(&self) -> Result<WordMap> {
        read_document(&self.word_data_path())
    }

    /// Write the full word map, replacing the document.
    pub fn save_dictionary(&self, words: &WordMap) -> Result<()> {
        write_document(&self.word_data_path(), words)
    }

    /// Read the progress log; a missing file yields an empty log.
    pub fn load_progress(&self) -> Result<ProgressMap> {
        read_document(&self.progress_log_path())
    }

    /// Write the full progress log, replacing the document.
    pub fn save_progress(&self, log: &ProgressMap) -> Result<()> {
        write_document(&self.progress_log_path(), log)
    }
}

/// Read a JSON document into its typed shape.
///
/// A file that exists but does not parse into `T` is reported as
/// `Corrupt` so the caller can refuse to proceed instead of clobbering
/// the document on the next save.
fn read_document<T: Default + DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize pretty-printed and overwrite the document in one write.
///
/// serde_json leaves non-ASCII text unescaped, so explanations survive
/// byte-for-byte across a save/load cycle.
fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DayCounters;

    fn temp_storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().to_path_buf());
        storage.init().unwrap();
        (dir, storage)
    }

    #[test]
    fn test_load_missing_dictionary_is_empty() {
        let (_dir, storage) = temp_storage();
        let words = storage.load_dictionary().unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_dictionary_roundtrip() {
        let (_dir, storage) = temp_storage();

        let mut words = WordMap::new();
        words.insert("apple".to_string(), "# Apple\n\nA fruit.".to_string());
        words.insert("Banana".to_string(), String::new());
        storage.save_dictionary(&words).unwrap();

        let loaded = storage.load_dictionary().unwrap();
        assert_eq!(loaded, words);

        // A second save of the loaded map is a fixed point
        storage.save_dictionary(&loaded).unwrap();
        assert_eq!(storage.load_dictionary().unwrap(), loaded);
    }

    #[test]
    fn test_dictionary_preserves_non_ascii() {
        let (_dir, storage) = temp_storage();

        let mut words = WordMap::new();
        words.insert("日本語".to_string(), "Japanese — 言語".to_string());
        storage.save_dictionary(&words).unwrap();

        let raw = fs::read_to_string(storage.word_data_path()).unwrap();
        assert!(raw.contains("日本語"));
        assert!(raw.contains("言語"));

        let loaded = storage.load_dictionary().unwrap();
        assert_eq!(loaded.get("日本語").unwrap(), "Japanese — 言語");
    }

    #[test]
    fn test_saved_documents_are_indented() {
        let (_dir, storage) = temp_storage();

        let mut words = WordMap::new();
        words.insert("word".to_string(), "text".to_string());
        storage.save_dictionary(&words).unwrap();

        let raw = fs::read_to_string(storage.word_data_path()).unwrap();
        assert!(raw.contains("\n  \"word\""));
    }

    #[test]
    fn test_corrupt_dictionary_is_rejected() {
        let (_dir, storage) = temp_storage();

        fs::write(storage.word_data_path(), "{ not json").unwrap();
        match storage.load_dictionary() {
            Err(StorageError::Corrupt { path, .. }) => {
                assert_eq!(path, storage.word_data_path());
            }
            other => panic!("expected Corrupt, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let (_dir, storage) = temp_storage();

        // Valid JSON, wrong shape: counters must be objects, not numbers
        fs::write(storage.progress_log_path(), r#"{"2026-01-05": 3}"#).unwrap();
        assert!(matches!(
            storage.load_progress(),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_progress_roundtrip() {
        let (_dir, storage) = temp_storage();

        let mut log = ProgressMap::new();
        log.insert(
            "2026-01-05".to_string(),
            DayCounters {
                added: 2,
                viewed: 7,
            },
        );
        storage.save_progress(&log).unwrap();

        let loaded = storage.load_progress().unwrap();
        assert_eq!(loaded, log);
    }

    #[test]
    fn test_load_missing_progress_is_empty() {
        let (_dir, storage) = temp_storage();
        assert!(storage.load_progress().unwrap().is_empty());
    }
}
