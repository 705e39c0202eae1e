//! Glossary store
//!
//! In-memory word → explanation map backed by `word_data.json`. Every
//! mutation writes the whole document back through [`Storage`] before it
//! returns, so the map and the file agree after each successful call.
//! When a save fails the mutation stays in memory and the error reaches
//! the caller; the in-memory map is the source of truth until a save
//! succeeds.

use crate::storage::{Storage, StorageError, WordMap};

/// Error type for glossary operations
#[derive(Debug, thiserror::Error)]
pub enum GlossaryError {
    #[error("word is empty")]
    EmptyWord,

    #[error("word not found: {0}")]
    WordNotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, GlossaryError>;

pub struct Glossary {
    storage: Storage,
    words: WordMap,
}

impl Glossary {
    /// Load the glossary from disk. A missing word file yields an empty
    /// store; a corrupt one is refused.
    pub fn load(storage: Storage) -> Result<Self> {
        let words = storage.load_dictionary()?;
        log::debug!("Loaded {} glossary entries", words.len());
        Ok(Self { storage, words })
    }

    /// Add a word, silently replacing any existing explanation for it.
    ///
    /// The word is trimmed before it becomes the key; a word that is
    /// empty after trimming is rejected and nothing is persisted.
    /// Returns the stored key.
    pub fn add(&mut self, word: &str, explanation: String) -> Result<String> {
        let word = word.trim();
        if word.is_empty() {
            return Err(GlossaryError::EmptyWord);
        }

        self.words.insert(word.to_string(), explanation);
        self.save()?;

        log::info!("Added word '{}'", word);
        Ok(word.to_string())
    }

    /// Replace the explanation of an existing word.
    pub fn update(&mut self, word: &str, explanation: String) -> Result<()> {
        match self.words.get_mut(word) {
            Some(entry) => *entry = explanation,
            None => return Err(GlossaryError::WordNotFound(word.to_string())),
        }
        self.save()?;

        log::info!("Updated word '{}'", word);
        Ok(())
    }

    /// Delete a word. Confirmation is the caller's concern.
    pub fn remove(&mut self, word: &str) -> Result<()> {
        if self.words.remove(word).is_none() {
            return Err(GlossaryError::WordNotFound(word.to_string()));
        }
        self.save()?;

        log::info!("Removed word '{}'", word);
        Ok(())
    }

    /// Explanation for a word, or the empty string when absent. A
    /// missing word displays as blank; it is not an error here.
    pub fn get(&self, word: &str) -> &str {
        self.words.get(word).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, lexicographically sorted (case-sensitive).
    pub fn list(&self) -> Vec<&str> {
        self.words.keys().map(String::as_str).collect()
    }

    /// Words whose lowercase form contains the lowercase pattern, in the
    /// same order as [`list`](Self::list). An empty pattern matches
    /// everything.
    pub fn filter(&self, pattern: &str) -> Vec<&str> {
        let needle = pattern.to_lowercase();
        self.words
            .keys()
            .filter(|word| word.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    fn save(&self) -> Result<()> {
        self.storage.save_dictionary(&self.words)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_glossary() -> (tempfile::TempDir, Glossary) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().to_path_buf());
        storage.init().unwrap();
        let glossary = Glossary::load(storage).unwrap();
        (dir, glossary)
    }

    #[test]
    fn test_add_then_get_and_list() {
        let (_dir, mut glossary) = temp_glossary();

        glossary
            .add("serendipity", "# Serendipity\n\nA happy accident.".to_string())
            .unwrap();

        assert_eq!(glossary.list(), vec!["serendipity"]);
        assert!(glossary.get("serendipity").contains("A happy accident."));
    }

    #[test]
    fn test_add_overwrites_existing_word() {
        let (_dir, mut glossary) = temp_glossary();

        glossary.add("word", "first".to_string()).unwrap();
        glossary.add("word", "second".to_string()).unwrap();

        assert_eq!(glossary.get("word"), "second");
        assert_eq!(glossary.list(), vec!["word"]);
    }

    #[test]
    fn test_add_trims_and_rejects_empty() {
        let (_dir, mut glossary) = temp_glossary();

        assert!(matches!(
            glossary.add("", "text".to_string()),
            Err(GlossaryError::EmptyWord)
        ));
        assert!(matches!(
            glossary.add("   \t", "text".to_string()),
            Err(GlossaryError::EmptyWord)
        ));
        assert!(glossary.is_empty());

        let key = glossary.add("  padded  ", "text".to_string()).unwrap();
        assert_eq!(key, "padded");
        assert_eq!(glossary.get("padded"), "text");
    }

    #[test]
    fn test_update_requires_existing_word() {
        let (_dir, mut glossary) = temp_glossary();

        assert!(matches!(
            glossary.update("ghost", "text".to_string()),
            Err(GlossaryError::WordNotFound(_))
        ));

        glossary.add("word", "old".to_string()).unwrap();
        glossary.update("word", "new".to_string()).unwrap();
        assert_eq!(glossary.get("word"), "new");
    }

    #[test]
    fn test_remove() {
        let (_dir, mut glossary) = temp_glossary();

        glossary.add("word", "text".to_string()).unwrap();
        glossary.remove("word").unwrap();

        assert!(glossary.list().is_empty());
        assert_eq!(glossary.get("word"), "");

        assert!(matches!(
            glossary.remove("word"),
            Err(GlossaryError::WordNotFound(_))
        ));
    }

    #[test]
    fn test_list_is_sorted_case_sensitive() {
        let (_dir, mut glossary) = temp_glossary();

        for word in ["cherry", "Banana", "apple"] {
            glossary.add(word, String::new()).unwrap();
        }

        // Byte-lexicographic: uppercase sorts before lowercase
        assert_eq!(glossary.list(), vec!["Banana", "apple", "cherry"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let (_dir, mut glossary) = temp_glossary();

        for word in ["apple", "Banana", "cherry"] {
            glossary.add(word, String::new()).unwrap();
        }

        assert_eq!(glossary.filter("an"), vec!["Banana"]);
        assert_eq!(glossary.filter("AN"), vec!["Banana"]);
        assert_eq!(glossary.filter(""), glossary.list());
        assert!(glossary.filter("zzz").is_empty());
    }

    #[test]
    fn test_mutations_persist_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().to_path_buf());
        storage.init().unwrap();

        let mut glossary = Glossary::load(storage.clone()).unwrap();
        glossary.add("word", "text".to_string()).unwrap();

        // A fresh load sees the mutation
        let reloaded = Glossary::load(storage.clone()).unwrap();
        assert_eq!(reloaded.get("word"), "text");

        glossary.remove("word").unwrap();
        let reloaded = Glossary::load(storage).unwrap();
        assert!(reloaded.is_empty());
    }
}
