use std::path::Path;

use anyhow::{Context, Result};

use glossa::glossary::Glossary;
use glossa::progress::{Action, ProgressLog};
use glossa::storage::Storage;

/// Shared application state for CLI commands and the TUI
pub struct App {
    pub glossary: Glossary,
    pub progress: ProgressLog,
}

impl App {
    /// Initialize from the given data directory, or the platform default
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let base_path = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => Storage::default_data_dir().context("Failed to resolve data directory")?,
        };

        let storage = Storage::new(base_path);
        storage.init().context("Failed to initialize data directory")?;

        let glossary = Glossary::load(storage.clone())
            .context("Failed to load glossary (fix or move the data file and retry)")?;
        let progress = ProgressLog::new(storage);

        Ok(Self { glossary, progress })
    }

    /// Record a progress action. The mutation that triggered it has
    /// already been saved, so a logging failure is reported without
    /// undoing anything.
    pub fn record(&self, action: Action) -> Result<()> {
        self.progress
            .record(action)
            .context("Entry saved, but recording progress failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_flow_records_progress() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Some(dir.path())).unwrap();

        let key = app
            .glossary
            .add("serendipity", "# Serendipity\n\nA happy accident.".to_string())
            .unwrap();
        app.record(Action::Added).unwrap();

        assert_eq!(app.glossary.list(), vec!["serendipity"]);
        assert!(app.glossary.get(&key).contains("A happy accident."));

        let summary = app.progress.summarize().unwrap();
        assert_eq!(summary.total_added, 1);
        assert_eq!(summary.total_viewed, 0);
        assert_eq!(summary.per_date.len(), 1);
        assert_eq!(summary.per_date[0].added, 1);
    }

    #[test]
    fn test_view_flow_records_progress() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Some(dir.path())).unwrap();

        app.glossary.add("word", "text".to_string()).unwrap();
        app.record(Action::Viewed).unwrap();

        let summary = app.progress.summarize().unwrap();
        assert_eq!(summary.total_added, 0);
        assert_eq!(summary.total_viewed, 1);
    }
}
