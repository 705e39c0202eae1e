//! Daily activity log
//!
//! Counts add and view actions per calendar day for the statistics view.
//! Each `record` is a full read-modify-write of `progress_log.json`;
//! counters only ever grow and date keys are never removed.

use crate::storage::{ProgressMap, Storage};

/// Actions counted in the progress log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Added,
    Viewed,
}

/// Aggregated view over the whole log
#[derive(Debug, Clone, Default)]
pub struct ProgressSummary {
    /// One entry per recorded day, ascending by date
    pub per_date: Vec<DayEntry>,
    pub total_added: u64,
    pub total_viewed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub date: String,
    pub added: u64,
    pub viewed: u64,
}

pub struct ProgressLog {
    storage: Storage,
}

impl ProgressLog {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Record one action against today's date key (local timezone).
    pub fn record(&self, action: Action) -> crate::storage::Result<()> {
        self.record_on(&today_key(), action)
    }

    fn record_on(&self, date: &str, action: Action) -> crate::storage::Result<()> {
        let mut log = self.storage.load_progress()?;

        let day = log.entry(date.to_string()).or_default();
        match action {
            Action::Added => day.added += 1,
            Action::Viewed => day.viewed += 1,
        }

        self.storage.save_progress(&log)?;
        log::debug!("Recorded {:?} for {}", action, date);
        Ok(())
    }

    /// Aggregate the whole log. An absent log yields an empty summary.
    pub fn summarize(&self) -> crate::storage::Result<ProgressSummary> {
        let log = self.storage.load_progress()?;
        Ok(summarize_map(&log))
    }
}

fn summarize_map(log: &ProgressMap) -> ProgressSummary {
    let mut summary = ProgressSummary::default();

    // BTreeMap iteration is ascending by key; ISO dates sort correctly
    for (date, counters) in log {
        summary.total_added += counters.added;
        summary.total_viewed += counters.viewed;
        summary.per_date.push(DayEntry {
            date: date.clone(),
            added: counters.added,
            viewed: counters.viewed,
        });
    }

    summary
}

fn today_key() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log() -> (tempfile::TempDir, ProgressLog) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().to_path_buf());
        storage.init().unwrap();
        (dir, ProgressLog::new(storage))
    }

    #[test]
    fn test_empty_log_yields_empty_summary() {
        let (_dir, log) = temp_log();

        let summary = log.summarize().unwrap();
        assert!(summary.per_date.is_empty());
        assert_eq!(summary.total_added, 0);
        assert_eq!(summary.total_viewed, 0);
    }

    #[test]
    fn test_record_added_increments_only_added() {
        let (_dir, log) = temp_log();

        log.record_on("2026-03-01", Action::Added).unwrap();
        log.record_on("2026-03-01", Action::Added).unwrap();

        let summary = log.summarize().unwrap();
        assert_eq!(summary.total_added, 2);
        assert_eq!(summary.total_viewed, 0);
        assert_eq!(summary.per_date.len(), 1);
        assert_eq!(summary.per_date[0].added, 2);
        assert_eq!(summary.per_date[0].viewed, 0);
    }

    #[test]
    fn test_record_viewed_increments_only_viewed() {
        let (_dir, log) = temp_log();

        log.record_on("2026-03-01", Action::Added).unwrap();
        log.record_on("2026-03-01", Action::Viewed).unwrap();

        let summary = log.summarize().unwrap();
        assert_eq!(summary.total_added, 1);
        assert_eq!(summary.total_viewed, 1);
    }

    #[test]
    fn test_summary_is_sorted_by_date() {
        let (_dir, log) = temp_log();

        log.record_on("2026-03-02", Action::Viewed).unwrap();
        log.record_on("2026-02-28", Action::Added).unwrap();
        log.record_on("2026-03-01", Action::Viewed).unwrap();

        let summary = log.summarize().unwrap();
        let dates: Vec<&str> = summary.per_date.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2026-02-28", "2026-03-01", "2026-03-02"]);
        assert_eq!(summary.total_added, 1);
        assert_eq!(summary.total_viewed, 2);
    }

    #[test]
    fn test_record_uses_todays_key() {
        let (_dir, log) = temp_log();

        log.record(Action::Added).unwrap();

        let summary = log.summarize().unwrap();
        assert_eq!(summary.per_date.len(), 1);
        assert_eq!(summary.per_date[0].date, today_key());
        assert_eq!(summary.per_date[0].added, 1);
    }

    #[test]
    fn test_counters_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().to_path_buf());
        storage.init().unwrap();

        ProgressLog::new(storage.clone())
            .record_on("2026-03-01", Action::Viewed)
            .unwrap();
        ProgressLog::new(storage.clone())
            .record_on("2026-03-01", Action::Viewed)
            .unwrap();

        let summary = ProgressLog::new(storage).summarize().unwrap();
        assert_eq!(summary.total_viewed, 2);
    }
}
