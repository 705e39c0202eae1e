//! Persisted data models
//!
//! Both documents are flat JSON objects. The word map carries no metadata
//! beyond the explanation text; the progress log keys are ISO dates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Word → markdown explanation, as persisted in `word_data.json`.
///
/// A `BTreeMap` keeps the words in byte-lexicographic order, which is the
/// listing order the UI presents.
pub type WordMap = BTreeMap<String, String>;

/// "YYYY-MM-DD" → counters, as persisted in `progress_log.json`.
pub type ProgressMap = BTreeMap<String, DayCounters>;

/// Activity counters for a single day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounters {
    /// Entries added (or overwritten) on this day
    pub added: u64,

    /// Entries viewed on this day
    pub viewed: u64,
}
