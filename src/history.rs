//! Bounded log of past match runs, newest first

use crate::error::Result;
use crate::matching::RankedOutcome;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Characters of job text kept with each entry
pub const JOB_SNIPPET_CHARS: usize = 300;

/// Per-process suffix so entries created in the same microsecond stay distinct
static ENTRY_SEQUENCE: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub best_title: String,
    pub best_score: u8,
    pub results: Vec<HistoryResult>,
    pub job_snippet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResult {
    pub title: String,
    pub score: u8,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl HistoryEntry {
    /// Snapshot a ranking outcome
    pub fn from_outcome(outcome: &RankedOutcome, job_text: &str) -> Self {
        let timestamp = Utc::now();

        Self {
            id: format!(
                "{:x}-{:x}",
                timestamp.timestamp_micros(),
                ENTRY_SEQUENCE.fetch_add(1, Ordering::Relaxed)
            ),
            timestamp,
            best_title: outcome.best.title.clone(),
            best_score: outcome.best.score,
            results: outcome
                .results
                .iter()
                .map(|r| HistoryResult {
                    title: r.title.clone(),
                    score: r.score,
                    matched: r.matched.clone(),
                    missing: r.missing.clone(),
                })
                .collect(),
            job_snippet: job_text.chars().take(JOB_SNIPPET_CHARS).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl History {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Load from a JSON file; a missing file is an empty history
    pub fn load(path: &Path, max_entries: usize) -> Result<Self> {
        let mut history = Self::new(max_entries);

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            history.entries = serde_json::from_str(&content)?;
            history.entries.truncate(history.max_entries);
            debug!("Loaded {} history entries from {}", history.entries.len(), path.display());
        }

        Ok(history)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Add an entry at the front, dropping the oldest past capacity
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.max_entries);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{rank_projects, Project};
    use tempfile::tempdir;

    fn entry(title: &str) -> HistoryEntry {
        let projects = vec![Project::new("1", title, vec!["RUST".to_string()], None)];
        let outcome = rank_projects(&projects, "rust developer").unwrap();
        HistoryEntry::from_outcome(&outcome, "rust developer")
    }

    #[test]
    fn test_snapshot_from_outcome() {
        let entry = entry("CLI tool");

        assert_eq!(entry.best_title, "CLI tool");
        assert_eq!(entry.best_score, 100);
        assert_eq!(entry.results[0].matched, vec!["RUST"]);
        assert_eq!(entry.job_snippet, "rust developer");
    }

    #[test]
    fn test_back_to_back_entries_have_distinct_ids() {
        let mut history = History::new(40);
        history.record(entry("first"));
        history.record(entry("second"));

        let ids: Vec<String> = history.entries().iter().map(|e| e.id.clone()).collect();
        assert_ne!(ids[0], ids[1]);
        assert_eq!(history.find(&ids[0]).unwrap().best_title, "second");
        assert_eq!(history.find(&ids[1]).unwrap().best_title, "first");
    }

    #[test]
    fn test_snippet_is_truncated() {
        let projects = vec![Project::new("1", "A", vec!["RUST".to_string()], None)];
        let long_text = "x".repeat(1000);
        let outcome = rank_projects(&projects, &long_text).unwrap();

        let entry = HistoryEntry::from_outcome(&outcome, &long_text);
        assert_eq!(entry.job_snippet.chars().count(), JOB_SNIPPET_CHARS);
    }

    #[test]
    fn test_record_is_newest_first_and_capped() {
        let mut history = History::new(3);
        for title in ["one", "two", "three", "four"] {
            history.record(entry(title));
        }

        let titles: Vec<&str> = history.entries().iter().map(|e| e.best_title.as_str()).collect();
        assert_eq!(titles, vec!["four", "three", "two"]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("history.json");

        let mut history = History::new(40);
        history.record(entry("saved"));
        history.save(&path).unwrap();

        let loaded = History::load(&path, 40).unwrap();
        assert_eq!(loaded, history);
        assert!(loaded.find(&history.entries()[0].id).is_some());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let history = History::load(&dir.path().join("absent.json"), 40).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = History::new(40);
        history.record(entry("gone"));
        history.clear();
        assert_eq!(history.len(), 0);
    }
}
