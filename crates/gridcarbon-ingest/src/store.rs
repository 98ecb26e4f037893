//! Daily-record history store
//!
//! The pipeline itself persists nothing; this is the consumer boundary that
//! merges each run's records into the JSON history file, keyed by day.

use std::path::{Path, PathBuf};

use gridcarbon_common::{DailyRecord, Result};
use tracing::info;

use crate::dates::parse_day;

/// JSON-file backed history of daily records
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the existing history; a missing file is an empty history
    pub fn load(&self) -> Result<Vec<DailyRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let text = std::fs::read_to_string(&self.path)?;
        let records = serde_json::from_str(&text)?;
        Ok(records)
    }

    /// Write the full history, via a temp file so a crash mid-write never
    /// truncates the existing history
    pub fn save(&self, records: &[DailyRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(records)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Merge a run's records into the stored history and save.
    ///
    /// Records replace existing entries with the same day key; unknown days
    /// append. The result is kept in chronological order; legacy entries whose
    /// day key no longer parses sort first, unchanged.
    pub fn update(&self, new_records: Vec<DailyRecord>) -> Result<usize> {
        let mut history = self.load()?;

        let mut replaced = 0usize;
        let mut added = 0usize;

        for record in new_records {
            match history.iter_mut().find(|r| r.day == record.day) {
                Some(existing) => {
                    *existing = record;
                    replaced += 1;
                },
                None => {
                    history.push(record);
                    added += 1;
                },
            }
        }

        history.sort_by_key(|r| parse_day(&r.day).ok());

        self.save(&history)?;

        info!(
            added,
            replaced,
            total = history.len(),
            path = %self.path.display(),
            "History updated"
        );

        Ok(history.len())
    }
}
