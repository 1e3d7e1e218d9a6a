//! Session history persistence module
//!
//! Handles saving, loading, and rotation of completed lesson and quiz
//! records.

use crate::models::record::SessionRecord;
use crate::{LingAfriqError, Result, APP_NAME, HISTORY_FILE, MAX_HISTORY_ENTRIES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// History storage manager
#[derive(Debug)]
pub struct HistoryStorage {
    history_path: PathBuf,
}

/// History file structure for JSON persistence
#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    records: Vec<SessionRecord>,
}

impl Default for HistoryFile {
    fn default() -> Self {
        Self {
            version: 1,
            records: Vec::new(),
        }
    }
}

impl HistoryStorage {
    /// Create a new history storage manager at the standard location
    pub fn new() -> Result<Self> {
        let history_path = Self::history_file_path()?;
        Ok(Self { history_path })
    }

    /// Create a storage manager backed by a specific file. Used by tests
    /// and anything that needs a non-standard location.
    pub fn with_path(history_path: PathBuf) -> Self {
        Self { history_path }
    }

    /// Get the standard history file path
    /// Uses $DATA_HOME/lingafriq/history.json
    pub fn history_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            LingAfriqError::PersistenceError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(HISTORY_FILE))
    }

    /// Load all records from the history file
    pub fn load_records(&self) -> Result<Vec<SessionRecord>> {
        if !self.history_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.history_path).map_err(|e| {
            LingAfriqError::PersistenceError(format!(
                "Failed to read history file {}: {}",
                self.history_path.display(),
                e
            ))
        })?;

        let history_file: HistoryFile = serde_json::from_str(&content).map_err(|e| {
            LingAfriqError::PersistenceError(format!(
                "Failed to parse history file {}: {}",
                self.history_path.display(),
                e
            ))
        })?;

        Ok(history_file.records)
    }

    /// Append a new record to the history file.
    /// Automatically rotates old records if the file exceeds
    /// MAX_HISTORY_ENTRIES entries.
    pub fn append_record(&self, record: SessionRecord) -> Result<()> {
        let mut records = self.load_records()?;

        records.push(record);

        if records.len() > MAX_HISTORY_ENTRIES {
            let skip_count = records.len() - MAX_HISTORY_ENTRIES;
            records = records.into_iter().skip(skip_count).collect();
        }

        self.save_records(records)
    }

    /// Save all records to the history file
    fn save_records(&self, records: Vec<SessionRecord>) -> Result<()> {
        if let Some(parent) = self.history_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LingAfriqError::PersistenceError(format!(
                    "Failed to create history directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let history_file = HistoryFile {
            version: 1,
            records,
        };

        let content = serde_json::to_string_pretty(&history_file).map_err(|e| {
            LingAfriqError::PersistenceError(format!("Failed to serialize history: {}", e))
        })?;

        fs::write(&self.history_path, content).map_err(|e| {
            LingAfriqError::PersistenceError(format!(
                "Failed to write history file {}: {}",
                self.history_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the number of stored records
    pub fn count_records(&self) -> Result<usize> {
        let records = self.load_records()?;
        Ok(records.len())
    }

    /// Get the most recent records (up to limit), newest first
    pub fn recent_records(&self, limit: usize) -> Result<Vec<SessionRecord>> {
        let mut records = self.load_records()?;
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(limit);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::ActivityKind;
    use tempfile::TempDir;

    fn temp_storage() -> (TempDir, HistoryStorage) {
        let dir = TempDir::new().expect("temp dir");
        let storage = HistoryStorage::with_path(dir.path().join("history.json"));
        (dir, storage)
    }

    #[test]
    fn test_load_from_missing_file_is_empty() {
        let (_dir, storage) = temp_storage();
        assert!(storage.load_records().unwrap().is_empty());
        assert_eq!(storage.count_records().unwrap(), 0);
    }

    #[test]
    fn test_append_and_load_round_trip() {
        let (_dir, storage) = temp_storage();
        let record = SessionRecord::new("swahili", ActivityKind::Lesson, 75, 100);
        storage.append_record(record.clone()).unwrap();

        let records = storage.load_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], record);
    }

    #[test]
    fn test_rotation_keeps_most_recent() {
        let (_dir, storage) = temp_storage();
        for i in 0..(MAX_HISTORY_ENTRIES + 5) {
            let record = SessionRecord::new("zulu", ActivityKind::Quiz, i as u32, 200);
            storage.append_record(record).unwrap();
        }

        let records = storage.load_records().unwrap();
        assert_eq!(records.len(), MAX_HISTORY_ENTRIES);
        // The oldest five were rotated out.
        assert_eq!(records[0].score, 5);
        assert_eq!(records.last().unwrap().score, (MAX_HISTORY_ENTRIES + 4) as u32);
    }

    #[test]
    fn test_recent_records_are_newest_first() {
        let (_dir, storage) = temp_storage();
        for i in 0..3 {
            storage
                .append_record(SessionRecord::new("akan", ActivityKind::Lesson, i, 100))
                .unwrap();
        }

        let recent = storage.recent_records(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].timestamp >= recent[1].timestamp);
    }

    #[test]
    fn test_corrupt_file_is_a_persistence_error() {
        let (_dir, storage) = temp_storage();
        fs::write(&storage.history_path, "not json").unwrap();
        assert!(matches!(
            storage.load_records(),
            Err(LingAfriqError::PersistenceError(_))
        ));
    }
}
