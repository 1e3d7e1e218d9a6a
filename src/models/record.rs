//! Session record data models
//!
//! Structures for storing and serializing completed lesson and quiz
//! sessions in the local history file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of activity produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Lesson,
    Quiz,
}

impl ActivityKind {
    /// Human-readable label for list rows
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Lesson => "Lesson",
            ActivityKind::Quiz => "Quiz",
        }
    }
}

/// A completed lesson or quiz session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Timestamp when the session was completed
    pub timestamp: DateTime<Utc>,
    /// Catalog id of the language being studied
    pub language_id: String,
    pub activity: ActivityKind,
    /// Points earned
    pub score: u32,
    /// Points available
    pub max_score: u32,
}

impl SessionRecord {
    /// Create a new record stamped with the current time
    pub fn new(language_id: &str, activity: ActivityKind, score: u32, max_score: u32) -> Self {
        Self {
            timestamp: Utc::now(),
            language_id: language_id.to_string(),
            activity,
            score,
            max_score,
        }
    }

    /// Accuracy as a whole percentage, 0 when nothing was at stake
    pub fn accuracy_percent(&self) -> u32 {
        if self.max_score == 0 {
            return 0;
        }
        self.score * 100 / self.max_score
    }

    /// Get a human-readable summary of the record
    pub fn summary(&self) -> String {
        format!(
            "{} - {} {} - {}/{} ({}%)",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.language_id,
            self.activity.label(),
            self.score,
            self.max_score,
            self.accuracy_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = SessionRecord::new("swahili", ActivityKind::Lesson, 75, 100);
        assert_eq!(record.language_id, "swahili");
        assert_eq!(record.score, 75);
        assert!(record.timestamp <= Utc::now());
    }

    #[test]
    fn test_accuracy_percent() {
        let record = SessionRecord::new("zulu", ActivityKind::Quiz, 60, 100);
        assert_eq!(record.accuracy_percent(), 60);

        let empty = SessionRecord::new("zulu", ActivityKind::Quiz, 0, 0);
        assert_eq!(empty.accuracy_percent(), 0);
    }

    #[test]
    fn test_summary_contains_key_fields() {
        let record = SessionRecord::new("yoruba", ActivityKind::Quiz, 80, 100);
        let summary = record.summary();
        assert!(summary.contains("yoruba"));
        assert!(summary.contains("Quiz"));
        assert!(summary.contains("80/100"));
        assert!(summary.contains("(80%)"));
    }

    #[test]
    fn test_serde_round_trip() {
        let record = SessionRecord::new("swahili", ActivityKind::Lesson, 100, 100);
        let json = serde_json::to_string(&record).expect("Failed to serialize");
        let back: SessionRecord = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(record, back);
    }
}
