//! Result stores.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::core::RoundRecord;

#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("failed to write result log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode round record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("result store rejected the record: {0}")]
    Rejected(String),
}

/// Persistence for completed rounds.
///
/// `save` is attempted once per round; callers do not retry.
#[async_trait]
pub trait ResultRecorder: Send + Sync {
    async fn save(&self, record: &RoundRecord) -> Result<(), RecorderError>;
}

#[derive(Serialize)]
struct StoredResult<'a> {
    #[serde(flatten)]
    record: &'a RoundRecord,
    recorded_at: String,
}

/// Appends one JSON object per round to a file.
#[derive(Debug)]
pub struct JsonlRecorder {
    path: PathBuf,
    // Serializes appends so concurrent saves never interleave lines.
    write_lock: tokio::sync::Mutex<()>,
}

impl JsonlRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RecorderError {
        RecorderError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl ResultRecorder for JsonlRecorder {
    async fn save(&self, record: &RoundRecord) -> Result<(), RecorderError> {
        let stored = StoredResult {
            record,
            recorded_at: chrono::Utc::now().to_rfc3339(),
        };
        let mut line = serde_json::to_vec(&stored)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        file.write_all(&line).await.map_err(|e| self.io_error(e))?;
        file.flush().await.map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

/// Keeps records in memory.
///
/// Built with [`MemoryRecorder::failing`], every save is rejected instead,
/// which is how recorder outages are simulated.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    records: Mutex<Vec<RoundRecord>>,
    fail_with: Option<String>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    pub fn records(&self) -> Vec<RoundRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ResultRecorder for MemoryRecorder {
    async fn save(&self, record: &RoundRecord) -> Result<(), RecorderError> {
        if let Some(message) = &self.fail_with {
            return Err(RecorderError::Rejected(message.clone()));
        }
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, correct: u32) -> RoundRecord {
        RoundRecord {
            image_ref: format!("{name}.jpg"),
            person_name: name.to_string(),
            is_natural: true,
            user_guess: false,
            was_correct: false,
            score_after: correct,
        }
    }

    #[tokio::test]
    async fn memory_recorder_keeps_records_in_order() {
        let store = MemoryRecorder::new();
        store.save(&record("a", 0)).await.unwrap();
        store.save(&record("b", 0)).await.unwrap();

        let names: Vec<_> = store.records().into_iter().map(|r| r.person_name).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[tokio::test]
    async fn failing_memory_recorder_rejects() {
        let store = MemoryRecorder::failing("offline");
        let err = store.save(&record("a", 0)).await.unwrap_err();
        assert!(matches!(err, RecorderError::Rejected(ref m) if m == "offline"));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn jsonl_recorder_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.jsonl");
        let store = JsonlRecorder::new(&path);

        store.save(&record("Steve Reeves", 1)).await.unwrap();
        store.save(&record("Eugen Sandow", 2)).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["person_name"], "Steve Reeves");
        assert_eq!(lines[0]["image_url"], "Steve Reeves.jpg");
        assert_eq!(lines[1]["score"], 2);
        assert!(lines[1]["recorded_at"].is_string());
    }

    #[tokio::test]
    async fn jsonl_recorder_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("results.jsonl");
        let store = JsonlRecorder::new(&path);

        let err = store.save(&record("a", 0)).await.unwrap_err();
        assert!(matches!(err, RecorderError::Io { .. }));
        assert!(err.to_string().contains("results.jsonl"));
    }
}
