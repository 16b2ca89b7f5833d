//! Session persistence boundary
//!
//! Games never talk to storage directly; they emit [`SessionRecord`]s
//! through a [`SessionSink`]. The in-memory sink backs tests and the
//! JSON-lines file sink backs the CLI.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::core::error::Result;
use crate::progress::session::SessionRecord;

/// Where finished sessions go
pub trait SessionSink: Send + Sync {
    fn save(&self, record: &SessionRecord) -> Result<()>;
}

/// Collects sessions in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<SessionRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<SessionRecord> {
        self.records.lock().expect("session store poisoned").clone()
    }
}

impl SessionSink for MemorySink {
    fn save(&self, record: &SessionRecord) -> Result<()> {
        self.records
            .lock()
            .expect("session store poisoned")
            .push(record.clone());
        Ok(())
    }
}

/// Appends one JSON object per line to a file
#[derive(Debug)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionSink for JsonFileSink {
    fn save(&self, record: &SessionRecord) -> Result<()> {
        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        debug!(level = %record.level_id, won = record.won, "session saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{GameType, PlayerId};

    #[test]
    fn test_memory_sink_collects_records() {
        let sink = MemorySink::new();
        let record = SessionRecord::new(PlayerId::new(), GameType::Query, "ENGINEER_3")
            .with_outcome(true, 100, 150);
        sink.save(&record).unwrap();
        sink.save(&record).unwrap();
        assert_eq!(sink.records().len(), 2);
        assert_eq!(sink.records()[0].level_id, "ENGINEER_3");
    }

    #[test]
    fn test_json_file_sink_appends_lines() {
        let dir = std::env::temp_dir().join(format!("data-quest-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sessions.jsonl");
        let _ = std::fs::remove_file(&path);

        let sink = JsonFileSink::new(&path);
        for level in ["ENGINEER_1", "ENGINEER_2"] {
            let record = SessionRecord::new(PlayerId::new(), GameType::Pipeline, level);
            sink.save(&record).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: SessionRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.level_id, "ENGINEER_2");

        std::fs::remove_file(&path).unwrap();
    }
}
