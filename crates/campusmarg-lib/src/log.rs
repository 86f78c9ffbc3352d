//! Persisted path log.
//!
//! Every computed route can be handed to a [`PathLog`] for audit or history.
//! The engine never reads the log back while answering queries.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{PathResult, PathStep, RouteMode, RouteQuery};

/// One persisted route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathLogEntry {
    pub from: String,
    pub to: String,
    pub mode: RouteMode,
    pub path: Vec<PathStep>,
    pub total_distance: f64,
    pub total_time: f64,
    pub cached: bool,
    pub recorded_at: DateTime<Utc>,
}

impl PathLogEntry {
    pub fn new(query: &RouteQuery, result: &PathResult) -> Self {
        Self {
            from: query.origin_id.clone(),
            to: query.destination_id.clone(),
            mode: result.mode,
            path: result.path.clone(),
            total_distance: result.total_distance,
            total_time: result.total_time,
            cached: result.cached,
            recorded_at: Utc::now(),
        }
    }
}

/// Sink for computed routes.
pub trait PathLog: Send + Sync {
    fn record(&self, query: &RouteQuery, result: &PathResult) -> Result<()>;
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPathLog;

impl PathLog for NullPathLog {
    fn record(&self, _query: &RouteQuery, _result: &PathResult) -> Result<()> {
        Ok(())
    }
}

/// Appends one JSON document per line to a file.
#[derive(Debug)]
pub struct JsonLinesPathLog {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl JsonLinesPathLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PathLog for JsonLinesPathLog {
    fn record(&self, query: &RouteQuery, result: &PathResult) -> Result<()> {
        let entry = PathLogEntry::new(query, result);
        let line = serde_json::to_string(&entry)?;

        let mut writer = self.writer.lock().map_err(|_| Error::Internal {
            message: format!("path log {} lock poisoned", self.path.display()),
        })?;
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}

/// Read every entry back from a JSON-lines log file.
pub fn read_path_log(path: &Path) -> Result<Vec<PathLogEntry>> {
    let contents = std::fs::read_to_string(path)?;
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_lines_log_appends_entries() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("paths.jsonl");
        let log = JsonLinesPathLog::open(&path).expect("open log");

        let query = RouteQuery::new("A", "B", RouteMode::Normal);
        let result = PathResult::unreachable(RouteMode::Normal);
        log.record(&query, &result).expect("first write");
        log.record(&query, &result).expect("second write");

        let entries = read_path_log(&path).expect("read back");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].from, "A");
        assert_eq!(entries[0].to, "B");
        assert_eq!(entries[1].mode, RouteMode::Normal);
    }

    #[test]
    fn null_log_accepts_anything() {
        let query = RouteQuery::new("A", "B", RouteMode::Emergency);
        assert!(NullPathLog
            .record(&query, &PathResult::unreachable(RouteMode::Emergency))
            .is_ok());
    }
}
