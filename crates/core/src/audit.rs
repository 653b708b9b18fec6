//! Append-only operational log sink.
//!
//! Purely diagnostic: one timestamp-prefixed line per event, never read
//! back by the system. The sink is injected into the webhook handler and
//! delivery path so the classification and formatting code stays pure.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;

/// Append-only sink for human-readable operational events.
pub trait AuditSink: Send + Sync {
    /// Append one line. Failures are swallowed; the sink must never fail
    /// the request being processed.
    fn append(&self, line: &str);
}

/// File-backed audit log, one `[YYYY-MM-DD HH:MM:SS] message` line per
/// append.
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    /// Create a sink appending to the given path. The file is created on
    /// first append.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AuditSink for FileAuditLog {
    fn append(&self, line: &str) {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let entry = format!("[{}] {}\n", stamp, line);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(entry.as_bytes()));
        if let Err(err) = result {
            warn!("audit log append failed: {}", err);
        }
    }
}

/// Sink that discards everything.
pub struct NullAuditLog;

impl AuditSink for NullAuditLog {
    fn append(&self, _line: &str) {}
}

/// In-memory sink for tests.
#[derive(Default)]
pub struct MemoryAuditLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryAuditLog {
    /// Create an empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all appended lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

impl AuditSink for MemoryAuditLog {
    fn append(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_audit_log_appends_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statuswatch.log");
        let sink = FileAuditLog::new(path.clone());

        sink.append("received webhook from 203.0.113.5");
        sink.append("not relevant, ignoring");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("received webhook from 203.0.113.5"));
        assert!(lines[1].ends_with("not relevant, ignoring"));
    }

    #[test]
    fn memory_audit_log_records_in_order() {
        let sink = MemoryAuditLog::new();
        sink.append("one");
        sink.append("two");
        assert_eq!(sink.lines(), vec!["one".to_string(), "two".to_string()]);
    }
}
