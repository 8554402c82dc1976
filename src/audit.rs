//! Append-only audit trail of channel activity.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};

/// One audit entry: who did what, where, when.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditRecord {
    /// Time the record was constructed.
    pub timestamp: DateTime<Utc>,
    /// Channel the event belongs to, `*` for server-level events.
    pub channel: String,
    /// The acting identity.
    pub actor: String,
    /// Free-text description or message body.
    pub text: String,
}

impl AuditRecord {
    /// Build a record stamped with the current time.
    pub fn new(channel: &str, actor: &str, text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            channel: channel.to_string(),
            actor: actor.to_string(),
            text: text.into(),
        }
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} <{}> {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.channel,
            self.actor,
            self.text
        )
    }
}

/// Append-only text sink for [`AuditRecord`]s, one line per record.
pub struct AuditLog {
    file: File,
}

impl AuditLog {
    /// Open (or create) the log file at `path` in append mode.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Persist one record. The write completes before this returns.
    pub fn append(&mut self, record: &AuditRecord) -> io::Result<()> {
        writeln!(self.file, "{}", record)?;
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let record = AuditRecord::new("#test", "alice", "has joined.");
        let line = record.to_string();
        assert!(line.contains("#test <alice> has joined."));
        assert!(line.starts_with('['));
    }

    #[test]
    fn test_append_persists_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");

        let mut log = AuditLog::open(&path).unwrap();
        log.append(&AuditRecord::new("#test", "alice", "has joined."))
            .unwrap();
        log.append(&AuditRecord::new("#test", "bob", "!octetbot"))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("<alice> has joined."));
        assert!(lines[1].contains("<bob> !octetbot"));
    }

    #[test]
    fn test_open_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");
        std::fs::write(&path, "existing line\n").unwrap();

        let mut log = AuditLog::open(&path).unwrap();
        log.append(&AuditRecord::new("*", "server", "keepalive"))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing line\n"));
        assert!(content.contains("keepalive"));
    }
}
