//! # Journal Storage
//!
//! Append-only JSON-lines storage for journal entries, kept in an
//! XDG-compliant location.
//!
//! ## Storage Location
//!
//! ```text
//! ~/.local/share/termenu/journal.jsonl
//! ```
//!
//! Each line is one serialized [`JournalEntry`]. Lines that fail to parse are
//! skipped when reading so a partially written line never hides the rest.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File name of the journal inside the data directory
pub const JOURNAL_FILE_NAME: &str = "journal.jsonl";

/// How serious a journal entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Short label used when an entry is displayed
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

/// A single recorded message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    /// Optional free-text tag naming the source of the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub message: String,
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "[{}] {}: {}", self.severity.label(), tag, self.message),
            None => write!(f, "[{}] {}", self.severity.label(), self.message),
        }
    }
}

/// The logging collaborator of a menu session
///
/// A sink accepts leveled messages and exposes the most recent one so the
/// menu can show it on its status row.
pub trait LogSink {
    /// Record a message; failures to persist are swallowed
    fn record(&self, severity: Severity, message: &str, tag: Option<&str>);

    /// The most recently recorded entry, if any
    fn last_entry(&self) -> Option<JournalEntry>;
}

/// Persistent, append-only journal backed by a JSON-lines file
#[derive(Debug)]
pub struct Journal {
    path: PathBuf,
    last: Mutex<Option<JournalEntry>>,
}

impl Journal {
    /// Open the journal in the default data directory
    pub fn open() -> Result<Self> {
        Self::open_at(default_journal_path()?)
    }

    /// Open a journal stored at `path`, creating parent directories as needed
    ///
    /// The last entry already in the file becomes [`LogSink::last_entry`].
    pub fn open_at(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create journal directory: {}", parent.display())
            })?;
        }

        let last = if path.exists() {
            read_entries(&path)
                .map(|entries| entries.into_iter().last())
                .unwrap_or(None)
        } else {
            None
        };

        Ok(Self {
            path,
            last: Mutex::new(last),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry to the journal file and remember it as the last entry
    pub fn append(&self, severity: Severity, message: &str, tag: Option<&str>) -> Result<JournalEntry> {
        let entry = JournalEntry {
            timestamp: Utc::now(),
            severity,
            tag: tag.map(str::to_string),
            message: message.to_string(),
        };

        // Remember the entry first so the status row shows it even when the
        // file cannot be written
        if let Ok(mut last) = self.last.lock() {
            *last = Some(entry.clone());
        }

        let line = serde_json::to_string(&entry).context("Failed to serialize journal entry")?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open journal file: {}", self.path.display()))?;
        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to write journal file: {}", self.path.display()))?;

        Ok(entry)
    }

    /// Read every parseable entry from the journal file, oldest first
    pub fn entries(&self) -> Result<Vec<JournalEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        read_entries(&self.path)
    }
}

impl LogSink for Journal {
    fn record(&self, severity: Severity, message: &str, tag: Option<&str>) {
        // A journal that cannot be written must never take the menu down
        let _ = self.append(severity, message, tag);
    }

    fn last_entry(&self) -> Option<JournalEntry> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

/// Get the XDG-compliant location of the journal file
fn default_journal_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", "termenu")
        .context("Failed to determine application data directory")?;

    Ok(proj_dirs.data_dir().join(JOURNAL_FILE_NAME))
}

fn read_entries(path: &Path) -> Result<Vec<JournalEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect())
}
