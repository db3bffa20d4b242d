//! # Journal Module
//!
//! The logging sink menus draw their status row from.
//!
//! ## Overview
//!
//! Applications record leveled messages (with an optional free-text tag) into
//! a [`Journal`]. Every entry is appended to a JSON-lines file, and the most
//! recent one is kept in memory so a running menu can display it on a fixed
//! terminal row.
//!
//! The journal can also back the `log` facade through [`install`], so
//! `log::warn!` and friends anywhere in the process land in the same file.
//!
//! ## Storage
//!
//! Entries are stored in XDG-compliant locations:
//! - Linux: `~/.local/share/termenu/journal.jsonl`
//! - macOS: `~/Library/Application Support/termenu/journal.jsonl`
//! - Windows: `%APPDATA%\termenu\data\journal.jsonl`
//!
//! ## Data Format
//!
//! ```json
//! {"timestamp":"2025-02-05T10:30:00Z","severity":"warning","tag":"rss","message":"Feed timed out"}
//! ```

mod logger;
mod storage;

pub use logger::{install, JournalLogger};
pub use storage::{Journal, JournalEntry, LogSink, Severity, JOURNAL_FILE_NAME};
