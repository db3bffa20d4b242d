use crate::journal::storage::{Journal, LogSink};
use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use std::sync::Arc;

/// Adapter that routes the `log` facade into a [`Journal`]
///
/// The record's target becomes the entry's tag.
pub struct JournalLogger {
    journal: Arc<Journal>,
    level: LevelFilter,
}

impl JournalLogger {
    pub fn new(journal: Arc<Journal>, level: LevelFilter) -> Self {
        Self { journal, level }
    }
}

impl Log for JournalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.journal.record(
            record.level().into(),
            &record.args().to_string(),
            Some(record.target()),
        );
    }

    fn flush(&self) {}
}

/// Install the journal as the process-wide `log` backend
pub fn install(journal: Arc<Journal>, level: LevelFilter) -> Result<()> {
    log::set_boxed_logger(Box::new(JournalLogger::new(journal, level)))
        .context("Failed to install journal logger")?;
    log::set_max_level(level);
    Ok(())
}
