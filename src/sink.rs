//! Destinations for the per-action records emitted by the folder operations.
//!
//! Every operation takes a `&dyn ActionSink`. The binary passes [`LogSink`],
//! which forwards to whatever `log` backend `logging::init` installed. Front
//! ends that render their own log pane (and the tests) use [`MemorySink`].

use log::Level;
use std::sync::Mutex;

pub trait ActionSink: Send + Sync {
    fn record(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}

/// Forwards every record to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ActionSink for LogSink {
    fn record(&self, level: Level, message: &str) {
        log::log!(level, "{}", message);
    }
}

/// Keeps records in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of records at exactly `level`.
    pub fn count(&self, level: Level) -> usize {
        self.records().iter().filter(|(l, _)| *l == level).count()
    }
}

impl ActionSink for MemorySink {
    fn record(&self, level: Level, message: &str) {
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push((level, message.to_string()));
    }
}
