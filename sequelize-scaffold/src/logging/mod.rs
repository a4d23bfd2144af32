//! Logger collaborator for scaffolding operations
//!
//! The generator and toolchain runner report progress through a
//! [`ScaffoldLogger`] rather than writing to the console directly.
//! [`TracingLogger`] forwards to `tracing`; [`MemoryLogger`] records lines so
//! tests can assert on them.

use std::sync::Arc;

use parking_lot::Mutex;

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational
    Info,
    /// Something went wrong but the operation continues
    Warn,
    /// The operation failed
    Error,
}

/// Sink for scaffolding log lines
pub trait ScaffoldLogger: Send + Sync {
    /// Log an informational message
    fn info(&self, message: &str);

    /// Log a warning
    fn warn(&self, message: &str);

    /// Log an error
    fn error(&self, message: &str);
}

/// Logger backed by `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ScaffoldLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// One captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Severity
    pub level: LogLevel,
    /// Message text
    pub message: String,
}

/// Logger that keeps every line in memory
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryLogger {
    /// Create an empty logger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Messages logged at `level`
    #[must_use]
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.level == level)
            .map(|record| record.message.clone())
            .collect()
    }

    /// Whether any line contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.records
            .lock()
            .iter()
            .any(|record| record.message.contains(needle))
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.records.lock().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }
}

impl ScaffoldLogger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_captures_levels() {
        let logger = MemoryLogger::new();
        logger.info("starting");
        logger.warn("careful");
        logger.error("broken");

        assert_eq!(logger.records().len(), 3);
        assert_eq!(logger.messages(LogLevel::Warn), vec!["careful"]);
        assert!(logger.contains("brok"));
        assert!(!logger.contains("missing"));
    }

    #[test]
    fn test_memory_logger_clones_share_buffer() {
        let logger = MemoryLogger::new();
        let handle = logger.clone();
        handle.info("from clone");

        assert!(logger.contains("from clone"));
    }
}
