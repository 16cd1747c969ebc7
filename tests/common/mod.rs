//! Shared utilities for integration tests.

use tinylog::{CallerInfo, Level, Logger, MemorySink};

/// Formatter that renders only the fields tests assert on.
#[allow(dead_code)]
pub fn location_format(level: Level, caller: &CallerInfo, message: &str) -> String {
    format!(
        "[{}] {}:{}:{} - {}",
        level,
        caller.location,
        caller.method,
        caller.line.map_or(-1, i64::from),
        message
    )
}

/// A logger writing `location_format` lines into a fresh memory sink.
#[allow(dead_code)]
pub fn capturing_logger(level: Level) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::with(sink.clone(), location_format, level);
    (logger, sink)
}
