//! In-memory capture sink.

use crate::output::Sink;
use std::io;
use std::sync::{Arc, Mutex};

/// Thread-safe sink that keeps every line in memory.
///
/// Clones share the same buffer, so one clone can be handed to a logger
/// while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all captured lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Number of lines captured so far.
    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return all captured lines.
    pub fn take(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|mut lines| std::mem::take(&mut *lines))
            .unwrap_or_default()
    }

    /// All captured lines joined into one string.
    pub fn contents(&self) -> String {
        self.lines().concat()
    }
}

impl Sink for MemorySink {
    fn write(&self, line: &str) -> io::Result<()> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "memory sink lock poisoned"))?;
        lines.push(line.to_string());
        Ok(())
    }
}
