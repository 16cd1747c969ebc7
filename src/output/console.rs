//! Standard stream sinks.

use crate::output::{write_line, Sink};
use std::io;

/// Writes each line to standard output. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write(&self, line: &str) -> io::Result<()> {
        write_line(&mut io::stdout().lock(), line)
    }
}

/// Writes each line to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write(&self, line: &str) -> io::Result<()> {
        write_line(&mut io::stderr().lock(), line)
    }
}
