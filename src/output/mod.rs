//! Output sinks.
//!
//! # Responsibilities
//! - Deliver a formatted line to its destination
//! - Report delivery failures to the caller
//!
//! # Design Decisions
//! - One method, `write`; any `Fn(&str) -> io::Result<()>` closure is a sink
//! - Sinks do not buffer: a line is delivered before the log call returns
//! - Console sinks add a line break only when the formatter did not

mod console;
mod file;
mod memory;

pub use console::{StderrSink, StdoutSink};
pub use file::FileSink;
pub use memory::MemorySink;

use std::io;

/// Destination for formatted log lines.
pub trait Sink: Send + Sync {
    fn write(&self, line: &str) -> io::Result<()>;
}

impl<F> Sink for F
where
    F: Fn(&str) -> io::Result<()> + Send + Sync,
{
    fn write(&self, line: &str) -> io::Result<()> {
        self(line)
    }
}

/// A sink that discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    #[inline]
    fn write(&self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Write `line` to `out` as exactly one line.
pub(crate) fn write_line<W: io::Write>(out: &mut W, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    if !line.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}
