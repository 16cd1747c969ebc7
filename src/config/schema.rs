//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use crate::format::FormatKind;
use crate::logger::Level;
use crate::output::{FileSink, NullSink, Sink, StderrSink, StdoutSink};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

/// Root configuration for a logger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// Threshold; calls with a higher ordinal are dropped.
    pub level: Level,

    /// Built-in formatter to use.
    pub format: FormatKind,

    /// Where lines are written.
    pub output: OutputConfig,
}

impl LoggerConfig {
    /// Render as TOML, in the same layout `load_config` reads.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

/// Output destination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub kind: OutputKind,

    /// Target file; required when `kind = "file"`.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Stdout,
    Stderr,
    File,
    Null,
}

impl OutputConfig {
    /// Open the configured sink.
    pub fn build(&self) -> io::Result<Box<dyn Sink>> {
        Ok(match self.kind {
            OutputKind::Stdout => Box::new(StdoutSink),
            OutputKind::Stderr => Box::new(StderrSink),
            OutputKind::Null => Box::new(NullSink),
            OutputKind::File => {
                let path = self.path.as_ref().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "file output requires a path")
                })?;
                Box::new(FileSink::open(path)?)
            }
        })
    }
}
