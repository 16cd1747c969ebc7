//! Log levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity rank of a log call.
///
/// Ordered by ordinal: `None < Trace < Debug < Info < Warning < Error`.
/// As a threshold, a level lets through every call whose ordinal is not
/// greater than its own; `None` lets nothing through.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// Logging disabled.
    None = 0,
    Trace = 1,
    #[default]
    Debug = 2,
    Info = 3,
    #[serde(alias = "warn")]
    Warning = 4,
    Error = 5,
}

impl Level {
    /// All levels in ordinal order.
    pub const ALL: [Level; 6] = [
        Level::None,
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
    ];

    /// Position of the level in the enumeration.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::ordinal`]. Out-of-range values map to `None`.
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            1 => Level::Trace,
            2 => Level::Debug,
            3 => Level::Info,
            4 => Level::Warning,
            5 => Level::Error,
            _ => Level::None,
        }
    }

    /// Upper-case name used in formatted output.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::None => "NONE",
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    /// Whether a call at `level` passes when `self` is the threshold.
    pub fn permits(self, level: Level) -> bool {
        level != Level::None && self.ordinal() >= level.ordinal()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Level::None),
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
