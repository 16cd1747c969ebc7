//! Message formatting.
//!
//! # Data Flow
//! ```text
//! (Level, CallerInfo, message)
//!     → Format::format
//!     → String handed to the output sink
//! ```
//!
//! # Design Decisions
//! - Formatters are pure: same input, same line
//! - Any `Fn(Level, &CallerInfo, &str) -> String` closure is a formatter
//! - Built-in formatters are selectable by name from configuration

mod default;
mod simple;

pub use default::{format_timestamp, DefaultFormat};
pub use simple::SimpleFormat;

use crate::logger::{CallerInfo, Level};
use serde::{Deserialize, Serialize};

/// Converts a level, caller metadata and rendered message into the final line.
pub trait Format: Send + Sync {
    fn format(&self, level: Level, caller: &CallerInfo, message: &str) -> String;
}

impl<F> Format for F
where
    F: Fn(Level, &CallerInfo, &str) -> String + Send + Sync,
{
    fn format(&self, level: Level, caller: &CallerInfo, message: &str) -> String {
        self(level, caller, message)
    }
}

/// Built-in formatter selection used by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    #[default]
    Default,
    Simple,
}

impl FormatKind {
    /// Instantiate the selected formatter.
    pub fn build(self) -> Box<dyn Format> {
        match self {
            FormatKind::Default => Box::new(DefaultFormat),
            FormatKind::Simple => Box::new(SimpleFormat),
        }
    }
}

impl std::str::FromStr for FormatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(FormatKind::Default),
            "simple" => Ok(FormatKind::Simple),
            other => Err(format!("unknown format: {other}")),
        }
    }
}
