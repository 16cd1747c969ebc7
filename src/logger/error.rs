//! Logger error definitions.

use std::{fmt, io};
use thiserror::Error;

/// Errors surfaced by a log call.
///
/// The logger never catches these: a failure while rendering the message or
/// while writing it reaches the caller unchanged.
#[derive(Debug, Error)]
pub enum LogError {
    /// A `Display`/`Debug` implementation in the arguments reported an error.
    #[error("failed to format log message")]
    Format(#[from] fmt::Error),

    /// The output sink failed to deliver the line.
    #[error("log sink failed: {0}")]
    Sink(#[from] io::Error),

    /// The shared logger was already created.
    #[error("shared logger already initialized")]
    AlreadyInitialized,
}
