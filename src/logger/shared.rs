//! Process-wide shared logger.

use crate::logger::{LogError, Logger};
use std::sync::OnceLock;

static SHARED: OnceLock<Logger> = OnceLock::new();

/// The shared logger, created with [`Logger::new`] on first access.
///
/// Concurrent first accesses construct exactly one instance; every caller
/// receives the same reference.
pub fn shared() -> &'static Logger {
    SHARED.get_or_init(Logger::new)
}

/// Install `logger` as the shared logger.
///
/// Must run before anything touches [`shared`]. Returns
/// [`LogError::AlreadyInitialized`] otherwise, leaving the existing instance
/// in place.
pub fn init_shared(logger: Logger) -> Result<&'static Logger, LogError> {
    SHARED
        .set(logger)
        .map_err(|_| LogError::AlreadyInitialized)?;
    Ok(shared())
}
