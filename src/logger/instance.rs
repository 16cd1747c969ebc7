//! The `Logger` type.

use crate::config::LoggerConfig;
use crate::format::{DefaultFormat, Format};
use crate::logger::{CallSite, CallerInfo, Level, LogError};
use crate::output::{Sink, StdoutSink};
use arc_swap::ArcSwap;
use std::fmt::{self, Arguments, Write};
use std::io;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// A leveled logger with a swappable sink, formatter and threshold.
///
/// Each of the three pieces is read and replaced atomically and on its own.
/// A replacement is seen by the next call; a call running concurrently with
/// several replacements may observe any mix of old and new pieces.
///
/// # Example
///
/// ```
/// use tinylog::{log_debug, Level, Logger, MemorySink, SimpleFormat};
///
/// let sink = MemorySink::new();
/// let logger = Logger::with(sink.clone(), SimpleFormat, Level::Debug);
/// log_debug!(logger, "Test log {}", 2).unwrap();
/// assert_eq!(sink.lines(), vec!["DEBUG - Test log 2"]);
/// ```
pub struct Logger {
    output: ArcSwap<Box<dyn Sink>>,
    format: ArcSwap<Box<dyn Format>>,
    level: AtomicU8,
}

impl Logger {
    /// Logger writing [`DefaultFormat`] lines to standard output at
    /// [`Level::Debug`].
    pub fn new() -> Self {
        Self::with(StdoutSink, DefaultFormat, Level::Debug)
    }

    /// Logger built from explicit pieces.
    pub fn with<S, F>(output: S, format: F, level: Level) -> Self
    where
        S: Sink + 'static,
        F: Format + 'static,
    {
        Self::from_parts(Box::new(output), Box::new(format), level)
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Logger configured from a [`LoggerConfig`].
    ///
    /// Fails only when the configured output cannot be opened.
    pub fn from_config(config: &LoggerConfig) -> io::Result<Self> {
        Ok(Self::from_parts(
            config.output.build()?,
            config.format.build(),
            config.level,
        ))
    }

    pub(crate) fn from_parts(
        output: Box<dyn Sink>,
        format: Box<dyn Format>,
        level: Level,
    ) -> Self {
        Self {
            output: ArcSwap::from_pointee(output),
            format: ArcSwap::from_pointee(format),
            level: AtomicU8::new(level.ordinal()),
        }
    }

    pub fn set_output<S: Sink + 'static>(&self, output: S) {
        self.output.store(Arc::new(Box::new(output)));
    }

    pub fn set_format<F: Format + 'static>(&self, format: F) {
        self.format.store(Arc::new(Box::new(format)));
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level.ordinal(), Ordering::Release);
    }

    pub fn level(&self) -> Level {
        Level::from_ordinal(self.level.load(Ordering::Acquire))
    }

    /// Whether a call at `level` would currently reach the sink.
    ///
    /// Use it to skip building expensive messages.
    pub fn is_loggable(&self, level: Level) -> bool {
        self.level().permits(level)
    }

    /// Reconfigure this logger in place.
    ///
    /// The output is opened before anything is replaced, so a failure leaves
    /// the logger untouched.
    pub fn apply(&self, config: &LoggerConfig) -> io::Result<()> {
        let output = config.output.build()?;
        self.output.store(Arc::new(output));
        self.format.store(Arc::new(config.format.build()));
        self.set_level(config.level);
        Ok(())
    }

    #[track_caller]
    pub fn trace(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.log_at(Level::Trace, &CallSite::caller(), args)
    }

    #[track_caller]
    pub fn debug(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.log_at(Level::Debug, &CallSite::caller(), args)
    }

    #[track_caller]
    pub fn info(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.log_at(Level::Info, &CallSite::caller(), args)
    }

    #[track_caller]
    pub fn warning(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.log_at(Level::Warning, &CallSite::caller(), args)
    }

    #[track_caller]
    pub fn error(&self, args: Arguments<'_>) -> Result<(), LogError> {
        self.log_at(Level::Error, &CallSite::caller(), args)
    }

    /// Log at `level`, locating the call through `#[track_caller]`.
    #[track_caller]
    pub fn log(&self, level: Level, args: Arguments<'_>) -> Result<(), LogError> {
        self.log_at(level, &CallSite::caller(), args)
    }

    /// Log at `level` on behalf of `site`.
    ///
    /// When the threshold forbids `level` this returns immediately: no
    /// metadata is captured, nothing is formatted and the sink is not called.
    pub fn log_at(
        &self,
        level: Level,
        site: &CallSite,
        args: Arguments<'_>,
    ) -> Result<(), LogError> {
        if !self.is_loggable(level) {
            return Ok(());
        }

        let caller = CallerInfo::capture(site);
        let mut message = String::new();
        message.write_fmt(args)?;

        let line = self.format.load().format(level, &caller, &message);
        self.output.load().write(&line)?;
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`]; unset pieces fall back to the defaults of
/// [`Logger::new`].
#[derive(Default)]
pub struct LoggerBuilder {
    output: Option<Box<dyn Sink>>,
    format: Option<Box<dyn Format>>,
    level: Option<Level>,
}

impl LoggerBuilder {
    pub fn output<S: Sink + 'static>(mut self, output: S) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    pub fn format<F: Format + 'static>(mut self, format: F) -> Self {
        self.format = Some(Box::new(format));
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn build(self) -> Logger {
        Logger::from_parts(
            self.output.unwrap_or_else(|| Box::new(StdoutSink)),
            self.format.unwrap_or_else(|| Box::new(DefaultFormat)),
            self.level.unwrap_or_default(),
        )
    }
}
