//! A small leveled logging facade.
//!
//! A [`Logger`] holds three swappable pieces: an output [`Sink`], a
//! [`Format`] and a threshold [`Level`]. Every permitted call captures its
//! call site, renders the message, formats it and hands the line to the
//! sink. A process-wide logger backs the `t!`, `d!`, `i!`, `w!` and `e!`
//! macros.
//!
//! ```
//! use tinylog::{log_info, Level, Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder().output(sink.clone()).level(Level::Error).build();
//! log_info!(logger, "{} workers ready", 4).unwrap();
//! assert!(sink.contents().ends_with("- 4 workers ready\n"));
//! ```

pub mod config;
pub mod format;
pub mod logger;
pub mod output;

pub use config::LoggerConfig;
pub use format::{DefaultFormat, Format, FormatKind, SimpleFormat};
pub use logger::{
    init_shared, shared, CallSite, CallerInfo, Level, LogError, Logger, LoggerBuilder,
};
pub use output::{FileSink, MemorySink, NullSink, Sink, StderrSink, StdoutSink};
