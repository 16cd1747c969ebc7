//! Logger subsystem.
//!
//! # Data Flow
//! ```text
//! call site (macro or #[track_caller] method)
//!     → level check (no-op when the threshold forbids it)
//!     → caller.rs (time, thread, location snapshot)
//!     → message rendering (fmt::Arguments → String)
//!     → Format (line)
//!     → Sink (delivery)
//! ```
//!
//! # Design Decisions
//! - Sink, formatter and threshold are swapped independently and atomically;
//!   there is no lock across the three
//! - Call sites are resolved at compile time
//! - Errors from formatting or the sink reach the caller unchanged
//! - One lazily created shared instance backs the `t!`..`e!` macros

mod caller;
mod error;
mod instance;
mod level;
mod macros;
mod shared;

pub use caller::{current_thread_id, short_function_name, CallSite, CallerInfo};
pub use error::LogError;
pub use instance::{Logger, LoggerBuilder};
pub use level::{Level, ParseLevelError};
pub use shared::{init_shared, shared};
