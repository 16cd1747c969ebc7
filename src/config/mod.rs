//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, TINYLOG_LEVEL override)
//!     → validation.rs (semantic checks)
//!     → LoggerConfig
//!     → Logger::from_config / Logger::apply
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → Logger::apply swaps output, format and level
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A failed reload keeps the running configuration

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{apply_env, load_config, parse_config, ConfigError};
pub use schema::{LoggerConfig, OutputConfig, OutputKind};
pub use validation::ValidationError;
pub use watcher::ConfigWatcher;
