//! Configuration loading from disk.

use crate::config::schema::LoggerConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::logger::Level;
use std::fs;
use std::path::Path;

/// Environment variable that overrides the configured level.
pub const LEVEL_ENV: &str = "TINYLOG_LEVEL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
    Env { var: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
            ConfigError::Env { var, value } => write!(f, "Invalid {}: {:?}", var, value),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<LoggerConfig, ConfigError> {
    let config: LoggerConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply [`LEVEL_ENV`] from the process environment.
pub fn apply_env(config: LoggerConfig) -> Result<LoggerConfig, ConfigError> {
    apply_overrides(config, |var| std::env::var(var).ok())
}

/// Apply overrides looked up through `lookup`.
pub fn apply_overrides<F>(mut config: LoggerConfig, lookup: F) -> Result<LoggerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(LEVEL_ENV) {
        config.level = value.parse::<Level>().map_err(|_| ConfigError::Env {
            var: LEVEL_ENV,
            value,
        })?;
    }
    Ok(config)
}
