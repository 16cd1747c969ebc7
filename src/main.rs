//! tinylog demo
//!
//! Emits a message at every level through the shared logger so a config
//! file, format or threshold can be tried from the shell:
//!
//! ```text
//! tinylog --level info "hello"
//! tinylog --config log.toml --watch --repeat 30 "tick"
//! ```

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tinylog::config::{apply_env, load_config, ConfigWatcher};
use tinylog::{FormatKind, Level, Logger, LoggerConfig};

#[derive(Parser)]
#[command(name = "tinylog")]
#[command(about = "Emit sample log lines through the shared logger", long_about = None)]
struct Cli {
    /// TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Threshold, overrides the config file.
    #[arg(short, long)]
    level: Option<Level>,

    /// Built-in format, overrides the config file.
    #[arg(short, long)]
    format: Option<FormatKind>,

    /// Number of rounds to emit.
    #[arg(short, long, default_value_t = 1)]
    repeat: u32,

    /// Reload the config file when it changes (needs --config).
    #[arg(short, long)]
    watch: bool,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,

    /// Message to log.
    #[arg(default_value = "hello")]
    message: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics of the crate itself (config reloads) go through tracing.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinylog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };
    config = apply_env(config)?;
    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    tracing::debug!(level = %config.level, format = ?config.format, "Configuration loaded");

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let logger = tinylog::init_shared(Logger::from_config(&config)?)?;

    let _watcher = match (&cli.config, cli.watch) {
        (Some(path), true) => Some(ConfigWatcher::for_logger(path, logger).run()?),
        (None, true) => {
            tracing::warn!("--watch ignored without --config");
            None
        }
        _ => None,
    };

    for round in 0..cli.repeat {
        if round > 0 {
            thread::sleep(Duration::from_secs(1));
        }
        tinylog::t!("{}", cli.message)?;
        tinylog::d!("{}", cli.message)?;
        tinylog::i!("{}", cli.message)?;
        tinylog::w!("{}", cli.message)?;
        tinylog::e!("{}", cli.message)?;
    }

    Ok(())
}
