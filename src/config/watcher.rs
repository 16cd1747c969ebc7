//! Configuration file watcher for hot reload.

use crate::config::loader::{apply_env, load_config};
use crate::config::schema::LoggerConfig;
use crate::logger::Logger;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

type ReloadHandler = Arc<dyn Fn(LoggerConfig) -> io::Result<()> + Send + Sync>;

/// A watcher that monitors the configuration file for changes.
#[derive(Clone)]
pub struct ConfigWatcher {
    path: PathBuf,
    on_reload: ReloadHandler,
}

impl ConfigWatcher {
    /// Create a watcher that hands every successfully loaded config to
    /// `on_reload`. An error from the handler counts as a failed reload.
    pub fn new<F>(path: &Path, on_reload: F) -> Self
    where
        F: Fn(LoggerConfig) -> io::Result<()> + Send + Sync + 'static,
    {
        Self {
            path: path.to_path_buf(),
            on_reload: Arc::new(on_reload),
        }
    }

    /// Create a watcher that reconfigures `logger` on every change.
    ///
    /// Accepts `&'static Logger` (e.g. [`crate::shared`]) or `Arc<Logger>`.
    pub fn for_logger<L>(path: &Path, logger: L) -> Self
    where
        L: Deref<Target = Logger> + Send + Sync + 'static,
    {
        Self::new(path, move |config| {
            logger.apply(&config)?;
            tracing::info!(level = %config.level, "Logger reconfigured");
            Ok(())
        })
    }

    /// Load the file once and pass the result to the handler.
    ///
    /// Returns whether the reload succeeded.
    pub fn reload(&self) -> bool {
        let config = match load_config(&self.path).and_then(apply_env) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to reload config: {}. Keeping current configuration.", e);
                return false;
            }
        };

        match (self.on_reload)(config) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to apply reloaded config: {}. Keeping current output.", e);
                false
            }
        }
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();
        let handler = self.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        handler.reload();
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, "Config watcher started");
        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::SimpleFormat;
    use crate::logger::Level;
    use crate::output::MemorySink;
    use std::fs;
    use std::sync::Mutex;
    use std::thread;
    use std::time::Instant;
    use tempfile::TempDir;

    #[test]
    fn test_reload_passes_config_to_handler() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.toml");
        fs::write(&path, "level = \"info\"\n").unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let watcher = ConfigWatcher::new(&path, move |config| {
            sink.lock().unwrap().push(config.level);
            Ok(())
        });

        assert!(watcher.reload());
        assert_eq!(*seen.lock().unwrap(), vec![Level::Info]);
    }

    #[test]
    fn test_reload_keeps_logger_on_bad_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.toml");
        fs::write(&path, "level = 12\n").unwrap();

        let logger = Arc::new(Logger::with(MemorySink::new(), SimpleFormat, Level::Trace));
        let watcher = ConfigWatcher::for_logger(&path, logger.clone());

        assert!(!watcher.reload());
        assert_eq!(logger.level(), Level::Trace);
    }

    #[test]
    fn test_reload_fails_when_output_cannot_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.toml");
        let log_path = dir.path().join("missing").join("app.log");
        fs::write(
            &path,
            format!(
                "level = \"error\"\n[output]\nkind = \"file\"\npath = {:?}\n",
                log_path.to_str().unwrap()
            ),
        )
        .unwrap();

        let sink = MemorySink::new();
        let logger = Arc::new(Logger::with(sink.clone(), SimpleFormat, Level::Trace));
        let watcher = ConfigWatcher::for_logger(&path, logger.clone());

        assert!(!watcher.reload());
        assert_eq!(logger.level(), Level::Trace);
        logger.trace(format_args!("still here")).unwrap();
        assert_eq!(sink.lines(), vec!["TRACE - still here"]);
    }

    #[test]
    fn test_reload_handler_error_is_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.toml");
        fs::write(&path, "").unwrap();

        let watcher = ConfigWatcher::new(&path, |_| {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        });
        assert!(!watcher.reload());
    }

    #[test]
    fn test_reload_reconfigures_logger() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.toml");
        let log_path = dir.path().join("app.log");
        fs::write(
            &path,
            format!(
                "level = \"error\"\nformat = \"simple\"\n[output]\nkind = \"file\"\npath = {:?}\n",
                log_path.to_str().unwrap()
            ),
        )
        .unwrap();

        let logger = Arc::new(Logger::with(MemorySink::new(), SimpleFormat, Level::Trace));
        let watcher = ConfigWatcher::for_logger(&path, logger.clone());
        assert!(watcher.reload());

        assert_eq!(logger.level(), Level::Error);
        logger.info(format_args!("to file")).unwrap();
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "INFO - to file\n");
    }

    #[test]
    fn test_running_watcher_applies_file_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.toml");
        fs::write(&path, "level = \"trace\"\n[output]\nkind = \"null\"\n").unwrap();

        let logger = Arc::new(Logger::with(MemorySink::new(), SimpleFormat, Level::Trace));
        let _watcher = ConfigWatcher::for_logger(&path, logger.clone())
            .run()
            .unwrap();

        fs::write(&path, "level = \"error\"\n[output]\nkind = \"null\"\n").unwrap();

        let deadline = Instant::now() + Duration::from_secs(10);
        while logger.level() != Level::Error && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(50));
        }
        assert_eq!(logger.level(), Level::Error);
    }
}
