//! # Logger
//!
//! One place to configure console and file logging for every binary in the workspace.
//! Settings come from [`LogConfig`] (the `[log]` table of the site config) and can be
//! adjusted through the builder before [`LoggerBuilder::init`].
//!
//! * `RUST_LOG` overrides `level` when no explicit `filter` is set.
//! * File output rotates daily under `dir`, keeping at most `max_files` files, and can
//!   be switched to JSON lines with `json`.
//!
//! ## Example
//!
//! ```rust
//! use iet_logger::Logger;
//!
//! let _logger = Logger::builder("my-app").level("debug").console(true).init().unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use iet_domain::config::LogConfig;
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

/// Builder for the global tracing subscriber.
#[derive(Debug)]
#[must_use = "The builder must be configured before it can be used to initialize the logger."]
pub struct LoggerBuilder {
    name: String,
    config: LogConfig,
}

impl LoggerBuilder {
    /// Replaces every setting with the given config.
    pub fn config(mut self, config: &LogConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Explicit env-filter directives (e.g. `iet_server=debug,tower_http=info`).
    ///
    /// Takes precedence over `RUST_LOG`. Invalid directives make [`LoggerBuilder::init`] fail.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.config.filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Directory for rolling log files.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dir = Some(path.into());
        self
    }

    /// JSON lines for the file output.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the whole program: it owns the worker
    /// that flushes file output.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, an unknown level, bad
    ///   filter directives, `max_files == 0`, or when no output is enabled.
    /// * [`LoggerError::Internal`] if the log directory cannot be created.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.name, &self.config)?;
        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = if let Some(dir) = &self.config.dir {
            fs::create_dir_all(dir).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", dir.display()).into()),
            })?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.config.max_files)
                .build(dir)?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);

            layers.push(if self.config.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid("No logging output enabled. Enable console or set a log directory."));
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(name = %self.name, file = guard.is_some(), "Logger initialized");
        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder with default [`LogConfig`] values.
    ///
    /// `name` prefixes the rolling files (`my-app.2026-10-19.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder { name: name.into(), config: LogConfig::default() }
    }

    /// Shorthand for `Logger::builder(name).config(config).init()`.
    ///
    /// # Errors
    /// See [`LoggerBuilder::init`].
    pub fn from_config(name: impl Into<String>, config: &LogConfig) -> Result<Self, LoggerError> {
        Self::builder(name).config(config).init()
    }

    /// Whether file output is active.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate_config(name: &str, config: &LogConfig) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::invalid("Logger name cannot be empty"));
    }

    if config.max_files == 0 {
        return Err(LoggerError::invalid("max_files must be greater than zero"));
    }

    Ok(())
}

fn build_env_filter(config: &LogConfig) -> Result<EnvFilter, LoggerError> {
    let level = LevelFilter::from_str(config.level.trim())
        .map_err(|e| LoggerError::invalid(format!("Invalid log level '{}': {e}", config.level)))?;
    let builder = EnvFilter::builder().with_default_directive(level.into());

    config.filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder
                .parse(filter)
                .map_err(|e| LoggerError::invalid(format!("Invalid env filter '{filter}': {e}")))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn builder_starts_from_defaults() {
        let builder = Logger::builder("test-app").filter("iet=debug");
        assert!(builder.config.console);
        assert_eq!(builder.config.level, "info");
        assert_eq!(builder.config.filter.as_deref(), Some("iet=debug"));
        assert!(builder.config.dir.is_none());
    }

    #[test]
    fn config_replaces_builder_settings() {
        let config = LogConfig {
            level: "warn".to_owned(),
            console: false,
            json: true,
            dir: Some(PathBuf::from("logs")),
            max_files: 3,
            ..LogConfig::default()
        };
        let builder = Logger::builder("test-app").level("trace").config(&config);

        assert_eq!(builder.config.level, "warn");
        assert!(!builder.config.console);
        assert!(builder.config.json);
        assert_eq!(builder.config.max_files, 3);
    }

    #[test]
    fn rejects_invalid_settings_before_installing() {
        let err = Logger::builder("  ").init().expect_err("empty name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder("app").max_files(0).init().expect_err("zero files");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder("app").level("loud").init().expect_err("bad level");
        assert!(err.to_string().contains("Invalid log level 'loud'"));

        let err = Logger::builder("app").console(false).init().expect_err("no output");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn file_logging_setup() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempdir()?;
        let log_dir = tmp_dir.path().join("logs");

        let logger = Logger::builder("test-app").console(false).path(&log_dir).init()?;
        assert!(logger.has_file_output());

        tracing::info!("hello world");
        std::thread::sleep(Duration::from_millis(20));
        drop(logger);

        let has_log = fs::read_dir(&log_dir)?
            .flatten()
            .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some(LOG_FILE_SUFFIX));
        assert!(has_log, "at least one log file should be created");
        Ok(())
    }
}
