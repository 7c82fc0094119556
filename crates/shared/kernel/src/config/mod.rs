use config::{Config, Environment, File};
use iet_domain::error::format_context;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides (`IET__SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "IET";
/// Config file used when no path is given; the extension is resolved by `config`.
pub const DEFAULT_CONFIG_PATH: &str = "config/site";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Attaches a human-readable context to a `config` failure.
pub trait ConfigErrorExt<T> {
    /// # Errors
    /// Passes through the original failure, wrapped with `context`.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}


/// Loads configuration from an optional file overlaid with environment variables.
///
/// Layers, lowest priority first:
/// 1. **Base File**: `path` (default [`DEFAULT_CONFIG_PATH`]); any extension `config`
///    understands. A missing file is fine, every field has a default.
/// 2. **Environment Overrides**: variables prefixed with `IET__`, nested keys joined by
///    double underscores (`IET__SITE__TITLE` maps to `site.title`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is malformed or a value does not fit
/// the target type.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
