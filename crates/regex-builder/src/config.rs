//! Engine configuration.
//!
//! Configuration comes from three layers: the defaults, a TOML or JSON file, and
//! `REGEX_BUILDER_*` environment variables. Only the engine is configurable;
//! building patterns never consults configuration.

pub mod env;
mod file;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use env::EnvConfig;
use env::vars;
pub use file::ConfigFormat;

use crate::engine::DEFAULT_CACHE_SIZE;
use crate::error::{PatternError, Result};
use crate::token::DEFAULT_DELIMITER;

/// Default backtracking step limit.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum backtracking steps before a match attempt is aborted.
    pub backtrack_limit: usize,
    /// Maximum number of compiled patterns kept in the cache. Zero disables caching.
    pub cache_size: usize,
    /// Character wrapped around the pattern by `delimited()`.
    pub delimiter: char,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
            cache_size: DEFAULT_CACHE_SIZE,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backtracking limit.
    #[must_use]
    pub const fn backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }

    /// Set the compiled-pattern cache size.
    #[must_use]
    pub const fn cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    /// Set the delimiter.
    #[must_use]
    pub const fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Defaults overridden by the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env(&EnvConfig::default())
    }

    /// Apply values from `env` on top of this configuration.
    ///
    /// Unparsable or invalid values are logged and ignored.
    #[must_use]
    pub fn with_env(mut self, env: &EnvConfig) -> Self {
        if let Some(limit) = read_env(env, vars::BACKTRACK_LIMIT) {
            self.backtrack_limit = limit;
        }
        if let Some(size) = read_env(env, vars::CACHE_SIZE) {
            self.cache_size = size;
        }
        if let Some(delimiter) = read_env::<char>(env, vars::DELIMITER) {
            if is_valid_delimiter(delimiter) {
                self.delimiter = delimiter;
            } else {
                tracing::warn!(
                    var = %env.var_name(vars::DELIMITER),
                    %delimiter,
                    "ignoring invalid delimiter"
                );
            }
        }
        self
    }

    /// Load a configuration file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            PatternError::config(format!(
                "unsupported configuration file extension: {}",
                path.display()
            ))
        })?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            PatternError::io_context(format!("reading engine config {}", path.display()), e)
        })?;
        Self::from_str_with_format(&content, format)
    }

    /// Parse configuration text in the given format.
    ///
    /// ```
    /// use regex_builder::{ConfigFormat, EngineConfig};
    ///
    /// let config = EngineConfig::from_str_with_format("delimiter = \"#\"", ConfigFormat::Toml)?;
    /// assert_eq!(config.delimiter, '#');
    /// assert_eq!(config.cache_size, 100);
    /// # Ok::<(), regex_builder::PatternError>(())
    /// ```
    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self> {
        let config: Self = match format {
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| PatternError::config(format!("invalid TOML: {e}")))?,
            ConfigFormat::Json => serde_json::from_str(content)
                .map_err(|e| PatternError::config(format!("invalid JSON: {e}")))?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration values are usable.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_delimiter(self.delimiter) {
            return Err(PatternError::config(format!(
                "delimiter {:?} must not be alphanumeric, whitespace or a backslash",
                self.delimiter
            )));
        }
        Ok(())
    }
}

fn read_env<T: std::str::FromStr>(env: &EnvConfig, name: &str) -> Option<T> {
    let value = env.parse(name);
    if value.is_none() && env.is_set(name) {
        tracing::warn!(var = %env.var_name(name), "ignoring unparsable value");
    }
    value
}

fn is_valid_delimiter(c: char) -> bool {
    !(c.is_alphanumeric() || c.is_whitespace() || c == '\\')
}
