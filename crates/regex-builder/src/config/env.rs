//! Environment-based configuration.

use std::collections::HashMap;

/// Environment configuration prefix.
pub const DEFAULT_PREFIX: &str = "REGEX_BUILDER";

/// Common environment variable names, without the prefix.
pub mod vars {
    /// Backtracking step limit for the engine.
    pub const BACKTRACK_LIMIT: &str = "BACKTRACK_LIMIT";
    /// Maximum number of cached compiled patterns.
    pub const CACHE_SIZE: &str = "CACHE_SIZE";
    /// Delimiter character used by `delimited()`.
    pub const DELIMITER: &str = "DELIMITER";
}

/// Environment variable reader.
///
/// Overrides take precedence over the process environment, which lets tests
/// exercise configuration without mutating global state.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    prefix: String,
    overrides: HashMap<String, String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl EnvConfig {
    /// Create a new environment config reader.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            overrides: HashMap::new(),
        }
    }

    /// Build the full environment variable name.
    #[must_use]
    pub fn var_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, name.to_uppercase())
        }
    }

    /// Shadow a variable with a fixed value.
    #[must_use]
    pub fn with_override(mut self, name: &str, value: impl Into<String>) -> Self {
        self.overrides.insert(self.var_name(name), value.into());
        self
    }

    /// Get a string value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let var_name = self.var_name(name);
        self.overrides
            .get(&var_name)
            .cloned()
            .or_else(|| std::env::var(&var_name).ok())
    }

    /// Get a parsed value, or `None` if unset or unparsable.
    #[must_use]
    pub fn parse<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|v| v.trim().parse().ok())
    }

    /// Check if a variable is set.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
