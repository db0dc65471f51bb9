//! Execution engine adapter.
//!
//! The builder only assembles pattern text. Compiling and running it is handed to
//! [`fancy-regex`](https://docs.rs/fancy-regex), which understands the look-behind
//! and look-ahead groups the builder emits. Invalid constructions surface here, at
//! compile time, as [`PatternError::Syntax`].

mod cache;
mod matches;

use std::sync::{Arc, LazyLock};

use fancy_regex::{Regex, RegexBuilder};

pub use cache::{CacheStats, DEFAULT_CACHE_SIZE, PatternCache};
pub use matches::{Captures, Match};

use crate::config::EngineConfig;
use crate::error::{PatternError, Result};

/// Compiles bare patterns and runs them against subject text.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    cache: PatternCache,
}

impl Engine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let cache = PatternCache::new(config.cache_size);
        Self { config, cache }
    }

    /// Create an engine configured from `REGEX_BUILDER_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(EngineConfig::from_env())
    }

    /// The engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The compiled-pattern cache.
    #[must_use]
    pub const fn cache(&self) -> &PatternCache {
        &self.cache
    }

    /// Wrap a bare pattern in the configured delimiter.
    #[must_use]
    pub fn delimit(&self, pattern: &str) -> String {
        let delimiter = self.config.delimiter;
        format!("{delimiter}{pattern}{delimiter}")
    }

    /// Compile a bare pattern, reusing a cached compilation when possible.
    pub fn compile(&self, pattern: &str) -> Result<Arc<Regex>> {
        self.cache.get_or_compile(pattern, |pattern| {
            RegexBuilder::new(pattern)
                .backtrack_limit(self.config.backtrack_limit)
                .build()
                .map_err(|e| PatternError::syntax(pattern, e))
        })
    }

    /// Check whether `pattern` matches anywhere in `subject`.
    pub fn is_match(&self, pattern: &str, subject: &str) -> Result<bool> {
        self.compile(pattern)?
            .is_match(subject)
            .map_err(|e| PatternError::execution(pattern, e))
    }

    /// The first match of `pattern` in `subject`.
    pub fn find_first(&self, pattern: &str, subject: &str) -> Result<Option<Captures>> {
        let regex = self.compile(pattern)?;
        let caps = regex
            .captures(subject)
            .map_err(|e| PatternError::execution(pattern, e))?;
        Ok(caps.and_then(|caps| Captures::from_fancy(&caps, &regex)))
    }

    /// Every non-overlapping match of `pattern` in `subject`, possibly none.
    pub fn find_all(&self, pattern: &str, subject: &str) -> Result<Vec<Captures>> {
        let regex = self.compile(pattern)?;
        let mut all = Vec::new();
        for caps in regex.captures_iter(subject) {
            let caps = caps.map_err(|e| PatternError::execution(pattern, e))?;
            all.extend(Captures::from_fancy(&caps, &regex));
        }
        tracing::trace!(pattern, matches = all.len(), "collected matches");
        Ok(all)
    }

    /// Replace every match of `pattern` in `subject`.
    ///
    /// `$1`, `$name` and `${name}` in `replacement` expand to capture groups;
    /// `$$` is a literal dollar sign.
    pub fn replace(&self, pattern: &str, replacement: &str, subject: &str) -> Result<String> {
        let regex = self.compile(pattern)?;
        let mut replaced = String::with_capacity(subject.len());
        let mut last_end = 0;

        for caps in regex.captures_iter(subject) {
            let caps = caps.map_err(|e| PatternError::execution(pattern, e))?;
            let Some(whole) = caps.get(0) else {
                continue;
            };
            replaced.push_str(&subject[last_end..whole.start()]);
            caps.expand(replacement, &mut replaced);
            last_end = whole.end();
        }

        replaced.push_str(&subject[last_end..]);
        Ok(replaced)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Engine shared by every [`PatternBuilder`](crate::PatternBuilder) matching method.
///
/// Configured from the environment on first use.
pub static GLOBAL_ENGINE: LazyLock<Engine> = LazyLock::new(Engine::from_env);
