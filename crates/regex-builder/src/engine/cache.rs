//! Cache of compiled patterns.
//!
//! Builders are cheap to rebuild, so the same bare pattern tends to be compiled
//! over and over. The cache keys compiled patterns by their bare text.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use fancy_regex::Regex;

use crate::error::Result;

/// Default maximum cache size.
pub const DEFAULT_CACHE_SIZE: usize = 100;

/// A bounded cache of compiled patterns with least-recently-used eviction.
pub struct PatternCache {
    cache: Mutex<LruCache>,
    max_size: usize,
    /// Total cache hits (for statistics).
    total_hits: AtomicUsize,
    /// Total cache misses (for statistics).
    total_misses: AtomicUsize,
}

struct LruCache {
    entries: HashMap<String, Arc<Regex>>,
    /// Least recently used at the front.
    order: VecDeque<String>,
}

impl LruCache {
    fn touch(&mut self, pattern: &str) {
        if let Some(position) = self.order.iter().position(|p| p == pattern) {
            if let Some(key) = self.order.remove(position) {
                self.order.push_back(key);
            }
        }
    }
}

impl PatternCache {
    /// Create a new cache holding at most `max_size` patterns.
    ///
    /// A size of zero disables caching.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            cache: Mutex::new(LruCache {
                entries: HashMap::with_capacity(max_size),
                order: VecDeque::with_capacity(max_size),
            }),
            max_size,
            total_hits: AtomicUsize::new(0),
            total_misses: AtomicUsize::new(0),
        }
    }

    /// Create a new cache with the default size.
    #[must_use]
    pub fn with_default_size() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }

    /// Get a cached pattern or compile it with `compile` and cache the result.
    ///
    /// Compilation errors are returned and nothing is cached.
    pub fn get_or_compile<F>(&self, pattern: &str, compile: F) -> Result<Arc<Regex>>
    where
        F: FnOnce(&str) -> Result<Regex>,
    {
        // The cache is only an optimization, so recover from lock poisoning.
        {
            let mut cache = self
                .cache
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(regex) = cache.entries.get(pattern).cloned() {
                cache.touch(pattern);
                self.total_hits.fetch_add(1, Ordering::Relaxed);
                return Ok(regex);
            }
        }

        self.total_misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(pattern, "compiling pattern");
        let regex = Arc::new(compile(pattern)?);

        if self.max_size == 0 {
            return Ok(regex);
        }

        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        // Another thread may have compiled the same pattern meanwhile.
        if let Some(existing) = cache.entries.get(pattern).cloned() {
            cache.touch(pattern);
            return Ok(existing);
        }

        if cache.entries.len() >= self.max_size {
            if let Some(oldest) = cache.order.pop_front() {
                tracing::debug!(pattern = %oldest, "evicting compiled pattern");
                cache.entries.remove(&oldest);
            }
        }

        cache
            .entries
            .insert(pattern.to_string(), Arc::clone(&regex));
        cache.order.push_back(pattern.to_string());

        Ok(regex)
    }

    /// Check if a pattern is cached.
    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        let cache = self
            .cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        cache.entries.contains_key(pattern)
    }

    /// Get the current number of cached patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        let cache = self
            .cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        cache.entries.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear the cache.
    pub fn clear(&self) {
        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        cache.entries.clear();
        cache.order.clear();
    }

    /// Get the maximum cache size.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Get cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            max_size: self.max_size,
            total_hits: self.total_hits.load(Ordering::Relaxed),
            total_misses: self.total_misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::with_default_size()
    }
}

impl std::fmt::Debug for PatternCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternCache")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// Statistics about a pattern cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of cached patterns.
    pub size: usize,
    /// Maximum cache size.
    pub max_size: usize,
    /// Total cache hits.
    pub total_hits: usize,
    /// Total cache misses.
    pub total_misses: usize,
}

impl CacheStats {
    /// Get the cache hit rate as a ratio (0.0 to 1.0).
    ///
    /// Returns 1.0 if no accesses have been made.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_hits + self.total_misses;
        if total == 0 {
            1.0
        } else {
            self.total_hits as f64 / total as f64
        }
    }
}
