//! The fluent pattern builder.
//!
//! A [`PatternBuilder`] owns an ordered stack of pattern fragments. Producers
//! append one fragment each; rewriters (see [`rewrite`]) pop or collapse what is
//! already there. Concatenating the stack in order yields the bare pattern that
//! is compiled lazily by the [`Engine`](crate::Engine) whenever a matching
//! method runs.
//!
//! # Example
//!
//! ```
//! use regex_builder::{PatternBuilder, SubPattern};
//!
//! let mut builder = PatternBuilder::new();
//! builder
//!     .symbols("aliqua")
//!     .ends_with(SubPattern::nested(|p| {
//!         p.space().symbols("sed");
//!     }));
//!
//! assert_eq!(builder.to_string(), "aliqua(?= sed)");
//! ```

mod produce;
pub mod rewrite;
mod sub;

use std::fmt;
use std::sync::Arc;

pub use produce::Word;
pub use sub::SubPattern;

use crate::engine::{Captures, GLOBAL_ENGINE};
use crate::error::Result;

/// Builds a regular-expression pattern from an ordered sequence of fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PatternBuilder {
    fragments: Vec<String>,
}

impl PatternBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// The fragments appended so far, in pattern order.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Number of fragments on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if no fragment has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The bare pattern: every fragment concatenated, no delimiters.
    #[must_use]
    pub fn as_bare(&self) -> String {
        self.fragments.concat()
    }

    /// The bare pattern wrapped in the global engine's delimiter (`/` by default).
    #[must_use]
    pub fn delimited(&self) -> String {
        GLOBAL_ENGINE.delimit(&self.as_bare())
    }

    /// Remove every fragment so the builder can be reused.
    pub fn release(&mut self) -> &mut Self {
        tracing::trace!(fragments = self.fragments.len(), "releasing pattern");
        self.fragments.clear();
        self
    }

    /// Compile the bare pattern with the global engine.
    pub fn compile(&self) -> Result<Arc<fancy_regex::Regex>> {
        GLOBAL_ENGINE.compile(&self.as_bare())
    }

    /// Check whether the pattern matches anywhere in `subject`.
    pub fn is_match(&self, subject: &str) -> Result<bool> {
        GLOBAL_ENGINE.is_match(&self.as_bare(), subject)
    }

    /// The first whole match in `subject`, if any.
    pub fn find(&self, subject: &str) -> Result<Option<String>> {
        Ok(self
            .captures(subject)?
            .map(|caps| caps.whole().as_str().to_string()))
    }

    /// The first match in `subject` together with its capture groups.
    pub fn captures(&self, subject: &str) -> Result<Option<Captures>> {
        GLOBAL_ENGINE.find_first(&self.as_bare(), subject)
    }

    /// Every non-overlapping whole match in `subject`.
    pub fn find_all(&self, subject: &str) -> Result<Vec<String>> {
        Ok(self
            .captures_all(subject)?
            .into_iter()
            .map(|caps| caps.whole().as_str().to_string())
            .collect())
    }

    /// Every non-overlapping match in `subject` with its capture groups.
    pub fn captures_all(&self, subject: &str) -> Result<Vec<Captures>> {
        GLOBAL_ENGINE.find_all(&self.as_bare(), subject)
    }

    /// Replace every match in `subject` with `replacement`.
    ///
    /// `$1` and `${name}` in `replacement` expand to capture groups.
    pub fn replace(&self, replacement: &str, subject: &str) -> Result<String> {
        GLOBAL_ENGINE.replace(&self.as_bare(), replacement, subject)
    }

    fn push(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.fragments.push(fragment.into());
        self
    }

    /// Replace the whole stack with a single fragment.
    fn collapse(&mut self, pattern: String) {
        self.fragments.clear();
        self.fragments.push(pattern);
    }
}

impl fmt::Display for PatternBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

impl From<PatternBuilder> for String {
    fn from(builder: PatternBuilder) -> Self {
        builder.fragments.concat()
    }
}

/// Run `f` against a fresh builder and return it.
///
/// ```
/// let builder = regex_builder::build(|p| {
///     p.group("a-zA-Z").one_or_more();
/// });
/// assert_eq!(builder.to_string(), "[a-zA-Z]+");
/// ```
pub fn build(f: impl FnOnce(&mut PatternBuilder)) -> PatternBuilder {
    let mut builder = PatternBuilder::new();
    f(&mut builder);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builder_is_empty() {
        let builder = PatternBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.as_bare(), "");
        assert_eq!(builder.to_string(), "");
    }

    #[test]
    fn display_concatenates_without_delimiters() {
        let mut builder = PatternBuilder::new();
        builder.raw("a").raw("b").raw("c");
        assert_eq!(builder.len(), 3);
        assert_eq!(builder.to_string(), "abc");
        assert_eq!(builder.as_bare(), "abc");
    }

    #[test]
    fn delimited_wraps_in_slashes() {
        let mut builder = PatternBuilder::new();
        builder.symbols("only this");
        assert_eq!(builder.delimited(), "/only this/");
    }

    #[test]
    fn release_empties_the_stack() {
        let mut builder = PatternBuilder::new();
        builder.group("a-z").symbol("!");
        builder.release();
        assert!(builder.is_empty());
        assert_eq!(builder.to_string(), "");

        builder.symbols("only this");
        assert_eq!(builder.to_string(), "only this");
    }

    #[test]
    fn build_helper_returns_populated_builder() {
        let builder = build(|p| {
            p.digit().count(&[3]);
        });
        assert_eq!(builder.fragments(), [r"\d", "{3}"]);
    }

    #[test]
    fn into_string() {
        let builder = build(|p| {
            p.symbols("a.b");
        });
        let pattern: String = builder.into();
        assert_eq!(pattern, r"a\.b");
    }
}
