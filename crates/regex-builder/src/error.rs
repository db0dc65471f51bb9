//! Error types for regex-builder.
//!
//! Fragment production and escaping never fail. The errors here come from three
//! places: rewriters that need state the builder does not have, the execution
//! engine refusing or aborting a pattern, and configuration loading.

use thiserror::Error;

/// Maximum number of pattern characters shown in error messages.
const MAX_PATTERN_DISPLAY: usize = 200;

/// Format a pattern for display, truncating if necessary.
fn format_pattern_snippet(pattern: &str) -> String {
    if pattern.is_empty() {
        return "(empty pattern)".to_string();
    }

    let total = pattern.chars().count();
    if total <= MAX_PATTERN_DISPLAY {
        return format!("'{pattern}'");
    }

    let head: String = pattern.chars().take(MAX_PATTERN_DISPLAY).collect();
    format!("'{head}' ... ({} more characters)", total - MAX_PATTERN_DISPLAY)
}

/// Format a syntax error message with the offending pattern.
fn format_syntax_error(pattern: &str, source: &fancy_regex::Error) -> String {
    let snippet = format_pattern_snippet(pattern);

    format!(
        "invalid pattern syntax: {source}\n\
         \n\
         Pattern: {snippet}\n\
         \n\
         Tip: raw fragments are appended verbatim. Check that:\n\
         - every start_capture() has a matching end_capture()\n\
         - literal text goes through symbols() so meta-characters are escaped\n\
         - look-behind bodies have a bounded length"
    )
}

/// The main error type for regex-builder operations.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The execution engine rejected the assembled pattern.
    #[error("{}", format_syntax_error(pattern, source))]
    Syntax {
        /// The bare pattern that failed to compile.
        pattern: String,
        /// The engine's parse error.
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// The engine failed while matching (e.g. backtrack limit exceeded).
    #[error("pattern execution failed for {}: {source}", format_pattern_snippet(pattern))]
    Execution {
        /// The bare pattern being executed.
        pattern: String,
        /// The engine's runtime error.
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// A rewriter needed a previous fragment but the builder was empty.
    #[error("{operation}() requires a preceding fragment, but the pattern is empty")]
    PrecedingFragmentRequired {
        /// The rewriting operation that was called.
        operation: &'static str,
    },

    /// A positional rewrite started past the end of the pattern.
    #[error(
        "substring start {start} (length {length}) is outside the {pattern_len}-character pattern"
    )]
    IndexOutOfRange {
        /// Requested start offset, in characters.
        start: usize,
        /// Requested length, in characters.
        length: usize,
        /// Length of the flattened pattern, in characters.
        pattern_len: usize,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// An I/O error occurred with additional context.
    #[error("{context}: {source}")]
    IoWithContext {
        /// What operation was being performed.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for regex-builder operations.
pub type Result<T> = std::result::Result<T, PatternError>;

impl PatternError {
    /// Create a syntax error for the given pattern.
    pub fn syntax(pattern: impl Into<String>, source: fancy_regex::Error) -> Self {
        Self::Syntax {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }

    /// Create an execution error for the given pattern.
    pub fn execution(pattern: impl Into<String>, source: fancy_regex::Error) -> Self {
        Self::Execution {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }

    /// Create a missing-fragment error for a rewriting operation.
    #[must_use]
    pub const fn preceding_fragment_required(operation: &'static str) -> Self {
        Self::PrecedingFragmentRequired { operation }
    }

    /// Create an out-of-range error for a positional rewrite.
    #[must_use]
    pub const fn index_out_of_range(start: usize, length: usize, pattern_len: usize) -> Self {
        Self::IndexOutOfRange {
            start,
            length,
            pattern_len,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error with context.
    pub fn io_context(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoWithContext {
            context: context.into(),
            source,
        }
    }

    /// Check if the engine rejected the pattern text.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    /// Check if this error comes from misusing a rewriter.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::PrecedingFragmentRequired { .. } | Self::IndexOutOfRange { .. }
        )
    }

    /// Get the offending pattern if this error carries one.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Syntax { pattern, .. } | Self::Execution { pattern, .. } => Some(pattern),
            _ => None,
        }
    }
}
