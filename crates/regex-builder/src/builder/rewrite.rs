//! Fragment rewriters.
//!
//! Unlike producers, these consume state already on the stack. [`capture`] and
//! [`optional`] rewrite the last fragment only. [`optional_symbols`] and
//! [`optional_substring`] flatten the whole pattern, rewrite the text and
//! collapse the stack into that single fragment.
//!
//! [`capture`]: PatternBuilder::capture
//! [`optional`]: PatternBuilder::optional
//! [`optional_symbols`]: PatternBuilder::optional_symbols
//! [`optional_substring`]: PatternBuilder::optional_substring

use super::{PatternBuilder, SubPattern};
use crate::error::{PatternError, Result};

/// Wrap `pattern` in a non-capturing optional group: `(?:pattern)?`.
#[must_use]
pub fn optional_group(pattern: &str) -> String {
    format!("(?:{pattern})?")
}

/// Make every literal occurrence of `token` in `pattern` optional.
///
/// An empty `token` leaves `pattern` unchanged.
#[must_use]
pub fn optional_symbols_in(pattern: &str, token: &str) -> String {
    if token.is_empty() {
        return pattern.to_string();
    }
    pattern.replace(token, &optional_group(token))
}

/// Make the `length` characters starting at `start` optional.
///
/// Offsets count `char`s. A span running past the end is clamped, so the group
/// becomes a suffix; a `start` past the end is an error.
pub fn optional_substring_in(pattern: &str, start: usize, length: usize) -> Result<String> {
    let head_end = char_offset(pattern, start).ok_or_else(|| {
        PatternError::index_out_of_range(start, length, pattern.chars().count())
    })?;
    let tail_start = char_offset(pattern, start.saturating_add(length)).unwrap_or(pattern.len());

    Ok(format!(
        "{}{}{}",
        &pattern[..head_end],
        optional_group(&pattern[head_end..tail_start]),
        &pattern[tail_start..]
    ))
}

/// Byte offset of the `index`-th char, or the string length for one past the end.
fn char_offset(s: &str, index: usize) -> Option<usize> {
    s.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(s.len()))
        .nth(index)
}

impl PatternBuilder {
    /// Wrap the most recent fragment in a capture group.
    ///
    /// Fails with [`PatternError::PrecedingFragmentRequired`] on an empty builder.
    pub fn capture(&mut self) -> Result<&mut Self> {
        let fragment = self
            .fragments
            .pop()
            .ok_or_else(|| PatternError::preceding_fragment_required("capture"))?;
        tracing::trace!(%fragment, "capturing last fragment");
        Ok(self.push(format!("({fragment})")))
    }

    /// Append `pattern` wrapped in a capture group.
    pub fn capture_with<'a>(&mut self, pattern: impl Into<SubPattern<'a>>) -> &mut Self {
        let pattern = pattern.into().evaluate();
        self.push(format!("({pattern})"))
    }

    /// Make the most recent fragment optional by appending `?`.
    ///
    /// Fails with [`PatternError::PrecedingFragmentRequired`] on an empty builder.
    pub fn optional(&mut self) -> Result<&mut Self> {
        let fragment = self
            .fragments
            .last_mut()
            .ok_or_else(|| PatternError::preceding_fragment_required("optional"))?;
        fragment.push('?');
        tracing::trace!(%fragment, "made last fragment optional");
        Ok(self)
    }

    /// Make every occurrence of `token` in the pattern so far optional.
    ///
    /// `token` may be a sub-builder; it is matched against the pattern text as is.
    ///
    /// ```
    /// use regex_builder::PatternBuilder;
    ///
    /// let mut builder = PatternBuilder::new();
    /// builder.word("consequat").optional_symbols("qu");
    /// assert_eq!(builder.to_string(), "conse(?:qu)?at");
    /// ```
    pub fn optional_symbols<'a>(&mut self, token: impl Into<SubPattern<'a>>) -> &mut Self {
        let token = token.into().evaluate();
        let rewritten = optional_symbols_in(&self.as_bare(), &token);
        tracing::trace!(token = %token, pattern = %rewritten, "made symbols optional");
        self.collapse(rewritten);
        self
    }

    /// Make `length` characters of the pattern so far optional, starting at `start`.
    ///
    /// The second argument is a length, not an end offset: `optional_substring(5, 2)`
    /// on `consequat` makes `qu` optional.
    ///
    /// ```
    /// use regex_builder::PatternBuilder;
    ///
    /// let mut builder = PatternBuilder::new();
    /// builder.word("consequat").optional_substring(5, 2)?;
    /// assert_eq!(builder.to_string(), "conse(?:qu)?at");
    /// # Ok::<(), regex_builder::PatternError>(())
    /// ```
    pub fn optional_substring(&mut self, start: usize, length: usize) -> Result<&mut Self> {
        let rewritten = optional_substring_in(&self.as_bare(), start, length)?;
        tracing::trace!(start, length, pattern = %rewritten, "made substring optional");
        self.collapse(rewritten);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_wraps_last_fragment() {
        let mut builder = PatternBuilder::new();
        builder.symbols("test").capture().unwrap();
        assert_eq!(builder.to_string(), "(test)");
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn capture_only_touches_last_fragment() {
        let mut builder = PatternBuilder::new();
        builder.symbols("t3st ").symbols("izzz").capture().unwrap();
        assert_eq!(builder.fragments(), ["t3st ", "(izzz)"]);
    }

    #[test]
    fn capture_on_empty_builder_fails() {
        let mut builder = PatternBuilder::new();
        let err = builder.capture().unwrap_err();
        assert!(matches!(
            err,
            PatternError::PrecedingFragmentRequired {
                operation: "capture"
            }
        ));
        assert!(builder.is_empty());
    }

    #[test]
    fn capture_with_callback() {
        let mut builder = PatternBuilder::new();
        builder.capture_with(SubPattern::from_fn(|p| p.symbols("test").to_string()));
        assert_eq!(builder.to_string(), "(test)");

        builder.release().capture_with(SubPattern::from_fn(|_| "test".to_string()));
        assert_eq!(builder.to_string(), "(test)");
    }

    #[test]
    fn optional_appends_question_mark() {
        let mut builder = PatternBuilder::new();
        builder.symbols("a").symbols("x").optional().unwrap();
        assert_eq!(builder.fragments(), ["a", "x?"]);
    }

    #[test]
    fn optional_on_empty_builder_fails() {
        let mut builder = PatternBuilder::new();
        assert!(builder.optional().unwrap_err().is_usage());
    }

    #[test]
    fn optional_symbols_is_global_and_collapses() {
        let mut builder = PatternBuilder::new();
        builder.raw("ab").raw("c").raw("ab");
        builder.optional_symbols("ab");
        assert_eq!(builder.fragments(), ["(?:ab)?c(?:ab)?"]);
    }

    #[test]
    fn optional_symbols_spans_fragments() {
        let mut builder = PatternBuilder::new();
        builder.raw("con").raw("sequat").optional_symbols("qu");
        assert_eq!(builder.fragments(), ["conse(?:qu)?at"]);
    }

    #[test]
    fn optional_symbols_from_sub_builder() {
        let mut builder = PatternBuilder::new();
        builder
            .symbols("a.b")
            .optional_symbols(SubPattern::nested(|p| {
                p.symbols(".b");
            }));
        assert_eq!(builder.to_string(), r"a(?:\.b)?");
    }

    #[test]
    fn optional_symbols_with_empty_token_is_noop() {
        assert_eq!(optional_symbols_in("abc", ""), "abc");
    }

    #[test]
    fn optional_substring_uses_length() {
        assert_eq!(
            optional_substring_in("consequat", 5, 2).unwrap(),
            "conse(?:qu)?at"
        );
    }

    #[test]
    fn optional_substring_clamps_overlong_span() {
        assert_eq!(optional_substring_in("abc", 1, 10).unwrap(), "a(?:bc)?");
        assert_eq!(optional_substring_in("abc", 3, 1).unwrap(), "abc(?:)?");
    }

    #[test]
    fn optional_substring_rejects_start_past_end() {
        let err = optional_substring_in("abc", 4, 1).unwrap_err();
        assert!(matches!(
            err,
            PatternError::IndexOutOfRange {
                start: 4,
                length: 1,
                pattern_len: 3
            }
        ));
    }

    #[test]
    fn optional_substring_counts_chars() {
        assert_eq!(optional_substring_in("café", 3, 1).unwrap(), "caf(?:é)?");
    }

    #[test]
    fn optional_substring_leaves_builder_untouched_on_error() {
        let mut builder = PatternBuilder::new();
        builder.raw("a").raw("b");
        assert!(builder.optional_substring(9, 1).is_err());
        assert_eq!(builder.fragments(), ["a", "b"]);
    }
}
