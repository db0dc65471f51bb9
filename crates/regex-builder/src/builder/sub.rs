//! Literal-or-callback arguments for nested composition.

use std::borrow::Cow;
use std::fmt;

use super::PatternBuilder;

/// Callback that receives a fresh builder and returns a pattern string.
pub type BuilderFn<'a> = Box<dyn FnOnce(&mut PatternBuilder) -> String + 'a>;

/// An argument that is either a ready pattern string or a sub-builder callback.
///
/// Groups, lookaround assertions and captures accept a `SubPattern`. A callback
/// runs against its own empty [`PatternBuilder`], so nothing it appends leaks into
/// the outer builder's fragment stack.
pub enum SubPattern<'a> {
    /// A pattern string used verbatim.
    Literal(Cow<'a, str>),
    /// A callback evaluated against a fresh builder.
    Builder(BuilderFn<'a>),
}

impl<'a> SubPattern<'a> {
    /// Wrap a pattern string.
    #[must_use]
    pub fn literal(pattern: impl Into<Cow<'a, str>>) -> Self {
        Self::Literal(pattern.into())
    }

    /// Wrap a callback that returns the sub-pattern text.
    ///
    /// ```
    /// use regex_builder::{PatternBuilder, SubPattern};
    ///
    /// let mut builder = PatternBuilder::new();
    /// builder.capture_with(SubPattern::from_fn(|p| p.symbols("test").to_string()));
    /// assert_eq!(builder.to_string(), "(test)");
    /// ```
    #[must_use]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce(&mut PatternBuilder) -> String + 'a,
    {
        Self::Builder(Box::new(f))
    }

    /// Wrap a callback whose result is whatever it appended to the fresh builder.
    #[must_use]
    pub fn nested<F>(f: F) -> Self
    where
        F: FnOnce(&mut PatternBuilder) + 'a,
    {
        Self::from_fn(move |p| {
            f(p);
            p.as_bare()
        })
    }

    /// Resolve to a pattern string, running the callback if there is one.
    #[must_use]
    pub fn evaluate(self) -> String {
        match self {
            Self::Literal(pattern) => pattern.into_owned(),
            Self::Builder(f) => f(&mut PatternBuilder::new()),
        }
    }

    /// Check if this is a callback.
    #[must_use]
    pub const fn is_builder(&self) -> bool {
        matches!(self, Self::Builder(_))
    }
}

impl fmt::Debug for SubPattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => write!(f, "Literal({s:?})"),
            Self::Builder(_) => write!(f, "Builder(<fn>)"),
        }
    }
}

impl<'a> From<&'a str> for SubPattern<'a> {
    fn from(s: &'a str) -> Self {
        Self::Literal(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for SubPattern<'a> {
    fn from(s: &'a String) -> Self {
        Self::Literal(Cow::Borrowed(s))
    }
}

impl From<String> for SubPattern<'_> {
    fn from(s: String) -> Self {
        Self::Literal(Cow::Owned(s))
    }
}

impl From<&PatternBuilder> for SubPattern<'_> {
    fn from(builder: &PatternBuilder) -> Self {
        Self::Literal(Cow::Owned(builder.as_bare()))
    }
}
