//! Fragment producers: every method appends exactly one fragment.

use std::fmt::Display;

use super::{PatternBuilder, SubPattern};
use crate::escape::{escape_class, escape_literal};
use crate::token;

/// Argument for [`PatternBuilder::word`] and [`PatternBuilder::words`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Word {
    /// No value: the producer's default token.
    #[default]
    Any,
    /// A pattern appended verbatim.
    Text(String),
    /// Alternatives joined into `(a|b|...)`.
    OneOf(Vec<String>),
}

impl Word {
    fn alternation(alternatives: &[String]) -> String {
        format!("({})", alternatives.join("|"))
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Word {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for Word {
    fn from(alternatives: Vec<String>) -> Self {
        Self::OneOf(alternatives)
    }
}

impl From<Vec<&str>> for Word {
    fn from(alternatives: Vec<&str>) -> Self {
        Self::OneOf(alternatives.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Word {
    fn from(alternatives: &[&str]) -> Self {
        Self::OneOf(alternatives.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Word {
    fn from(alternatives: [&str; N]) -> Self {
        Self::OneOf(alternatives.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Word {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Any, Into::into)
    }
}

impl PatternBuilder {
    /// Append `pattern` verbatim. The caller vouches for its syntax.
    pub fn raw(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.push(pattern)
    }

    /// Alias of [`raw`](Self::raw).
    pub fn pattern(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.raw(pattern)
    }

    /// Append `text` escaped so it matches itself exactly.
    pub fn symbols(&mut self, text: &str) -> &mut Self {
        self.push(escape_literal(text))
    }

    /// Alias of [`symbols`](Self::symbols).
    pub fn symbol(&mut self, text: &str) -> &mut Self {
        self.symbols(text)
    }

    /// Escape `text` the way [`symbols`](Self::symbols) does, without appending it.
    #[must_use]
    pub fn escape(text: &str) -> String {
        escape_literal(text)
    }

    /// Match a digit character.
    pub fn digit(&mut self) -> &mut Self {
        self.push(token::DIGIT)
    }

    /// Match a non-digit character.
    pub fn not_digit(&mut self) -> &mut Self {
        self.push(token::NOT_DIGIT)
    }

    /// Match a whitespace character.
    pub fn whitespace(&mut self) -> &mut Self {
        self.push(token::WHITESPACE)
    }

    /// Match a non-whitespace character.
    pub fn not_whitespace(&mut self) -> &mut Self {
        self.push(token::NOT_WHITESPACE)
    }

    /// Match a word character.
    pub fn char(&mut self) -> &mut Self {
        self.push(token::CHAR)
    }

    /// Match a non-word character.
    pub fn not_char(&mut self) -> &mut Self {
        self.push(token::NOT_CHAR)
    }

    /// Match a hexadecimal digit.
    pub fn hex_digit(&mut self) -> &mut Self {
        self.push(token::HEX_DIGIT)
    }

    /// Match an octal digit.
    pub fn octal_digit(&mut self) -> &mut Self {
        self.push(token::OCTAL_DIGIT)
    }

    /// Match a line feed.
    pub fn new_line(&mut self) -> &mut Self {
        self.push(token::NEW_LINE)
    }

    /// Match a carriage return.
    pub fn carriage_return(&mut self) -> &mut Self {
        self.push(token::CARRIAGE_RETURN)
    }

    /// Match a tab.
    pub fn tab(&mut self) -> &mut Self {
        self.push(token::TAB)
    }

    /// Match a vertical tab.
    pub fn vertical_tab(&mut self) -> &mut Self {
        self.push(token::VERTICAL_TAB)
    }

    /// Match a form feed.
    pub fn form_feed(&mut self) -> &mut Self {
        self.push(token::FORM_FEED)
    }

    /// Match a single space.
    pub fn space(&mut self) -> &mut Self {
        self.push(token::SPACE)
    }

    /// Match any character except a line feed.
    pub fn any(&mut self) -> &mut Self {
        self.push(token::ANY)
    }

    /// One or more of the previous group, class or character.
    pub fn one_or_more(&mut self) -> &mut Self {
        self.push(token::ONE_OR_MORE)
    }

    /// Zero or more of the previous group, class or character.
    pub fn zero_or_more(&mut self) -> &mut Self {
        self.push(token::ZERO_OR_MORE)
    }

    /// Repetition count for the previous item.
    ///
    /// One value gives `{n}`, two give `{min,max}`. Longer slices are joined the
    /// same way and will not compile; pass at most two.
    pub fn count(&mut self, bounds: &[u32]) -> &mut Self {
        let joined = bounds
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.push(format!("{{{joined}}}"))
    }

    /// Exactly `n` of the previous item.
    pub fn exactly(&mut self, n: u32) -> &mut Self {
        self.count(&[n])
    }

    /// Between `min` and `max` of the previous item.
    pub fn between(&mut self, min: u32, max: u32) -> &mut Self {
        self.count(&[min, max])
    }

    /// Append `start-end`, meant as the body of a later [`group`](Self::group).
    pub fn range(&mut self, start: impl Display, end: impl Display) -> &mut Self {
        self.push(format!("{start}-{end}"))
    }

    /// Match a word.
    ///
    /// A list becomes an alternation, text is appended verbatim, and
    /// [`Word::Any`] (or empty text) matches one or more word characters.
    pub fn word(&mut self, value: impl Into<Word>) -> &mut Self {
        match value.into() {
            Word::OneOf(alternatives) => self.push(Word::alternation(&alternatives)),
            Word::Text(text) if !text.is_empty() => self.push(text),
            Word::Text(_) | Word::Any => self.push(token::ANY_WORD),
        }
    }

    /// Match one or more word characters.
    pub fn any_word(&mut self) -> &mut Self {
        self.word(Word::Any)
    }

    /// Match one or more non-word characters.
    pub fn not_word(&mut self) -> &mut Self {
        self.push(token::NOT_WORD)
    }

    /// Match a sequence of words.
    ///
    /// Like [`word`](Self::word), except [`Word::Any`] lazily matches a run of
    /// whitespace and word characters, and empty text is kept as is.
    pub fn words(&mut self, value: impl Into<Word>) -> &mut Self {
        match value.into() {
            Word::OneOf(alternatives) => self.push(Word::alternation(&alternatives)),
            Word::Text(text) => self.push(text),
            Word::Any => self.push(token::ANY_WORDS),
        }
    }

    /// Match one character of a class, e.g. `group("a-zA-Z")` gives `[a-zA-Z]`.
    pub fn group<'a>(&mut self, body: impl Into<SubPattern<'a>>) -> &mut Self {
        let body = escape_class(&body.into().evaluate());
        self.push(format!("[{body}]"))
    }

    /// Open a capture group around the fragments that follow.
    pub fn start_capture(&mut self) -> &mut Self {
        self.push("(")
    }

    /// Close a group opened by [`start_capture`](Self::start_capture).
    pub fn end_capture(&mut self) -> &mut Self {
        self.push(")")
    }

    /// Look-behind assertion: what follows must be preceded by `pattern`.
    pub fn behind<'a>(&mut self, pattern: impl Into<SubPattern<'a>>) -> &mut Self {
        let pattern = pattern.into().evaluate();
        self.push(format!("(?<={pattern})"))
    }

    /// Alias of [`behind`](Self::behind).
    pub fn begins_with<'a>(&mut self, pattern: impl Into<SubPattern<'a>>) -> &mut Self {
        self.behind(pattern)
    }

    /// Alias of [`behind`](Self::behind).
    pub fn before<'a>(&mut self, pattern: impl Into<SubPattern<'a>>) -> &mut Self {
        self.behind(pattern)
    }

    /// Look-ahead assertion: what precedes must be followed by `pattern`.
    pub fn after<'a>(&mut self, pattern: impl Into<SubPattern<'a>>) -> &mut Self {
        let pattern = pattern.into().evaluate();
        self.push(format!("(?={pattern})"))
    }

    /// Alias of [`after`](Self::after).
    pub fn ends_with<'a>(&mut self, pattern: impl Into<SubPattern<'a>>) -> &mut Self {
        self.after(pattern)
    }
}
