//! Constant fragments appended by the fixed-token producers.

/// A digit character.
pub const DIGIT: &str = r"\d";
/// A non-digit character.
pub const NOT_DIGIT: &str = r"\D";
/// A whitespace character.
pub const WHITESPACE: &str = r"\s";
/// A non-whitespace character.
pub const NOT_WHITESPACE: &str = r"\S";
/// A word character.
pub const CHAR: &str = r"\w";
/// A non-word character.
pub const NOT_CHAR: &str = r"\W";
/// A hexadecimal digit.
pub const HEX_DIGIT: &str = "[0-9A-Fa-f]";
/// An octal digit.
pub const OCTAL_DIGIT: &str = "[0-7]";
/// Line feed.
pub const NEW_LINE: &str = r"\n";
/// Carriage return.
pub const CARRIAGE_RETURN: &str = r"\r";
/// Horizontal tab.
pub const TAB: &str = r"\t";
/// Vertical tab (U+000B).
pub const VERTICAL_TAB: &str = r"\x0B";
/// Form feed (U+000C).
pub const FORM_FEED: &str = r"\x0C";
/// A literal space.
pub const SPACE: &str = " ";
/// Any character except a line feed.
pub const ANY: &str = ".";
/// One or more of the previous item.
pub const ONE_OR_MORE: &str = "+";
/// Zero or more of the previous item.
pub const ZERO_OR_MORE: &str = "*";
/// One or more word characters.
pub const ANY_WORD: &str = r"\w+";
/// One or more non-word characters.
pub const NOT_WORD: &str = r"\W+";
/// Whitespace or word characters, lazily one or more.
pub const ANY_WORDS: &str = r"[\s\w]+?";
/// Delimiter wrapped around the bare pattern by [`crate::PatternBuilder::delimited`].
pub const DEFAULT_DELIMITER: char = '/';
