//! Literal and character-class escaping.
//!
//! Both functions walk the input one `char` at a time and put a backslash in
//! front of every member of their character set. Nothing else is touched, and
//! already-escaped input is escaped again (`a\.b` becomes `a\\\.b`).

/// Characters escaped when text must match itself outside a character class.
///
/// `<` and `>` are left alone: the engine reads `\<` and `\>` as word-boundary
/// assertions, while the bare characters are already literals.
pub const META_CHARACTERS: &[char] = &[
    '^', '[', ']', '.', '$', '{', '}', '*', '(', '\\', '+', ')', '|', '/', '?',
];

/// Characters escaped inside a `[...]` character class.
pub const GROUP_CHARACTERS: &[char] = &[']'];

/// Escape `text` so it matches itself literally.
#[must_use]
pub fn escape_literal(text: &str) -> String {
    escape_with(text, META_CHARACTERS)
}

/// Escape `text` for use as the body of a character class.
#[must_use]
pub fn escape_class(text: &str) -> String {
    escape_with(text, GROUP_CHARACTERS)
}

/// Check whether `c` is escaped by [`escape_literal`].
#[must_use]
pub fn is_meta_character(c: char) -> bool {
    META_CHARACTERS.contains(&c)
}

fn escape_with(text: &str, set: &[char]) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if set.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_dot_once() {
        assert_eq!(escape_literal("a.b"), r"a\.b");
    }

    #[test]
    fn re_escaping_escapes_the_backslash_too() {
        let once = escape_literal("a.b");
        assert_eq!(escape_literal(&once), r"a\\\.b");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_literal("only this"), "only this");
        assert_eq!(escape_literal(""), "");
    }

    #[test]
    fn escapes_every_meta_character() {
        let all: String = META_CHARACTERS.iter().collect();
        let escaped = escape_literal(&all);
        assert_eq!(escaped.len(), all.len() * 2);
        assert!(escaped.chars().step_by(2).all(|c| c == '\\'));
    }

    #[test]
    fn leaves_angle_brackets_alone() {
        assert_eq!(escape_literal("<tag>"), "<tag>");
    }

    #[test]
    fn class_escaping_only_touches_closing_bracket() {
        assert_eq!(escape_class("a-z"), "a-z");
        assert_eq!(escape_class("[]"), r"[\]");
        assert_eq!(escape_class(".*"), ".*");
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(escape_literal("café (crème)"), r"café \(crème\)");
    }
}
