//! Owned match results returned by the engine.

use std::ops::Range;

/// One matched span of the subject text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    /// Start byte offset in the subject.
    pub start: usize,
    /// End byte offset in the subject.
    pub end: usize,
    text: String,
}

impl Match {
    pub(crate) fn from_fancy(m: &fancy_regex::Match<'_>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        }
    }

    /// The matched text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The matched byte range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of the match in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the match is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A whole match plus its ordered capture groups.
///
/// Group 0 is the whole match; groups that did not participate are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captures {
    whole: Match,
    groups: Vec<Option<Match>>,
    names: Vec<Option<String>>,
}

impl Captures {
    pub(crate) fn from_fancy(
        caps: &fancy_regex::Captures<'_>,
        regex: &fancy_regex::Regex,
    ) -> Option<Self> {
        let whole = Match::from_fancy(&caps.get(0)?);
        let groups = (0..caps.len())
            .map(|i| caps.get(i).map(|m| Match::from_fancy(&m)))
            .collect();
        let names = regex
            .capture_names()
            .map(|name| name.map(str::to_string))
            .collect();
        Some(Self {
            whole,
            groups,
            names,
        })
    }

    /// The whole match.
    #[must_use]
    pub const fn whole(&self) -> &Match {
        &self.whole
    }

    /// Get a group by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Match> {
        self.groups.get(index)?.as_ref()
    }

    /// Get a named group.
    #[must_use]
    pub fn name(&self, name: &str) -> Option<&Match> {
        let index = self
            .names
            .iter()
            .position(|n| n.as_deref() == Some(name))?;
        self.get(index)
    }

    /// Number of groups, including the whole match.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over every group in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Match>> {
        self.groups.iter().map(Option::as_ref)
    }

    /// Every group's text, with an empty string for groups that did not match.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|m| m.map_or_else(String::new, |m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captures(pattern: &str, text: &str) -> Captures {
        let regex = fancy_regex::Regex::new(pattern).unwrap();
        let caps = regex.captures(text).unwrap().unwrap();
        Captures::from_fancy(&caps, &regex).unwrap()
    }

    #[test]
    fn whole_and_groups() {
        let caps = captures(r"(\w+)@(\w+)", "email: user@domain here");
        assert_eq!(caps.whole().as_str(), "user@domain");
        assert_eq!(caps.whole().range(), 7..18);
        assert_eq!(caps.get(1).unwrap().as_str(), "user");
        assert_eq!(caps.get(2).unwrap().as_str(), "domain");
        assert_eq!(caps.len(), 3);
    }

    #[test]
    fn named_groups() {
        let caps = captures(r"(?P<user>\w+)@(?P<host>\w+)", "user@domain");
        assert_eq!(caps.name("host").unwrap().as_str(), "domain");
        assert!(caps.name("missing").is_none());
    }

    #[test]
    fn unmatched_group_is_empty_string() {
        let caps = captures(r"a(x)?b", "ab");
        assert!(caps.get(1).is_none());
        assert_eq!(caps.to_strings(), vec!["ab".to_string(), String::new()]);
    }

    #[test]
    fn match_len() {
        let caps = captures(r"\d+", "abc 12345");
        assert_eq!(caps.whole().len(), 5);
        assert!(!caps.whole().is_empty());
    }
}
