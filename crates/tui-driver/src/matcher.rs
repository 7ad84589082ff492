//! Line matchers
//!
//! A `Matcher` is a named predicate over one rendered line. The name shows
//! up in failure messages, so it has to read on its own, e.g.
//! `contains 'cherry'`.

use std::fmt;

use regex::Regex;

use crate::error::DriverError;

#[derive(Debug, Clone)]
enum Rule {
    Equals(String),
    Contains(String),
    DoesNotContain(String),
    Regex(Regex),
    Anything,
    AllOf(Vec<Matcher>),
    AnyOf(Vec<Matcher>),
}

/// Named, immutable predicate over a single line of text
#[derive(Debug, Clone)]
pub struct Matcher {
    rule: Rule,
}

impl Matcher {
    /// Line must equal `target` exactly
    pub fn equals(target: impl Into<String>) -> Self {
        Self {
            rule: Rule::Equals(target.into()),
        }
    }

    /// Line must contain `target` as a substring
    pub fn contains(target: impl Into<String>) -> Self {
        Self {
            rule: Rule::Contains(target.into()),
        }
    }

    pub fn does_not_contain(target: impl Into<String>) -> Self {
        Self {
            rule: Rule::DoesNotContain(target.into()),
        }
    }

    /// Line must contain a match for the regular expression `pattern`
    pub fn matches_regex(pattern: &str) -> Result<Self, DriverError> {
        let regex = Regex::new(pattern).map_err(|source| DriverError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            rule: Rule::Regex(regex),
        })
    }

    /// Matches every line
    pub fn anything() -> Self {
        Self {
            rule: Rule::Anything,
        }
    }

    /// Matches when every inner matcher matches
    pub fn all_of(matchers: impl IntoIterator<Item = Matcher>) -> Self {
        Self {
            rule: Rule::AllOf(matchers.into_iter().collect()),
        }
    }

    /// Matches when at least one inner matcher matches
    pub fn any_of(matchers: impl IntoIterator<Item = Matcher>) -> Self {
        Self {
            rule: Rule::AnyOf(matchers.into_iter().collect()),
        }
    }

    /// Evaluate against one line. Pure; an unmatched line is just `false`.
    pub fn test(&self, line: &str) -> bool {
        match &self.rule {
            Rule::Equals(target) => line == target,
            Rule::Contains(target) => line.contains(target.as_str()),
            Rule::DoesNotContain(target) => !line.contains(target.as_str()),
            Rule::Regex(regex) => regex.is_match(line),
            Rule::Anything => true,
            Rule::AllOf(inner) => inner.iter().all(|m| m.test(line)),
            Rule::AnyOf(inner) => inner.iter().any(|m| m.test(line)),
        }
    }

    /// Human-readable description for diagnostics
    pub fn name(&self) -> String {
        match &self.rule {
            Rule::Equals(target) => format!("equals '{target}'"),
            Rule::Contains(target) => format!("contains '{target}'"),
            Rule::DoesNotContain(target) => format!("does not contain '{target}'"),
            Rule::Regex(regex) => format!("matches regular expression '{}'", regex.as_str()),
            Rule::Anything => "anything".to_string(),
            Rule::AllOf(inner) => format!("all of [{}]", join_names(inner)),
            Rule::AnyOf(inner) => format!("any of [{}]", join_names(inner)),
        }
    }
}

fn join_names(matchers: &[Matcher]) -> String {
    matchers
        .iter()
        .map(Matcher::name)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_requires_whole_line() {
        let m = Matcher::equals("apple");
        assert!(m.test("apple"));
        assert!(!m.test("apple pie"));
        assert!(!m.test(""));
        assert_eq!(m.name(), "equals 'apple'");
    }

    #[test]
    fn contains_matches_substring() {
        let m = Matcher::contains("nan");
        assert!(m.test("banana"));
        assert!(!m.test("cherry"));
        assert_eq!(m.name(), "contains 'nan'");
    }

    #[test]
    fn empty_contains_matches_everything() {
        let m = Matcher::contains("");
        assert!(m.test(""));
        assert!(m.test("anything at all"));
    }

    #[test]
    fn does_not_contain_negates() {
        let m = Matcher::does_not_contain("WIP");
        assert!(m.test("fix typo"));
        assert!(!m.test("WIP: refactor"));
        assert_eq!(m.name(), "does not contain 'WIP'");
    }

    #[test]
    fn regex_matches_anywhere_in_line() {
        let m = Matcher::matches_regex(r"^\s*[a-f0-9]{7} ").unwrap();
        assert!(m.test("  1a2b3c4 commit message"));
        assert!(!m.test("commit 1a2b3c4"));
        assert_eq!(m.name(), r"matches regular expression '^\s*[a-f0-9]{7} '");
    }

    #[test]
    fn invalid_regex_is_an_error() {
        let err = Matcher::matches_regex("(unclosed").unwrap_err();
        assert!(matches!(err, DriverError::InvalidPattern { .. }));
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn combinators_compose() {
        let both = Matcher::all_of([Matcher::contains("a"), Matcher::contains("n")]);
        assert!(both.test("banana"));
        assert!(!both.test("apple"));
        assert_eq!(both.name(), "all of [contains 'a', contains 'n']");

        let either = Matcher::any_of([Matcher::equals("x"), Matcher::contains("rr")]);
        assert!(either.test("cherry"));
        assert!(either.test("x"));
        assert!(!either.test("apple"));
    }

    #[test]
    fn empty_combinators() {
        assert!(Matcher::all_of([]).test("line"));
        assert!(!Matcher::any_of([]).test("line"));
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Matcher::anything().to_string(), "anything");
    }
}
