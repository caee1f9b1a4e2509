//! Matchers for string content.
//!
//! The substring matchers ([`starts_with`], [`ends_with`],
//! [`contains_substring`]) are case sensitive by default and can be turned
//! case insensitive with [`StringMatcher::case_insensitive`]. Pattern
//! matchers accept a compiled [`regex::Regex`] or [`glob::Pattern`].
//!
//! These matchers are implemented for `str`; an owned `String` coerces at
//! the call site (`m.matches(&owned)`).

use crate::describe::describe;
use crate::humanize::{identifier_to_description, identifier_to_negated_description};
use crate::matcher::{Matcher, PredicateMatcher};
use crate::result::MatchResult;

/// A string matcher with a configurable case sensitivity.
///
/// Built by [`starts_with`], [`ends_with`] and [`contains_substring`];
/// matchers are case sensitive unless [`case_insensitive`](Self::case_insensitive)
/// is called, in which case the description gains a `" (case insensitive)"`
/// suffix.
#[derive(Debug, Clone)]
pub struct StringMatcher {
    name: String,
    expected: String,
    ignore_case: bool,
    predicate: fn(&str, &str, bool) -> bool,
}

impl StringMatcher {
    fn new(name: &str, expected: impl Into<String>, predicate: fn(&str, &str, bool) -> bool) -> Self {
        Self {
            name: name.to_string(),
            expected: expected.into(),
            ignore_case: false,
            predicate,
        }
    }

    /// This match, made case insensitive.
    pub fn case_insensitive(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    /// This match, made case sensitive (the default).
    pub fn case_sensitive(mut self) -> Self {
        self.ignore_case = false;
        self
    }

    fn suffix(&self) -> &'static str {
        if self.ignore_case {
            " (case insensitive)"
        } else {
            ""
        }
    }
}

impl Matcher<str> for StringMatcher {
    fn matches(&self, actual: &str) -> MatchResult {
        MatchResult::when(
            (self.predicate)(actual, &self.expected, self.ignore_case),
            || format!("was: {}", describe(actual)),
        )
    }

    fn description(&self) -> String {
        format!(
            "{} {}{}",
            identifier_to_description(&self.name),
            describe(&self.expected),
            self.suffix()
        )
    }

    fn negated_description(&self) -> String {
        format!(
            "{} {}{}",
            identifier_to_negated_description(&self.name),
            describe(&self.expected),
            self.suffix()
        )
    }
}

fn fold_case(s: &str, ignore_case: bool) -> std::borrow::Cow<'_, str> {
    if ignore_case {
        std::borrow::Cow::Owned(s.to_lowercase())
    } else {
        std::borrow::Cow::Borrowed(s)
    }
}

/// A matcher that reports whether a string starts with `prefix`.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::starts_with;
///
/// let m = starts_with("The");
/// assert_eq!(m.description(), "starts with \"The\"");
/// assert!(m.matches("The quick brown fox").is_match());
/// assert!(starts_with("the").case_insensitive().matches("The fox").is_match());
/// ```
pub fn starts_with(prefix: impl Into<String>) -> StringMatcher {
    StringMatcher::new("startsWith", prefix, |actual, expected, ignore_case| {
        fold_case(actual, ignore_case).starts_with(fold_case(expected, ignore_case).as_ref())
    })
}

/// A matcher that reports whether a string ends with `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> StringMatcher {
    StringMatcher::new("endsWith", suffix, |actual, expected, ignore_case| {
        fold_case(actual, ignore_case).ends_with(fold_case(expected, ignore_case).as_ref())
    })
}

/// A matcher that reports whether a string contains `substring`.
pub fn contains_substring(substring: impl Into<String>) -> StringMatcher {
    StringMatcher::new(
        "containsSubstring",
        substring,
        |actual, expected, ignore_case| {
            fold_case(actual, ignore_case).contains(fold_case(expected, ignore_case).as_ref())
        },
    )
}

/// A matcher built from a regular expression. See [`matches_pattern`] and
/// [`contains_pattern`].
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    name: String,
    pattern: regex::Regex,
    probe: regex::Regex,
}

impl Matcher<str> for PatternMatcher {
    fn matches(&self, actual: &str) -> MatchResult {
        MatchResult::when(self.probe.is_match(actual), || {
            format!("was: {}", describe(actual))
        })
    }

    fn description(&self) -> String {
        format!(
            "{} {}",
            identifier_to_description(&self.name),
            describe(&self.pattern)
        )
    }

    fn negated_description(&self) -> String {
        format!(
            "{} {}",
            identifier_to_negated_description(&self.name),
            describe(&self.pattern)
        )
    }
}

/// A matcher that reports whether the whole string matches `pattern`.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::matches_pattern;
///
/// let m = matches_pattern(regex::Regex::new(r"a+b+").unwrap());
/// assert_eq!(m.description(), "matches pattern a+b+");
/// assert!(m.matches("aabb").is_match());
/// assert!(m.matches("aabbc").is_mismatch());
/// ```
pub fn matches_pattern(pattern: regex::Regex) -> PatternMatcher {
    // Wrapping an already-compiled pattern in a non-capturing group keeps
    // it valid, so the anchored recompilation cannot fail.
    let probe = regex::Regex::new(&format!(r"\A(?:{})\z", pattern.as_str()))
        .expect("anchoring a valid pattern");
    PatternMatcher {
        name: "matchesPattern".to_string(),
        pattern,
        probe,
    }
}

/// A matcher that reports whether a string contains a match of `pattern`.
pub fn contains_pattern(pattern: regex::Regex) -> PatternMatcher {
    PatternMatcher {
        name: "containsPattern".to_string(),
        probe: pattern.clone(),
        pattern,
    }
}

/// A matcher that reports whether the whole string matches a glob pattern
/// such as `*.txt` or `**/config.json`.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::matches_glob;
///
/// let m = matches_glob(glob::Pattern::new("*.env").unwrap());
/// assert_eq!(m.description(), "matches glob *.env");
/// assert!(m.matches("test.env").is_match());
/// assert!(m.matches("test.txt").is_mismatch());
/// ```
pub fn matches_glob(pattern: glob::Pattern) -> GlobMatcher {
    GlobMatcher { pattern }
}

/// The matcher returned by [`matches_glob`].
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    pattern: glob::Pattern,
}

impl Matcher<str> for GlobMatcher {
    fn matches(&self, actual: &str) -> MatchResult {
        MatchResult::when(self.pattern.matches(actual), || {
            format!("was: {}", describe(actual))
        })
    }

    fn description(&self) -> String {
        format!("matches glob {}", describe(&self.pattern))
    }

    fn negated_description(&self) -> String {
        format!("does not match glob {}", describe(&self.pattern))
    }
}

/// A matcher that reports whether a string is empty or consists solely of
/// whitespace.
pub fn is_blank() -> PredicateMatcher<fn(&str) -> bool> {
    let blank: fn(&str) -> bool = |actual| actual.trim().is_empty();
    PredicateMatcher::new("isBlank", blank)
}

/// A matcher that reports whether a string contains no characters.
pub fn is_empty_string() -> PredicateMatcher<fn(&str) -> bool> {
    let empty: fn(&str) -> bool = |actual| actual.is_empty();
    PredicateMatcher::new("isEmptyString", empty)
}
