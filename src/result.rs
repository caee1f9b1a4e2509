//! The outcome of evaluating a matcher against a value.

use crate::describe::Describe;

/// The result of matching an actual value against the criteria defined by a
/// [`Matcher`](crate::Matcher).
///
/// A `MatchResult` is a plain value, not an error: a [`Mismatch`](Self::Mismatch)
/// signals "criteria not met", which is always an expected, recoverable outcome.
/// Results are created fresh on every evaluation and never mutated.
///
/// # Example
///
/// ```rust
/// use attest::{MatchResult, Matcher};
/// use attest::matchers::equal_to;
///
/// assert_eq!(equal_to(1).matches(&1), MatchResult::Match);
/// assert_eq!(
///     equal_to(1).matches(&2),
///     MatchResult::Mismatch("was: 2".to_string()),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The actual value met the criteria.
    Match,
    /// The actual value did not meet the criteria; carries a human-readable
    /// explanation of why.
    Mismatch(String),
}

impl MatchResult {
    /// Convert a boolean comparison outcome into a `MatchResult`.
    ///
    /// The mismatch description is computed lazily, only when the comparison
    /// failed. This is the building block every primitive matcher uses.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::MatchResult;
    ///
    /// let actual = 42;
    /// let result = MatchResult::when(actual > 100, || format!("was: {}", actual));
    /// assert!(result.is_mismatch());
    /// ```
    pub fn when(matched: bool, mismatch: impl FnOnce() -> String) -> Self {
        if matched {
            MatchResult::Match
        } else {
            MatchResult::Mismatch(mismatch())
        }
    }

    /// Whether this result is a [`Match`](Self::Match).
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Match)
    }

    /// Whether this result is a [`Mismatch`](Self::Mismatch).
    pub fn is_mismatch(&self) -> bool {
        !self.is_match()
    }

    /// The mismatch explanation, if this result is a mismatch.
    pub fn mismatch_description(&self) -> Option<&str> {
        match self {
            MatchResult::Match => None,
            MatchResult::Mismatch(description) => Some(description),
        }
    }
}

impl Describe for MatchResult {
    fn default_description(&self) -> String {
        match self {
            MatchResult::Match => "Match".to_string(),
            MatchResult::Mismatch(description) => description.clone(),
        }
    }
}
