//! Matchers for ordered and floating-point values.

use std::ops::RangeInclusive;

use crate::describe::{describe, Describe};
use crate::matcher::{ComparisonMatcher, Matcher};
use crate::result::MatchResult;

/// A matcher that reports whether a value is strictly greater than `expected`.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::greater_than;
///
/// let m = greater_than(10);
/// assert_eq!(m.description(), "is greater than 10");
/// assert!(m.matches(&11).is_match());
/// assert!(m.matches(&10).is_mismatch());
/// ```
pub fn greater_than<T: PartialOrd + Describe>(
    expected: T,
) -> ComparisonMatcher<fn(&T, &T) -> bool, T> {
    let gt: fn(&T, &T) -> bool = |actual, expected| actual > expected;
    ComparisonMatcher::new("isGreaterThan", gt, expected)
}

/// A matcher that reports whether a value is greater than or equal to
/// `expected`.
pub fn greater_than_or_equal_to<T: PartialOrd + Describe>(
    expected: T,
) -> ComparisonMatcher<fn(&T, &T) -> bool, T> {
    let ge: fn(&T, &T) -> bool = |actual, expected| actual >= expected;
    ComparisonMatcher::new("isGreaterThanOrEqualTo", ge, expected)
}

/// A matcher that reports whether a value is strictly less than `expected`.
pub fn less_than<T: PartialOrd + Describe>(
    expected: T,
) -> ComparisonMatcher<fn(&T, &T) -> bool, T> {
    let lt: fn(&T, &T) -> bool = |actual, expected| actual < expected;
    ComparisonMatcher::new("isLessThan", lt, expected)
}

/// A matcher that reports whether a value is less than or equal to
/// `expected`.
pub fn less_than_or_equal_to<T: PartialOrd + Describe>(
    expected: T,
) -> ComparisonMatcher<fn(&T, &T) -> bool, T> {
    let le: fn(&T, &T) -> bool = |actual, expected| actual <= expected;
    ComparisonMatcher::new("isLessThanOrEqualTo", le, expected)
}

/// A matcher that reports whether a value falls within `range`, inclusive of
/// both ends.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::within;
///
/// let m = within(1..=10);
/// assert_eq!(m.description(), "is within 1..10");
/// assert!(m.matches(&10).is_match());
/// assert!(m.matches(&11).is_mismatch());
/// ```
pub fn within<T: PartialOrd + Describe>(
    range: RangeInclusive<T>,
) -> ComparisonMatcher<fn(&T, &RangeInclusive<T>) -> bool, RangeInclusive<T>> {
    let contained: fn(&T, &RangeInclusive<T>) -> bool = |actual, range| range.contains(actual);
    ComparisonMatcher::new("isWithin", contained, range)
}

/// A matcher that reports whether a float equals `expected` within a margin
/// of `error`. See [`close_to`].
#[derive(Debug, Clone, Copy)]
pub struct CloseTo {
    expected: f64,
    error: f64,
}

/// A matcher that reports whether a value is equal to `expected`, within a
/// range of plus or minus `error`.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::close_to;
///
/// let m = close_to(3.0, 0.1);
/// assert_eq!(m.description(), "is equal to 3 within 0.1");
/// assert!(m.matches(&3.01).is_match());
/// assert!(m.matches(&4.0).is_mismatch());
/// ```
pub fn close_to(expected: f64, error: f64) -> CloseTo {
    CloseTo { expected, error }
}

impl CloseTo {
    fn delta(&self, actual: f64) -> f64 {
        (actual - self.expected).abs() - self.error
    }
}

impl Matcher<f64> for CloseTo {
    fn matches(&self, actual: &f64) -> MatchResult {
        MatchResult::when(self.delta(*actual) <= 0.0, || {
            format!(
                "a numeric value {} differed by {} more than error {}",
                describe(actual),
                describe(&self.delta(*actual)),
                describe(&self.error)
            )
        })
    }

    fn description(&self) -> String {
        format!(
            "is equal to {} within {}",
            describe(&self.expected),
            describe(&self.error)
        )
    }

    fn negated_description(&self) -> String {
        format!(
            "is not equal to {} within {}",
            describe(&self.expected),
            describe(&self.error)
        )
    }
}
