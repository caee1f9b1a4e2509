//! General-purpose matchers: identity, equality, presence, features.

use crate::describe::{describe, Describe};
use crate::matcher::{ComparisonMatcher, Matcher, Negation, PredicateMatcher};
use crate::result::MatchResult;

/// A matcher that matches any value. See [`anything`].
#[derive(Debug, Clone, Copy)]
pub struct Anything;

impl<T: ?Sized> Matcher<T> for Anything {
    fn matches(&self, _actual: &T) -> MatchResult {
        MatchResult::Match
    }

    fn description(&self) -> String {
        "anything".to_string()
    }

    fn negated_description(&self) -> String {
        "nothing".to_string()
    }
}

/// A matcher that matches any value, always returning
/// [`Match`](MatchResult::Match).
pub fn anything() -> Anything {
    Anything
}

/// A matcher that matches no value, always returning a
/// [`Mismatch`](MatchResult::Mismatch). It is the negation of [`anything`].
pub fn nothing() -> Negation<Anything> {
    Negation::new(Anything)
}

/// A matcher that reports whether a value equals `expected`.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::equal_to;
///
/// let m = equal_to(10);
/// assert_eq!(m.description(), "is equal to 10");
/// assert_eq!(m.negated_description(), "is not equal to 10");
/// assert_eq!(m.matches(&20).mismatch_description(), Some("was: 20"));
/// ```
pub fn equal_to<T: PartialEq + Describe>(expected: T) -> ComparisonMatcher<fn(&T, &T) -> bool, T> {
    let eq: fn(&T, &T) -> bool = |actual, expected| actual == expected;
    ComparisonMatcher::new("isEqualTo", eq, expected)
}

/// A matcher for an `Option` that reports whether the value is absent.
pub fn absent<T: Describe>() -> PredicateMatcher<fn(&Option<T>) -> bool> {
    let none: fn(&Option<T>) -> bool = |actual| actual.is_none();
    PredicateMatcher::new("isAbsent", none)
}

/// A matcher for an `Option` that reports whether a value is present and
/// meets the criteria of `value_matcher`.
///
/// Use `present(anything())` when any present value will do.
pub fn present<M>(value_matcher: M) -> Present<M> {
    Present { value_matcher }
}

/// The matcher returned by [`present`].
#[derive(Debug, Clone)]
pub struct Present<M> {
    value_matcher: M,
}

impl<T: Describe, M: Matcher<T>> Matcher<Option<T>> for Present<M> {
    fn matches(&self, actual: &Option<T>) -> MatchResult {
        match actual {
            None => MatchResult::Mismatch("was: null".to_string()),
            Some(value) => self.value_matcher.matches(value),
        }
    }

    fn description(&self) -> String {
        format!("is present and {}", self.value_matcher.description())
    }
}

/// A matcher that applies `feature_matcher` to the result of extracting a
/// named feature from a value.
///
/// Mismatches are re-described in terms of the feature: `"had size that
/// was: 3"`.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::{equal_to, has};
///
/// let m = has("length", |s: &String| s.len(), equal_to(5));
/// assert_eq!(m.description(), "has length that is equal to 5");
/// assert!(m.matches(&"hello".to_string()).is_match());
/// assert_eq!(
///     m.matches(&"hi".to_string()).mismatch_description(),
///     Some("had length that was: 2"),
/// );
/// ```
pub fn has<T, R, F, M>(name: &str, feature: F, feature_matcher: M) -> FeatureMatcher<F, M>
where
    T: ?Sized,
    F: Fn(&T) -> R,
    M: Matcher<R>,
{
    FeatureMatcher {
        name: name.to_string(),
        feature,
        feature_matcher,
    }
}

/// The matcher returned by [`has`].
#[derive(Debug, Clone)]
pub struct FeatureMatcher<F, M> {
    name: String,
    feature: F,
    feature_matcher: M,
}

impl<T, R, F, M> Matcher<T> for FeatureMatcher<F, M>
where
    T: ?Sized,
    F: Fn(&T) -> R,
    M: Matcher<R>,
{
    fn matches(&self, actual: &T) -> MatchResult {
        match self.feature_matcher.matches(&(self.feature)(actual)) {
            MatchResult::Mismatch(reason) => {
                MatchResult::Mismatch(format!("had {} that {}", self.name, reason))
            }
            result => result,
        }
    }

    fn description(&self) -> String {
        format!(
            "has {} that {}",
            self.name,
            self.feature_matcher.description()
        )
    }

    fn negated_description(&self) -> String {
        format!(
            "does not have {} that {}",
            self.name,
            self.feature_matcher.description()
        )
    }
}

/// A matcher that reports whether a value is one of `elements`.
///
/// The mismatch names the candidate collection: `"was not in [1, 2, 3]"`.
pub fn is_in<T: PartialEq + Describe>(elements: Vec<T>) -> IsIn<T> {
    IsIn { elements }
}

/// The matcher returned by [`is_in`].
#[derive(Debug, Clone)]
pub struct IsIn<T> {
    elements: Vec<T>,
}

impl<T: PartialEq + Describe> Matcher<T> for IsIn<T> {
    fn matches(&self, actual: &T) -> MatchResult {
        MatchResult::when(self.elements.contains(actual), || {
            format!("was not in {}", describe(&self.elements))
        })
    }

    fn description(&self) -> String {
        format!("is in {}", describe(&self.elements))
    }

    fn negated_description(&self) -> String {
        format!("is not in {}", describe(&self.elements))
    }
}

/// A matcher that reports whether a value is the very same instance as
/// `expected`, compared by address rather than by value.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::same_instance;
///
/// let original = "hello".to_string();
/// let copy = original.clone();
///
/// let m = same_instance(&original);
/// assert!(m.matches(&original).is_match());
/// assert!(m.matches(&copy).is_mismatch());
/// ```
pub fn same_instance<T: Describe + ?Sized>(expected: &T) -> SameInstance<'_, T> {
    SameInstance { expected }
}

/// The matcher returned by [`same_instance`].
#[derive(Debug, Clone, Copy)]
pub struct SameInstance<'a, T: ?Sized> {
    expected: &'a T,
}

impl<'a, T: Describe + ?Sized> Matcher<T> for SameInstance<'a, T> {
    fn matches(&self, actual: &T) -> MatchResult {
        MatchResult::when(std::ptr::eq(actual, self.expected), || {
            format!("was: {}", describe(actual))
        })
    }

    fn description(&self) -> String {
        format!("is the same instance as {}", describe(self.expected))
    }

    fn negated_description(&self) -> String {
        format!("is not the same instance as {}", describe(self.expected))
    }
}

/// A matcher that evaluates exactly like `matcher` but describes its
/// criteria with a fixed phrase, for compound matchers whose generated
/// description reads poorly.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::{described_by, is_in};
///
/// let m = described_by("is a small prime", is_in(vec![2, 3, 5, 7]));
/// assert_eq!(m.description(), "is a small prime");
/// assert!(m.matches(&5).is_match());
/// ```
pub fn described_by<M>(description: impl Into<String>, matcher: M) -> DescribedBy<M> {
    DescribedBy {
        description: description.into(),
        matcher,
    }
}

/// The matcher returned by [`described_by`].
#[derive(Debug, Clone)]
pub struct DescribedBy<M> {
    description: String,
    matcher: M,
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for DescribedBy<M> {
    fn matches(&self, actual: &T) -> MatchResult {
        self.matcher.matches(actual)
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatcherExt;

    #[test]
    fn test_anything_matches_everything() {
        assert!(anything().matches(&42).is_match());
        assert!(anything().matches("text").is_match());
        // Anything matches every type, so pin one to ask for a description.
        assert_eq!(Matcher::<i32>::description(&anything()), "anything");
    }

    #[test]
    fn test_nothing_matches_nothing() {
        assert_eq!(
            nothing().matches(&42),
            MatchResult::Mismatch("was: 42".to_string())
        );
        assert_eq!(Matcher::<i32>::description(&nothing()), "nothing");
        assert_eq!(Matcher::<i32>::negated_description(&nothing()), "anything");
    }

    #[test]
    fn test_equal_to() {
        assert!(equal_to(10).matches(&10).is_match());
        assert_eq!(
            equal_to(10).matches(&20),
            MatchResult::Mismatch("was: 20".to_string())
        );
        assert_eq!(equal_to("x").description(), "is equal to \"x\"");
    }

    #[test]
    fn test_absent() {
        assert!(absent::<i32>().matches(&None).is_match());
        assert_eq!(
            absent::<i32>().matches(&Some(3)),
            MatchResult::Mismatch("was: 3".to_string())
        );
        assert_eq!(absent::<i32>().description(), "is absent");
        assert_eq!(absent::<i32>().negated_description(), "is not absent");
    }

    #[test]
    fn test_present() {
        let m = present(equal_to(3));
        assert!(m.matches(&Some(3)).is_match());
        assert_eq!(
            m.matches(&None),
            MatchResult::Mismatch("was: null".to_string())
        );
        assert_eq!(
            m.matches(&Some(4)),
            MatchResult::Mismatch("was: 4".to_string())
        );
        assert_eq!(m.description(), "is present and is equal to 3");
    }

    #[test]
    fn test_present_anything() {
        let m = present(anything());
        assert!(m.matches(&Some(1)).is_match());
        assert!(m.matches(&None::<i32>).is_mismatch());
    }

    #[test]
    fn test_has_feature() {
        let m = has("size", |v: &Vec<i32>| v.len(), equal_to(2_usize));
        assert!(m.matches(&vec![1, 2]).is_match());
        assert_eq!(
            m.matches(&vec![1]),
            MatchResult::Mismatch("had size that was: 1".to_string())
        );
        assert_eq!(m.description(), "has size that is equal to 2");
        assert_eq!(
            m.negated_description(),
            "does not have size that is equal to 2"
        );
    }

    #[test]
    fn test_is_in() {
        let m = is_in(vec![1, 2, 3]);
        assert!(m.matches(&2).is_match());
        assert_eq!(
            m.matches(&5),
            MatchResult::Mismatch("was not in [1, 2, 3]".to_string())
        );
        assert_eq!(m.description(), "is in [1, 2, 3]");
        assert_eq!(m.negated_description(), "is not in [1, 2, 3]");
    }

    #[test]
    fn test_same_instance() {
        let original = "hello".to_string();
        let copy = original.clone();

        let m = same_instance(&original);
        assert!(m.matches(&original).is_match());
        // Equal by value, but a different instance.
        assert_eq!(
            m.matches(&copy),
            MatchResult::Mismatch("was: \"hello\"".to_string())
        );
        assert_eq!(m.description(), "is the same instance as \"hello\"");
        assert_eq!(
            m.negated_description(),
            "is not the same instance as \"hello\""
        );
    }

    #[test]
    fn test_described_by_replaces_description_only() {
        let m = described_by("is a small prime", is_in(vec![2, 3, 5, 7]));
        assert!(m.matches(&5).is_match());
        assert_eq!(
            m.matches(&6),
            MatchResult::Mismatch("was not in [2, 3, 5, 7]".to_string())
        );
        assert_eq!(m.description(), "is a small prime");
        assert_eq!(m.negated_description(), "not is a small prime");
    }

    #[test]
    fn test_combining_core_matchers() {
        let m = equal_to(1).or(equal_to(2));
        assert!(m.matches(&2).is_match());
        assert_eq!(m.description(), "is equal to 1 or is equal to 2");
    }
}
