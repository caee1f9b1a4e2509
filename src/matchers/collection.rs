//! Matchers for slices and vectors.
//!
//! These matchers accept anything that coerces to a slice, so a `&Vec<T>`
//! works wherever a `&[T]` does.

use crate::describe::{describe, Describe};
use crate::matcher::{ComparisonMatcher, Matcher, PredicateMatcher};
use crate::matchers::core::{has, FeatureMatcher};
use crate::result::MatchResult;

/// A matcher for a slice that reports whether any element is matched by
/// `element_matcher`.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::{any_element, greater_than};
///
/// let m = any_element(greater_than(10));
/// assert_eq!(m.description(), "in which any element is greater than 10");
/// assert!(m.matches(&[5, 15][..]).is_match());
/// assert!(m.matches(&[1, 2][..]).is_mismatch());
/// ```
pub fn any_element<M>(element_matcher: M) -> AnyElement<M> {
    AnyElement { element_matcher }
}

/// The matcher returned by [`any_element`].
#[derive(Debug, Clone)]
pub struct AnyElement<M> {
    element_matcher: M,
}

impl<T: Describe, M: Matcher<T>> Matcher<[T]> for AnyElement<M> {
    fn matches(&self, actual: &[T]) -> MatchResult {
        MatchResult::when(
            actual
                .iter()
                .any(|element| self.element_matcher.matches(element).is_match()),
            || format!("was: {}", describe(actual)),
        )
    }

    fn description(&self) -> String {
        format!(
            "in which any element {}",
            self.element_matcher.description()
        )
    }

    fn negated_description(&self) -> String {
        format!("in which no element {}", self.element_matcher.description())
    }
}

/// A matcher for a slice that reports whether all elements are matched by
/// `element_matcher`.
pub fn all_elements<M>(element_matcher: M) -> AllElements<M> {
    AllElements { element_matcher }
}

/// The matcher returned by [`all_elements`].
#[derive(Debug, Clone)]
pub struct AllElements<M> {
    element_matcher: M,
}

impl<T: Describe, M: Matcher<T>> Matcher<[T]> for AllElements<M> {
    fn matches(&self, actual: &[T]) -> MatchResult {
        MatchResult::when(
            actual
                .iter()
                .all(|element| self.element_matcher.matches(element).is_match()),
            || format!("was: {}", describe(actual)),
        )
    }

    fn description(&self) -> String {
        format!(
            "in which all elements {}",
            self.element_matcher.description()
        )
    }

    fn negated_description(&self) -> String {
        format!(
            "in which not all elements {}",
            self.element_matcher.description()
        )
    }
}

/// A matcher that reports whether a slice has no elements.
pub fn is_empty<T: Describe>() -> PredicateMatcher<fn(&[T]) -> bool> {
    let empty: fn(&[T]) -> bool = |actual| actual.is_empty();
    PredicateMatcher::for_property("isEmpty", empty)
}

/// A matcher that applies `size_matcher` to the number of elements in a
/// slice.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::{equal_to, has_size};
///
/// let m = has_size(equal_to(2_usize));
/// assert_eq!(m.description(), "has size that is equal to 2");
/// assert!(m.matches(&[1, 2][..]).is_match());
/// ```
pub fn has_size<T, M: Matcher<usize>>(size_matcher: M) -> FeatureMatcher<fn(&[T]) -> usize, M> {
    let len: fn(&[T]) -> usize = |actual| actual.len();
    has("size", len, size_matcher)
}

/// A matcher that reports whether a slice contains `element`.
pub fn has_element<T: PartialEq + Describe>(
    element: T,
) -> ComparisonMatcher<fn(&[T], &T) -> bool, T> {
    let negated = format!("does not contain {}", describe(&element));
    let contains: fn(&[T], &T) -> bool = |actual, element| actual.contains(element);
    ComparisonMatcher::new("contains", contains, element).with_negated_description(negated)
}
