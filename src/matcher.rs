//! The matcher abstraction and its logical combinators.
//!
//! A [`Matcher`] encapsulates acceptance criteria for a value: it can
//! evaluate a candidate value and describe the criteria in human-readable
//! language. Matchers are either *primitive* (the criteria is coded
//! directly, see [`PredicateMatcher`] and [`ComparisonMatcher`]) or a
//! logical combination of other matchers ([`Negation`], [`Conjunction`],
//! [`Disjunction`]) built with the [`MatcherExt`] combinator methods.
//!
//! # Example
//!
//! ```rust
//! use attest::{assert_that, MatcherExt};
//! use attest::matchers::{greater_than, less_than};
//!
//! let in_range = greater_than(10).and(less_than(20));
//! assert_that(&15, &in_range);
//! ```

use crate::describe::{describe, Describe};
use crate::humanize::{identifier_to_description, identifier_to_negated_description};
use crate::result::MatchResult;

/// Acceptance criteria for values of type `T`.
///
/// Evaluating a matcher never panics in library code: the only failure
/// notion is [`MatchResult::Mismatch`], which is a value. A panic raised by
/// a user-supplied predicate propagates to the caller unmodified.
///
/// Matchers are immutable once constructed: `description` and
/// `negated_description` depend only on construction-time state, never on
/// previously evaluated values.
pub trait Matcher<T: ?Sized> {
    /// Report whether `actual` meets the criteria and, if not, why it does
    /// not match.
    fn matches(&self, actual: &T) -> MatchResult;

    /// The description of the criteria, phrased so that
    /// `"a value that {description}"` reads naturally.
    fn description(&self) -> String;

    /// The description of the negation of the criteria.
    ///
    /// Defaults to `"not {description}"`; primitive matchers override it for
    /// grammatical correctness (`"is X"` -> `"is not X"`).
    fn negated_description(&self) -> String {
        format!("not {}", self.description())
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, actual: &T) -> MatchResult {
        (**self).matches(actual)
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn negated_description(&self) -> String {
        (**self).negated_description()
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    fn matches(&self, actual: &T) -> MatchResult {
        (**self).matches(actual)
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn negated_description(&self) -> String {
        (**self).negated_description()
    }
}

/// Combinator methods available on every sized matcher.
///
/// These are the named-method spelling of the logical operators: `.and()`,
/// `.or()` and `.negate()`.
pub trait MatcherExt<T: ?Sized>: Matcher<T> + Sized {
    /// The logical conjunction of this matcher and `other`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::{Matcher, MatcherExt};
    /// use attest::matchers::{greater_than, less_than};
    ///
    /// let m = greater_than(10).and(less_than(20));
    /// assert_eq!(m.description(), "is greater than 10 and is less than 20");
    /// ```
    fn and<M: Matcher<T>>(self, other: M) -> Conjunction<Self, M> {
        Conjunction::new(self, other)
    }

    /// The logical disjunction of this matcher and `other`.
    fn or<M: Matcher<T>>(self, other: M) -> Disjunction<Self, M> {
        Disjunction::new(self, other)
    }

    /// A matcher that matches the negation of this criteria.
    fn negate(self) -> Negation<Self> {
        Negation::new(self)
    }

    /// Convert this matcher into a plain boolean predicate, for use with
    /// generic search and filter utilities.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::MatcherExt;
    /// use attest::matchers::greater_than;
    ///
    /// let big = greater_than(10).as_predicate();
    /// let found: Vec<i32> = [5, 15, 25].into_iter().filter(|n| big(n)).collect();
    /// assert_eq!(found, [15, 25]);
    /// ```
    fn as_predicate(self) -> impl Fn(&T) -> bool {
        move |actual| self.matches(actual).is_match()
    }
}

impl<T: ?Sized, M: Matcher<T>> MatcherExt<T> for M {}

// ============================================================================
// Logical combinators
// ============================================================================

/// The negation of a matcher.
///
/// Descriptions are swapped relative to the wrapped matcher, and evaluation
/// flips `Match` and `Mismatch`. Negating a `Negation` returns the wrapped
/// matcher itself rather than double-wrapping, so `m.negate().negate()` is
/// the original `m`.
#[derive(Debug, Clone)]
pub struct Negation<M> {
    negated: M,
}

impl<M> Negation<M> {
    /// Wrap `negated` in a negation.
    pub fn new(negated: M) -> Self {
        Self { negated }
    }

    /// Unwrap back to the original matcher.
    ///
    /// This inherent method shadows [`MatcherExt::negate`], which makes
    /// double negation an identity on matcher instances.
    pub fn negate(self) -> M {
        self.negated
    }
}

impl<T: Describe + ?Sized, M: Matcher<T>> Matcher<T> for Negation<M> {
    fn matches(&self, actual: &T) -> MatchResult {
        match self.negated.matches(actual) {
            MatchResult::Match => MatchResult::Mismatch(format!("was: {}", describe(actual))),
            MatchResult::Mismatch(_) => MatchResult::Match,
        }
    }

    fn description(&self) -> String {
        self.negated.negated_description()
    }

    fn negated_description(&self) -> String {
        self.negated.description()
    }
}

/// The logical conjunction ("and") of two matchers.
///
/// Evaluation is short-cut: the left operand is always evaluated first, and
/// if it mismatches the right operand is never evaluated and the left
/// mismatch is the result.
#[derive(Debug, Clone)]
pub struct Conjunction<L, R> {
    left: L,
    right: R,
}

impl<L, R> Conjunction<L, R> {
    /// Combine two matchers; prefer [`MatcherExt::and`].
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<T: ?Sized, L: Matcher<T>, R: Matcher<T>> Matcher<T> for Conjunction<L, R> {
    fn matches(&self, actual: &T) -> MatchResult {
        match self.left.matches(actual) {
            MatchResult::Match => self.right.matches(actual),
            mismatch => mismatch,
        }
    }

    fn description(&self) -> String {
        format!(
            "{} and {}",
            self.left.description(),
            self.right.description()
        )
    }
}

/// The logical disjunction ("or") of two matchers.
///
/// Evaluation is short-cut: the left operand is always evaluated first, and
/// if it matches the right operand is never evaluated. When both operands
/// mismatch, the right operand's mismatch is the result.
#[derive(Debug, Clone)]
pub struct Disjunction<L, R> {
    left: L,
    right: R,
}

impl<L, R> Disjunction<L, R> {
    /// Combine two matchers; prefer [`MatcherExt::or`].
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<T: ?Sized, L: Matcher<T>, R: Matcher<T>> Matcher<T> for Disjunction<L, R> {
    fn matches(&self, actual: &T) -> MatchResult {
        match self.left.matches(actual) {
            MatchResult::Match => MatchResult::Match,
            MatchResult::Mismatch(_) => self.right.matches(actual),
        }
    }

    fn description(&self) -> String {
        format!("{} or {}", self.left.description(), self.right.description())
    }
}

/// The n-ary form of [`MatcherExt::and`]: a matcher that requires every
/// matcher in a list to match.
///
/// Evaluation is short-cut left to right; the first mismatch is the result.
/// An empty list matches everything and describes itself as `"anything"`.
/// Mixed matcher types go in as `Box<dyn Matcher<T>>`.
///
/// # Example
///
/// ```rust
/// use attest::{all_of, AllOf, Matcher};
/// use attest::matchers::{greater_than, less_than};
///
/// let m: AllOf<Box<dyn Matcher<i32>>> =
///     all_of(vec![Box::new(greater_than(1)), Box::new(less_than(9))]);
/// assert!(m.matches(&5).is_match());
/// assert_eq!(m.description(), "is greater than 1 and is less than 9");
/// ```
pub fn all_of<M>(matchers: Vec<M>) -> AllOf<M> {
    AllOf { matchers }
}

/// The matcher returned by [`all_of`].
#[derive(Debug, Clone)]
pub struct AllOf<M> {
    matchers: Vec<M>,
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for AllOf<M> {
    fn matches(&self, actual: &T) -> MatchResult {
        for matcher in &self.matchers {
            if let MatchResult::Mismatch(reason) = matcher.matches(actual) {
                return MatchResult::Mismatch(reason);
            }
        }
        MatchResult::Match
    }

    fn description(&self) -> String {
        if self.matchers.is_empty() {
            return "anything".to_string();
        }
        let parts: Vec<String> = self.matchers.iter().map(|m| m.description()).collect();
        parts.join(" and ")
    }
}

/// The n-ary form of [`MatcherExt::or`]: a matcher that requires at least
/// one matcher in a list to match.
///
/// Evaluation is short-cut left to right; when every matcher mismatches,
/// the last mismatch is the result. An empty list matches nothing and
/// describes itself as `"nothing"`.
pub fn any_of<M>(matchers: Vec<M>) -> AnyOf<M> {
    AnyOf { matchers }
}

/// The matcher returned by [`any_of`].
#[derive(Debug, Clone)]
pub struct AnyOf<M> {
    matchers: Vec<M>,
}

impl<T: Describe + ?Sized, M: Matcher<T>> Matcher<T> for AnyOf<M> {
    fn matches(&self, actual: &T) -> MatchResult {
        let mut last = None;
        for matcher in &self.matchers {
            match matcher.matches(actual) {
                MatchResult::Match => return MatchResult::Match,
                mismatch => last = Some(mismatch),
            }
        }
        last.unwrap_or_else(|| MatchResult::Mismatch(format!("was: {}", describe(actual))))
    }

    fn description(&self) -> String {
        if self.matchers.is_empty() {
            return "nothing".to_string();
        }
        let parts: Vec<String> = self.matchers.iter().map(|m| m.description()).collect();
        parts.join(" or ")
    }
}

// ============================================================================
// Primitive matcher constructors
// ============================================================================

/// A primitive matcher built from a named unary predicate.
///
/// The description is derived from the predicate's name by the identifier
/// humanizer, so `"isBlank"` yields the description `"is blank"` and the
/// negated description `"is not blank"`.
///
/// # Example
///
/// ```rust
/// use attest::{Matcher, PredicateMatcher};
///
/// let blank = PredicateMatcher::new("isBlank", |s: &str| s.trim().is_empty());
/// assert_eq!(blank.description(), "is blank");
/// assert!(blank.matches("  ").is_match());
/// assert_eq!(blank.matches("x").mismatch_description(), Some("was: \"x\""));
/// ```
#[derive(Debug, Clone)]
pub struct PredicateMatcher<F> {
    description: String,
    negated_description: String,
    predicate: F,
}

impl<F> PredicateMatcher<F> {
    /// Build a matcher from an identifier and a predicate.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: &str, predicate: F) -> Self {
        Self {
            description: identifier_to_description(name),
            negated_description: identifier_to_negated_description(name),
            predicate,
        }
    }

    /// Build a matcher from a named boolean property accessor.
    ///
    /// Equivalent to [`new`](Self::new) with the property's name as the
    /// identifier, e.g. `PredicateMatcher::for_property("is_empty",
    /// Vec::<i32>::is_empty)`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn for_property(name: &str, accessor: F) -> Self {
        Self::new(name, accessor)
    }

    /// Replace the auto-generated negated description, for cases where the
    /// humanizer's first-word rule does not produce natural prose.
    pub fn with_negated_description(mut self, text: impl Into<String>) -> Self {
        self.negated_description = text.into();
        self
    }

    /// Recover the original predicate.
    ///
    /// This inherent method shadows [`MatcherExt::as_predicate`], avoiding
    /// the evaluation indirection for matchers that wrap a plain predicate.
    pub fn as_predicate(self) -> F {
        self.predicate
    }
}

impl<T: Describe + ?Sized, F: Fn(&T) -> bool> Matcher<T> for PredicateMatcher<F> {
    fn matches(&self, actual: &T) -> MatchResult {
        MatchResult::when((self.predicate)(actual), || {
            format!("was: {}", describe(actual))
        })
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn negated_description(&self) -> String {
        self.negated_description.clone()
    }
}

impl<F> Describe for PredicateMatcher<F> {
    fn default_description(&self) -> String {
        self.description.clone()
    }
}

/// A primitive matcher built from a named binary predicate and a fixed
/// second argument.
///
/// The description appends the described fixed argument to the humanized
/// predicate name: `ComparisonMatcher::new("isEqualTo", .., 10)` describes
/// itself as `"is equal to 10"`.
#[derive(Debug, Clone)]
pub struct ComparisonMatcher<F, U> {
    description: String,
    negated_description: String,
    predicate: F,
    expected: U,
}

impl<F, U: Describe> ComparisonMatcher<F, U> {
    /// Build a matcher that applies `predicate` to `(actual, expected)`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: &str, predicate: F, expected: U) -> Self {
        let suffix = describe(&expected);
        Self {
            description: format!("{} {}", identifier_to_description(name), suffix),
            negated_description: format!("{} {}", identifier_to_negated_description(name), suffix),
            predicate,
            expected,
        }
    }

    /// Partially apply a binary predicate: returns a factory from the fixed
    /// argument to a matcher, so one predicate generates a whole family of
    /// matchers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::{ComparisonMatcher, Matcher};
    ///
    /// let divisible_by =
    ///     ComparisonMatcher::family("isDivisibleBy", |a: &i32, n: &i32| a % n == 0);
    /// assert_eq!(divisible_by(3).description(), "is divisible by 3");
    /// assert!(divisible_by(3).matches(&9).is_match());
    /// ```
    pub fn family(name: &str, predicate: F) -> impl Fn(U) -> Self
    where
        F: Clone,
    {
        let name = name.to_string();
        move |expected| Self::new(&name, predicate.clone(), expected)
    }

    /// Replace the auto-generated negated description.
    pub fn with_negated_description(mut self, text: impl Into<String>) -> Self {
        self.negated_description = text.into();
        self
    }

    /// The fixed comparison argument.
    pub fn expected(&self) -> &U {
        &self.expected
    }
}

impl<T, F, U> Matcher<T> for ComparisonMatcher<F, U>
where
    T: Describe + ?Sized,
    F: Fn(&T, &U) -> bool,
    U: Describe,
{
    fn matches(&self, actual: &T) -> MatchResult {
        MatchResult::when((self.predicate)(actual, &self.expected), || {
            format!("was: {}", describe(actual))
        })
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn negated_description(&self) -> String {
        self.negated_description.clone()
    }
}

impl<F, U> Describe for ComparisonMatcher<F, U> {
    fn default_description(&self) -> String {
        self.description.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn even() -> PredicateMatcher<fn(&i32) -> bool> {
        PredicateMatcher::new("isEven", |n: &i32| n % 2 == 0)
    }

    fn equal_to_10() -> ComparisonMatcher<fn(&i32, &i32) -> bool, i32> {
        ComparisonMatcher::new("isEqualTo", |a: &i32, e: &i32| a == e, 10)
    }

    #[test]
    fn test_predicate_matcher() {
        let m = even();
        assert_eq!(m.matches(&4), MatchResult::Match);
        assert_eq!(m.matches(&3), MatchResult::Mismatch("was: 3".to_string()));
        assert_eq!(m.description(), "is even");
        assert_eq!(m.negated_description(), "is not even");
    }

    #[test]
    fn test_comparison_matcher() {
        let m = equal_to_10();
        assert_eq!(m.matches(&10), MatchResult::Match);
        assert_eq!(m.matches(&20), MatchResult::Mismatch("was: 20".to_string()));
        assert_eq!(m.description(), "is equal to 10");
        assert_eq!(m.negated_description(), "is not equal to 10");
    }

    #[test]
    fn test_comparison_family() {
        let greater_than = ComparisonMatcher::family("isGreaterThan", |a: &i32, e: &i32| a > e);
        assert_eq!(greater_than(5).description(), "is greater than 5");
        assert!(greater_than(5).matches(&6).is_match());
        assert!(greater_than(5).matches(&5).is_mismatch());
    }

    #[test]
    fn test_negation_swaps_descriptions() {
        let m = even().negate();
        assert_eq!(m.description(), "is not even");
        assert_eq!(m.negated_description(), "is even");
    }

    #[test]
    fn test_negation_flips_results() {
        let m = even().negate();
        assert_eq!(m.matches(&3), MatchResult::Match);
        assert_eq!(m.matches(&4), MatchResult::Mismatch("was: 4".to_string()));
    }

    #[test]
    fn test_double_negation_returns_original() {
        let m = even().negate().negate();
        // Unwrapped back to the PredicateMatcher, not a double wrapper.
        let _: &PredicateMatcher<fn(&i32) -> bool> = &m;
        assert_eq!(m.matches(&4), even().matches(&4));
        assert_eq!(m.matches(&3), even().matches(&3));
        assert_eq!(m.description(), even().description());
    }

    #[test]
    fn test_conjunction_description() {
        let m = even().and(equal_to_10());
        assert_eq!(m.description(), "is even and is equal to 10");
        assert_eq!(m.negated_description(), "not is even and is equal to 10");
    }

    #[test]
    fn test_conjunction_evaluation() {
        let m = even().and(equal_to_10());
        assert_eq!(m.matches(&10), MatchResult::Match);
        // Left mismatch is surfaced.
        assert_eq!(m.matches(&3), MatchResult::Mismatch("was: 3".to_string()));
        // Right mismatch is surfaced when left matches.
        assert_eq!(m.matches(&4), MatchResult::Mismatch("was: 4".to_string()));
    }

    #[test]
    fn test_conjunction_short_circuits() {
        let calls = Cell::new(0);
        let never_even = PredicateMatcher::new("isEven", |_: &i32| false);
        let counting = PredicateMatcher::new("isCounted", |_: &i32| {
            calls.set(calls.get() + 1);
            true
        });

        assert!(never_even.and(counting).matches(&3).is_mismatch());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_disjunction_description() {
        let m = even().or(equal_to_10());
        assert_eq!(m.description(), "is even or is equal to 10");
    }

    #[test]
    fn test_disjunction_evaluation() {
        let m = even().or(equal_to_10());
        assert_eq!(m.matches(&4), MatchResult::Match);
        assert_eq!(m.matches(&15), MatchResult::Mismatch("was: 15".to_string()));
    }

    #[test]
    fn test_disjunction_short_circuits() {
        let calls = Cell::new(0);
        let always = PredicateMatcher::new("isAnything", |_: &i32| true);
        let counting = PredicateMatcher::new("isCounted", |_: &i32| {
            calls.set(calls.get() + 1);
            true
        });

        assert!(always.or(counting).matches(&3).is_match());
        assert_eq!(calls.get(), 0);
    }

    fn positive() -> PredicateMatcher<fn(&i32) -> bool> {
        PredicateMatcher::new("isPositive", |n: &i32| *n > 0)
    }

    /// Fails every value with a recognizable reason, for surfacing checks.
    struct Named(&'static str);

    impl Matcher<i32> for Named {
        fn matches(&self, _actual: &i32) -> MatchResult {
            MatchResult::Mismatch(format!("{} failed", self.0))
        }

        fn description(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_all_of() {
        let m = all_of(vec![even(), positive()]);
        assert_eq!(m.matches(&4), MatchResult::Match);
        // First mismatch in list order is surfaced.
        assert_eq!(m.matches(&3), MatchResult::Mismatch("was: 3".to_string()));
        assert_eq!(m.matches(&-2), MatchResult::Mismatch("was: -2".to_string()));
        assert_eq!(m.description(), "is even and is positive");
    }

    #[test]
    fn test_all_of_short_circuits() {
        let calls = Cell::new(0);
        let counting = PredicateMatcher::new("isCounted", |_: &i32| {
            calls.set(calls.get() + 1);
            true
        });

        let m = all_of(vec![
            Box::new(even()) as Box<dyn Matcher<i32>>,
            Box::new(counting),
        ]);
        assert!(m.matches(&3).is_mismatch());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_all_of_boxed_mixes_matcher_types() {
        let m: AllOf<Box<dyn Matcher<i32>>> =
            all_of(vec![Box::new(even()), Box::new(equal_to_10())]);
        assert_eq!(m.matches(&10), MatchResult::Match);
        assert!(m.matches(&4).is_mismatch());
        assert_eq!(m.description(), "is even and is equal to 10");
    }

    #[test]
    fn test_any_of() {
        let m = any_of(vec![even(), positive()]);
        assert_eq!(m.matches(&3), MatchResult::Match);
        assert_eq!(m.matches(&-4), MatchResult::Match);
        assert!(m.matches(&-3).is_mismatch());
        assert_eq!(m.description(), "is even or is positive");
    }

    #[test]
    fn test_any_of_surfaces_last_mismatch() {
        let m = any_of(vec![Named("first"), Named("second")]);
        assert_eq!(
            m.matches(&1),
            MatchResult::Mismatch("second failed".to_string())
        );
    }

    #[test]
    fn test_any_of_short_circuits() {
        let calls = Cell::new(0);
        let counting = PredicateMatcher::new("isCounted", |_: &i32| {
            calls.set(calls.get() + 1);
            true
        });

        let m = any_of(vec![
            Box::new(even()) as Box<dyn Matcher<i32>>,
            Box::new(counting),
        ]);
        assert!(m.matches(&4).is_match());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_empty_lists_are_vacuous() {
        let none: Vec<Box<dyn Matcher<i32>>> = Vec::new();
        let m = all_of(none);
        assert_eq!(m.matches(&1), MatchResult::Match);
        assert_eq!(m.description(), "anything");

        let none: Vec<Box<dyn Matcher<i32>>> = Vec::new();
        let m = any_of(none);
        assert_eq!(m.matches(&1), MatchResult::Mismatch("was: 1".to_string()));
        assert_eq!(m.description(), "nothing");
    }

    #[test]
    fn test_description_is_idempotent() {
        let m = even().and(equal_to_10());
        let first = m.description();
        m.matches(&7);
        assert_eq!(m.description(), first);
    }

    #[test]
    fn test_as_predicate() {
        let p = even().negate().as_predicate();
        assert!(p(&3));
        assert!(!p(&4));
    }

    #[test]
    fn test_predicate_matcher_returns_original_predicate() {
        let m = even();
        let p = m.as_predicate();
        assert!(p(&4));
        assert!(!p(&3));
    }

    #[test]
    fn test_with_negated_description() {
        let m = ComparisonMatcher::new("contains", |s: &String, e: &String| s.contains(e.as_str()), "x".to_string())
            .with_negated_description("does not contain \"x\"");
        assert_eq!(m.negated_description(), "does not contain \"x\"");
    }

    #[test]
    #[should_panic(expected = "identifier must not be empty")]
    fn test_empty_name_rejected() {
        PredicateMatcher::new("", |_: &i32| true);
    }
}
