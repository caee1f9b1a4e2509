//! # attest
//!
//! A library of composable matchers for writing readable assertions.
//!
//! A [`Matcher`] bundles acceptance criteria for a value together with a
//! human-readable description of that criteria. Matchers combine with
//! `and`, `or` and `negate` into new matchers, and assertion failures are
//! reported in the matchers' own words, so a failed test explains itself.
//!
//! ## Quick Start
//!
//! ```rust
//! use attest::{assert_that, MatcherExt};
//! use attest::matchers::{greater_than, less_than};
//!
//! #[derive(Debug)]
//! struct Reading {
//!     celsius: i32,
//! }
//!
//! let reading = Reading { celsius: 15 };
//! assert_that(&reading.celsius, &greater_than(10).and(less_than(20)));
//! ```
//!
//! A mismatch panics with a report built from the matcher's description:
//!
//! ```text
//! assertion failed: expected: a value that is greater than 10 and is less than 20
//! but was: 25
//! ```
//!
//! ## Writing a matcher
//!
//! Most custom matchers need nothing more than a named predicate; the name
//! is turned into prose for the description:
//!
//! ```rust
//! use attest::{assert_that, Matcher, PredicateMatcher};
//!
//! let even = PredicateMatcher::new("isEven", |n: &i32| n % 2 == 0);
//! assert_eq!(even.description(), "is even");
//! assert_that(&4, &even);
//! ```
//!
//! ## Handling mismatches without panicking
//!
//! ```rust
//! use attest::check_that;
//! use attest::matchers::starts_with;
//!
//! let outcome = check_that("goodbye", &starts_with("hello"));
//! assert!(outcome.is_err());
//! ```

pub mod assertion;
pub mod describe;
pub mod humanize;
pub mod matcher;
pub mod matchers;
pub mod result;

// Assertion entry points
pub use assertion::{assert_that, assert_that_message, check_that, MismatchError};

// Matcher core
pub use matcher::{
    all_of, any_of, AllOf, AnyOf, ComparisonMatcher, Conjunction, Disjunction, Matcher,
    MatcherExt, Negation, PredicateMatcher,
};
pub use result::MatchResult;

// Value description service
pub use describe::{
    describe, install_description_providers, Describe, DescriptionProvidersInstalled,
    ValueDescription,
};

// Identifier humanization
pub use humanize::{
    identifier_to_description, identifier_to_negated_description, identifier_to_words,
};
