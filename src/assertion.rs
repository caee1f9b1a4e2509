//! Assertion entry points that evaluate a matcher against a value.
//!
//! [`check_that`] reports the outcome as a `Result` for callers that want to
//! handle mismatches themselves; [`assert_that`] panics on mismatch with a
//! report built from the matcher's description, for use in tests:
//!
//! ```text
//! expected: a value that is equal to 10
//! but was: 20
//! ```

use thiserror::Error;

use crate::matcher::Matcher;

/// The failure reported when a value does not meet a matcher's criteria.
///
/// The rendered message pairs the matcher's description of the criteria with
/// its explanation of why the value fell short.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}expected: a value that {expected}\nbut {mismatch}", message_prefix(.message))]
pub struct MismatchError {
    message: Option<String>,
    expected: String,
    mismatch: String,
}

fn message_prefix(message: &Option<String>) -> String {
    match message {
        Some(text) => format!("{}: ", text),
        None => String::new(),
    }
}

impl MismatchError {
    /// The matcher's description of the criteria.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The matcher's explanation of why the value did not match.
    pub fn mismatch(&self) -> &str {
        &self.mismatch
    }

    /// The caller-supplied context message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Evaluate `criteria` against `actual`, reporting a mismatch as an `Err`
/// rather than a panic.
///
/// # Example
///
/// ```rust
/// use attest::check_that;
/// use attest::matchers::equal_to;
///
/// assert!(check_that(&10, &equal_to(10)).is_ok());
///
/// let err = check_that(&20, &equal_to(10)).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "expected: a value that is equal to 10\nbut was: 20"
/// );
/// ```
pub fn check_that<T: ?Sized, M: Matcher<T>>(actual: &T, criteria: &M) -> Result<(), MismatchError> {
    match criteria.matches(actual) {
        crate::result::MatchResult::Match => Ok(()),
        crate::result::MatchResult::Mismatch(mismatch) => Err(MismatchError {
            message: None,
            expected: criteria.description(),
            mismatch,
        }),
    }
}

/// Assert that `actual` meets `criteria`, panicking with a mismatch report
/// if it does not.
///
/// # Example
///
/// ```rust
/// use attest::{assert_that, MatcherExt};
/// use attest::matchers::{greater_than, less_than};
///
/// assert_that(&15, &greater_than(10).and(less_than(20)));
/// ```
#[track_caller]
pub fn assert_that<T: ?Sized, M: Matcher<T>>(actual: &T, criteria: &M) {
    if let Err(error) = check_that(actual, criteria) {
        panic!("assertion failed: {}", error);
    }
}

/// Assert that `actual` meets `criteria`, prefixing any mismatch report with
/// a context message.
#[track_caller]
pub fn assert_that_message<T: ?Sized, M: Matcher<T>>(message: &str, actual: &T, criteria: &M) {
    if let Err(error) = check_that(actual, criteria) {
        let error = MismatchError {
            message: Some(message.to_string()),
            ..error
        };
        panic!("assertion failed: {}", error);
    }
}
