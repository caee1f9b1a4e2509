//! Ready-made matcher families.
//!
//! Every matcher here is a plain client of the core: it is built from the
//! primitive constructors ([`PredicateMatcher`](crate::PredicateMatcher),
//! [`ComparisonMatcher`](crate::ComparisonMatcher)), the combinators, and
//! the [`describe`](crate::describe) service, so descriptions stay
//! consistent across the whole library.

mod collection;
mod core;
mod json;
mod map;
mod numeric;
mod string;

pub use collection::{
    all_elements, any_element, has_element, has_size, is_empty, AllElements, AnyElement,
};
pub use self::core::{
    absent, anything, described_by, equal_to, has, is_in, nothing, present, same_instance,
    Anything, DescribedBy, FeatureMatcher, IsIn, Present, SameInstance,
};
pub use json::{has_field, has_field_matching, matches_fields, FieldMatching, FieldsMatcher, HasField};
pub use map::{any_pair, has_entry, has_key, AnyPair, HasEntry, HasKey};
pub use numeric::{
    close_to, greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to, within,
    CloseTo,
};
pub use string::{
    contains_pattern, contains_substring, ends_with, is_blank, is_empty_string, matches_glob,
    matches_pattern, starts_with, GlobMatcher, PatternMatcher, StringMatcher,
};
