//! Recursive value formatting for mismatch descriptions.
//!
//! This module provides the [`describe`] function used throughout the crate
//! to render values inside matcher descriptions and mismatch explanations:
//! - Strings are delimited with quotes and escaped.
//! - Tuples, ranges, collections and maps are described recursively.
//! - An absent `Option` is described as `null`.
//! - Anything else falls back to its display rendering.
//!
//! Before the default rules run, [`describe`] consults a process-wide list of
//! [`ValueDescription`] providers, so host applications can register custom
//! formatting for their own types. See [`install_description_providers`].

mod providers;

pub use providers::{
    install_description_providers, DescriptionProvidersInstalled, ValueDescription,
};

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::ops::RangeInclusive;

/// A value that can be rendered into a mismatch description.
///
/// Implementations are provided for the primitive types, strings, `Option`,
/// 2- and 3-tuples, inclusive ranges, slices, `Vec`, sets, maps, and
/// `serde_json::Value`. Matchers are self-describing: describing one yields
/// its description text.
pub trait Describe {
    /// The default rendering of this value, used when no registered
    /// description provider claims it.
    fn default_description(&self) -> String;

    /// A dynamic view of this value, offered to registered description
    /// providers before the default rules run. Returning `None` opts the
    /// type out of provider dispatch; unsized types cannot participate.
    fn as_any(&self) -> Option<&dyn Any> {
        None
    }
}

/// Format a value for inclusion in a description.
///
/// Registered [`ValueDescription`] providers are tried first, in
/// installation order; the first one to return a string wins. If none apply
/// (or none are installed), the value's [default rules](Describe) are used.
///
/// # Example
///
/// ```rust
/// use attest::describe;
///
/// assert_eq!(describe(&42), "42");
/// assert_eq!(describe(&"hello"), "\"hello\"");
/// assert_eq!(describe(&vec![1, 2]), "[1, 2]");
/// assert_eq!(describe(&(1..=10)), "1..10");
/// assert_eq!(describe(&None::<i32>), "null");
/// ```
pub fn describe<T: Describe + ?Sized>(value: &T) -> String {
    if let Some(any) = value.as_any() {
        if let Some(text) = providers::try_describe(any) {
            return text;
        }
    }
    value.default_description()
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

macro_rules! describe_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Describe for $t {
                fn default_description(&self) -> String {
                    self.to_string()
                }

                fn as_any(&self) -> Option<&dyn Any> {
                    Some(self)
                }
            }
        )*
    };
}

describe_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Describe for str {
    fn default_description(&self) -> String {
        quoted(self)
    }
}

impl Describe for String {
    fn default_description(&self) -> String {
        quoted(self)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl<'a, T: Describe + ?Sized> Describe for &'a T {
    fn default_description(&self) -> String {
        (**self).default_description()
    }

    fn as_any(&self) -> Option<&dyn Any> {
        (**self).as_any()
    }
}

impl<T: Describe> Describe for Option<T> {
    fn default_description(&self) -> String {
        match self {
            None => "null".to_string(),
            Some(value) => describe(value),
        }
    }
}

impl<A: Describe, B: Describe> Describe for (A, B) {
    fn default_description(&self) -> String {
        format!("({}, {})", describe(&self.0), describe(&self.1))
    }
}

impl<A: Describe, B: Describe, C: Describe> Describe for (A, B, C) {
    fn default_description(&self) -> String {
        format!(
            "({}, {}, {})",
            describe(&self.0),
            describe(&self.1),
            describe(&self.2)
        )
    }
}

impl<T: Describe> Describe for RangeInclusive<T> {
    fn default_description(&self) -> String {
        format!("{}..{}", describe(self.start()), describe(self.end()))
    }
}

fn delimited<'a, T: Describe + 'a>(
    items: impl Iterator<Item = &'a T>,
    open: &str,
    close: &str,
) -> String {
    let body: Vec<String> = items.map(|item| describe(item)).collect();
    format!("{}{}{}", open, body.join(", "), close)
}

impl<T: Describe> Describe for [T] {
    fn default_description(&self) -> String {
        delimited(self.iter(), "[", "]")
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn default_description(&self) -> String {
        delimited(self.iter(), "[", "]")
    }
}

impl<T: Describe> Describe for HashSet<T> {
    fn default_description(&self) -> String {
        delimited(self.iter(), "{", "}")
    }
}

impl<T: Describe> Describe for BTreeSet<T> {
    fn default_description(&self) -> String {
        delimited(self.iter(), "{", "}")
    }
}

fn entries<'a, K: Describe + 'a, V: Describe + 'a>(
    entries: impl Iterator<Item = (&'a K, &'a V)>,
) -> String {
    let body: Vec<String> = entries
        .map(|(key, value)| format!("{}:{}", describe(key), describe(value)))
        .collect();
    format!("{{{}}}", body.join(", "))
}

impl<K: Describe, V: Describe> Describe for HashMap<K, V> {
    fn default_description(&self) -> String {
        entries(self.iter())
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn default_description(&self) -> String {
        entries(self.iter())
    }
}

impl Describe for serde_json::Value {
    fn default_description(&self) -> String {
        self.to_string()
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl Describe for regex::Regex {
    fn default_description(&self) -> String {
        self.as_str().to_string()
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl Describe for glob::Pattern {
    fn default_description(&self) -> String {
        self.as_str().to_string()
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self)
    }
}
