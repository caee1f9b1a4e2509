//! Matchers for key/value maps.
//!
//! Each matcher is implemented for both `HashMap` and `BTreeMap`.

use std::collections::{BTreeMap, HashMap};

use crate::describe::{describe, Describe};
use crate::matcher::Matcher;
use crate::result::MatchResult;

/// A matcher for a map that reports whether any `(key, value)` pair is
/// matched by `pair_matcher`.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use attest::Matcher;
/// use attest::matchers::{any_pair, equal_to};
///
/// let mut map = BTreeMap::new();
/// map.insert("a", 1);
///
/// let m = any_pair(equal_to(("a", 1)));
/// assert!(m.matches(&map).is_match());
/// assert!(any_pair(equal_to(("a", 2))).matches(&map).is_mismatch());
/// ```
pub fn any_pair<M>(pair_matcher: M) -> AnyPair<M> {
    AnyPair { pair_matcher }
}

/// The matcher returned by [`any_pair`].
#[derive(Debug, Clone)]
pub struct AnyPair<M> {
    pair_matcher: M,
}

/// A matcher for a map that reports whether `key` is present.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use attest::Matcher;
/// use attest::matchers::has_key;
///
/// let mut map = BTreeMap::new();
/// map.insert("a", 1);
///
/// let m = has_key("a");
/// assert_eq!(m.description(), "has key \"a\"");
/// assert!(m.matches(&map).is_match());
/// ```
pub fn has_key<K: Describe>(key: K) -> HasKey<K> {
    HasKey { key }
}

/// The matcher returned by [`has_key`].
#[derive(Debug, Clone)]
pub struct HasKey<K> {
    key: K,
}

// The trait implementations apply to several map types, so a bare
// `m.description()` cannot infer which one is meant. These inherent
// methods answer without needing the map type.
impl<K: Describe> HasKey<K> {
    /// The description of the criteria.
    pub fn description(&self) -> String {
        format!("has key {}", describe(&self.key))
    }

    /// The description of the negation of the criteria.
    pub fn negated_description(&self) -> String {
        format!("does not have key {}", describe(&self.key))
    }
}

/// A matcher for a map that reports whether it contains the entry
/// `(key, value)`.
pub fn has_entry<K: Describe, V: Describe>(key: K, value: V) -> HasEntry<K, V> {
    HasEntry { key, value }
}

/// The matcher returned by [`has_entry`].
#[derive(Debug, Clone)]
pub struct HasEntry<K, V> {
    key: K,
    value: V,
}

impl<K: Describe, V: Describe> HasEntry<K, V> {
    /// The description of the criteria.
    pub fn description(&self) -> String {
        format!("has entry {}:{}", describe(&self.key), describe(&self.value))
    }

    /// The description of the negation of the criteria.
    pub fn negated_description(&self) -> String {
        format!(
            "does not have entry {}:{}",
            describe(&self.key),
            describe(&self.value)
        )
    }
}

// Key bounds are per map type: lookups need `Hash + Eq` for `HashMap` and
// `Ord` for `BTreeMap`, not both.
macro_rules! map_matcher_impls {
    ($map:ident, $($key_bound:path),+) => {
        impl<K, V, M> Matcher<$map<K, V>> for AnyPair<M>
        where
            K: Describe + Clone,
            V: Describe + Clone,
            M: Matcher<(K, V)>,
        {
            fn matches(&self, actual: &$map<K, V>) -> MatchResult {
                MatchResult::when(
                    actual.iter().any(|(key, value)| {
                        self.pair_matcher
                            .matches(&(key.clone(), value.clone()))
                            .is_match()
                    }),
                    || format!("was: {}", describe(actual)),
                )
            }

            fn description(&self) -> String {
                format!("in which any pair {}", self.pair_matcher.description())
            }

            fn negated_description(&self) -> String {
                format!("in which no pair {}", self.pair_matcher.description())
            }
        }

        impl<K, V> Matcher<$map<K, V>> for HasKey<K>
        where
            K: Describe $(+ $key_bound)+,
            V: Describe,
        {
            fn matches(&self, actual: &$map<K, V>) -> MatchResult {
                MatchResult::when(actual.contains_key(&self.key), || {
                    format!("was: {}", describe(actual))
                })
            }

            fn description(&self) -> String {
                HasKey::description(self)
            }

            fn negated_description(&self) -> String {
                HasKey::negated_description(self)
            }
        }

        impl<K, V> Matcher<$map<K, V>> for HasEntry<K, V>
        where
            K: Describe $(+ $key_bound)+,
            V: Describe + PartialEq,
        {
            fn matches(&self, actual: &$map<K, V>) -> MatchResult {
                MatchResult::when(
                    actual.get(&self.key) == Some(&self.value),
                    || format!("was: {}", describe(actual)),
                )
            }

            fn description(&self) -> String {
                HasEntry::description(self)
            }

            fn negated_description(&self) -> String {
                HasEntry::negated_description(self)
            }
        }
    };
}

map_matcher_impls!(HashMap, std::hash::Hash, Eq);
map_matcher_impls!(BTreeMap, Ord);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Conjunction;
    use crate::matchers::{equal_to, has};

    fn sample() -> BTreeMap<&'static str, i32> {
        let mut map = BTreeMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map
    }

    #[test]
    fn test_has_key() {
        let m = has_key("a");
        assert!(m.matches(&sample()).is_match());
        assert!(has_key("z").matches(&sample()).is_mismatch());
        assert_eq!(m.description(), "has key \"a\"");
        assert_eq!(m.negated_description(), "does not have key \"a\"");
    }

    #[test]
    fn test_has_key_mismatch_describes_map() {
        assert_eq!(
            has_key("z").matches(&sample()),
            MatchResult::Mismatch("was: {\"a\":1, \"b\":2}".to_string())
        );
    }

    #[test]
    fn test_has_entry() {
        assert!(has_entry("a", 1).matches(&sample()).is_match());
        assert!(has_entry("a", 2).matches(&sample()).is_mismatch());
        assert_eq!(has_entry("a", 1).description(), "has entry \"a\":1");
    }

    #[test]
    fn test_any_pair() {
        let m = any_pair(equal_to(("b", 2)));
        assert!(m.matches(&sample()).is_match());
        assert!(any_pair(equal_to(("b", 3))).matches(&sample()).is_mismatch());
        assert_eq!(
            Matcher::<BTreeMap<&str, i32>>::description(&m),
            "in which any pair is equal to (\"b\", 2)"
        );
    }

    #[test]
    fn test_any_pair_with_feature_matcher() {
        // Match on the value half of the pair only.
        let m = any_pair(has("value", |pair: &(&str, i32)| pair.1, equal_to(2)));
        assert!(m.matches(&sample()).is_match());
    }

    #[test]
    fn test_works_on_hash_map() {
        let mut map = HashMap::new();
        map.insert("k".to_string(), 9);
        assert!(has_key("k".to_string()).matches(&map).is_match());
        assert!(has_entry("k".to_string(), 9).matches(&map).is_match());
    }

    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct SortKey(u32);

    impl Describe for SortKey {
        fn default_description(&self) -> String {
            format!("SortKey({})", self.0)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct HashOnlyKey(u32);

    impl Describe for HashOnlyKey {
        fn default_description(&self) -> String {
            format!("HashOnlyKey({})", self.0)
        }
    }

    #[test]
    fn test_btree_map_keys_need_only_ord() {
        // SortKey is Ord but not Hash.
        let mut map = BTreeMap::new();
        map.insert(SortKey(1), "one");
        assert!(has_key(SortKey(1)).matches(&map).is_match());
        assert!(has_entry(SortKey(1), "one").matches(&map).is_match());
        assert!(has_key(SortKey(2)).matches(&map).is_mismatch());
    }

    #[test]
    fn test_hash_map_keys_need_only_hash() {
        // HashOnlyKey is Hash + Eq but not Ord.
        let mut map = HashMap::new();
        map.insert(HashOnlyKey(1), "one");
        assert!(has_key(HashOnlyKey(1)).matches(&map).is_match());
        assert!(has_entry(HashOnlyKey(1), "one").matches(&map).is_match());
        assert!(has_entry(HashOnlyKey(1), "two").matches(&map).is_mismatch());
    }

    #[test]
    fn test_map_matcher_combination() {
        // `.and()` cannot infer the map type here, so combine explicitly.
        let m = Conjunction::new(has_key("a"), has_key("b"));
        assert!(m.matches(&sample()).is_match());
        assert!(m.matches(&BTreeMap::<&str, i32>::new()).is_mismatch());
        assert_eq!(
            Matcher::<BTreeMap<&str, i32>>::description(&m),
            "has key \"a\" and has key \"b\""
        );
    }
}
