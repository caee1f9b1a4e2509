//! Matchers for `serde_json::Value` objects.
//!
//! Field patterns support three matching modes, tried in order: glob
//! (`*.txt`, `**/config.json`), regex (`^npm (install|i)$`), and literal
//! comparison. Non-string field values are compared through their compact
//! JSON rendering, so a pattern of `"42"` matches the number `42`.

use std::collections::BTreeMap;

use glob::Pattern;
use regex::Regex;
use serde_json::Value;

use crate::describe::describe;
use crate::matcher::Matcher;
use crate::result::MatchResult;

/// A matcher that reports whether a JSON value is an object with the given
/// field, whatever its value.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::has_field;
/// use serde_json::json;
///
/// let m = has_field("file_path");
/// assert_eq!(m.description(), "has field \"file_path\"");
/// assert!(m.matches(&json!({"file_path": "/tmp/x"})).is_match());
/// assert!(m.matches(&json!({"command": "ls"})).is_mismatch());
/// ```
pub fn has_field(name: impl Into<String>) -> HasField {
    HasField { name: name.into() }
}

/// The matcher returned by [`has_field`].
#[derive(Debug, Clone)]
pub struct HasField {
    name: String,
}

impl Matcher<Value> for HasField {
    fn matches(&self, actual: &Value) -> MatchResult {
        MatchResult::when(actual.get(&self.name).is_some(), || {
            format!("was: {}", describe(actual))
        })
    }

    fn description(&self) -> String {
        format!("has field {}", describe(&self.name))
    }

    fn negated_description(&self) -> String {
        format!("does not have field {}", describe(&self.name))
    }
}

/// A matcher that reports whether a JSON object field matches `pattern`.
///
/// The pattern is tried as a glob, then as a regex, then as a literal value.
///
/// # Example
///
/// ```rust
/// use attest::Matcher;
/// use attest::matchers::has_field_matching;
/// use serde_json::json;
///
/// let m = has_field_matching("file_path", "*.txt");
/// assert!(m.matches(&json!({"file_path": "notes.txt"})).is_match());
/// assert!(m.matches(&json!({"file_path": "notes.rs"})).is_mismatch());
/// ```
pub fn has_field_matching(name: impl Into<String>, pattern: impl Into<String>) -> FieldMatching {
    FieldMatching {
        name: name.into(),
        pattern: pattern.into(),
    }
}

/// The matcher returned by [`has_field_matching`].
#[derive(Debug, Clone)]
pub struct FieldMatching {
    name: String,
    pattern: String,
}

impl Matcher<Value> for FieldMatching {
    fn matches(&self, actual: &Value) -> MatchResult {
        let matched = actual
            .get(&self.name)
            .map(|value| pattern_matches(&self.pattern, value))
            .unwrap_or(false);
        MatchResult::when(matched, || format!("was: {}", describe(actual)))
    }

    fn description(&self) -> String {
        format!(
            "has field {} matching {}",
            describe(&self.name),
            describe(&self.pattern)
        )
    }

    fn negated_description(&self) -> String {
        format!(
            "does not have field {} matching {}",
            describe(&self.name),
            describe(&self.pattern)
        )
    }
}

/// A matcher that reports whether every entry in `expected` names a field of
/// the JSON object whose value matches the entry's pattern.
///
/// Patterns follow the same glob/regex/literal rules as
/// [`has_field_matching`].
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use attest::Matcher;
/// use attest::matchers::matches_fields;
/// use serde_json::json;
///
/// let mut expected = BTreeMap::new();
/// expected.insert("file_path".to_string(), "*.txt".to_string());
/// expected.insert("content".to_string(), "hello.*".to_string());
///
/// let m = matches_fields(expected);
/// assert!(m
///     .matches(&json!({"file_path": "a.txt", "content": "hello world"}))
///     .is_match());
/// ```
pub fn matches_fields(expected: BTreeMap<String, String>) -> FieldsMatcher {
    FieldsMatcher { expected }
}

/// The matcher returned by [`matches_fields`].
#[derive(Debug, Clone)]
pub struct FieldsMatcher {
    expected: BTreeMap<String, String>,
}

impl FieldsMatcher {
    // Braces keep the rendering well-formed when no fields are expected.
    fn field_list(&self) -> String {
        let fields: Vec<String> = self
            .expected
            .iter()
            .map(|(name, pattern)| format!("{}={}", name, describe(pattern)))
            .collect();
        format!("{{{}}}", fields.join(", "))
    }
}

impl Matcher<Value> for FieldsMatcher {
    fn matches(&self, actual: &Value) -> MatchResult {
        let matched = self.expected.iter().all(|(name, pattern)| {
            actual
                .get(name)
                .map(|value| pattern_matches(pattern, value))
                .unwrap_or(false)
        });
        MatchResult::when(matched, || format!("was: {}", describe(actual)))
    }

    fn description(&self) -> String {
        format!("has fields {}", self.field_list())
    }

    fn negated_description(&self) -> String {
        format!("does not have fields {}", self.field_list())
    }
}

/// String rendering used for pattern comparison: strings compare by their
/// content, everything else by its compact JSON form.
fn value_as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn pattern_matches(pattern: &str, value: &Value) -> bool {
    let actual = value_as_string(value);

    // Try glob pattern first
    if let Ok(glob) = Pattern::new(pattern) {
        if glob.matches(&actual) {
            return true;
        }
    }

    // Try regex
    if let Ok(re) = Regex::new(pattern) {
        if re.is_match(&actual) {
            return true;
        }
    }

    // Exact match fallback
    actual == pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_has_field() {
        let value = json!({"file_path": "/tmp/test.txt"});
        assert!(has_field("file_path").matches(&value).is_match());
        assert!(has_field("command").matches(&value).is_mismatch());
    }

    #[test]
    fn test_has_field_mismatch_describes_value() {
        assert_eq!(
            has_field("k").matches(&json!({"a": 1})),
            MatchResult::Mismatch("was: {\"a\":1}".to_string())
        );
    }

    #[test]
    fn test_field_matching_glob() {
        let m = has_field_matching("file_path", "*.env");
        assert!(m.matches(&json!({"file_path": ".env"})).is_match());
        assert!(m.matches(&json!({"file_path": "test.env"})).is_match());
        assert!(m.matches(&json!({"file_path": "test.txt"})).is_mismatch());
    }

    #[test]
    fn test_field_matching_regex() {
        let m = has_field_matching("command", r"^npm (install|i)$");
        assert!(m.matches(&json!({"command": "npm install"})).is_match());
        assert!(m.matches(&json!({"command": "npm i"})).is_match());
        assert!(m.matches(&json!({"command": "npm run"})).is_mismatch());
    }

    #[test]
    fn test_field_matching_exact_fallback() {
        let m = has_field_matching("file_path", "/tmp/test.txt");
        assert!(m.matches(&json!({"file_path": "/tmp/test.txt"})).is_match());
        assert!(m
            .matches(&json!({"file_path": "/tmp/other.txt"}))
            .is_mismatch());
    }

    #[test]
    fn test_field_matching_non_string_values() {
        let m = has_field_matching("count", "42");
        assert!(m.matches(&json!({"count": 42})).is_match());
        assert!(m.matches(&json!({"count": 43})).is_mismatch());
    }

    #[test]
    fn test_field_matching_missing_field() {
        let m = has_field_matching("other", ".*");
        assert!(m.matches(&json!({"key": "x"})).is_mismatch());
    }

    #[test]
    fn test_matches_fields() {
        let mut expected = BTreeMap::new();
        expected.insert("file_path".to_string(), "*.txt".to_string());
        expected.insert("content".to_string(), "hello.*".to_string());
        let m = matches_fields(expected);

        assert!(m
            .matches(&json!({"file_path": "test.txt", "content": "hello world"}))
            .is_match());
        assert!(m
            .matches(&json!({"file_path": "test.txt", "content": "goodbye"}))
            .is_mismatch());
    }

    #[test]
    fn test_matches_fields_description() {
        let mut expected = BTreeMap::new();
        expected.insert("file_path".to_string(), "*.txt".to_string());
        let m = matches_fields(expected);
        assert_eq!(m.description(), "has fields {file_path=\"*.txt\"}");
        assert_eq!(
            m.negated_description(),
            "does not have fields {file_path=\"*.txt\"}"
        );
    }

    #[test]
    fn test_matches_fields_with_no_expectations() {
        let m = matches_fields(BTreeMap::new());
        // No expectations to violate; everything matches vacuously.
        assert!(m.matches(&json!({"any": "object"})).is_match());
        assert!(m.matches(&json!(null)).is_match());
        assert_eq!(m.description(), "has fields {}");
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(has_field("k").description(), "has field \"k\"");
        assert_eq!(
            has_field("k").negated_description(),
            "does not have field \"k\""
        );
        assert_eq!(
            has_field_matching("k", "v.*").description(),
            "has field \"k\" matching \"v.*\""
        );
    }
}
