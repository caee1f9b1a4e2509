//! Turning code identifiers into readable description phrases.
//!
//! Primitive matchers are constructed from a named predicate; the name is a
//! code identifier such as `isBlank` or `has_size`. This module converts such
//! identifiers into the prose used in matcher descriptions (`"is blank"`) and
//! into a grammatically sensible negation (`"is not blank"`).

/// Split an identifier into lowercase words.
///
/// A new word starts at a camelCase boundary (lowercase letter followed by an
/// uppercase letter) or wherever letter-ness changes between adjacent
/// characters, so digits start a new word and underscores act as dropped
/// separators.
///
/// # Example
///
/// ```rust
/// use attest::identifier_to_words;
///
/// assert_eq!(identifier_to_words("anIdentifier"), ["an", "identifier"]);
/// assert_eq!(identifier_to_words("an_identifier"), ["an", "identifier"]);
/// assert_eq!(identifier_to_words("farenheit451"), ["farenheit", "451"]);
/// ```
///
/// # Panics
///
/// Panics if `identifier` is empty.
pub fn identifier_to_words(identifier: &str) -> Vec<String> {
    assert!(!identifier.is_empty(), "identifier must not be empty");

    let mut words = Vec::new();
    let mut buf = String::new();
    let mut prev = identifier.chars().next().unwrap_or_default();

    for c in identifier.chars() {
        if is_word_start(prev, c) && !buf.is_empty() {
            words.push(std::mem::take(&mut buf));
        }
        if c.is_alphanumeric() {
            buf.extend(c.to_lowercase());
        }
        prev = c;
    }

    if !buf.is_empty() || words.is_empty() {
        words.push(buf);
    }

    words
}

fn is_word_start(prev: char, c: char) -> bool {
    c.is_alphabetic() != prev.is_alphabetic() || (prev.is_lowercase() && c.is_uppercase())
}

/// Convert an identifier into a description phrase: `"isBlank"` -> `"is blank"`.
///
/// # Panics
///
/// Panics if `identifier` is empty.
pub fn identifier_to_description(identifier: &str) -> String {
    identifier_to_words(identifier).join(" ")
}

/// Convert an identifier into a negated description phrase.
///
/// The first word decides the phrasing, to avoid clunky "not is"/"not has"
/// prose: `"isBlank"` -> `"is not blank"`, `"hasSize"` -> `"does not have
/// size"`, anything else -> `"not <words>"`.
///
/// # Panics
///
/// Panics if `identifier` is empty.
pub fn identifier_to_negated_description(identifier: &str) -> String {
    let words = identifier_to_words(identifier);
    let rest = words[1..].join(" ");

    match words[0].as_str() {
        "is" => format!("is not {}", rest),
        "has" => format!("does not have {}", rest),
        first => format!("not {} {}", first, rest),
    }
}
