//! Building blocks for cross-field rules.

use crate::document::FieldValues;

/// Whether `key` holds a case-insensitive `true`.
pub fn is_enabled(values: &FieldValues, key: &str) -> bool {
    values.resolved(key).eq_ignore_ascii_case("true")
}

/// Whether `key` equals `expected`, ignoring ASCII case.
pub fn equals(values: &FieldValues, key: &str, expected: &str) -> bool {
    values.resolved(key).eq_ignore_ascii_case(expected)
}

/// `"<key> is required <condition>"` for every empty key, in order.
pub fn require_all(values: &FieldValues, keys: &[&str], condition: &str) -> Vec<String> {
    keys.iter()
        .filter(|key| values.resolved(key).is_empty())
        .map(|key| format!("{} is required {}", key, condition))
        .collect()
}
