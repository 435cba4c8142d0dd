//! The closed set of transaction category labels.
//!
//! Membership is case-insensitive, but callers always receive the canonical
//! casing defined here. Anything outside the set resolves to
//! [`DEFAULT_CATEGORY`].

/// Labels the categorizer is allowed to return.
pub const ALLOWED_CATEGORIES: [&str; 7] = [
    "Misc",
    "Food",
    "Salary",
    "Shopping",
    "Electronics",
    "Restaurants",
    "Transport",
];

/// Fallback label when the model answers outside the allow-list.
pub const DEFAULT_CATEGORY: &str = "Misc";

/// Resolve a label against the allow-list, case-insensitively.
///
/// Returns the canonical casing on a match, `None` otherwise.
pub fn canonical_category(label: &str) -> Option<&'static str> {
    ALLOWED_CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(label))
        .copied()
}
