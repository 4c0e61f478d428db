//! Reusable predicates shared by every view.
//!
//! Each predicate tests one attribute against one filter value. They are
//! total: any input yields a boolean, and a wildcard filter value always
//! yields `true`.

use rust_decimal::Decimal;

/// Selector value meaning "no restriction".
pub const WILDCARD: &str = "all";

/// Whether a categorical selector imposes no restriction.
#[must_use]
pub fn is_wildcard(selected: &str) -> bool {
    selected.is_empty() || selected.eq_ignore_ascii_case(WILDCARD)
}

/// Case-insensitive substring search over one or more label fields.
///
/// Matches when any field contains `term`. An empty term matches everything.
#[must_use]
pub fn matches_search(fields: &[&str], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact categorical match with wildcard semantics.
#[must_use]
pub fn matches_categorical(value: &str, selected: &str) -> bool {
    is_wildcard(selected) || value == selected
}

/// Categorical match that ignores case, e.g. `"crypto"` selects `"Crypto"`.
#[must_use]
pub fn matches_categorical_ignore_case(value: &str, selected: &str) -> bool {
    is_wildcard(selected) || value.to_lowercase() == selected.to_lowercase()
}

/// `value >= threshold`. A threshold of zero or below is unset.
#[must_use]
pub fn matches_numeric_floor(value: Decimal, threshold: Decimal) -> bool {
    threshold <= Decimal::ZERO || value >= threshold
}

/// Exact match against an enumerated selection; `None` matches all.
#[must_use]
pub fn matches_enum<E: PartialEq>(value: &E, selected: Option<&E>) -> bool {
    selected.map_or(true, |wanted| value == wanted)
}
