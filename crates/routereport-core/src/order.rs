//! Deterministic route ordering.
//!
//! Records are sorted by path with a locale-aware comparison rather
//! than raw byte order, so the listing reads naturally: the primary
//! pass is case-insensitive, and only equal-ignoring-case paths fall
//! back to a case tie-break (lowercase first, matching en collation).
//! The sort is stable, so routes sharing a path keep their registration
//! order. There is no secondary sort key.

use std::cmp::Ordering;

use crate::record::RouteRecord;

/// Locale-aware string comparison.
///
/// Primary: case-insensitive, using the full `char::to_lowercase`
/// expansion. Secondary (only when the primary pass ties): lowercase
/// sorts before uppercase at the first differing character. Final tie
/// on character count.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }

    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            return match (ca.is_uppercase(), cb.is_uppercase()) {
                (false, true) => Ordering::Less,
                (true, false) => Ordering::Greater,
                _ => ca.cmp(&cb),
            };
        }
    }
    a.chars().count().cmp(&b.chars().count())
}

/// Stable-sort records by path.
pub fn sort_records(records: &mut [RouteRecord]) {
    records.sort_by(|a, b| locale_cmp(&a.path, &b.path));
}
