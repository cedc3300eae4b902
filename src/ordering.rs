//! Comparator composition: key extractors, tie-break fallthrough, and
//! reversal.
//!
//! The combinators return ordinary comparison closures for use with the
//! standard stable sorts (`sort_by`, `sorted_by`).

use std::cmp::Ordering;

/// Ordering derived from a key-extraction function.
pub fn comparing<T, K: Ord>(key: impl Fn(&T) -> K) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| key(a).cmp(&key(b))
}

/// Compare by `first`; on a tie, fall through to `second`.
pub fn then_comparing<T>(
    first: impl Fn(&T, &T) -> Ordering,
    second: impl Fn(&T, &T) -> Ordering,
) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| first(a, b).then_with(|| second(a, b))
}

/// Invert the final result of a comparator, not each component.
pub fn reversed<T>(cmp: impl Fn(&T, &T) -> Ordering) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| cmp(a, b).reverse()
}
