//! Map, filter, and reduce over ordered sequences.
//!
//! Reduction is a strict left fold with an explicit seed; the parallel
//! variant partitions the input with rayon and merges partial results with
//! a caller-supplied combiner. For an associative and commutative operation
//! both variants produce the same value.

use rayon::prelude::*;
use thiserror::Error;

/// Averaging requires at least one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot average an empty sequence")]
pub struct EmptyInput;

/// Map each element to a derived value, preserving order.
pub fn map_values<T, U>(items: &[T], f: impl Fn(&T) -> U) -> Vec<U> {
    items.iter().map(f).collect()
}

/// Keep the elements passing the predicate, preserving relative order.
pub fn filter_values<T: Clone>(items: &[T], predicate: impl Fn(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Left-to-right fold with an explicit seed.
///
/// An empty input returns the seed unchanged.
pub fn reduce<T, U>(items: impl IntoIterator<Item = T>, seed: U, op: impl Fn(U, T) -> U) -> U {
    items.into_iter().fold(seed, op)
}

/// Partitioned reduction: rayon folds independent partitions starting from
/// `identity`, then merges the partial results with `combine`.
pub fn par_reduce<T, U>(
    items: &[T],
    identity: impl Fn() -> U + Sync + Send,
    op: impl Fn(U, &T) -> U + Sync + Send,
    combine: impl Fn(U, U) -> U + Sync + Send,
) -> U
where
    T: Sync,
    U: Send,
{
    items
        .par_iter()
        .fold(&identity, |acc, item| op(acc, item))
        .reduce(&identity, combine)
}

/// Arithmetic mean of a sequence, or [`EmptyInput`] when there is nothing
/// to average.
pub fn average_of(values: impl IntoIterator<Item = i64>) -> Result<f64, EmptyInput> {
    let (sum, count) = values
        .into_iter()
        .fold((0i64, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return Err(EmptyInput);
    }
    Ok(sum as f64 / count as f64)
}

/// Cross product of two lists as (left, right) pairs, left-major order.
pub fn cross_pairs<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(A, B)> {
    left.iter()
        .flat_map(|a| right.iter().map(move |b| (a.clone(), b.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sum_reduce() {
        let numbers = vec![1, 2, 3, 4, 5, 6];
        let result = reduce(numbers, 0, |acc, n| acc + n);
        assert_eq!(result, 21);
    }

    #[test]
    fn test_sum_reduce_parallel() {
        let numbers = vec![1, 2, 3, 4, 5, 6];
        let result = par_reduce(&numbers, || 0, |acc, &n| acc + n, |a, b| a + b);
        assert_eq!(result, 21);
    }

    #[test]
    fn empty_reduce_returns_seed() {
        let result = reduce(Vec::<i32>::new(), 42, |acc, n| acc + n);
        assert_eq!(result, 42);
    }

    #[test]
    fn map_and_filter_preserve_order() {
        let doubled = map_values(&[1, 2, 3], |n| n * 2);
        assert_eq!(doubled, vec![2, 4, 6]);

        let odd = filter_values(&[1, 2, 3, 4, 5], |n| n % 2 == 1);
        assert_eq!(odd, vec![1, 3, 5]);
    }

    #[test]
    fn average_of_empty_is_an_error() {
        assert_eq!(average_of([]), Err(EmptyInput));
        assert_eq!(average_of([21, 23, 25]), Ok(23.0));
    }

    #[test]
    fn cross_pairs_is_left_major() {
        let pairs = cross_pairs(&["John", "Mary"], &["Java", "Python"]);
        assert_eq!(
            pairs,
            vec![
                ("John", "Java"),
                ("John", "Python"),
                ("Mary", "Java"),
                ("Mary", "Python"),
            ]
        );
    }

    proptest! {
        #[test]
        fn parallel_sum_matches_sequential(values: Vec<i32>) {
            let sequential = reduce(values.iter().map(|&v| v as i64), 0i64, |acc, v| acc + v);
            let parallel = par_reduce(
                &values,
                || 0i64,
                |acc, &v| acc + v as i64,
                |a, b| a + b,
            );
            prop_assert_eq!(sequential, parallel);
        }
    }
}
