//! Collectors: grouping, partitioning, joining, and summarizing.
//!
//! Groups are kept in an [`IndexMap`] so both the group keys and the
//! members inside each group stay in first-seen order, which keeps demo
//! output deterministic.

use indexmap::IndexMap;
use itertools::Itertools;
use std::fmt::Display;
use std::hash::Hash;

/// Bucket elements by a derived key, preserving member order per group.
pub fn group_by<T, K>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
) -> IndexMap<K, Vec<T>>
where
    K: Hash + Eq,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Count members per group without retaining them.
pub fn group_by_counting<T, K>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
) -> IndexMap<K, usize>
where
    K: Hash + Eq,
{
    let mut counts: IndexMap<K, usize> = IndexMap::new();
    for item in items {
        *counts.entry(key(&item)).or_insert(0) += 1;
    }
    counts
}

/// Fold each group into an aggregate instead of materializing members.
pub fn group_by_fold<T, K, A>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
    init: impl Fn() -> A,
    fold: impl Fn(A, T) -> A,
) -> IndexMap<K, A>
where
    K: Hash + Eq,
{
    let mut groups: IndexMap<K, A> = IndexMap::new();
    for item in items {
        let slot = groups.entry(key(&item)).or_insert_with(&init);
        let acc = std::mem::replace(slot, init());
        *slot = fold(acc, item);
    }
    groups
}

/// The two-bucket special case of grouping: both buckets are always
/// present, even when one is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition<T> {
    /// Elements for which the predicate returned true.
    pub matching: Vec<T>,
    /// Everything else, in original relative order.
    pub rest: Vec<T>,
}

/// Split elements into the two buckets of a boolean predicate.
pub fn partition_by<T>(
    items: impl IntoIterator<Item = T>,
    predicate: impl Fn(&T) -> bool,
) -> Partition<T> {
    let mut partition = Partition {
        matching: Vec::new(),
        rest: Vec::new(),
    };
    for item in items {
        if predicate(&item) {
            partition.matching.push(item);
        } else {
            partition.rest.push(item);
        }
    }
    partition
}

/// Join the display form of each element with a separator.
pub fn joining<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items.into_iter().join(separator)
}

/// Count the elements of a sequence.
pub fn counting<T>(items: impl IntoIterator<Item = T>) -> usize {
    items.into_iter().count()
}

/// One-pass count/sum/min/max statistics over derived integer values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub sum: i64,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Summary {
    pub fn record(&mut self, value: i64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    /// Mean of the recorded values; `None` when nothing was recorded.
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum as f64 / self.count as f64)
    }
}

/// Summarize a sequence through a value-extraction function.
pub fn summarizing<T>(items: impl IntoIterator<Item = T>, value: impl Fn(&T) -> i64) -> Summary {
    let mut summary = Summary::default();
    for item in items {
        summary.record(value(&item));
    }
    summary
}

/// Build a key → value lookup from a sequence.
///
/// A duplicate key keeps its first value; supply unique keys when the
/// distinction matters.
pub fn to_lookup<T, K, V>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
    value: impl Fn(&T) -> V,
) -> IndexMap<K, V>
where
    K: Hash + Eq,
{
    let mut lookup = IndexMap::new();
    for item in items {
        lookup.entry(key(&item)).or_insert_with(|| value(&item));
    }
    lookup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudentWithCourse;

    fn enrolled() -> Vec<StudentWithCourse> {
        vec![
            StudentWithCourse::new("John", 18, "Python"),
            StudentWithCourse::new("Mary", 16, "Java"),
            StudentWithCourse::new("Thomas", 21, "Java"),
            StudentWithCourse::new("Rahul", 23, "JavaScript"),
            StudentWithCourse::new("Jenny", 17, "Python"),
            StudentWithCourse::new("Tatiana", 25, "Java"),
        ]
    }

    #[test]
    fn groups_students_per_course() {
        let groups = group_by(enrolled(), |s| s.course().to_string());

        assert_eq!(groups["Java"].len(), 3);
        assert_eq!(groups["Python"].len(), 2);
        assert_eq!(groups["JavaScript"].len(), 1);

        // Members keep first-seen order within their group.
        let java_names: Vec<&str> = groups["Java"].iter().map(|s| s.name()).collect();
        assert_eq!(java_names, vec!["Mary", "Thomas", "Tatiana"]);
    }

    #[test]
    fn counting_variant_matches_group_sizes() {
        let counts = group_by_counting(enrolled(), |s| s.course().to_string());
        assert_eq!(counts["Java"], 3);
        assert_eq!(counts["Python"], 2);
        assert_eq!(counts["JavaScript"], 1);
    }

    #[test]
    fn group_fold_sums_ages_per_course() {
        let age_sums = group_by_fold(
            enrolled(),
            |s| s.course().to_string(),
            || 0i64,
            |acc, s| acc + i64::from(s.age()),
        );
        assert_eq!(age_sums["Java"], 16 + 21 + 25);
        assert_eq!(age_sums["Python"], 18 + 17);
        assert_eq!(age_sums["JavaScript"], 23);
    }

    #[test]
    fn partitions_by_age() {
        let partition = partition_by(enrolled(), |s| s.age() > 20);

        let older: Vec<u32> = partition.matching.iter().map(|s| s.age()).collect();
        let younger: Vec<u32> = partition.rest.iter().map(|s| s.age()).collect();
        assert_eq!(older, vec![21, 23, 25]);
        assert_eq!(younger, vec![18, 16, 17]);
    }

    #[test]
    fn both_buckets_exist_when_one_is_empty() {
        let partition = partition_by(vec![1, 2, 3], |&n| n > 10);
        assert!(partition.matching.is_empty());
        assert_eq!(partition.rest, vec![1, 2, 3]);
    }

    #[test]
    fn joins_names_with_separator() {
        let names = ["John", "Mary", "Thomas"];
        assert_eq!(joining(names, " "), "John Mary Thomas");
    }

    #[test]
    fn summarizes_ages_in_one_pass() {
        let summary = summarizing(enrolled(), |s| i64::from(s.age()));
        assert_eq!(summary.count, 6);
        assert_eq!(summary.sum, 120);
        assert_eq!(summary.min, Some(16));
        assert_eq!(summary.max, Some(25));
        assert_eq!(summary.average(), Some(20.0));

        assert_eq!(summarizing(Vec::<i32>::new(), |&n| i64::from(n)).average(), None);
    }

    #[test]
    fn lookup_keeps_first_value_for_duplicate_keys() {
        let lookup = to_lookup(["John", "Mary", "John"], |s| s.to_string(), |s| s.len());
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup["John"], 4);
    }
}
