//! Pattern 5: Collectors
//! Example: Collecting into Containers and Aggregates
//!
//! Run with: cargo run --bin p5_collectors

use functional_pipelines::collect::{counting, joining, partition_by, summarizing, to_lookup};
use functional_pipelines::model::Student;
use std::collections::{BTreeSet, HashSet, VecDeque};

fn main() {
    println!("=== Collecting into Containers ===\n");

    let students = vec![
        Student::new("John", 18),
        Student::new("Mary", 16),
        Student::new("Thomas", 21),
        Student::new("Rahul", 23),
        Student::new("Jenny", 17),
        Student::new("Tatiana", 25),
    ];

    // Into a Vec, order preserved.
    let names: Vec<String> = students.iter().map(|s| s.name().to_string()).collect();
    println!("Vec:      {:?}", names);

    // Into sets: HashSet drops duplicates, BTreeSet also sorts.
    let name_set: HashSet<&str> = students.iter().map(|s| s.name()).collect();
    let sorted_names: BTreeSet<&str> = students.iter().map(|s| s.name()).collect();
    println!("HashSet:  {} distinct names", name_set.len());
    println!("BTreeSet: {:?}", sorted_names);

    // Into an arbitrary collection.
    let deque: VecDeque<&str> = students.iter().map(|s| s.name()).collect();
    println!("VecDeque: {:?}", deque);

    // Into a lookup: name -> name length.
    let name_lengths = to_lookup(names.iter(), |n| n.to_string(), |n| n.len());
    println!("Lookup:   {:?}", name_lengths);

    println!("\n=== Aggregating Collectors ===\n");

    let joined = joining(students.iter().map(|s| s.name()), " ");
    println!("Joined:  {}", joined);
    // John Mary Thomas Rahul Jenny Tatiana

    println!("Count:   {}", counting(students.iter()));

    let ages = summarizing(students.iter(), |s| i64::from(s.age()));
    println!("Sum:     {}", ages.sum);
    println!("Min:     {:?}", ages.min);
    println!("Max:     {:?}", ages.max);
    println!("Average: {:?}", ages.average());

    let max_age = students.iter().map(|s| s.age()).max();
    println!("Max by natural order: {:?}", max_age);

    println!("\n=== Partitioning ===\n");

    let by_age = partition_by(students, |s| s.age() > 20);
    println!("Older than 20:");
    by_age.matching.iter().for_each(|s| println!("  {:?}", s));
    println!("20 or younger:");
    by_age.rest.iter().for_each(|s| println!("  {:?}", s));
}
