//! Pattern 3: Building Iterators
//! Example: Iterators from Arrays, Strings, and Regex Splits
//!
//! Run with: cargo run --bin p3_iterator_sources

use functional_pipelines::model::Student;
use itertools::Itertools;
use regex::Regex;

fn main() {
    println!("=== Iterator from an Array ===\n");

    let students = [
        Student::new("John", 18),
        Student::new("Mary", 16),
        Student::new("Thomas", 21),
        Student::new("Rahul", 23),
        Student::new("Jenny", 17),
        Student::new("Tatiana", 25),
    ];

    // 1. Borrowing iterator over the array.
    students.iter().for_each(|s| println!("{:?}", s));

    println!("-----------------------------");

    // 2. Consuming iterator, same order.
    students.into_iter().for_each(|s| println!("{:?}", s));

    println!("\n=== Iterator from a String ===\n");

    let sentence = "Life is like riding a bicycle. To keep your balance, you must keep moving.";

    // Distinct sorted characters of the sentence, spaces dropped.
    let distinct_sorted: String = sentence
        .chars()
        .filter(|c| *c != ' ')
        .unique()
        .sorted()
        .collect();
    println!("{}", distinct_sorted);

    println!("\n=== Iterator from a Regex Split ===\n");

    let whitespace = Regex::new(r"\s").unwrap();
    let count = whitespace.split(sentence).count();
    println!("Count = {}", count);
    assert_eq!(count, 14);
}
