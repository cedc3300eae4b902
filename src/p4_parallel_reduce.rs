//! Pattern 4: Reduction
//! Example: Sequential vs Partitioned Reduction
//!
//! Run with: cargo run --bin p4_parallel_reduce

use functional_pipelines::pipeline::{par_reduce, reduce};

fn main() {
    println!("=== Sequential Reduction ===\n");

    let numbers = vec![1, 2, 3, 4, 5, 6];

    // Left fold from an explicit seed.
    let sum = reduce(numbers.iter().copied(), 0, |acc, n| acc + n);
    println!("reduce({:?}, 0, +) = {}", numbers, sum);
    assert_eq!(sum, 21);

    // An empty input returns the seed unchanged.
    let empty_sum = reduce(std::iter::empty::<i32>(), 0, |acc, n| acc + n);
    println!("reduce([], 0, +) = {}", empty_sum);

    println!("\n=== Partitioned Reduction ===\n");

    // Partitions fold independently from the identity, then partial
    // results merge with the combiner. Addition is associative and
    // commutative, so the result matches the sequential fold.
    let parallel_sum = par_reduce(&numbers, || 0, |acc, &n| acc + n, |a, b| a + b);
    println!("par_reduce({:?}, 0, +, +) = {}", numbers, parallel_sum);
    assert_eq!(parallel_sum, sum);

    // The same machinery scales to inputs worth partitioning.
    let large: Vec<i64> = (1..=1_000_000).collect();
    let large_sum = par_reduce(&large, || 0i64, |acc, &n| acc + n, |a, b| a + b);
    println!("Sum of 1..=1_000_000 = {}", large_sum);
    assert_eq!(large_sum, 500_000_500_000);

    println!("\n=== Key Points ===");
    println!("1. reduce needs a seed and a binary combiner");
    println!("2. par_reduce additionally needs a partial-result merger");
    println!("3. Results agree when the operation is associative and commutative");
}
