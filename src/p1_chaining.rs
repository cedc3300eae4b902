//! Pattern 1: Closures and Function Values
//! Example: Chaining Predicates and Consumers
//!
//! Run with: cargo run --bin p1_chaining

use functional_pipelines::compose::{and, and_then, not};

fn main() {
    println!("=== Chaining Predicates ===\n");

    // Absence is an explicit None, not a null reference.
    let is_null = |s: &Option<&str>| s.is_none();
    println!("Using 'is_null' predicate~>");
    println!("For None = {}", is_null(&None));
    println!("For 'Hello Students' = {}", is_null(&Some("Hello Students")));
    println!("------------------------");

    let is_empty = |s: &Option<&str>| s.is_some_and(|v| v.is_empty());
    println!("Using 'is_empty' predicate~>");
    println!("For empty = {}", is_empty(&Some("")));
    println!("For 'Hello Students' = {}", is_empty(&Some("Hello Students")));
    println!("------------------------");

    // Combine: not(is_null) AND not(is_empty), short-circuit left to right.
    let is_not_null_or_empty = and(not(is_null), not(is_empty));
    println!("Using combined 'is_not_null_or_empty' predicate~>");
    println!("For None = {}", is_not_null_or_empty(&None));
    println!("For empty = {}", is_not_null_or_empty(&Some("")));
    println!(
        "For 'Hello Students' = {}",
        is_not_null_or_empty(&Some("Hello Students"))
    );
    // false, false, true
    println!("------------------------");

    println!("\n=== Sequencing Consumers ===\n");

    let c1 = |s: &str| println!("c1 consumer prints as upper case: {}", s.to_uppercase());
    let c2 = |s: &str| println!("c2 consumer prints as lower case: {}", s.to_lowercase());

    // c1 runs first, then c2, both on the unmodified input.
    let c3 = and_then(c1, c2);
    println!("Using sequenced consumer~>");
    c3("Hello Students");
    println!("------------------------");
}
