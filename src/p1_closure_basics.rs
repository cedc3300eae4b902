//! Pattern 1: Closures and Function Values
//! Example: Supplier and Consumer Basics
//!
//! Run with: cargo run --bin p1_closure_basics

use functional_pipelines::compose::compose;

fn main() {
    println!("=== Supplier and Consumer ===\n");

    // A supplier produces a value on demand.
    let supplier = || "Hello Students!!".to_string();
    println!("{}", supplier());

    // A consumer is called for its side effect only.
    let consumer = |s: &str| {
        println!("{}", s.to_uppercase());
        println!("{}", s.to_lowercase());
    };
    consumer(&supplier());

    println!("\n=== Primitive-Typed Closures ===");

    // Closures over primitives need no boxing of any kind.
    let supply_count = || 10u64;
    let i = supply_count();
    println!("i = {}", i);

    let ceil_to_int = |value: f64| value.ceil() as i32;
    let pi = ceil_to_int(std::f64::consts::PI);
    println!("PI rounded up = {}", pi);
    assert_eq!(pi, 4);

    println!("\n=== Composing Functions ===");

    // compose(f, g) applies f, then g.
    let trim: fn(&str) -> &str = |s| s.trim();
    let word_count = |s: &str| s.split_whitespace().count();
    let trimmed_word_count = compose(trim, word_count);
    println!(
        "Words in '  Hello Students!!  ' = {}",
        trimmed_word_count("  Hello Students!!  ")
    );

    println!("\n=== Key Points ===");
    println!("1. A closure with no arguments acts as a supplier");
    println!("2. A closure returning () acts as a consumer");
    println!("3. Function values are first-class: store, pass, and call them");
}
