//! Pattern 3: Building Iterators
//! Example: take_while and skip_while
//!
//! Run with: cargo run --bin p3_take_drop_while

fn main() {
    println!("=== take_while ===\n");

    let numbers = [4, 4, 4, 5, 6, 7, 8, 9, 10];

    // Takes the leading run where n / 4 == 1, stops at the first failure.
    numbers
        .iter()
        .take_while(|&&n| n / 4 == 1)
        .for_each(|n| print!("{} ", n));
    println!();
    // 4 4 4 5 6 7

    println!("\n=== skip_while ===\n");

    // Drops the same leading run, keeps everything after it.
    numbers
        .iter()
        .skip_while(|&&n| n / 4 == 1)
        .for_each(|n| print!("{} ", n));
    println!();
    // 8 9 10

    println!("\n=== Key Points ===");
    println!("1. Both stop testing the predicate after the first boundary");
    println!("2. take_while + skip_while with the same predicate split a sequence");
}
