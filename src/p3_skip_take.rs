//! Pattern 3: Building Iterators
//! Example: Skipping and Limiting
//!
//! Run with: cargo run --bin p3_skip_take

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

fn middle_lines(path: &Path, skip: usize, take: usize) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(content
        .lines()
        .skip(skip)
        .take(take)
        .map(str::to_string)
        .collect())
}

fn main() {
    println!("=== Skip and Take on a Range ===\n");

    (0..30)
        .skip(10)
        .take(10)
        .for_each(|index| print!("{} ", index));
    println!();
    // 10 11 12 13 14 15 16 17 18 19

    println!("\n=== Skip and Take on File Lines ===\n");

    // Read failure is reported here, not propagated further.
    let path = Path::new("data").join("200words.txt");
    match middle_lines(&path, 20, 10) {
        Ok(lines) => lines.iter().for_each(|line| println!("{}", line)),
        Err(e) => println!("Error: {:#}", e),
    }
}
