//! Pattern 3: Building Iterators
//! Example: Counting Lines of a Text File
//!
//! Run with: cargo run --bin p3_lines_from_file

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Count lines without holding the whole file in memory. The file handle
/// is released on every exit path, including read failure.
fn count_lines(path: &Path) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut count = 0;
    for line in BufReader::new(file).lines() {
        line.with_context(|| format!("reading {}", path.display()))?;
        count += 1;
    }
    Ok(count)
}

fn main() {
    println!("=== Counting Lines of a Text File ===\n");

    let path = Path::new("data").join("200words.txt");
    match count_lines(&path) {
        Ok(count) => println!("Count = {}", count),
        Err(e) => println!("Error: {:#}", e),
    }

    // A missing file is the only I/O failure mode here; it is reported,
    // not retried.
    let missing = Path::new("data").join("no_such_file.txt");
    match count_lines(&missing) {
        Ok(count) => println!("Count = {}", count),
        Err(e) => println!("Error (expected): {:#}", e),
    }
}
