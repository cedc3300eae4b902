//! Pattern 2: Map, Filter, Reduce
//! Example: Cross Product with flat_map
//!
//! Run with: cargo run --bin p2_flat_map_pairs

use functional_pipelines::pipeline::cross_pairs;

fn main() {
    println!("=== Cross Product with flat_map ===\n");

    let students = ["John", "Mary", "Peter"];
    let favorite_languages = ["Java", "Python"];

    // Every (student, language) pair, student-major order.
    let pairs = cross_pairs(&students, &favorite_languages);
    pairs
        .iter()
        .for_each(|(student, language)| println!("({},{})", student, language));
    // (John,Java)
    // (John,Python)
    // (Mary,Java)
    // (Mary,Python)
    // (Peter,Java)
    // (Peter,Python)

    assert_eq!(pairs.len(), students.len() * favorite_languages.len());
}
