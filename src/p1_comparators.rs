//! Pattern 1: Closures and Function Values
//! Example: Combining Comparators and Key Extractors
//!
//! Run with: cargo run --bin p1_comparators

use functional_pipelines::model::Student;
use functional_pipelines::ordering::{comparing, reversed, then_comparing};

fn main() {
    println!("=== Combining Comparators ===\n");

    let mut students = vec![
        Student::new("John", 18),
        Student::new("Mary", 16),
        Student::new("Thomas", 21),
        Student::new("Rahul", 23),
        Student::new("Jenny", 17),
        Student::new("Tatiana", 25),
        Student::new("John", 19),
    ];

    let mut student_names: Vec<String> =
        students.iter().map(|s| s.name().to_string()).collect();

    student_names.sort_by(|a, b| a.cmp(b));
    println!("Sorted student names as natural ordering: {:?}", student_names);

    // Combining a comparator with a key extractor.
    let by_length = comparing(|name: &String| name.len());
    student_names.sort_by(by_length);
    println!("Sorted student names by length: {:?}", student_names);
    println!("-------------------------");

    // Comparator chaining: name first, age breaks the tie, then the whole
    // composite reversed (not each component independently).
    let by_name = comparing(|s: &Student| s.name().to_string());
    let by_age = comparing(|s: &Student| s.age());
    let by_name_then_age = then_comparing(by_name, by_age);

    students.sort_by(reversed(by_name_then_age));
    println!("Students sorted by 'name' then 'age', descending~>");
    students.iter().for_each(|s| println!("{:?}", s));
    // The two Johns tie on name; John aged 19 comes before John aged 18.
    println!("-------------------------");
}
