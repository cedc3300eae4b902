//! Pattern 1: Closures and Function Values
//! Example: Predicate, Function, and Consumer Roles
//!
//! Run with: cargo run --bin p1_predicate_consumer

use functional_pipelines::model::Student;

fn main() {
    println!("=== Predicate, Function, Consumer ===\n");

    let students = vec![
        Student::new("John", 18),
        Student::new("Mary", 16),
        Student::new("Thomas", 21),
        Student::new("Rahul", 23),
        Student::new("Jenny", 17),
        Student::new("Tatiana", 25),
    ];

    println!("1. Print all students using a consumer~>");
    let print_student = |student: &Student| println!("{:?}", student);
    students.iter().for_each(print_student);
    println!("----------------------");

    println!("2. Print all student names using a function and a consumer~>");
    // A function value maps each record to a derived value.
    let to_name = |student: &Student| student.name().to_string();
    let mut names: Vec<String> = Vec::new();
    students.iter().for_each(|student| {
        let name = to_name(student);
        names.push(name);
    });
    names.iter().for_each(|name| println!("{}", name));
    println!("----------------------");

    println!("3. Print student names starting with 'T' using a predicate~>");
    let starts_with_t = |name: &String| name.starts_with('T');
    names.retain(starts_with_t);
    names.iter().for_each(|name| println!("{}", name));
    // Thomas
    // Tatiana
    println!("----------------------");
}
