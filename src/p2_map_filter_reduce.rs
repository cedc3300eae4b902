//! Pattern 2: Map, Filter, Reduce
//! Example: Counting and Flattening Student Records
//!
//! Run with: cargo run --bin p2_map_filter_reduce

use functional_pipelines::model::{Course, Student};
use functional_pipelines::pipeline::{filter_values, map_values};

fn main() {
    println!("=== Map, Filter, Count ===\n");

    let john = Student::new("John", 18);
    let mary = Student::new("Mary", 16);
    let thomas = Student::new("Thomas", 21);
    let rahul = Student::new("Rahul", 23);
    let jenny = Student::new("Jenny", 17);
    let tatiana = Student::new("Tatiana", 25);

    let students = vec![
        john.clone(),
        mary.clone(),
        thomas.clone(),
        rahul.clone(),
        jenny.clone(),
        tatiana.clone(),
    ];

    let older_than_20 = students
        .iter()
        .map(|student| student.age())
        .filter(|&age| age >= 20)
        .count();
    println!("Total no of students older than 20 years of age: {}", older_than_20);
    assert_eq!(older_than_20, 3);

    let less_than_20 = students
        .iter()
        .map(|student| student.age())
        .filter(|&age| age < 20)
        .count();
    println!("Total no of students less than 20 years of age: {}", less_than_20);

    // The same pipeline through the toolkit functions.
    let ages = map_values(&students, |student| student.age());
    let older = filter_values(&ages, |&age| age >= 20);
    println!("Ages 20 and over: {:?}", older);
    assert_eq!(older.len(), older_than_20);

    println!("\n=== Flat Map Over Course Rosters ===\n");

    let advanced_java = Course::new("Advanced Java", vec![john, mary]);
    let python = Course::new("Python", vec![thomas, rahul]);
    let algorithms = Course::new("Algorithms", vec![jenny, tatiana]);

    let courses = vec![advanced_java, python, algorithms];
    courses
        .iter()
        .flat_map(|course| course.students().iter())
        .map(|student| student.name())
        .for_each(|name| println!("{}", name));
}
