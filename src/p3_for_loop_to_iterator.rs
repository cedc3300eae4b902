//! Pattern 3: Building Iterators
//! Example: Migrating a For Loop to an Iterator Chain
//!
//! Run with: cargo run --bin p3_for_loop_to_iterator

use functional_pipelines::model::Student;
use functional_pipelines::pipeline::average_of;

/// For-loop version. Sum and count are integers, so the division truncates;
/// that behavior is part of this example and intentionally differs from the
/// iterator version below.
fn average_age_using_for_loop(students: &[Student]) -> f64 {
    let mut average = 0.0;
    let mut sum: u32 = 0;
    let mut count: u32 = 0;
    for student in students {
        if student.age() > 20 {
            count += 1;
            sum += student.age();
        }
    }
    if count > 0 {
        average = (sum / count) as f64;
    }
    average
}

/// Iterator version: floating-point average of the ages over 20.
fn average_age_using_iterators(students: &[Student]) -> f64 {
    average_of(
        students
            .iter()
            .map(|student| i64::from(student.age()))
            .filter(|&age| age > 20),
    )
    .expect("at least one student is older than 20")
}

fn main() {
    println!("=== For Loop to Iterator ===\n");

    let students = vec![
        Student::new("John", 18),
        Student::new("Mary", 16),
        Student::new("Thomas", 21),
        Student::new("Rahul", 23),
        Student::new("Jenny", 17),
        Student::new("Tatiana", 25),
    ];

    // Ages over 20 are 21, 23, 25: integer division gives 69 / 3 = 23,
    // floating point gives 23.00 as well; with other data the two results
    // can differ in the fractional part.
    let average_for_loop = average_age_using_for_loop(&students);
    println!("Average age using for-loop = {:.2}", average_for_loop);

    let average_iterators = average_age_using_iterators(&students);
    println!("Average age using iterators = {:.2}", average_iterators);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncating_and_floating_averages_diverge() {
        // 21 + 22 = 43; integer division gives 21, floating point 21.5.
        let students = vec![Student::new("A", 21), Student::new("B", 22)];
        assert_eq!(average_age_using_for_loop(&students), 21.0);
        assert_eq!(average_age_using_iterators(&students), 21.5);
    }
}
