//! Pattern 5: Collectors
//! Example: Grouping by a Derived Key
//!
//! Run with: cargo run --bin p5_grouping

use functional_pipelines::collect::{group_by, group_by_counting, group_by_fold};
use functional_pipelines::model::StudentWithCourse;

fn main() {
    println!("=== Grouping Students by Course ===\n");

    let students = vec![
        StudentWithCourse::new("John", 18, "Python"),
        StudentWithCourse::new("Mary", 16, "Java"),
        StudentWithCourse::new("Thomas", 21, "Java"),
        StudentWithCourse::new("Rahul", 23, "JavaScript"),
        StudentWithCourse::new("Jenny", 17, "Python"),
        StudentWithCourse::new("Tatiana", 25, "Java"),
    ];

    let students_per_course = group_by(students.clone(), |s| s.course().to_string());
    for (course, enrolled) in &students_per_course {
        let names: Vec<&str> = enrolled.iter().map(|s| s.name()).collect();
        println!("Course: {}, Students Enrolled: {:?}", course, names);
    }
    // Course: Python, Students Enrolled: ["John", "Jenny"]
    // Course: Java, Students Enrolled: ["Mary", "Thomas", "Tatiana"]
    // Course: JavaScript, Students Enrolled: ["Rahul"]

    println!("\n=== Counting Instead of Materializing ===\n");

    let count_per_course = group_by_counting(students.clone(), |s| s.course().to_string());
    for (course, count) in &count_per_course {
        println!("Course: {}, Number of Students Enrolled: {}", course, count);
    }

    println!("\n=== Folding Each Group ===\n");

    // Downstream aggregation without keeping members: age sum per course.
    let age_sum_per_course = group_by_fold(
        students,
        |s| s.course().to_string(),
        || 0i64,
        |acc, s| acc + i64::from(s.age()),
    );
    for (course, age_sum) in &age_sum_per_course {
        println!("Course: {}, Sum of Ages: {}", course, age_sum);
    }
}
