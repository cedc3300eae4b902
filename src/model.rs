//! Example payload types shared by the demos.
//!
//! All three types are immutable after construction; there is no setter
//! anywhere and `Course` hands out its roster as a read-only slice.

/// A student with a name and a non-negative age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    age: u32,
}

impl Student {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

/// A course owning the exact roster passed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    name: String,
    students: Vec<Student>,
}

impl Course {
    pub fn new(name: impl Into<String>, students: Vec<Student>) -> Self {
        Self {
            name: name.into(),
            students,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Immutable view of the roster; callers cannot mutate internal state.
    pub fn students(&self) -> &[Student] {
        &self.students
    }
}

/// A student tagged with the course they are enrolled in.
///
/// Equality and hashing cover all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentWithCourse {
    name: String,
    age: u32,
    course: String,
}

impl StudentWithCourse {
    pub fn new(name: impl Into<String>, age: u32, course: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            course: course.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn course(&self) -> &str {
        &self.course
    }
}
