//! Student-related types
//!
//! Defines the Student record and the letter Grade derived from an average.
//! Mark validation and averaging live in `core::grading`.

use super::policy::GradingConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade for an average mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map an average to its letter grade
    ///
    /// Thresholds are inclusive lower bounds: 90 for A, 75 for B, 60 for C
    /// and 40 for D. Anything lower is an F.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Grade::A
        } else if average >= 75.0 {
            Grade::B
        } else if average >= 60.0 {
            Grade::C
        } else if average >= 40.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A student with one mark per subject
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub(crate) name: String,
    pub(crate) marks: Vec<i32>,
    pub(crate) config: GradingConfig,
}

impl Student {
    /// Create a student with `subjects` zero marks and default grading
    pub fn new(name: impl Into<String>, subjects: usize) -> Self {
        Self::with_config(name, subjects, GradingConfig::default())
    }

    pub fn with_config(name: impl Into<String>, subjects: usize, config: GradingConfig) -> Self {
        Student {
            name: name.into(),
            marks: vec![0; subjects],
            config,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn marks(&self) -> &[i32] {
        &self.marks
    }

    pub fn config(&self) -> GradingConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::top(100.0, Grade::A)]
    #[case::a_edge(90.0, Grade::A)]
    #[case::b_upper(89.99, Grade::B)]
    #[case::b_edge(75.0, Grade::B)]
    #[case::c_edge(60.0, Grade::C)]
    #[case::d_edge(40.0, Grade::D)]
    #[case::f_upper(39.99, Grade::F)]
    #[case::zero(0.0, Grade::F)]
    #[case::negative(-5.0, Grade::F)]
    fn test_grade_thresholds(#[case] average: f64, #[case] expected: Grade) {
        assert_eq!(Grade::from_average(average), expected);
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::A.to_string(), "A");
        assert_eq!(Grade::F.to_string(), "F");
    }

    #[test]
    fn test_new_student_has_zero_marks() {
        let student = Student::new("Alice", 3);
        assert_eq!(student.name(), "Alice");
        assert_eq!(student.marks(), &[0, 0, 0]);
    }

    #[test]
    fn test_set_name() {
        let mut student = Student::new("Alice", 1);
        student.set_name("Alicia");
        assert_eq!(student.name(), "Alicia");
    }
}
