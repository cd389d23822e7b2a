//! Student roster
//!
//! This module provides the `Roster` struct which keeps students by roll
//! number and answers the usual class queries: lookups, orderings, filters
//! and aggregate statistics.

use crate::types::{LedgerError, Student};
use std::collections::BTreeMap;

/// Roll number identifying a student within a roster
pub type RollNumber = u32;

/// Average at or above which a student counts as a high scorer
pub const HIGH_SCORE_THRESHOLD: f64 = 90.0;

/// Students keyed by roll number
///
/// Iteration is always in ascending roll-number order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: BTreeMap<RollNumber, Student>,
}

/// Aggregate figures over a roster
#[derive(Debug, Clone, PartialEq)]
pub struct RosterStats {
    /// Number of enrolled students
    pub students: usize,

    /// Mean of the student averages, `None` for an empty roster
    pub class_average: Option<f64>,

    /// Highest student average
    pub highest: Option<f64>,

    /// Lowest student average
    pub lowest: Option<f64>,

    /// Name of the student with the highest average (first by roll number on ties)
    pub top_student: Option<String>,

    /// Students averaging at least `HIGH_SCORE_THRESHOLD`
    pub high_scorers: usize,
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            students: BTreeMap::new(),
        }
    }

    /// Enroll a student under `roll`
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRollNumber` if the roll number is already taken.
    /// The roster is left unchanged.
    pub fn enroll(&mut self, roll: RollNumber, student: Student) -> Result<(), LedgerError> {
        if self.students.contains_key(&roll) {
            return Err(LedgerError::duplicate_roll_number(roll));
        }
        self.students.insert(roll, student);
        Ok(())
    }

    pub fn get(&self, roll: RollNumber) -> Option<&Student> {
        self.students.get(&roll)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Iterate `(roll, student)` pairs in roll-number order
    pub fn iter(&self) -> impl Iterator<Item = (RollNumber, &Student)> {
        self.students.iter().map(|(&roll, student)| (roll, student))
    }

    /// Student names in roll-number order
    pub fn names(&self) -> Vec<&str> {
        self.students.values().map(Student::name).collect()
    }

    /// Students in alphabetical order of name
    pub fn sorted_by_name(&self) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.students.values().collect();
        students.sort_by(|a, b| a.name().cmp(b.name()));
        students
    }

    /// Students from highest to lowest average
    ///
    /// The sort is stable, so equal averages keep roll-number order.
    pub fn ranked(&self) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.students.values().collect();
        students.sort_by(|a, b| b.average().total_cmp(&a.average()));
        students
    }

    /// Students whose average is at least `threshold`
    pub fn high_scorers(&self, threshold: f64) -> Vec<&Student> {
        self.students
            .values()
            .filter(|student| student.average() >= threshold)
            .collect()
    }

    /// Number of students whose average lies in `low..=high`
    pub fn count_in_range(&self, low: f64, high: f64) -> usize {
        self.students
            .values()
            .filter(|student| (low..=high).contains(&student.average()))
            .count()
    }

    /// Compute aggregate statistics in a single pass
    pub fn stats(&self) -> RosterStats {
        let initial = RosterStats {
            students: 0,
            class_average: None,
            highest: None,
            lowest: None,
            top_student: None,
            high_scorers: 0,
        };

        let (mut stats, total) =
            self.students
                .values()
                .fold((initial, 0.0_f64), |(mut stats, total), student| {
                    let average = student.average();

                    stats.students += 1;
                    if average >= HIGH_SCORE_THRESHOLD {
                        stats.high_scorers += 1;
                    }
                    if stats.highest.map_or(true, |highest| average > highest) {
                        stats.highest = Some(average);
                        stats.top_student = Some(student.name().to_string());
                    }
                    if stats.lowest.map_or(true, |lowest| average < lowest) {
                        stats.lowest = Some(average);
                    }

                    (stats, total + average)
                });

        if stats.students > 0 {
            stats.class_average = Some(total / stats.students as f64);
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn student(name: &str, marks: &[i32]) -> Student {
        let mut student = Student::new(name, marks.len());
        student.set_marks(marks).unwrap();
        student
    }

    #[fixture]
    fn class() -> Roster {
        let mut roster = Roster::new();
        roster.enroll(1, student("Joseph", &[85])).unwrap();
        roster.enroll(2, student("Alex", &[92])).unwrap();
        roster.enroll(3, student("Charlie", &[78])).unwrap();
        roster.enroll(4, student("Diana", &[96])).unwrap();
        roster.enroll(5, student("Eve", &[88])).unwrap();
        roster
    }

    fn names(students: &[&Student]) -> Vec<String> {
        students.iter().map(|s| s.name().to_string()).collect()
    }

    #[test]
    fn test_new_roster_is_empty() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }

    #[rstest]
    fn test_enroll_and_lookup(class: Roster) {
        assert_eq!(class.len(), 5);
        assert_eq!(class.get(1).map(Student::name), Some("Joseph"));
        assert!(class.get(99).is_none());
    }

    #[rstest]
    fn test_enroll_rejects_duplicate_roll(mut class: Roster) {
        let err = class.enroll(1, student("Impostor", &[10])).unwrap_err();

        assert_eq!(err, LedgerError::DuplicateRollNumber { roll: 1 });
        assert_eq!(class.get(1).map(Student::name), Some("Joseph"));
        assert_eq!(class.len(), 5);
    }

    #[test]
    fn test_iteration_follows_roll_order() {
        let mut roster = Roster::new();
        roster.enroll(30, student("C", &[1])).unwrap();
        roster.enroll(10, student("A", &[1])).unwrap();
        roster.enroll(20, student("B", &[1])).unwrap();

        let rolls: Vec<RollNumber> = roster.iter().map(|(roll, _)| roll).collect();

        assert_eq!(rolls, vec![10, 20, 30]);
        assert_eq!(roster.names(), vec!["A", "B", "C"]);
    }

    #[rstest]
    fn test_sorted_by_name(class: Roster) {
        assert_eq!(
            names(&class.sorted_by_name()),
            vec!["Alex", "Charlie", "Diana", "Eve", "Joseph"]
        );
    }

    #[rstest]
    fn test_ranked_by_average_descending(class: Roster) {
        assert_eq!(
            names(&class.ranked()),
            vec!["Diana", "Alex", "Eve", "Joseph", "Charlie"]
        );
    }

    #[test]
    fn test_ranked_ties_keep_roll_order() {
        let mut roster = Roster::new();
        roster.enroll(1, student("First", &[70])).unwrap();
        roster.enroll(2, student("Second", &[70])).unwrap();

        assert_eq!(names(&roster.ranked()), vec!["First", "Second"]);
    }

    #[rstest]
    fn test_high_scorers(class: Roster) {
        assert_eq!(
            names(&class.high_scorers(HIGH_SCORE_THRESHOLD)),
            vec!["Alex", "Diana"]
        );
    }

    #[rstest]
    #[case::inclusive_bounds(80.0, 95.0, 3)]
    #[case::everyone(0.0, 100.0, 5)]
    #[case::nobody(97.0, 100.0, 0)]
    fn test_count_in_range(
        class: Roster,
        #[case] low: f64,
        #[case] high: f64,
        #[case] expected: usize,
    ) {
        assert_eq!(class.count_in_range(low, high), expected);
    }

    #[rstest]
    fn test_stats(class: Roster) {
        let stats = class.stats();

        assert_eq!(stats.students, 5);
        // (85 + 92 + 78 + 96 + 88) / 5
        assert!((stats.class_average.unwrap() - 87.8).abs() < 1e-9);
        assert_eq!(stats.highest, Some(96.0));
        assert_eq!(stats.lowest, Some(78.0));
        assert_eq!(stats.top_student.as_deref(), Some("Diana"));
        assert_eq!(stats.high_scorers, 2);
    }

    #[test]
    fn test_stats_on_empty_roster() {
        let stats = Roster::new().stats();

        assert_eq!(stats.students, 0);
        assert_eq!(stats.class_average, None);
        assert_eq!(stats.highest, None);
        assert_eq!(stats.lowest, None);
        assert_eq!(stats.top_student, None);
        assert_eq!(stats.high_scorers, 0);
    }
}
