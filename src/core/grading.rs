//! Student grading
//!
//! Mark validation, averaging and letter grades for a single student.

use crate::types::{Grade, LedgerError, MarkBounds, Student, ValidationPolicy};
use tracing::warn;

impl Student {
    /// Replace all marks
    ///
    /// Each mark is checked against the student's `MarkBounds`. Under the
    /// strict policy the first out-of-range mark rejects the whole update;
    /// under the lenient policy the update is logged and skipped. In both
    /// cases the previous marks are kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` (strict policy only) if a mark is out of range.
    pub fn set_marks(&mut self, marks: &[i32]) -> Result<(), LedgerError> {
        if let Some(&mark) = marks.iter().find(|&&m| !self.config.bounds.contains(m)) {
            let error = LedgerError::invalid_argument(format!(
                "Mark {} is outside the allowed range {}-{}",
                mark,
                MarkBounds::PERCENTAGE_MIN,
                MarkBounds::PERCENTAGE_MAX
            ));

            return match self.config.validation {
                ValidationPolicy::Strict => Err(error),
                ValidationPolicy::Lenient => {
                    warn!(student = %self.name, %error, "marks ignored");
                    Ok(())
                }
            };
        }

        self.marks = marks.to_vec();
        Ok(())
    }

    /// Arithmetic mean of the marks, `0.0` when there are none
    pub fn average(&self) -> f64 {
        if self.marks.is_empty() {
            return 0.0;
        }
        let total: i64 = self.marks.iter().map(|&m| i64::from(m)).sum();
        total as f64 / self.marks.len() as f64
    }

    pub fn grade(&self) -> Grade {
        Grade::from_average(self.average())
    }
}
