//! Course catalog entries and per-course outcomes
//!
//! `Course` is static reference data loaded from the catalog file and never
//! mutated afterwards. `CourseOutcome` is the graded result a student holds
//! for one course: two scores out of 50, the derived letter grade, and the
//! credit hours that weight the grade in GPA computation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::grade::LetterGrade;

/// Maximum value for each of the two score components
pub const MAX_COMPONENT_SCORE: f64 = 50.0;

/// A course catalog entry (immutable reference data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (e.g., "CS101")
    pub code: String,

    /// Human-readable course name
    pub name: String,

    /// Department offering the course
    pub department: String,

    /// Year of study the course targets
    pub year_of_study: u8,

    /// Credit hours awarded
    pub credit_hours: u32,
}

impl Course {
    /// Create a new catalog entry
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        year_of_study: u8,
        credit_hours: u32,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            department: department.into(),
            year_of_study,
            credit_hours,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({} credits)", self.code, self.name, self.credit_hours)
    }
}

/// A student's graded result for one course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOutcome {
    /// Continuous-assessment score, out of 50
    pub assessment: f64,

    /// Final-exam score, out of 50
    pub final_exam: f64,

    /// Letter grade derived from the total score
    pub grade: LetterGrade,

    /// Credit hours weighting this course in the GPA
    pub credit_hours: u32,
}

impl CourseOutcome {
    /// Create a graded outcome, deriving the letter grade from the scores
    ///
    /// Returns an error if either score falls outside [0, 50].
    pub fn new(
        assessment: f64,
        final_exam: f64,
        credit_hours: u32,
    ) -> Result<Self, OutcomeValidationError> {
        if !(0.0..=MAX_COMPONENT_SCORE).contains(&assessment) {
            return Err(OutcomeValidationError::AssessmentOutOfRange(assessment));
        }
        if !(0.0..=MAX_COMPONENT_SCORE).contains(&final_exam) {
            return Err(OutcomeValidationError::FinalExamOutOfRange(final_exam));
        }

        Ok(Self {
            assessment,
            final_exam,
            grade: LetterGrade::from_total(assessment + final_exam),
            credit_hours,
        })
    }

    /// An outcome for a newly enrolled, not-yet-graded course
    pub fn ungraded(credit_hours: u32) -> Self {
        Self {
            assessment: 0.0,
            final_exam: 0.0,
            grade: LetterGrade::F,
            credit_hours,
        }
    }

    /// Combined score out of 100
    pub fn total_score(&self) -> f64 {
        self.assessment + self.final_exam
    }
}

/// Validation errors for course outcomes
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeValidationError {
    AssessmentOutOfRange(f64),
    FinalExamOutOfRange(f64),
}

impl fmt::Display for OutcomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssessmentOutOfRange(v) => {
                write!(f, "Assessment score {} out of range (0-50)", v)
            }
            Self::FinalExamOutOfRange(v) => {
                write!(f, "Final exam score {} out of range (0-50)", v)
            }
        }
    }
}

impl std::error::Error for OutcomeValidationError {}
