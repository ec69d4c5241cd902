//! Grade assignment
//!
//! Validates raw scores, derives the letter grade, and upserts the outcome
//! on a student record (which recomputes the GPA synchronously). Grading
//! mutates a caller-owned copy of the record; persisting the change goes
//! through the record store's update path so it is undoable.

use crate::error::{RegistrarError, RegistrarResult};
use crate::models::{CourseOutcome, Student};

/// Record scores for one course on a student
///
/// Adds the course if the student was not enrolled, otherwise replaces the
/// existing outcome. Scores outside [0, 50] are rejected before the record
/// is touched.
pub fn grade_course(
    student: &mut Student,
    course_code: &str,
    assessment: f64,
    final_exam: f64,
    credit_hours: u32,
) -> RegistrarResult<()> {
    let outcome = CourseOutcome::new(assessment, final_exam, credit_hours)
        .map_err(|e| RegistrarError::Validation(e.to_string()))?;

    student.add_course(course_code, outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LetterGrade, Sex};
    use std::collections::BTreeMap;

    fn student() -> Student {
        Student::from_stored(
            "S001".to_string(),
            String::new(),
            "Alice".to_string(),
            "Bekele".to_string(),
            "CS".to_string(),
            20,
            Sex::Female,
            2,
            "A".to_string(),
            BTreeMap::new(),
        )
    }

    #[test]
    fn test_grade_course_sets_outcome_and_gpa() {
        let mut student = student();
        grade_course(&mut student, "CS201", 45.0, 45.0, 3).unwrap();

        let outcome = student.course_outcome("CS201").unwrap();
        assert_eq!(outcome.grade, LetterGrade::APlus);
        assert_eq!(student.gpa(), 4.0);
    }

    #[test]
    fn test_grade_course_replaces_existing_outcome() {
        let mut student = student();
        grade_course(&mut student, "CS201", 20.0, 20.0, 3).unwrap();
        assert_eq!(
            student.course_outcome("CS201").unwrap().grade,
            LetterGrade::F
        );

        grade_course(&mut student, "CS201", 40.0, 38.0, 3).unwrap();
        assert_eq!(
            student.course_outcome("CS201").unwrap().grade,
            LetterGrade::BPlus
        );
    }

    #[test]
    fn test_grade_course_rejects_invalid_scores() {
        let mut student = student();
        let err = grade_course(&mut student, "CS201", 55.0, 10.0, 3).unwrap_err();
        assert!(err.is_validation());
        // The record was not touched
        assert!(!student.has_course("CS201"));
    }
}
