//! Field-level diff summaries for audit entries
//!
//! Produces the short human-readable summary stored alongside the full
//! before/after snapshots in update entries.

use crate::models::Student;

/// Summarize the scalar-field changes between two versions of a record
///
/// Returns `None` when nothing visible changed (e.g., a password reset,
/// which is deliberately not echoed into the summary).
pub fn student_diff(before: &Student, after: &Student) -> Option<String> {
    let mut changes = Vec::new();

    if before.first_name != after.first_name {
        changes.push(format!(
            "first_name: {} -> {}",
            before.first_name, after.first_name
        ));
    }
    if before.last_name != after.last_name {
        changes.push(format!(
            "last_name: {} -> {}",
            before.last_name, after.last_name
        ));
    }
    if before.department != after.department {
        changes.push(format!(
            "department: {} -> {}",
            before.department, after.department
        ));
    }
    if before.age != after.age {
        changes.push(format!("age: {} -> {}", before.age, after.age));
    }
    if before.sex != after.sex {
        changes.push(format!("sex: {} -> {}", before.sex, after.sex));
    }
    if before.year_of_study != after.year_of_study {
        changes.push(format!(
            "year_of_study: {} -> {}",
            before.year_of_study, after.year_of_study
        ));
    }
    if before.section != after.section {
        changes.push(format!("section: {} -> {}", before.section, after.section));
    }
    if before.courses() != after.courses() {
        changes.push(format!(
            "courses: {} -> {}, gpa: {:.2} -> {:.2}",
            before.courses().len(),
            after.courses().len(),
            before.gpa(),
            after.gpa()
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseOutcome, Sex};
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
    fn test_no_changes_yields_none() {
        let before = student();
        let after = before.clone();
        assert_eq!(student_diff(&before, &after), None);
    }

    #[test]
    fn test_scalar_changes_listed() {
        let before = student();
        let mut after = before.clone();
        after.first_name = "Alina".to_string();
        after.age = 21;

        let summary = student_diff(&before, &after).unwrap();
        assert_eq!(summary, "first_name: Alice -> Alina; age: 20 -> 21");
    }

    #[test]
    fn test_course_changes_summarized_with_gpa() {
        let before = student();
        let mut after = before.clone();
        after.add_course("CS201", CourseOutcome::new(45.0, 45.0, 3).unwrap());

        let summary = student_diff(&before, &after).unwrap();
        assert_eq!(summary, "courses: 0 -> 1, gpa: 0.00 -> 4.00");
    }

    #[test]
    fn test_password_change_not_echoed() {
        let before = student();
        let mut after = before.clone();
        after.password_hash = "different".to_string();
        assert_eq!(student_diff(&before, &after), None);
    }
}
