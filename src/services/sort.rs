//! Student snapshot sorting
//!
//! Like search, sorting operates on a linearized snapshot, never on the
//! index. The index already yields records in ID order; these comparators
//! cover the other display orderings.

use std::cmp::Ordering;

use crate::models::Student;

/// Field to order a student snapshot by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Sex,
    Age,
    Gpa,
    Department,
    YearOfStudy,
    Id,
    Name,
}

impl SortField {
    /// Parse a field name as given on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sex" => Some(Self::Sex),
            "age" => Some(Self::Age),
            "gpa" => Some(Self::Gpa),
            "department" | "dept" => Some(Self::Department),
            "year" | "year_of_study" => Some(Self::YearOfStudy),
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}

/// Sort a snapshot in place by the given field and direction
pub fn sort_students(students: &mut [Student], field: SortField, ascending: bool) {
    students.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn compare(a: &Student, b: &Student, field: SortField) -> Ordering {
    match field {
        SortField::Sex => a.sex.to_string().cmp(&b.sex.to_string()),
        SortField::Age => a.age.cmp(&b.age),
        SortField::Gpa => a.gpa().total_cmp(&b.gpa()),
        SortField::Department => a.department.cmp(&b.department),
        SortField::YearOfStudy => a.year_of_study.cmp(&b.year_of_study),
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.full_name().cmp(&b.full_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseOutcome, Sex};
    use std::collections::BTreeMap;

    fn student(id: &str, first: &str, age: u8, sex: Sex, dept: &str, year: u8) -> Student {
        Student::from_stored(
            id.to_string(),
            String::new(),
            first.to_string(),
            "Test".to_string(),
            dept.to_string(),
            age,
            sex,
            year,
            "A".to_string(),
            BTreeMap::new(),
        )
    }

    fn roster() -> Vec<Student> {
        let mut carla = student("S003", "Carla", 24, Sex::Female, "ME", 3);
        carla.add_course("ME301", CourseOutcome::new(40.0, 40.0, 3).unwrap()); // A-
        let mut alice = student("S001", "Alice", 20, Sex::Female, "CS", 2);
        alice.add_course("CS201", CourseOutcome::new(45.0, 45.0, 3).unwrap()); // A+
        let bob = student("S002", "Bob", 22, Sex::Male, "CS", 1);
        vec![carla, alice, bob]
    }

    fn ids(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_id() {
        let mut roster = roster();
        sort_students(&mut roster, SortField::Id, true);
        assert_eq!(ids(&roster), vec!["S001", "S002", "S003"]);
    }

    #[test]
    fn test_sort_by_age_descending() {
        let mut roster = roster();
        sort_students(&mut roster, SortField::Age, false);
        assert_eq!(ids(&roster), vec!["S003", "S002", "S001"]);
    }

    #[test]
    fn test_sort_by_gpa() {
        let mut roster = roster();
        sort_students(&mut roster, SortField::Gpa, true);
        // Bob has no courses (0.0), Carla A- (3.75), Alice A+ (4.0)
        assert_eq!(ids(&roster), vec!["S002", "S003", "S001"]);
    }

    #[test]
    fn test_sort_by_sex() {
        let mut roster = roster();
        sort_students(&mut roster, SortField::Sex, true);
        // "F" sorts before "M"
        assert_eq!(roster[2].id, "S002");
    }

    #[test]
    fn test_sort_by_name() {
        let mut roster = roster();
        sort_students(&mut roster, SortField::Name, true);
        assert_eq!(ids(&roster), vec!["S001", "S002", "S003"]);
    }

    #[test]
    fn test_sort_by_department_then_stable_for_ties() {
        let mut roster = roster();
        sort_students(&mut roster, SortField::Department, true);
        assert_eq!(roster[2].department, "ME");
    }

    #[test]
    fn test_sort_by_year() {
        let mut roster = roster();
        sort_students(&mut roster, SortField::YearOfStudy, true);
        assert_eq!(ids(&roster), vec!["S002", "S001", "S003"]);
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!(SortField::parse("gpa"), Some(SortField::Gpa));
        assert_eq!(SortField::parse("DEPT"), Some(SortField::Department));
        assert_eq!(SortField::parse("year"), Some(SortField::YearOfStudy));
        assert_eq!(SortField::parse("bogus"), None);
    }

    #[test]
    fn test_sort_empty_slice() {
        let mut empty: Vec<Student> = Vec::new();
        sort_students(&mut empty, SortField::Gpa, true);
        assert!(empty.is_empty());
    }
}
