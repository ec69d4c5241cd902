//! Multi-criteria student search
//!
//! Searches operate on a linearized snapshot of the records, never on the
//! index itself. Each populated criterion is counted; a record matches in
//! `All` mode when every counted criterion matched, and in `Any` mode when
//! at least one did. A GPA range (either bound) counts as a single
//! criterion.

use crate::models::{Sex, Student};

/// How populated criteria combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// AND logic: all criteria must match
    #[default]
    All,
    /// OR logic: any criterion can match
    Any,
}

/// Search criteria; unset fields are ignored
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    /// Exact ID match
    pub id: Option<String>,
    /// Case-insensitive substring match on first name
    pub first_name: Option<String>,
    /// Case-insensitive substring match on last name
    pub last_name: Option<String>,
    /// Exact department match
    pub department: Option<String>,
    /// Exact age match
    pub age: Option<u8>,
    /// Exact sex match
    pub sex: Option<Sex>,
    /// Exact year-of-study match
    pub year_of_study: Option<u8>,
    /// Lower GPA bound (inclusive)
    pub min_gpa: Option<f64>,
    /// Upper GPA bound (inclusive)
    pub max_gpa: Option<f64>,
}

impl SearchCriteria {
    /// Whether no criteria are populated
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.department.is_none()
            && self.age.is_none()
            && self.sex.is_none()
            && self.year_of_study.is_none()
            && self.min_gpa.is_none()
            && self.max_gpa.is_none()
    }
}

/// Filter a record snapshot by the given criteria
pub fn search(students: &[Student], criteria: &SearchCriteria, mode: SearchMode) -> Vec<Student> {
    students
        .iter()
        .filter(|student| matches_criteria(student, criteria, mode))
        .cloned()
        .collect()
}

fn matches_criteria(student: &Student, criteria: &SearchCriteria, mode: SearchMode) -> bool {
    let mut criteria_count = 0;
    let mut match_count = 0;

    if let Some(id) = &criteria.id {
        criteria_count += 1;
        if student.id == *id {
            match_count += 1;
        }
    }

    if let Some(first_name) = &criteria.first_name {
        criteria_count += 1;
        if student
            .first_name
            .to_lowercase()
            .contains(&first_name.to_lowercase())
        {
            match_count += 1;
        }
    }

    if let Some(last_name) = &criteria.last_name {
        criteria_count += 1;
        if student
            .last_name
            .to_lowercase()
            .contains(&last_name.to_lowercase())
        {
            match_count += 1;
        }
    }

    if let Some(department) = &criteria.department {
        criteria_count += 1;
        if student.department == *department {
            match_count += 1;
        }
    }

    if let Some(age) = criteria.age {
        criteria_count += 1;
        if student.age == age {
            match_count += 1;
        }
    }

    if let Some(sex) = criteria.sex {
        criteria_count += 1;
        if student.sex == sex {
            match_count += 1;
        }
    }

    if let Some(year) = criteria.year_of_study {
        criteria_count += 1;
        if student.year_of_study == year {
            match_count += 1;
        }
    }

    // Either GPA bound counts as one range criterion
    if criteria.min_gpa.is_some() || criteria.max_gpa.is_some() {
        criteria_count += 1;
        let gpa = student.gpa();
        let above_min = criteria.min_gpa.map_or(true, |min| gpa >= min);
        let below_max = criteria.max_gpa.map_or(true, |max| gpa <= max);
        if above_min && below_max {
            match_count += 1;
        }
    }

    match mode {
        SearchMode::All => match_count == criteria_count,
        SearchMode::Any => match_count > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseOutcome;
    use std::collections::BTreeMap;

    fn student(id: &str, first: &str, last: &str, dept: &str, age: u8, sex: Sex) -> Student {
        Student::from_stored(
            id.to_string(),
            String::new(),
            first.to_string(),
            last.to_string(),
            dept.to_string(),
            age,
            sex,
            2,
            "A".to_string(),
            BTreeMap::new(),
        )
    }

    fn roster() -> Vec<Student> {
        let mut alice = student("S001", "Alice", "Bekele", "CS", 20, Sex::Female);
        alice.add_course("CS201", CourseOutcome::new(45.0, 45.0, 3).unwrap()); // 4.0
        let bob = student("S002", "Bob", "Haile", "ME", 22, Sex::Male);
        let carla = student("S003", "Carla", "Bekele", "CS", 20, Sex::Female);
        vec![alice, bob, carla]
    }

    #[test]
    fn test_empty_criteria_all_matches_everything() {
        let roster = roster();
        let results = search(&roster, &SearchCriteria::default(), SearchMode::All);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_empty_criteria_any_matches_nothing() {
        let roster = roster();
        let results = search(&roster, &SearchCriteria::default(), SearchMode::Any);
        assert!(results.is_empty());
    }

    #[test]
    fn test_name_match_is_case_insensitive_substring() {
        let roster = roster();
        let criteria = SearchCriteria {
            last_name: Some("bek".to_string()),
            ..Default::default()
        };
        let results = search(&roster, &criteria, SearchMode::All);
        let ids: Vec<_> = results.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S001", "S003"]);
    }

    #[test]
    fn test_all_mode_requires_every_criterion() {
        let roster = roster();
        let criteria = SearchCriteria {
            department: Some("CS".to_string()),
            first_name: Some("alice".to_string()),
            ..Default::default()
        };
        let results = search(&roster, &criteria, SearchMode::All);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "S001");
    }

    #[test]
    fn test_any_mode_accepts_partial_match() {
        let roster = roster();
        let criteria = SearchCriteria {
            department: Some("ME".to_string()),
            first_name: Some("alice".to_string()),
            ..Default::default()
        };
        let results = search(&roster, &criteria, SearchMode::Any);
        let ids: Vec<_> = results.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S001", "S002"]);
    }

    #[test]
    fn test_gpa_range_is_single_criterion() {
        let roster = roster();
        let criteria = SearchCriteria {
            min_gpa: Some(3.5),
            max_gpa: Some(4.0),
            ..Default::default()
        };
        let results = search(&roster, &criteria, SearchMode::All);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "S001");
    }

    #[test]
    fn test_gpa_min_only() {
        let roster = roster();
        let criteria = SearchCriteria {
            min_gpa: Some(0.1),
            ..Default::default()
        };
        let results = search(&roster, &criteria, SearchMode::All);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_exact_field_matches() {
        let roster = roster();
        let criteria = SearchCriteria {
            age: Some(22),
            sex: Some(Sex::Male),
            year_of_study: Some(2),
            ..Default::default()
        };
        let results = search(&roster, &criteria, SearchMode::All);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "S002");
    }

    #[test]
    fn test_criteria_is_empty() {
        assert!(SearchCriteria::default().is_empty());
        let criteria = SearchCriteria {
            age: Some(20),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
    }
}
