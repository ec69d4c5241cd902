//! Student record model
//!
//! The value type stored in the balanced index. A student owns a mapping
//! from course code to [`CourseOutcome`] plus a derived GPA. The GPA is
//! always a pure function of the course map: it is recomputed synchronously
//! on every mutation of the map and is never allowed to go stale.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::course::CourseOutcome;
use crate::crypto::password;
use crate::error::RegistrarResult;

/// Minimum accepted student age
pub const MIN_AGE: u8 = 15;
/// Maximum accepted student age
pub const MAX_AGE: u8 = 100;
/// Maximum year of study (supports long programs such as medicine)
pub const MAX_YEAR_OF_STUDY: u8 = 7;

/// Student sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse from single-letter or word form
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Some(Self::Male),
            "f" | "female" => Some(Self::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "M"),
            Self::Female => write!(f, "F"),
        }
    }
}

/// A student academic record
///
/// The course map and GPA are private so that every mutation path goes
/// through the methods that keep the GPA consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier; the ordering key in the record index
    pub id: String,

    /// One-way hash of the student's password (never the plaintext)
    pub password_hash: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Department the student belongs to
    pub department: String,

    /// Age in years
    pub age: u8,

    /// Sex
    pub sex: Sex,

    /// Current year of study (1-based)
    pub year_of_study: u8,

    /// Class section label
    pub section: String,

    /// Per-course results, keyed by course code
    courses: BTreeMap<String, CourseOutcome>,

    /// Credit-weighted grade-point average, derived from `courses`
    gpa: f64,
}

impl Student {
    /// Create a new student record with a hashed password and no courses
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        password: &str,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        age: u8,
        sex: Sex,
        year_of_study: u8,
        section: impl Into<String>,
    ) -> RegistrarResult<Self> {
        Ok(Self {
            id: id.into(),
            password_hash: password::hash_password(password)?,
            first_name: first_name.into(),
            last_name: last_name.into(),
            department: department.into(),
            age,
            sex,
            year_of_study,
            section: section.into(),
            courses: BTreeMap::new(),
            gpa: 0.0,
        })
    }

    /// Reassemble a record from stored fields (used by the storage layer)
    ///
    /// The GPA is recomputed from the course map rather than trusted from
    /// the file.
    #[allow(clippy::too_many_arguments)]
    pub fn from_stored(
        id: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        department: String,
        age: u8,
        sex: Sex,
        year_of_study: u8,
        section: String,
        courses: BTreeMap<String, CourseOutcome>,
    ) -> Self {
        let mut student = Self {
            id,
            password_hash,
            first_name,
            last_name,
            department,
            age,
            sex,
            year_of_study,
            section,
            courses,
            gpa: 0.0,
        };
        student.recalculate_gpa();
        student
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replace the stored password with the hash of a new one
    pub fn set_password(&mut self, password: &str) -> RegistrarResult<()> {
        self.password_hash = password::hash_password(password)?;
        Ok(())
    }

    /// Verify a password attempt against the stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        password::verify_password(password, &self.password_hash)
    }

    /// Add or replace a course outcome, recomputing the GPA
    pub fn add_course(&mut self, code: impl Into<String>, outcome: CourseOutcome) {
        self.courses.insert(code.into(), outcome);
        self.recalculate_gpa();
    }

    /// Update an existing course outcome; returns false if not enrolled
    pub fn update_course(&mut self, code: &str, outcome: CourseOutcome) -> bool {
        match self.courses.get_mut(code) {
            Some(existing) => {
                *existing = outcome;
                self.recalculate_gpa();
                true
            }
            None => false,
        }
    }

    /// Remove a course outcome; returns false if not enrolled
    pub fn remove_course(&mut self, code: &str) -> bool {
        let removed = self.courses.remove(code).is_some();
        if removed {
            self.recalculate_gpa();
        }
        removed
    }

    /// Whether the student is enrolled in the given course
    pub fn has_course(&self, code: &str) -> bool {
        self.courses.contains_key(code)
    }

    /// Look up the outcome for one course
    pub fn course_outcome(&self, code: &str) -> Option<&CourseOutcome> {
        self.courses.get(code)
    }

    /// All course outcomes, in stable (code) order
    pub fn courses(&self) -> &BTreeMap<String, CourseOutcome> {
        &self.courses
    }

    /// Credit-weighted grade-point average
    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Validate the record's scalar fields
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        if self.id.trim().is_empty() {
            return Err(StudentValidationError::EmptyId);
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(StudentValidationError::AgeOutOfRange(self.age));
        }
        if self.year_of_study == 0 || self.year_of_study > MAX_YEAR_OF_STUDY {
            return Err(StudentValidationError::YearOutOfRange(self.year_of_study));
        }
        Ok(())
    }

    fn recalculate_gpa(&mut self) {
        let total_credits: u32 = self.courses.values().map(|o| o.credit_hours).sum();
        if total_credits == 0 {
            self.gpa = 0.0;
            return;
        }

        let total_points: f64 = self
            .courses
            .values()
            .map(|o| o.grade.points() * f64::from(o.credit_hours))
            .sum();

        self.gpa = total_points / f64::from(total_credits);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.id)
    }
}

/// Validation errors for student records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    EmptyId,
    AgeOutOfRange(u8),
    YearOutOfRange(u8),
}

impl fmt::Display for StudentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Student ID cannot be empty"),
            Self::AgeOutOfRange(age) => {
                write!(f, "Age {} out of range ({}-{})", age, MIN_AGE, MAX_AGE)
            }
            Self::YearOutOfRange(year) => {
                write!(f, "Year of study {} out of range (1-{})", year, MAX_YEAR_OF_STUDY)
            }
        }
    }
}

impl std::error::Error for StudentValidationError {}
