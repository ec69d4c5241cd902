//! Course catalog repository for CSV storage
//!
//! The catalog is static reference data: one line per course in the form
//! `department,year_of_study,course_code,course_name,credit_hours` with a
//! header row. It is only ever read; malformed lines are skipped silently.

use std::path::PathBuf;

use csv::StringRecord;

use crate::error::{RegistrarError, RegistrarResult};
use crate::models::Course;

/// Header row of courses.csv
pub const COURSES_HEADER: &str = "department,year_of_study,course_code,course_name,credit_hours";

/// Number of fields a catalog line must carry
const FIELD_COUNT: usize = 5;

/// Read-only repository for the course catalog
pub struct CourseCatalogRepository {
    path: PathBuf,
}

impl CourseCatalogRepository {
    /// Create a repository backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load all parseable catalog entries; a missing file yields an empty list
    pub fn load(&self) -> RegistrarResult<Vec<Course>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                RegistrarError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut courses = Vec::new();
        for result in reader.records() {
            let Ok(record) = result else {
                continue;
            };
            if let Some(course) = parse_record(&record) {
                courses.push(course);
            }
        }

        Ok(courses)
    }

    /// The backing file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

/// Parse one catalog line, or `None` if malformed
fn parse_record(record: &StringRecord) -> Option<Course> {
    if record.len() < FIELD_COUNT {
        return None;
    }

    let department = record.get(0)?.trim().to_string();
    let year_of_study: u8 = record.get(1)?.trim().parse().ok()?;
    let code = record.get(2)?.trim().to_string();
    if code.is_empty() {
        return None;
    }
    let name = record.get(3)?.trim().to_string();
    let credit_hours: u32 = record.get(4)?.trim().parse().ok()?;

    Some(Course {
        code,
        name,
        department,
        year_of_study,
        credit_hours,
    })
}
