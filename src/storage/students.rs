//! Student record repository for CSV storage
//!
//! One line per record:
//! `id,password_hash,first_name,last_name,department,age,sex,year_of_study,section,"course_results"`
//! where the quoted course field holds pipe-separated entries of
//! `code:assessment:finalExam:grade:creditHours`. A header row is always
//! present and skipped on read. Malformed lines (too few fields or
//! unparseable values) are skipped silently rather than failing the load.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use csv::StringRecord;

use crate::error::{RegistrarError, RegistrarResult};
use crate::models::{CourseOutcome, LetterGrade, Sex, Student};

/// Header row of students.csv
pub const STUDENTS_HEADER: &str =
    "id,password_hash,first_name,last_name,department,age,sex,year_of_study,section,course_results";

/// Number of fields a record line must carry
const FIELD_COUNT: usize = 10;

/// Repository for student record persistence
pub struct StudentCsvRepository {
    path: PathBuf,
}

impl StudentCsvRepository {
    /// Create a repository backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load all parseable records; a missing file yields an empty list
    pub fn load(&self) -> RegistrarResult<Vec<Student>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                RegistrarError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut students = Vec::new();
        for result in reader.records() {
            let Ok(record) = result else {
                continue;
            };
            if let Some(student) = parse_record(&record) {
                students.push(student);
            }
        }

        Ok(students)
    }

    /// Save all records atomically (write to temp, then rename)
    pub fn save(&self, students: &[Student]) -> RegistrarResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                RegistrarError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let temp_path = self.path.with_extension("csv.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| RegistrarError::Storage(format!("Failed to create temp file: {}", e)))?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", STUDENTS_HEADER)
            .map_err(|e| RegistrarError::Storage(format!("Failed to write header: {}", e)))?;

        for student in students {
            writeln!(writer, "{}", format_record(student))
                .map_err(|e| RegistrarError::Storage(format!("Failed to write record: {}", e)))?;
        }

        writer
            .flush()
            .map_err(|e| RegistrarError::Storage(format!("Failed to flush data: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| RegistrarError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            RegistrarError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }

    /// The backing file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

/// Parse one CSV record into a student, or `None` if malformed
fn parse_record(record: &StringRecord) -> Option<Student> {
    if record.len() < FIELD_COUNT {
        return None;
    }

    let id = record.get(0)?.trim().to_string();
    if id.is_empty() {
        return None;
    }

    let password_hash = record.get(1)?.trim().to_string();
    let first_name = record.get(2)?.trim().to_string();
    let last_name = record.get(3)?.trim().to_string();
    let department = record.get(4)?.trim().to_string();
    let age: u8 = record.get(5)?.trim().parse().ok()?;
    let sex = Sex::parse(record.get(6)?)?;
    let year_of_study: u8 = record.get(7)?.trim().parse().ok()?;
    let section = record.get(8)?.trim().to_string();
    let courses = parse_courses(record.get(9)?);

    Some(Student::from_stored(
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
    ))
}

/// Parse the pipe-separated course field; unparseable entries are dropped
fn parse_courses(field: &str) -> BTreeMap<String, CourseOutcome> {
    let mut courses = BTreeMap::new();

    for entry in field.split('|') {
        let parts: Vec<&str> = entry.split(':').collect();
        if parts.len() < 5 {
            continue;
        }

        let code = parts[0].trim();
        if code.is_empty() {
            continue;
        }

        let Ok(assessment) = parts[1].trim().parse::<f64>() else {
            continue;
        };
        let Ok(final_exam) = parts[2].trim().parse::<f64>() else {
            continue;
        };
        let Some(grade) = LetterGrade::parse(parts[3]) else {
            continue;
        };
        let Ok(credit_hours) = parts[4].trim().parse::<u32>() else {
            continue;
        };

        courses.insert(
            code.to_string(),
            CourseOutcome {
                assessment,
                final_exam,
                grade,
                credit_hours,
            },
        );
    }

    courses
}

/// Render one record as a CSV line; the course field is always quoted
fn format_record(student: &Student) -> String {
    let course_entries: Vec<String> = student
        .courses()
        .iter()
        .map(|(code, outcome)| {
            format!(
                "{}:{}:{}:{}:{}",
                code, outcome.assessment, outcome.final_exam, outcome.grade, outcome.credit_hours
            )
        })
        .collect();

    format!(
        "{},{},{},{},{},{},{},{},{},\"{}\"",
        escape_field(&student.id),
        escape_field(&student.password_hash),
        escape_field(&student.first_name),
        escape_field(&student.last_name),
        escape_field(&student.department),
        student.age,
        student.sex,
        student.year_of_study,
        escape_field(&student.section),
        course_entries.join("|")
    )
}

/// Quote a field if it contains a delimiter, quote, or newline
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
