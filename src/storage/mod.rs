//! Flat-file storage layer for registrar-cli
//!
//! Student records and the course catalog live in delimited files under the
//! data directory. Records are rewritten in full on save (atomic temp +
//! rename); the catalog is read-only reference data.

pub mod courses;
pub mod init;
pub mod students;

pub use courses::CourseCatalogRepository;
pub use init::initialize_storage;
pub use students::StudentCsvRepository;

use crate::config::paths::RegistrarPaths;
use crate::error::RegistrarResult;
use crate::models::{Course, Student};

/// Storage coordinator over both repositories
pub struct Storage {
    paths: RegistrarPaths,
    pub students: StudentCsvRepository,
    pub courses: CourseCatalogRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: RegistrarPaths) -> RegistrarResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            students: StudentCsvRepository::new(paths.students_file()),
            courses: CourseCatalogRepository::new(paths.courses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &RegistrarPaths {
        &self.paths
    }

    /// Load all student records
    pub fn load_students(&self) -> RegistrarResult<Vec<Student>> {
        self.students.load()
    }

    /// Load the course catalog
    pub fn load_catalog(&self) -> RegistrarResult<Vec<Course>> {
        self.courses.load()
    }

    /// Save all student records
    pub fn save_students(&self, students: &[Student]) -> RegistrarResult<()> {
        self.students.save(students)
    }
}
