//! First-run storage initialization
//!
//! Creates the data directory and header-only CSV files so the application
//! starts from a well-formed (empty) database. Existing files are left
//! untouched.

use std::fs;

use crate::config::paths::RegistrarPaths;
use crate::error::{RegistrarError, RegistrarResult};

use super::courses::COURSES_HEADER;
use super::students::STUDENTS_HEADER;

/// Create the data files if they do not exist yet
pub fn initialize_storage(paths: &RegistrarPaths) -> RegistrarResult<()> {
    paths.ensure_directories()?;

    let students_file = paths.students_file();
    if !students_file.exists() {
        fs::write(&students_file, format!("{}\n", STUDENTS_HEADER))
            .map_err(|e| RegistrarError::Storage(format!("Failed to create students file: {}", e)))?;
    }

    let courses_file = paths.courses_file();
    if !courses_file.exists() {
        fs::write(&courses_file, format!("{}\n", COURSES_HEADER))
            .map_err(|e| RegistrarError::Storage(format!("Failed to create courses file: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_header_only_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RegistrarPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let students = fs::read_to_string(paths.students_file()).unwrap();
        assert_eq!(students, format!("{}\n", STUDENTS_HEADER));

        let courses = fs::read_to_string(paths.courses_file()).unwrap();
        assert_eq!(courses, format!("{}\n", COURSES_HEADER));
    }

    #[test]
    fn test_initialize_preserves_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RegistrarPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let existing = format!("{}\nS001,hash,Alice,Bekele,CS,20,F,2,A,\"\"\n", STUDENTS_HEADER);
        fs::write(paths.students_file(), &existing).unwrap();

        initialize_storage(&paths).unwrap();

        assert_eq!(fs::read_to_string(paths.students_file()).unwrap(), existing);
    }
}
