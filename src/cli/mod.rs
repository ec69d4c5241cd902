//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Each one-shot command
//! loads the record files into a fresh [`RecordService`], applies its
//! operation, and writes the records file back.

pub mod course;
pub mod grade;
pub mod session;
pub mod student;

pub use course::{handle_course_command, CourseCommands};
pub use grade::{handle_grade_command, GradeCommands};
pub use session::run_login;
pub use student::{handle_student_command, StudentCommands};

use std::io::{self, Write};

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::error::{RegistrarError, RegistrarResult};
use crate::services::RecordService;
use crate::storage::Storage;

/// Load both record files into a fresh service instance
pub(crate) fn load_service(
    storage: &Storage,
    settings: &Settings,
) -> RegistrarResult<RecordService> {
    let records = storage.load_students()?;
    let catalog = storage.load_catalog()?;
    Ok(RecordService::with_records(
        records,
        catalog,
        settings.admin.clone(),
    ))
}

/// The audit logger for this data directory
pub(crate) fn audit_logger(storage: &Storage) -> AuditLogger {
    AuditLogger::new(storage.paths().audit_log())
}

/// Prompt for a line of input on stdout/stdin
pub(crate) fn prompt_string(prompt: &str) -> RegistrarResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| RegistrarError::Io(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| RegistrarError::Io(e.to_string()))?;

    Ok(input.trim().to_string())
}

/// Prompt for a yes/no confirmation; defaults to no
pub(crate) fn confirm(prompt: &str) -> RegistrarResult<bool> {
    let answer = prompt_string(prompt)?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
