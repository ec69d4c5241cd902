//! Grading CLI commands
//!
//! Records or clears course outcomes on a student. Both operations go
//! through the record store's update path so they are captured in the
//! audit log with before/after snapshots.

use clap::Subcommand;

use crate::audit::{student_diff, AuditEntry, EntityType};
use crate::config::Settings;
use crate::error::{RegistrarError, RegistrarResult};
use crate::services::grade_course;
use crate::storage::Storage;

use super::{audit_logger, load_service};

/// Grade subcommands
#[derive(Subcommand)]
pub enum GradeCommands {
    /// Record assessment and final-exam scores for a course
    Assign {
        /// Student ID
        student_id: String,
        /// Course code
        course_code: String,
        /// Assessment score (0-50)
        #[arg(long)]
        assessment: f64,
        /// Final exam score (0-50)
        #[arg(long)]
        final_exam: f64,
        /// Credit hours (defaults to the existing outcome or the catalog entry)
        #[arg(long)]
        credits: Option<u32>,
    },
    /// Remove a course outcome from a student's record
    Clear {
        /// Student ID
        student_id: String,
        /// Course code
        course_code: String,
    },
}

/// Handle a grade command
pub fn handle_grade_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GradeCommands,
) -> RegistrarResult<()> {
    let mut service = load_service(storage, settings)?;
    let audit = audit_logger(storage);

    match cmd {
        GradeCommands::Assign {
            student_id,
            course_code,
            assessment,
            final_exam,
            credits,
        } => {
            let before = service
                .get(&student_id)
                .cloned()
                .ok_or_else(|| RegistrarError::student_not_found(&student_id))?;

            let credit_hours = credits
                .or_else(|| {
                    before
                        .course_outcome(&course_code)
                        .map(|outcome| outcome.credit_hours)
                })
                .or_else(|| {
                    service
                        .catalog()
                        .iter()
                        .find(|course| course.code == course_code)
                        .map(|course| course.credit_hours)
                })
                .ok_or_else(|| {
                    RegistrarError::Validation(format!(
                        "Credit hours required: '{}' is not in the student's record or the catalog",
                        course_code
                    ))
                })?;

            let mut updated = before.clone();
            grade_course(&mut updated, &course_code, assessment, final_exam, credit_hours)?;

            service.update(&student_id, updated.clone(), true);
            storage.save_students(&service.get_all())?;

            audit.log(&AuditEntry::update(
                EntityType::Student,
                student_id.clone(),
                Some(updated.full_name()),
                &before,
                &updated,
                student_diff(&before, &updated),
            ))?;

            if let Some(outcome) = updated.course_outcome(&course_code) {
                println!(
                    "Graded {} in {}: total {:.1}/100, grade {}, GPA {:.2}",
                    student_id,
                    course_code,
                    outcome.total_score(),
                    outcome.grade,
                    updated.gpa()
                );
            }
        }

        GradeCommands::Clear {
            student_id,
            course_code,
        } => {
            let before = service
                .get(&student_id)
                .cloned()
                .ok_or_else(|| RegistrarError::student_not_found(&student_id))?;

            let mut updated = before.clone();
            if !updated.remove_course(&course_code) {
                return Err(RegistrarError::course_not_found(&course_code));
            }

            service.update(&student_id, updated.clone(), true);
            storage.save_students(&service.get_all())?;

            audit.log(&AuditEntry::update(
                EntityType::Student,
                student_id.clone(),
                Some(updated.full_name()),
                &before,
                &updated,
                student_diff(&before, &updated),
            ))?;

            println!(
                "Cleared {} from {}; GPA now {:.2}",
                course_code,
                student_id,
                updated.gpa()
            );
        }
    }

    Ok(())
}
