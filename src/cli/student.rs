//! Student CLI commands
//!
//! Implements CLI commands for student record management.

use clap::Subcommand;

use crate::audit::{student_diff, AuditEntry, EntityType};
use crate::config::Settings;
use crate::display::{format_student_detailed, format_student_list};
use crate::error::{RegistrarError, RegistrarResult};
use crate::models::{CourseOutcome, Sex, Student};
use crate::services::{search, sort_students, SearchCriteria, SearchMode, SortField};
use crate::storage::Storage;

use super::{audit_logger, confirm, load_service};

/// Student subcommands
#[derive(Subcommand)]
pub enum StudentCommands {
    /// Add a new student record
    Add {
        /// Student ID
        id: String,
        /// Password (prompted for if omitted)
        #[arg(long)]
        password: Option<String>,
        /// First name
        #[arg(long)]
        first_name: String,
        /// Last name
        #[arg(long)]
        last_name: String,
        /// Department
        #[arg(long)]
        department: String,
        /// Age (15-100)
        #[arg(long)]
        age: u8,
        /// Sex (M/F)
        #[arg(long)]
        sex: String,
        /// Year of study (1-7)
        #[arg(long)]
        year: u8,
        /// Class section
        #[arg(long, default_value = "A")]
        section: String,
        /// Enroll in all catalog courses for the department and year
        #[arg(long)]
        enroll: bool,
    },
    /// List all students in ID order
    List {
        /// Sort by field (id, name, age, sex, gpa, department, year)
        #[arg(short, long)]
        sort: Option<String>,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Show a student's full academic record
    Show {
        /// Student ID
        id: String,
    },
    /// Edit a student's fields
    Update {
        /// Student ID
        id: String,
        /// New first name
        #[arg(long)]
        first_name: Option<String>,
        /// New last name
        #[arg(long)]
        last_name: Option<String>,
        /// New department
        #[arg(long)]
        department: Option<String>,
        /// New age
        #[arg(long)]
        age: Option<u8>,
        /// New year of study
        #[arg(long)]
        year: Option<u8>,
        /// New section
        #[arg(long)]
        section: Option<String>,
        /// Prompt for a new password
        #[arg(long)]
        reset_password: bool,
    },
    /// Delete a student record
    Delete {
        /// Student ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Search students by criteria
    Search {
        /// Exact ID
        #[arg(long)]
        id: Option<String>,
        /// First name substring (case-insensitive)
        #[arg(long)]
        first_name: Option<String>,
        /// Last name substring (case-insensitive)
        #[arg(long)]
        last_name: Option<String>,
        /// Exact department
        #[arg(long)]
        department: Option<String>,
        /// Exact age
        #[arg(long)]
        age: Option<u8>,
        /// Sex (M/F)
        #[arg(long)]
        sex: Option<String>,
        /// Exact year of study
        #[arg(long)]
        year: Option<u8>,
        /// Minimum GPA (inclusive)
        #[arg(long)]
        min_gpa: Option<f64>,
        /// Maximum GPA (inclusive)
        #[arg(long)]
        max_gpa: Option<f64>,
        /// Match any criterion instead of all
        #[arg(long)]
        any: bool,
    },
}

/// Handle a student command
pub fn handle_student_command(
    storage: &Storage,
    settings: &Settings,
    cmd: StudentCommands,
) -> RegistrarResult<()> {
    let mut service = load_service(storage, settings)?;
    let audit = audit_logger(storage);

    match cmd {
        StudentCommands::Add {
            id,
            password,
            first_name,
            last_name,
            department,
            age,
            sex,
            year,
            section,
            enroll,
        } => {
            let sex = Sex::parse(&sex).ok_or_else(|| {
                RegistrarError::Validation(format!("Invalid sex: '{}'. Use M or F", sex))
            })?;

            let password = match password {
                Some(password) => password,
                None => rpassword::prompt_password(format!("Password for {}: ", id))
                    .map_err(|e| RegistrarError::Io(e.to_string()))?,
            };

            let mut student = Student::new(
                id.as_str(),
                &password,
                first_name,
                last_name,
                department,
                age,
                sex,
                year,
                section,
            )?;
            student
                .validate()
                .map_err(|e| RegistrarError::Validation(e.to_string()))?;

            if enroll {
                for course in service.courses_for(&student.department, student.year_of_study) {
                    student.add_course(course.code.clone(), CourseOutcome::ungraded(course.credit_hours));
                }
            }

            let snapshot = student.clone();
            if !service.add(student, true) {
                return Err(RegistrarError::duplicate_student(id));
            }
            storage.save_students(&service.get_all())?;

            audit.log(&AuditEntry::create(
                EntityType::Student,
                snapshot.id.clone(),
                Some(snapshot.full_name()),
                &snapshot,
            ))?;

            println!("Added student: {} ({})", snapshot.id, snapshot.full_name());
            if !snapshot.courses().is_empty() {
                println!("  Enrolled in {} course(s)", snapshot.courses().len());
            }
        }

        StudentCommands::List { sort, desc } => {
            let mut students = service.get_all();
            if let Some(field) = sort {
                let field = SortField::parse(&field).ok_or_else(|| {
                    RegistrarError::Validation(format!(
                        "Invalid sort field: '{}'. Valid fields: id, name, age, sex, gpa, department, year",
                        field
                    ))
                })?;
                sort_students(&mut students, field, !desc);
            }
            print!("{}", format_student_list(&students));
        }

        StudentCommands::Show { id } => {
            let student = service
                .get(&id)
                .ok_or_else(|| RegistrarError::student_not_found(&id))?;
            print!("{}", format_student_detailed(student));
        }

        StudentCommands::Update {
            id,
            first_name,
            last_name,
            department,
            age,
            year,
            section,
            reset_password,
        } => {
            let before = service
                .get(&id)
                .cloned()
                .ok_or_else(|| RegistrarError::student_not_found(&id))?;

            let mut updated = before.clone();
            if let Some(first_name) = first_name {
                updated.first_name = first_name;
            }
            if let Some(last_name) = last_name {
                updated.last_name = last_name;
            }
            if let Some(department) = department {
                updated.department = department;
            }
            if let Some(age) = age {
                updated.age = age;
            }
            if let Some(year) = year {
                updated.year_of_study = year;
            }
            if let Some(section) = section {
                updated.section = section;
            }
            if reset_password {
                let password = rpassword::prompt_password(format!("New password for {}: ", id))
                    .map_err(|e| RegistrarError::Io(e.to_string()))?;
                updated.set_password(&password)?;
            }

            updated
                .validate()
                .map_err(|e| RegistrarError::Validation(e.to_string()))?;

            service.update(&id, updated.clone(), true);
            storage.save_students(&service.get_all())?;

            audit.log(&AuditEntry::update(
                EntityType::Student,
                id.clone(),
                Some(updated.full_name()),
                &before,
                &updated,
                student_diff(&before, &updated),
            ))?;

            println!("Updated student: {} ({})", id, updated.full_name());
        }

        StudentCommands::Delete { id, yes } => {
            let existing = service
                .get(&id)
                .cloned()
                .ok_or_else(|| RegistrarError::student_not_found(&id))?;

            if !yes {
                print!("{}", format_student_detailed(&existing));
                if !confirm("Delete this student? (y/n): ")? {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
            }

            service.delete(&id, true);
            storage.save_students(&service.get_all())?;

            audit.log(&AuditEntry::delete(
                EntityType::Student,
                id.clone(),
                Some(existing.full_name()),
                &existing,
            ))?;

            println!("Deleted student: {} ({})", id, existing.full_name());
        }

        StudentCommands::Search {
            id,
            first_name,
            last_name,
            department,
            age,
            sex,
            year,
            min_gpa,
            max_gpa,
            any,
        } => {
            let sex = match sex {
                Some(s) => Some(Sex::parse(&s).ok_or_else(|| {
                    RegistrarError::Validation(format!("Invalid sex: '{}'. Use M or F", s))
                })?),
                None => None,
            };

            let criteria = SearchCriteria {
                id,
                first_name,
                last_name,
                department,
                age,
                sex,
                year_of_study: year,
                min_gpa,
                max_gpa,
            };

            let mode = if any { SearchMode::Any } else { SearchMode::All };
            let results = search(&service.get_all(), &criteria, mode);
            print!("{}", format_student_list(&results));
        }
    }

    Ok(())
}
