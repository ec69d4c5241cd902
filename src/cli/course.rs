//! Course catalog CLI commands
//!
//! The catalog is read-only reference data; the only command is a filtered
//! listing.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_course_list;
use crate::error::RegistrarResult;
use crate::storage::Storage;

use super::load_service;

/// Course subcommands
#[derive(Subcommand)]
pub enum CourseCommands {
    /// List catalog courses
    List {
        /// Filter by department
        #[arg(short, long)]
        department: Option<String>,
        /// Filter by year of study
        #[arg(short, long)]
        year: Option<u8>,
    },
}

/// Handle a course command
pub fn handle_course_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CourseCommands,
) -> RegistrarResult<()> {
    let service = load_service(storage, settings)?;

    match cmd {
        CourseCommands::List { department, year } => {
            let courses: Vec<_> = service
                .catalog()
                .iter()
                .filter(|course| {
                    department
                        .as_deref()
                        .map_or(true, |dept| course.department == dept)
                })
                .filter(|course| year.map_or(true, |y| course.year_of_study == y))
                .cloned()
                .collect();

            print!("{}", format_course_list(&courses));
        }
    }

    Ok(())
}
