//! Interactive login session
//!
//! `registrar login` authenticates an identifier/password pair and opens
//! either the administrator shell or a student's read-only view of their own
//! record. The shell is the one surface where undo is reachable: the undo
//! history lives in process memory and is discarded on exit, so one-shot
//! subcommands can never observe it.

use crate::audit::{student_diff, AuditEntry, EntityType};
use crate::config::Settings;
use crate::display::{format_student_detailed, format_student_list};
use crate::error::{RegistrarError, RegistrarResult};
use crate::models::student::{MAX_AGE, MAX_YEAR_OF_STUDY, MIN_AGE};
use crate::models::{CourseOutcome, Sex, Student};
use crate::services::{
    grade_course, search, sort_students, AuthOutcome, RecordService, SearchCriteria, SearchMode,
    SortField,
};
use crate::storage::Storage;

use super::{audit_logger, confirm, load_service, prompt_string};

/// Run the interactive login flow
pub fn run_login(storage: &Storage, settings: &Settings) -> RegistrarResult<()> {
    let mut service = load_service(storage, settings)?;

    let id = prompt_string("ID: ")?;
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| RegistrarError::Io(e.to_string()))?;

    match service.authenticate(&id, &password) {
        AuthOutcome::Admin => {
            println!();
            println!("Logged in as administrator. Type 'help' for commands.");
            admin_session(&mut service, storage)
        }
        AuthOutcome::Student(record) => {
            println!();
            println!("Welcome, {}!", record.full_name());
            println!();
            print!("{}", format_student_detailed(&record));
            Ok(())
        }
        AuthOutcome::Invalid => {
            println!("Invalid credentials.");
            Ok(())
        }
    }
}

/// The administrator shell loop
fn admin_session(service: &mut RecordService, storage: &Storage) -> RegistrarResult<()> {
    let audit = audit_logger(storage);

    loop {
        let line = prompt_string("\nregistrar> ")?;
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let argument = words.next().map(str::to_string);

        let result = match command {
            "" => Ok(()),
            "help" => {
                print_help();
                Ok(())
            }
            "list" => {
                print!("{}", format_student_list(&service.get_all()));
                Ok(())
            }
            "show" => show_student(service, argument),
            "add" => add_student(service, storage, &audit),
            "update" => update_student(service, storage, &audit, argument),
            "delete" => delete_student(service, storage, &audit, argument),
            "search" => search_students(service),
            "sort" => sort_listing(service, argument, words.next() == Some("desc")),
            "grade" => grade_student(service, storage, &audit, argument),
            "undo" => undo_last(service, storage, &audit),
            "logout" | "quit" | "exit" => {
                storage.save_students(&service.get_all())?;
                println!("Saved. Goodbye.");
                return Ok(());
            }
            other => {
                println!("Unknown command: '{}'. Type 'help' for commands.", other);
                Ok(())
            }
        };

        // Command-level failures are reported but never end the session
        if let Err(err) = result {
            println!("Error: {}", err);
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list                 List all students in ID order");
    println!("  show <id>            Show a student's full record");
    println!("  add                  Add a student (interactive)");
    println!("  update <id>          Update a student's fields");
    println!("  delete <id>          Delete a student");
    println!("  search               Search by criteria (interactive)");
    println!("  sort <field> [desc]  List sorted by id/name/age/sex/gpa/department/year");
    println!("  grade <id>           Record course scores for a student");
    println!("  undo                 Undo the last add/update/delete/grade");
    println!("  logout               Save and leave the session");
}

fn show_student(service: &RecordService, id: Option<String>) -> RegistrarResult<()> {
    let id = required(id, "show <id>")?;
    match service.get(&id) {
        Some(student) => {
            print!("{}", format_student_detailed(student));
            Ok(())
        }
        None => Err(RegistrarError::student_not_found(id)),
    }
}

fn add_student(
    service: &mut RecordService,
    storage: &Storage,
    audit: &crate::audit::AuditLogger,
) -> RegistrarResult<()> {
    let id = prompt_string("Student ID: ")?;
    if id.is_empty() {
        return Err(RegistrarError::Validation("Student ID cannot be empty".into()));
    }
    if service.get(&id).is_some() {
        return Err(RegistrarError::duplicate_student(id));
    }

    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| RegistrarError::Io(e.to_string()))?;
    let first_name = prompt_string("First name: ")?;
    let last_name = prompt_string("Last name: ")?;
    let department = prompt_string("Department: ")?;
    let age = prompt_age()?;
    let sex = prompt_sex()?;
    let year = prompt_year()?;
    let section = prompt_string("Section: ")?;

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

    // Enroll in the catalog courses for the department and year
    let offered = service.courses_for(&student.department, student.year_of_study);
    if !offered.is_empty() {
        println!();
        println!(
            "Courses for {} year {}:",
            student.department, student.year_of_study
        );
        for course in &offered {
            println!("  {}", course);
            student.add_course(course.code.clone(), CourseOutcome::ungraded(course.credit_hours));
        }
        println!("Student will be enrolled in these courses.");
    }

    let snapshot = student.clone();
    service.add(student, true);
    storage.save_students(&service.get_all())?;

    audit.log(&AuditEntry::create(
        EntityType::Student,
        snapshot.id.clone(),
        Some(snapshot.full_name()),
        &snapshot,
    ))?;

    println!("Added student: {} ({})", snapshot.id, snapshot.full_name());
    Ok(())
}

fn update_student(
    service: &mut RecordService,
    storage: &Storage,
    audit: &crate::audit::AuditLogger,
    id: Option<String>,
) -> RegistrarResult<()> {
    let id = required(id, "update <id>")?;
    let before = service
        .get(&id)
        .cloned()
        .ok_or_else(|| RegistrarError::student_not_found(&id))?;

    print!("{}", format_student_detailed(&before));
    println!("Press Enter to keep the current value.");

    let mut updated = before.clone();

    let first_name = prompt_string(&format!("First name [{}]: ", updated.first_name))?;
    if !first_name.is_empty() {
        updated.first_name = first_name;
    }
    let last_name = prompt_string(&format!("Last name [{}]: ", updated.last_name))?;
    if !last_name.is_empty() {
        updated.last_name = last_name;
    }
    let department = prompt_string(&format!("Department [{}]: ", updated.department))?;
    if !department.is_empty() {
        updated.department = department;
    }
    let age = prompt_string(&format!("Age [{}]: ", updated.age))?;
    if !age.is_empty() {
        updated.age = age
            .parse()
            .map_err(|_| RegistrarError::Validation(format!("Invalid age: '{}'", age)))?;
    }
    let year = prompt_string(&format!("Year of study [{}]: ", updated.year_of_study))?;
    if !year.is_empty() {
        updated.year_of_study = year
            .parse()
            .map_err(|_| RegistrarError::Validation(format!("Invalid year: '{}'", year)))?;
    }
    let section = prompt_string(&format!("Section [{}]: ", updated.section))?;
    if !section.is_empty() {
        updated.section = section;
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
    Ok(())
}

fn delete_student(
    service: &mut RecordService,
    storage: &Storage,
    audit: &crate::audit::AuditLogger,
    id: Option<String>,
) -> RegistrarResult<()> {
    let id = required(id, "delete <id>")?;
    let existing = service
        .get(&id)
        .cloned()
        .ok_or_else(|| RegistrarError::student_not_found(&id))?;

    print!("{}", format_student_detailed(&existing));
    if !confirm("Delete this student? (y/n): ")? {
        println!("Deletion cancelled.");
        return Ok(());
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
    Ok(())
}

fn search_students(service: &RecordService) -> RegistrarResult<()> {
    println!("Enter criteria (press Enter to skip):");

    let criteria = SearchCriteria {
        id: optional(prompt_string("Student ID: ")?),
        first_name: optional(prompt_string("First name: ")?),
        last_name: optional(prompt_string("Last name: ")?),
        department: optional(prompt_string("Department: ")?),
        age: optional(prompt_string("Age: ")?).and_then(|s| s.parse().ok()),
        sex: optional(prompt_string("Sex (M/F): ")?).and_then(|s| Sex::parse(&s)),
        year_of_study: optional(prompt_string("Year of study: ")?).and_then(|s| s.parse().ok()),
        min_gpa: optional(prompt_string("Minimum GPA: ")?).and_then(|s| s.parse().ok()),
        max_gpa: optional(prompt_string("Maximum GPA: ")?).and_then(|s| s.parse().ok()),
    };

    let mode = if confirm("Match any criterion instead of all? (y/n): ")? {
        SearchMode::Any
    } else {
        SearchMode::All
    };

    let results = search(&service.get_all(), &criteria, mode);
    println!();
    print!("{}", format_student_list(&results));
    Ok(())
}

fn sort_listing(service: &RecordService, field: Option<String>, descending: bool) -> RegistrarResult<()> {
    let field = required(field, "sort <field> [desc]")?;
    let field = SortField::parse(&field).ok_or_else(|| {
        RegistrarError::Validation(format!(
            "Invalid sort field: '{}'. Valid fields: id, name, age, sex, gpa, department, year",
            field
        ))
    })?;

    let mut students = service.get_all();
    sort_students(&mut students, field, !descending);
    print!("{}", format_student_list(&students));
    Ok(())
}

fn grade_student(
    service: &mut RecordService,
    storage: &Storage,
    audit: &crate::audit::AuditLogger,
    id: Option<String>,
) -> RegistrarResult<()> {
    let id = required(id, "grade <id>")?;
    let before = service
        .get(&id)
        .cloned()
        .ok_or_else(|| RegistrarError::student_not_found(&id))?;

    if before.courses().is_empty() {
        println!("{} has no enrolled courses.", before.full_name());
        return Ok(());
    }

    println!("Enrolled courses for {}:", before.full_name());
    for (code, outcome) in before.courses() {
        println!("  {} (current grade: {})", code, outcome.grade);
    }

    let course_code = prompt_string("Course code: ")?;
    let Some(current) = before.course_outcome(&course_code) else {
        return Err(RegistrarError::course_not_found(course_code));
    };
    let credit_hours = current.credit_hours;

    let assessment = prompt_score("Assessment score (0-50): ")?;
    let final_exam = prompt_score("Final exam score (0-50): ")?;

    let mut updated = before.clone();
    grade_course(&mut updated, &course_code, assessment, final_exam, credit_hours)?;

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

    if let Some(outcome) = updated.course_outcome(&course_code) {
        println!(
            "New total: {:.1}/100, grade {}, GPA {:.2}",
            outcome.total_score(),
            outcome.grade,
            updated.gpa()
        );
    }
    Ok(())
}

fn undo_last(
    service: &mut RecordService,
    storage: &Storage,
    audit: &crate::audit::AuditLogger,
) -> RegistrarResult<()> {
    let Some(last) = service.last_operation() else {
        println!("No operations to undo.");
        return Ok(());
    };

    println!("Last operation: {}", last);
    if !confirm("Undo this operation? (y/n): ")? {
        println!("Undo cancelled.");
        return Ok(());
    }

    let target_id = service
        .last_target_id()
        .map(str::to_string)
        .unwrap_or_default();
    let Some(description) = service.undo() else {
        return Ok(());
    };
    storage.save_students(&service.get_all())?;

    audit.log(&AuditEntry::undo(EntityType::Student, target_id, description))?;

    println!("Operation undone.");
    Ok(())
}

// Input helpers

fn required(argument: Option<String>, usage: &str) -> RegistrarResult<String> {
    argument.ok_or_else(|| RegistrarError::Validation(format!("Usage: {}", usage)))
}

fn optional(input: String) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

fn prompt_age() -> RegistrarResult<u8> {
    loop {
        let input = prompt_string(&format!("Age ({}-{}): ", MIN_AGE, MAX_AGE))?;
        if let Ok(age) = input.parse::<u8>() {
            if (MIN_AGE..=MAX_AGE).contains(&age) {
                return Ok(age);
            }
        }
        println!("Invalid age.");
    }
}

fn prompt_sex() -> RegistrarResult<Sex> {
    loop {
        let input = prompt_string("Sex (M/F): ")?;
        if let Some(sex) = Sex::parse(&input) {
            return Ok(sex);
        }
        println!("Invalid sex.");
    }
}

fn prompt_year() -> RegistrarResult<u8> {
    loop {
        let input = prompt_string(&format!("Year of study (1-{}): ", MAX_YEAR_OF_STUDY))?;
        if let Ok(year) = input.parse::<u8>() {
            if (1..=MAX_YEAR_OF_STUDY).contains(&year) {
                return Ok(year);
            }
        }
        println!("Invalid year.");
    }
}

fn prompt_score(prompt: &str) -> RegistrarResult<f64> {
    loop {
        let input = prompt_string(prompt)?;
        if let Ok(score) = input.parse::<f64>() {
            if (0.0..=50.0).contains(&score) {
                return Ok(score);
            }
        }
        println!("Invalid score.");
    }
}
