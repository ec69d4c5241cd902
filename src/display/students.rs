//! Student display formatting
//!
//! Formats student records for terminal output in table and detail views.

use crate::models::Student;

/// Format a list of students as a table
pub fn format_student_list(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students found.\n".to_string();
    }

    // Calculate column widths
    let id_width = students.iter().map(|s| s.id.len()).max().unwrap_or(2).max(2);

    let name_width = students
        .iter()
        .map(|s| s.full_name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let dept_width = students
        .iter()
        .map(|s| s.department.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let section_width = students
        .iter()
        .map(|s| s.section.len())
        .max()
        .unwrap_or(7)
        .max(7);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<name_width$}  {:<dept_width$}  {:>3}  {:>3}  {:>4}  {:<section_width$}  {:>5}\n",
        "ID",
        "Name",
        "Dept",
        "Age",
        "Sex",
        "Year",
        "Section",
        "GPA",
        id_width = id_width,
        name_width = name_width,
        dept_width = dept_width,
        section_width = section_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<id_width$}  {:-<name_width$}  {:-<dept_width$}  {:->3}  {:->3}  {:->4}  {:-<section_width$}  {:->5}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        id_width = id_width,
        name_width = name_width,
        dept_width = dept_width,
        section_width = section_width,
    ));

    // Student rows
    for student in students {
        output.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:<dept_width$}  {:>3}  {:>3}  {:>4}  {:<section_width$}  {:>5.2}\n",
            student.id,
            student.full_name(),
            student.department,
            student.age,
            student.sex.to_string(),
            student.year_of_study,
            student.section,
            student.gpa(),
            id_width = id_width,
            name_width = name_width,
            dept_width = dept_width,
            section_width = section_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} student(s)\n", students.len()));

    output
}

/// Format a single student's full academic record
pub fn format_student_detailed(student: &Student) -> String {
    let mut output = String::new();

    output.push_str(&format!("Student: {}\n", student.full_name()));
    output.push_str(&format!("  ID:          {}\n", student.id));
    output.push_str(&format!("  Department:  {}\n", student.department));
    output.push_str(&format!("  Age:         {}\n", student.age));
    output.push_str(&format!("  Sex:         {}\n", student.sex));
    output.push_str(&format!("  Year:        {}\n", student.year_of_study));
    output.push_str(&format!("  Section:     {}\n", student.section));
    output.push_str(&format!("  GPA:         {:.2}\n", student.gpa()));
    output.push('\n');

    if student.courses().is_empty() {
        output.push_str("  No courses enrolled\n");
        return output;
    }

    let code_width = student
        .courses()
        .keys()
        .map(|code| code.len())
        .max()
        .unwrap_or(6)
        .max(6);

    output.push_str(&format!(
        "  {:<code_width$}  {:>10}  {:>6}  {:>6}  {:>5}  {:>7}\n",
        "Course",
        "Assessment",
        "Final",
        "Total",
        "Grade",
        "Credits",
        code_width = code_width,
    ));
    output.push_str(&format!(
        "  {:-<code_width$}  {:->10}  {:->6}  {:->6}  {:->5}  {:->7}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        code_width = code_width,
    ));

    for (code, outcome) in student.courses() {
        output.push_str(&format!(
            "  {:<code_width$}  {:>10.1}  {:>6.1}  {:>6.1}  {:>5}  {:>7}\n",
            code,
            outcome.assessment,
            outcome.final_exam,
            outcome.total_score(),
            outcome.grade.to_string(),
            outcome.credit_hours,
            code_width = code_width,
        ));
    }

    output
}
