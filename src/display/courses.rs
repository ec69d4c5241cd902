//! Course catalog display formatting

use crate::models::Course;

/// Format the course catalog as a table
pub fn format_course_list(courses: &[Course]) -> String {
    if courses.is_empty() {
        return "No courses in catalog.\n".to_string();
    }

    let code_width = courses.iter().map(|c| c.code.len()).max().unwrap_or(4).max(4);
    let name_width = courses.iter().map(|c| c.name.len()).max().unwrap_or(4).max(4);
    let dept_width = courses
        .iter()
        .map(|c| c.department.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<code_width$}  {:<name_width$}  {:<dept_width$}  {:>4}  {:>7}\n",
        "Code",
        "Name",
        "Dept",
        "Year",
        "Credits",
        code_width = code_width,
        name_width = name_width,
        dept_width = dept_width,
    ));
    output.push_str(&format!(
        "{:-<code_width$}  {:-<name_width$}  {:-<dept_width$}  {:->4}  {:->7}\n",
        "",
        "",
        "",
        "",
        "",
        code_width = code_width,
        name_width = name_width,
        dept_width = dept_width,
    ));

    for course in courses {
        output.push_str(&format!(
            "{:<code_width$}  {:<name_width$}  {:<dept_width$}  {:>4}  {:>7}\n",
            course.code,
            course.name,
            course.department,
            course.year_of_study,
            course.credit_hours,
            code_width = code_width,
            name_width = name_width,
            dept_width = dept_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} course(s)\n", courses.len()));

    output
}
