//! Terminal output formatting
//!
//! Hand-formatted, width-computed tables for student and catalog listings.

pub mod courses;
pub mod students;

pub use courses::format_course_list;
pub use students::{format_student_detailed, format_student_list};
