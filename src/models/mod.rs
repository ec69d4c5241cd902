//! Core data models for registrar-cli
//!
//! This module contains the data structures that represent the academic
//! domain: students, courses, per-course outcomes, and letter grades.

pub mod course;
pub mod grade;
pub mod student;

pub use course::{Course, CourseOutcome, OutcomeValidationError};
pub use grade::LetterGrade;
pub use student::{Sex, Student, StudentValidationError};
