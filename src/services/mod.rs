//! Business logic layer for registrar-cli

pub mod grading;
pub mod records;
pub mod search;
pub mod sort;

pub use grading::grade_course;
pub use records::{AuthOutcome, RecordService};
pub use search::{search, SearchCriteria, SearchMode};
pub use sort::{sort_students, SortField};
