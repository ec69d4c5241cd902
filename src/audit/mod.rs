//! Audit logging system
//!
//! Records every create/update/delete/undo applied to the records file as an
//! append-only JSONL trail with before/after snapshots.

pub mod diff;
pub mod entry;
pub mod logger;

pub use diff::student_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
