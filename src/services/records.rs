//! Record store coordinator
//!
//! [`RecordService`] owns the ordered student index, the bounded undo
//! history, and the loaded course catalog, and is the single entry point
//! for callers (CLI session, persistence) into the record core.
//!
//! Every mutating operation takes a `use_history` flag. With the flag set,
//! the mutation is wrapped in a reversible [`Command`] and recorded; with it
//! cleared the index is mutated directly with no history side effect. The
//! direct path is what command replay itself uses, so undoing an operation
//! can never generate further undo entries.

use crate::config::AdminCredentials;
use crate::history::{Command, UndoHistory};
use crate::index::StudentIndex;
use crate::models::{Course, Student};

/// Result of an authentication attempt
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// The configured administrator credential pair matched
    Admin,
    /// A student record matched; carries a snapshot of that record
    Student(Box<Student>),
    /// Unknown identifier or wrong password
    Invalid,
}

/// Coordinator over the record index, undo history, and course catalog
pub struct RecordService {
    index: StudentIndex,
    history: UndoHistory,
    catalog: Vec<Course>,
    admin: AdminCredentials,
}

impl RecordService {
    /// Create an empty service with the given admin credentials
    pub fn new(admin: AdminCredentials) -> Self {
        Self {
            index: StudentIndex::new(),
            history: UndoHistory::new(),
            catalog: Vec::new(),
            admin,
        }
    }

    /// Create a service pre-populated from loaded records and catalog
    ///
    /// Bulk loading bypasses the history; records carrying a duplicate ID
    /// overwrite earlier ones, matching the index's in-place overwrite.
    pub fn with_records(
        records: Vec<Student>,
        catalog: Vec<Course>,
        admin: AdminCredentials,
    ) -> Self {
        let mut service = Self::new(admin);
        service.catalog = catalog;
        for record in records {
            service.index.insert(record);
        }
        service
    }

    /// Authenticate an identifier/password pair
    ///
    /// The configured admin pair is checked first by exact string match;
    /// otherwise the record with that ID must verify the password against
    /// its stored hash.
    pub fn authenticate(&self, id: &str, password: &str) -> AuthOutcome {
        if id == self.admin.id && password == self.admin.password {
            return AuthOutcome::Admin;
        }

        match self.index.find(id) {
            Some(student) if student.verify_password(password) => {
                AuthOutcome::Student(Box::new(student.clone()))
            }
            _ => AuthOutcome::Invalid,
        }
    }

    /// Add a record; fails if the key already exists
    pub fn add(&mut self, student: Student, use_history: bool) -> bool {
        if self.index.contains(&student.id) {
            return false;
        }

        if use_history {
            self.history.execute(Command::add(student), &mut self.index);
        } else {
            self.index.insert(student);
        }

        true
    }

    /// Replace the record under `id` with `new_data`; fails if absent
    pub fn update(&mut self, id: &str, new_data: Student, use_history: bool) -> bool {
        let Some(before) = self.index.find(id).cloned() else {
            return false;
        };

        if use_history {
            self.history
                .execute(Command::update(before, new_data), &mut self.index);
        } else {
            self.index.remove(id);
            self.index.insert(new_data);
        }

        true
    }

    /// Remove the record under `id`; fails if absent
    pub fn delete(&mut self, id: &str, use_history: bool) -> bool {
        let Some(existing) = self.index.find(id).cloned() else {
            return false;
        };

        if use_history {
            self.history
                .execute(Command::delete(existing), &mut self.index);
        } else {
            self.index.remove(id);
        }

        true
    }

    /// Look up a record by ID
    pub fn get(&self, id: &str) -> Option<&Student> {
        self.index.find(id)
    }

    /// Snapshot of all records in ascending ID order
    pub fn get_all(&self) -> Vec<Student> {
        self.index.in_order()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no records are stored
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether an undo is currently possible
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Undo the most recent tracked operation, returning its description
    pub fn undo(&mut self) -> Option<String> {
        self.history.undo(&mut self.index)
    }

    /// Description of the operation `undo` would reverse next
    pub fn last_operation(&self) -> Option<String> {
        self.history.last_description()
    }

    /// Key of the record the next `undo` would touch
    pub fn last_target_id(&self) -> Option<&str> {
        self.history.last_target_id()
    }

    /// Number of operations currently undoable
    pub fn undo_count(&self) -> usize {
        self.history.len()
    }

    /// The loaded course catalog
    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    /// Catalog courses offered for a department and year of study
    pub fn courses_for(&self, department: &str, year_of_study: u8) -> Vec<Course> {
        self.catalog
            .iter()
            .filter(|c| c.department == department && c.year_of_study == year_of_study)
            .cloned()
            .collect()
    }
}
