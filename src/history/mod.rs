//! Reversible commands and bounded undo history
//!
//! Every history-tracked mutation of the record index is captured as a
//! [`Command`]: a tagged union over add/update/delete that carries deep
//! copies of the state needed to perform the mutation and to reverse it
//! exactly. Commands never hold a reference back to their owner; the index
//! is passed explicitly to `execute` and `undo`.
//!
//! [`UndoHistory`] keeps the most recent commands in a bounded stack. A
//! command runs first and is recorded after (apply-then-record); when the
//! bound is exceeded the single oldest entry is dropped silently without
//! being undone, so evicted operations are simply unrecoverable. There is
//! no redo: an undone command is discarded.

use std::collections::VecDeque;

use crate::index::StudentIndex;
use crate::models::Student;

/// Maximum number of commands retained for undo
pub const MAX_UNDO_DEPTH: usize = 5;

/// The three reversible mutations, with their captured snapshots
#[derive(Debug, Clone)]
enum CommandKind {
    /// Insert a record; reversed by deleting its key
    Add { student: Student },
    /// Replace the record under a key; reversed by restoring the old record
    Update { before: Student, after: Student },
    /// Remove a record; reversed by re-inserting the captured copy
    Delete { student: Student },
}

/// A reversible mutation of the record index
///
/// The `executed` flag makes `execute` and `undo` idempotent: executing an
/// already-executed command (or undoing a never-executed one) is a no-op.
#[derive(Debug, Clone)]
pub struct Command {
    kind: CommandKind,
    executed: bool,
}

impl Command {
    /// Capture an add of the given record
    pub fn add(student: Student) -> Self {
        Self {
            kind: CommandKind::Add { student },
            executed: false,
        }
    }

    /// Capture a replacement of `before` by `after` under the same key
    pub fn update(before: Student, after: Student) -> Self {
        Self {
            kind: CommandKind::Update { before, after },
            executed: false,
        }
    }

    /// Capture a deletion of the given record
    pub fn delete(student: Student) -> Self {
        Self {
            kind: CommandKind::Delete { student },
            executed: false,
        }
    }

    /// Apply the mutation to the index; a no-op if already executed
    pub fn execute(&mut self, index: &mut StudentIndex) {
        if self.executed {
            return;
        }

        match &self.kind {
            CommandKind::Add { student } => {
                index.insert(student.clone());
            }
            CommandKind::Update { before, after } => {
                index.remove(&before.id);
                index.insert(after.clone());
            }
            CommandKind::Delete { student } => {
                index.remove(&student.id);
            }
        }

        self.executed = true;
    }

    /// Reverse the mutation; a no-op if not currently executed
    pub fn undo(&mut self, index: &mut StudentIndex) {
        if !self.executed {
            return;
        }

        match &self.kind {
            CommandKind::Add { student } => {
                index.remove(&student.id);
            }
            CommandKind::Update { before, after } => {
                index.remove(&after.id);
                index.insert(before.clone());
            }
            CommandKind::Delete { student } => {
                index.insert(student.clone());
            }
        }

        self.executed = false;
    }

    /// The key of the record this command mutates
    pub fn target_id(&self) -> &str {
        match &self.kind {
            CommandKind::Add { student } | CommandKind::Delete { student } => &student.id,
            CommandKind::Update { after, .. } => &after.id,
        }
    }

    /// Human-readable summary of the operation
    pub fn description(&self) -> String {
        match &self.kind {
            CommandKind::Add { student } => {
                format!("Add student: {} ({})", student.id, student.full_name())
            }
            CommandKind::Update { after, .. } => {
                format!("Update student: {} ({})", after.id, after.full_name())
            }
            CommandKind::Delete { student } => {
                format!("Delete student: {} ({})", student.id, student.full_name())
            }
        }
    }
}

/// Bounded stack of executed commands, most recent last
pub struct UndoHistory {
    stack: VecDeque<Command>,
    capacity: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoHistory {
    /// Create a history bounded at [`MAX_UNDO_DEPTH`]
    pub fn new() -> Self {
        Self::with_capacity(MAX_UNDO_DEPTH)
    }

    /// Create a history with an explicit bound (primarily for tests)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Execute a command against the index, then record it
    ///
    /// If recording exceeds the bound, the oldest entry is evicted. The
    /// eviction is pure bookkeeping; the evicted command is not undone.
    pub fn execute(&mut self, mut command: Command, index: &mut StudentIndex) {
        command.execute(index);
        self.stack.push_back(command);

        if self.stack.len() > self.capacity {
            self.stack.pop_front();
        }
    }

    /// Whether there is anything to undo
    pub fn can_undo(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Undo the most recent command, returning its description
    ///
    /// A no-op returning `None` when the history is empty. The undone
    /// command is discarded, never re-pushed.
    pub fn undo(&mut self, index: &mut StudentIndex) -> Option<String> {
        let mut command = self.stack.pop_back()?;
        command.undo(index);
        Some(command.description())
    }

    /// Description of the command that `undo` would reverse next
    pub fn last_description(&self) -> Option<String> {
        self.stack.back().map(Command::description)
    }

    /// Key of the record the next `undo` would touch
    pub fn last_target_id(&self) -> Option<&str> {
        self.stack.back().map(Command::target_id)
    }

    /// Number of undoable commands
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Drop all recorded commands
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
