use crate::store::{StoreError, TaskStore};

/// Capacity of each history stack. Pushing beyond it silently discards
/// the oldest entry.
pub const HISTORY_LIMIT: usize = 10;

/// A recorded, invertible description of one user mutation.
///
/// Each variant carries exactly the data needed to invert the action
/// without re-reading store state. Commands are immutable once pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A task was added
    Add { task_id: i64 },
    /// A task was moved to the trash
    Trash { task_id: i64 },
    /// A task's description was replaced
    Edit {
        task_id: i64,
        old_description: String,
        new_description: String,
    },
    /// A task's completed flag was flipped (pre-toggle value recorded)
    Toggle { task_id: i64, old_completed: bool },
}

impl Command {
    /// The task this command refers to
    pub fn task_id(&self) -> i64 {
        match self {
            Command::Add { task_id }
            | Command::Trash { task_id }
            | Command::Edit { task_id, .. }
            | Command::Toggle { task_id, .. } => *task_id,
        }
    }
}

/// The undo/redo history: two bounded stacks of commands.
///
/// A command lives on exactly one stack at a time: the undo stack while
/// its effect is part of the visible state, the redo stack after it has
/// been undone. Both stacks start empty and last for the application's
/// lifetime.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Command>,
    redo: Vec<Command>,
}

/// Append to a stack, discarding the oldest entry when full.
fn push_bounded(stack: &mut Vec<Command>, cmd: Command) {
    if stack.len() >= HISTORY_LIMIT {
        stack.remove(0);
    }
    stack.push(cmd);
}

impl History {
    pub fn new() -> Self {
        History {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Record a command for a mutation that has already succeeded against
    /// the store. Does not touch the redo stack; callers invalidate the
    /// redo branch separately via [`History::clear_redo`].
    pub fn push(&mut self, cmd: Command) {
        push_bounded(&mut self.undo, cmd);
    }

    /// Drop the redo branch. Called before any fresh (non-undo/redo)
    /// user action.
    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Undo the most recent command by applying its inverse to the store.
    ///
    /// On store success the command moves to the redo stack and this
    /// returns true. On store failure (e.g. the task was purged from the
    /// trash in the meantime) the command is put back on top of the undo
    /// stack, both stacks are left as they were, and this returns false.
    pub fn undo(&mut self, store: &TaskStore) -> bool {
        let Some(cmd) = self.undo.pop() else {
            return false;
        };
        match apply_inverse(&cmd, store) {
            Ok(()) => {
                push_bounded(&mut self.redo, cmd);
                true
            }
            Err(_) => {
                self.undo.push(cmd);
                false
            }
        }
    }

    /// Re-apply the most recently undone command. Symmetric to
    /// [`History::undo`]: success moves the command back to the undo
    /// stack, failure restores it to the redo stack.
    pub fn redo(&mut self, store: &TaskStore) -> bool {
        let Some(cmd) = self.redo.pop() else {
            return false;
        };
        match apply_forward(&cmd, store) {
            Ok(()) => {
                push_bounded(&mut self.undo, cmd);
                true
            }
            Err(_) => {
                self.redo.push(cmd);
                false
            }
        }
    }

    #[cfg(test)]
    fn undo_commands(&self) -> &[Command] {
        &self.undo
    }

    #[cfg(test)]
    fn redo_commands(&self) -> &[Command] {
        &self.redo
    }
}

/// Apply the inverse of a command (for undo)
fn apply_inverse(cmd: &Command, store: &TaskStore) -> Result<(), StoreError> {
    match cmd {
        Command::Add { task_id } => store.soft_delete(*task_id),
        Command::Trash { task_id } => store.restore(*task_id),
        Command::Edit {
            task_id,
            old_description,
            ..
        } => store.set_description(*task_id, old_description),
        Command::Toggle {
            task_id,
            old_completed,
        } => store.set_completed(*task_id, *old_completed),
    }
}

/// Apply a command forward (for redo)
fn apply_forward(cmd: &Command, store: &TaskStore) -> Result<(), StoreError> {
    match cmd {
        // The forward add created the row; re-doing it after an undo
        // restores that row, it never re-inserts (ids are stable).
        Command::Add { task_id } => store.restore(*task_id),
        Command::Trash { task_id } => store.soft_delete(*task_id),
        Command::Edit {
            task_id,
            new_description,
            ..
        } => store.set_description(*task_id, new_description),
        Command::Toggle {
            task_id,
            old_completed,
        } => store.set_completed(*task_id, !*old_completed),
    }
}
