use serde::{Deserialize, Serialize};

/// Maximum stored description length, in bytes.
pub const MAX_DESCRIPTION_BYTES: usize = 200;

/// A task row as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned id; never recycled while the row exists
    pub id: i64,
    /// Description text (non-empty, at most 200 bytes)
    pub description: String,
    /// Completed flag
    pub completed: bool,
    /// Soft-delete flag (true = in the trash)
    pub deleted: bool,
}

impl Task {
    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}

/// Clamp a description to `MAX_DESCRIPTION_BYTES`, cutting at a char
/// boundary so the result stays valid UTF-8. Leading/trailing whitespace
/// is trimmed first.
pub fn clamp_description(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.len() <= MAX_DESCRIPTION_BYTES {
        return trimmed.to_string();
    }
    let mut end = MAX_DESCRIPTION_BYTES;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}
