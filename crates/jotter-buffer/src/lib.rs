//! # Jotter Buffer
//!
//! Text storage for the editor: a rope for the content, a caret with an
//! optional selection anchor, and a grouped undo/redo history.
//!
//! All indices handed across this API are *character* indices, never byte
//! offsets, so multi-byte UTF-8 text behaves the same as ASCII.

mod buffer;
mod cursor;
mod history;

pub use buffer::{DEFAULT_HISTORY_LIMIT, TextBuffer};
pub use cursor::{Cursor, Position};
pub use history::{Edit, EditGroup, EditKind, History};

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Position {line}:{column} is out of bounds")]
    PositionOutOfBounds { line: usize, column: usize },

    #[error("Invalid character index: {0}")]
    InvalidCharIndex(usize),

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,
}
