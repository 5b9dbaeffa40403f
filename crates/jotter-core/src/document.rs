//! The document being edited.
//!
//! A `Document` composes the text buffer with the caret and the file it
//! belongs to. The path is `None` only for a never-saved Untitled document,
//! and the buffer's modified flag is cleared only by a fresh load or a
//! successful save.

use jotter_buffer::{Cursor, DEFAULT_HISTORY_LIMIT, Position, TextBuffer};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::{CoreError, CoreResult};

/// Name shown for a document with no file.
pub const UNTITLED: &str = "Untitled";

/// A single text document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The underlying text buffer
    buffer: TextBuffer,

    /// Caret and selection
    cursor: Cursor,

    /// File path (None for untitled documents)
    path: Option<PathBuf>,
}

impl Document {
    /// Creates a new empty Untitled document.
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Creates an empty Untitled document keeping `limit` undo steps.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            buffer: TextBuffer::with_history_limit(limit),
            cursor: Cursor::default(),
            path: None,
        }
    }

    /// Reads a UTF-8 file into a fresh, unmodified document.
    pub fn load(path: impl AsRef<Path>, history_limit: usize) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Loaded {} ({} bytes)", path.display(), content.len());

        Ok(Self {
            buffer: TextBuffer::from_text(&content, history_limit),
            cursor: Cursor::default(),
            path: Some(path.to_path_buf()),
        })
    }

    /// Writes the content to `path`, then adopts it as the document's path.
    ///
    /// The bytes go to a temporary file next to the real target and are
    /// renamed over it, so a failed write never truncates an existing file.
    /// A symlinked `path` updates the file it points at, and the target keeps
    /// its permissions. On error nothing about the document changes.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        let write_error = |source| CoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let target = match std::fs::canonicalize(path) {
            Ok(real) => real,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => path.to_path_buf(),
            Err(e) => return Err(write_error(e)),
        };
        let permissions = std::fs::metadata(&target).ok().map(|m| m.permissions());

        let temp_path = Self::temp_path_for(&target);
        let written = std::fs::write(&temp_path, self.buffer.text().as_bytes())
            .and_then(|()| match permissions {
                Some(permissions) => std::fs::set_permissions(&temp_path, permissions),
                None => Ok(()),
            })
            .and_then(|()| std::fs::rename(&temp_path, &target));
        if let Err(e) = written {
            let _ = std::fs::remove_file(&temp_path);
            return Err(write_error(e));
        }

        tracing::info!("Saved {}", target.display());
        self.path = Some(path.to_path_buf());
        self.buffer.mark_saved();
        Ok(())
    }

    fn temp_path_for(path: &Path) -> PathBuf {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.with_file_name(format!(".{name}.jotter~"))
    }

    // ==================== Getters ====================

    /// Returns the file path.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name for the title bar, or "Untitled".
    pub fn display_name(&self) -> Cow<'_, str> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy())
            .unwrap_or(Cow::Borrowed(UNTITLED))
    }

    /// Returns true if the document has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    /// Returns the text buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Returns all text.
    pub fn text(&self) -> Cow<'_, str> {
        self.buffer.text()
    }

    /// Returns the line count.
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Returns the content revision counter.
    pub fn revision(&self) -> u64 {
        self.buffer.revision()
    }

    // ==================== Caret & Selection ====================

    /// Returns the caret and selection.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Returns the caret position.
    pub fn cursor_position(&self) -> Position {
        self.cursor.position
    }

    /// Moves the caret, clamped into the document, dropping any selection.
    pub fn set_cursor_position(&mut self, pos: Position) {
        let pos = self.buffer.clamp_position(pos);
        self.cursor.move_to(pos);
    }

    /// Extends the selection to `pos`.
    pub fn select_to(&mut self, pos: Position) {
        let pos = self.buffer.clamp_position(pos);
        self.cursor.select_to(pos);
    }

    /// Selects all text.
    pub fn select_all(&mut self) {
        let end = self.end_position();
        self.cursor.select_all(end);
    }

    /// Returns the selected text.
    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.cursor.selection_range()?;
        let start_idx = self.buffer.position_to_char_idx(start).ok()?;
        let end_idx = self.buffer.position_to_char_idx(end).ok()?;
        self.buffer
            .slice(start_idx..end_idx)
            .ok()
            .map(|s| s.into_owned())
    }

    fn end_position(&self) -> Position {
        let end = self.buffer.len_chars();
        self.buffer
            .char_idx_to_position(end)
            .unwrap_or(Position::ZERO)
    }

    fn move_to_char_idx(&mut self, idx: usize) -> CoreResult<()> {
        let pos = self.buffer.char_idx_to_position(idx)?;
        self.cursor.move_to(pos);
        Ok(())
    }

    // ==================== Text Editing ====================

    /// Inserts text at the caret, replacing the selection if there is one.
    pub fn insert_at_cursor(&mut self, text: &str) -> CoreResult<()> {
        if self.cursor.has_selection() {
            self.delete_selection()?;
        }
        let idx = self.buffer.position_to_char_idx(self.cursor.position)?;
        self.buffer.insert(idx, text)?;
        self.move_to_char_idx(idx + text.chars().count())
    }

    /// Inserts a line break at the caret.
    pub fn insert_newline(&mut self) -> CoreResult<()> {
        self.insert_at_cursor("\n")
    }

    /// Deletes the selection or the character before the caret.
    pub fn delete_backward(&mut self) -> CoreResult<()> {
        if self.cursor.has_selection() {
            return self.delete_selection();
        }
        let idx = self.buffer.position_to_char_idx(self.cursor.position)?;
        if idx > 0 {
            self.buffer.delete(idx - 1..idx)?;
            self.move_to_char_idx(idx - 1)?;
        }
        Ok(())
    }

    /// Deletes the selection or the character after the caret.
    pub fn delete_forward(&mut self) -> CoreResult<()> {
        if self.cursor.has_selection() {
            return self.delete_selection();
        }
        let idx = self.buffer.position_to_char_idx(self.cursor.position)?;
        if idx < self.buffer.len_chars() {
            self.buffer.delete(idx..idx + 1)?;
        }
        Ok(())
    }

    /// Deletes the current selection, leaving the caret at its start.
    pub fn delete_selection(&mut self) -> CoreResult<()> {
        if let Some((start, end)) = self.cursor.selection_range() {
            let start_idx = self.buffer.position_to_char_idx(start)?;
            let end_idx = self.buffer.position_to_char_idx(end)?;
            self.buffer.delete(start_idx..end_idx)?;
            self.cursor.move_to(start);
        }
        Ok(())
    }

    /// Whole-buffer literal replace; returns the number of replacements.
    pub fn replace_all(&mut self, pattern: &str, replacement: &str) -> usize {
        let count = self.buffer.replace_all(pattern, replacement);
        if count > 0 {
            let pos = self.buffer.clamp_position(self.cursor.position);
            self.cursor.move_to(pos);
        }
        count
    }

    /// Adopts text and caret from a view that edits its own copy.
    ///
    /// Returns true if the content changed.
    pub fn sync_from_view(&mut self, text: &str, caret: Position) -> bool {
        let changed = self.buffer.sync_to(text);
        self.set_cursor_position(caret);
        changed
    }

    // ==================== Undo/Redo ====================

    /// Undoes the last edit group.
    pub fn undo(&mut self) -> CoreResult<()> {
        let caret = self.buffer.undo()?;
        self.move_to_char_idx(caret)
    }

    /// Redoes the last undone edit group.
    pub fn redo(&mut self) -> CoreResult<()> {
        let caret = self.buffer.redo()?;
        self.move_to_char_idx(caret)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
