//! Core text buffer implementation using a rope.
//!
//! The rope keeps insertions and deletions cheap anywhere in the document,
//! and hands out line and character lookups in `O(log n)`. Every mutation
//! goes through [`TextBuffer::insert`] or [`TextBuffer::delete`] so that the
//! undo history and the modified flag can never drift from the content.

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;

use crate::history::{Edit, EditKind, History};
use crate::{BufferError, BufferResult, Position};

/// Default number of undo steps kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// A text buffer backed by a rope.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// The rope holding our text content
    rope: Rope,

    /// Edit history for undo/redo
    history: History,

    /// Whether the buffer changed since it was loaded or last saved
    modified: bool,

    /// Bumped on every content change; lets views detect staleness
    revision: u64,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    ///
    /// # Example
    /// ```
    /// use jotter_buffer::TextBuffer;
    ///
    /// let buffer = TextBuffer::new();
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Creates an empty buffer keeping at most `limit` undo steps.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            rope: Rope::new(),
            history: History::new(limit),
            modified: false,
            revision: 0,
        }
    }

    /// Creates an unmodified buffer holding `text`, with empty history.
    pub fn from_text(text: &str, history_limit: usize) -> Self {
        Self {
            rope: Rope::from_str(text),
            history: History::new(history_limit),
            modified: false,
            revision: 0,
        }
    }

    // ==================== Text Access ====================

    /// Returns the entire text content.
    ///
    /// Borrowed when the rope is a single chunk, allocated otherwise.
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        self.rope.slice(..).into()
    }

    /// Returns a slice of text by character range.
    pub fn slice(&self, range: Range<usize>) -> BufferResult<Cow<'_, str>> {
        if range.start > range.end || range.end > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(range.end));
        }
        Ok(self.rope.slice(range).into())
    }

    // ==================== Measurements ====================

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of characters in the buffer.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the number of lines in the buffer.
    ///
    /// An empty buffer has 1 line. A buffer ending with `\n` counts the
    /// empty line after it.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Returns the length of a line in characters, newline included.
    pub fn line_len(&self, line_idx: usize) -> BufferResult<usize> {
        if line_idx >= self.len_lines() {
            return Err(BufferError::PositionOutOfBounds {
                line: line_idx,
                column: 0,
            });
        }
        Ok(self.rope.line(line_idx).len_chars())
    }

    /// Returns the last column a caret can occupy on a line, i.e. the line
    /// length without its line terminator.
    pub fn line_end_column(&self, line_idx: usize) -> BufferResult<usize> {
        let len = self.line_len(line_idx)?;
        let line = self.rope.line(line_idx);
        let mut end = len;
        if end > 0 && line.char(end - 1) == '\n' {
            end -= 1;
            if end > 0 && line.char(end - 1) == '\r' {
                end -= 1;
            }
        }
        Ok(end)
    }

    // ==================== Mutations ====================

    /// Inserts text at a character index.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> BufferResult<()> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }
        if text.is_empty() {
            return Ok(());
        }

        self.history.push(Edit::insert(char_idx, text));
        self.rope.insert(char_idx, text);
        self.touch();
        Ok(())
    }

    /// Deletes text in a character range, returning what was removed.
    pub fn delete(&mut self, range: Range<usize>) -> BufferResult<String> {
        if range.start > range.end || range.end > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(range.end));
        }
        if range.is_empty() {
            return Ok(String::new());
        }

        let deleted: String = self.rope.slice(range.clone()).into();
        self.history.push(Edit::delete(range.start, deleted.clone()));
        self.rope.remove(range);
        self.touch();
        Ok(deleted)
    }

    /// Replaces a character range with new text as one undo step.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> BufferResult<String> {
        self.history.begin_group();
        let result = self
            .delete(range.clone())
            .and_then(|deleted| self.insert(range.start, text).map(|()| deleted));
        self.history.end_group();
        self.history.seal();
        result
    }

    /// Rewrites the whole content as one undo step.
    pub fn set_text(&mut self, text: &str) {
        let len = self.len_chars();
        // the full range is always valid
        let _ = self.replace(0..len, text);
    }

    /// Brings the content in line with `target` by replacing only the span
    /// that differs. Returns false when nothing changed.
    ///
    /// Views that own their own copy of the text call this after every edit
    /// so the history records the keystroke rather than a full rewrite.
    pub fn sync_to(&mut self, target: &str) -> bool {
        let current = self.text().into_owned();
        if current == target {
            return false;
        }

        let current_len = current.chars().count();
        let target_len = target.chars().count();

        let prefix = current
            .chars()
            .zip(target.chars())
            .take_while(|(a, b)| a == b)
            .count();
        let suffix = current
            .chars()
            .rev()
            .zip(target.chars().rev())
            .take_while(|(a, b)| a == b)
            .count()
            .min(current_len - prefix)
            .min(target_len - prefix);

        let inserted: String = target
            .chars()
            .skip(prefix)
            .take(target_len - prefix - suffix)
            .collect();
        let removed = prefix..current_len - suffix;

        let result = if removed.is_empty() {
            self.insert(prefix, &inserted)
        } else if inserted.is_empty() {
            self.delete(removed).map(|_| ())
        } else {
            self.replace(removed, &inserted).map(|_| ())
        };
        result.is_ok()
    }

    /// Replaces every non-overlapping occurrence of `pattern`, scanning left
    /// to right, and returns the number of replacements.
    ///
    /// Matching is literal and case-sensitive. The content is rewritten as a
    /// single undo step; an empty pattern or no match leaves it untouched.
    pub fn replace_all(&mut self, pattern: &str, replacement: &str) -> usize {
        if pattern.is_empty() {
            return 0;
        }

        let text = self.text().into_owned();
        let count = text.matches(pattern).count();
        if count > 0 {
            self.set_text(&text.replace(pattern, replacement));
        }
        count
    }

    // ==================== Undo/Redo ====================

    /// Undoes the last edit group and returns where the caret belongs.
    pub fn undo(&mut self) -> BufferResult<usize> {
        let group = self.history.undo().ok_or(BufferError::NothingToUndo)?;

        let mut caret = 0;
        for edit in group.edits.iter().rev() {
            caret = self.apply_raw(&edit.inverse());
        }
        self.touch();
        Ok(caret)
    }

    /// Redoes the last undone edit group and returns where the caret belongs.
    pub fn redo(&mut self) -> BufferResult<usize> {
        let group = self.history.redo().ok_or(BufferError::NothingToRedo)?;

        let mut caret = 0;
        for edit in &group.edits {
            caret = self.apply_raw(edit);
        }
        self.touch();
        Ok(caret)
    }

    /// Returns true if there are edits to undo.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns true if there are edits to redo.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Applies an edit without recording it; returns the caret index after it.
    fn apply_raw(&mut self, edit: &Edit) -> usize {
        let len = edit.char_len();
        match edit.kind {
            EditKind::Insert => {
                self.rope.insert(edit.position, &edit.content);
                edit.position + len
            }
            EditKind::Delete => {
                self.rope.remove(edit.position..edit.position + len);
                edit.position
            }
        }
    }

    // ==================== Position Conversion ====================

    /// Converts a Position (line, column) to a character index.
    pub fn position_to_char_idx(&self, pos: Position) -> BufferResult<usize> {
        if pos.line >= self.len_lines() {
            return Err(BufferError::PositionOutOfBounds {
                line: pos.line,
                column: pos.column,
            });
        }

        let line_start = self.rope.line_to_char(pos.line);
        let line_len = self.rope.line(pos.line).len_chars();

        if pos.column > line_len {
            return Err(BufferError::PositionOutOfBounds {
                line: pos.line,
                column: pos.column,
            });
        }

        Ok(line_start + pos.column)
    }

    /// Converts a character index to a Position (line, column).
    pub fn char_idx_to_position(&self, char_idx: usize) -> BufferResult<Position> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }

        let line = self.rope.char_to_line(char_idx);
        let column = char_idx - self.rope.line_to_char(line);
        Ok(Position { line, column })
    }

    /// Pulls a position back inside the document.
    pub fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.len_lines().saturating_sub(1));
        let column = pos.column.min(self.line_end_column(line).unwrap_or(0));
        Position { line, column }
    }

    // ==================== State Queries ====================

    /// Returns true if the buffer has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clears the modified flag after the content reached disk.
    pub fn mark_saved(&mut self) {
        self.modified = false;
        self.history.seal();
    }

    /// Monotonic change counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.modified = true;
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self::from_text(s, DEFAULT_HISTORY_LIMIT)
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_replace_all_literal() {
        let mut buffer = TextBuffer::from("foofoo");
        assert_eq!(buffer.replace_all("foo", "bar"), 2);
        assert_eq!(buffer.text(), "barbar");
    }

    #[test]
    fn test_replace_all_with_empty_replacement_deletes() {
        let mut buffer = TextBuffer::from("abcabc");
        assert_eq!(buffer.replace_all("b", ""), 2);
        assert_eq!(buffer.text(), "acac");
    }

    #[test]
    fn test_replace_all_is_case_sensitive() {
        let mut buffer = TextBuffer::from("Foo foo");
        buffer.replace_all("foo", "x");
        assert_eq!(buffer.text(), "Foo x");
    }

    #[test]
    fn test_replace_all_non_overlapping() {
        let mut buffer = TextBuffer::from("aaa");
        assert_eq!(buffer.replace_all("aa", "b"), 1);
        assert_eq!(buffer.text(), "ba");
    }

    #[test]
    fn test_replace_all_no_match_keeps_unmodified() {
        let mut buffer = TextBuffer::from("hello");
        assert_eq!(buffer.replace_all("zz", "y"), 0);
        assert!(!buffer.is_modified());
        assert!(!buffer.can_undo());
    }

    #[test]
    fn test_replace_all_undoes_in_one_step() {
        let mut buffer = TextBuffer::from("foofoo");
        buffer.replace_all("foo", "bar");
        buffer.undo().unwrap();
        assert_eq!(buffer.text(), "foofoo");
        assert!(!buffer.can_undo());
        buffer.redo().unwrap();
        assert_eq!(buffer.text(), "barbar");
    }

    #[test]
    fn test_undo_returns_caret() {
        let mut buffer = TextBuffer::new();
        buffer.insert(0, "Hello").unwrap();
        let caret = buffer.undo().unwrap();
        assert_eq!(caret, 0);
        assert_eq!(buffer.text(), "");
        let caret = buffer.redo().unwrap();
        assert_eq!(caret, 5);
    }

    #[test]
    fn test_nothing_to_undo() {
        let mut buffer = TextBuffer::new();
        assert!(matches!(buffer.undo(), Err(BufferError::NothingToUndo)));
        assert!(matches!(buffer.redo(), Err(BufferError::NothingToRedo)));
    }

    #[test]
    fn test_sync_to_records_minimal_edit() {
        let mut buffer = TextBuffer::from("hello world");
        assert!(buffer.sync_to("hello, world"));
        assert_eq!(buffer.text(), "hello, world");

        buffer.undo().unwrap();
        assert_eq!(buffer.text(), "hello world");
        assert!(!buffer.sync_to("hello world"));
    }

    #[test]
    fn test_sync_to_repeated_characters() {
        let mut buffer = TextBuffer::from("aaa");
        buffer.sync_to("aaaa");
        assert_eq!(buffer.text(), "aaaa");
        buffer.sync_to("a");
        assert_eq!(buffer.text(), "a");
    }

    #[test]
    fn test_mark_saved_clears_modified() {
        let mut buffer = TextBuffer::new();
        buffer.insert(0, "x").unwrap();
        assert!(buffer.is_modified());
        buffer.mark_saved();
        assert!(!buffer.is_modified());
        buffer.undo().unwrap();
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_position_round_trip_with_multibyte() {
        let buffer = TextBuffer::from("héllo\nwörld");
        let idx = buffer.position_to_char_idx(Position::new(1, 2)).unwrap();
        assert_eq!(idx, 8);
        assert_eq!(buffer.char_idx_to_position(idx).unwrap(), Position::new(1, 2));
        assert_eq!(buffer.slice(idx - 1..idx).unwrap(), "ö");
    }

    #[test]
    fn test_line_end_column_skips_terminator() {
        let buffer = TextBuffer::from("ab\r\ncd\n");
        assert_eq!(buffer.line_end_column(0).unwrap(), 2);
        assert_eq!(buffer.line_end_column(1).unwrap(), 2);
        assert_eq!(buffer.line_end_column(2).unwrap(), 0);
    }

    #[test]
    fn test_clamp_position() {
        let buffer = TextBuffer::from("ab\nc");
        assert_eq!(buffer.clamp_position(Position::new(9, 9)), Position::new(1, 1));
        assert_eq!(buffer.clamp_position(Position::new(0, 9)), Position::new(0, 2));
    }

    #[test]
    fn test_revision_moves_on_change() {
        let mut buffer = TextBuffer::new();
        let before = buffer.revision();
        buffer.insert(0, "x").unwrap();
        assert!(buffer.revision() > before);
    }

    proptest! {
        #[test]
        fn prop_replace_all_matches_str_replace(
            text in "[abc\n]{0,40}",
            pattern in "[abc]{1,3}",
            replacement in "[xyz]{0,3}",
        ) {
            let mut buffer = TextBuffer::from(text.as_str());
            buffer.replace_all(&pattern, &replacement);
            prop_assert_eq!(buffer.text().into_owned(), text.replace(&pattern, &replacement));
        }

        #[test]
        fn prop_sync_to_reaches_target(
            start in "[ab\n]{0,20}",
            target in "[ab\n]{0,20}",
        ) {
            let mut buffer = TextBuffer::from(start.as_str());
            buffer.sync_to(&target);
            prop_assert_eq!(buffer.text().into_owned(), target);
            if buffer.can_undo() {
                buffer.undo().unwrap();
                prop_assert_eq!(buffer.text().into_owned(), start);
            }
        }
    }
}
