//! Caret and selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A line/column location in the document.
///
/// Both fields are 0-based and the column counts characters. Field order
/// makes the derived ordering document order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Start of the document.
    pub const ZERO: Position = Position { line: 0, column: 0 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // shown to users, so 1-based
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Caret plus the point a selection was started from.
///
/// The selection runs between `anchor` and `position` in whichever
/// direction the user dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub position: Position,
    pub anchor: Option<Position>,
}

impl Cursor {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            anchor: None,
        }
    }

    /// Puts the caret at `position` and drops the selection.
    pub fn move_to(&mut self, position: Position) {
        *self = Self::new(position);
    }

    /// Moves the caret while keeping (or starting) a selection.
    pub fn select_to(&mut self, position: Position) {
        self.anchor.get_or_insert(self.position);
        self.position = position;
    }

    /// An anchor sitting on the caret selects nothing.
    pub fn has_selection(&self) -> bool {
        self.anchor.is_some_and(|anchor| anchor != self.position)
    }

    /// Selected span as `(start, end)` in document order.
    pub fn selection_range(&self) -> Option<(Position, Position)> {
        let anchor = self.anchor.filter(|a| *a != self.position)?;
        Some((anchor.min(self.position), anchor.max(self.position)))
    }

    /// Selects everything up to `end`, the last position of the document.
    pub fn select_all(&mut self, end: Position) {
        self.anchor = Some(Position::ZERO);
        self.position = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_compare_line_first() {
        assert!(Position::new(0, 40) < Position::new(1, 0));
        assert!(Position::new(3, 2) < Position::new(3, 7));
        assert_eq!(Position::new(2, 0).max(Position::new(1, 9)), Position::new(2, 0));
    }

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::ZERO.to_string(), "1:1");
        assert_eq!(Position::new(4, 9).to_string(), "5:10");
    }

    #[test]
    fn test_dragging_upwards_gives_ordered_range() {
        let mut cursor = Cursor::new(Position::new(2, 3));
        cursor.select_to(Position::new(1, 5));

        assert_eq!(
            cursor.selection_range(),
            Some((Position::new(1, 5), Position::new(2, 3)))
        );
    }

    #[test]
    fn test_extending_keeps_first_anchor() {
        let mut cursor = Cursor::new(Position::new(0, 1));
        cursor.select_to(Position::new(0, 4));
        cursor.select_to(Position::new(0, 6));
        assert_eq!(cursor.anchor, Some(Position::new(0, 1)));
    }

    #[test]
    fn test_anchor_on_caret_selects_nothing() {
        let mut cursor = Cursor::new(Position::new(0, 2));
        cursor.select_to(Position::new(0, 2));
        assert!(!cursor.has_selection());
        assert!(cursor.selection_range().is_none());

        cursor.select_to(Position::new(0, 3));
        cursor.move_to(Position::new(1, 0));
        assert!(cursor.anchor.is_none());
    }
}
