//! Status bar text.

use jotter_buffer::Position;

/// Caret location as shown to the user: both numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorStatus {
    pub line: usize,
    pub column: usize,
}

impl From<Position> for CursorStatus {
    fn from(pos: Position) -> Self {
        Self {
            line: pos.line + 1,
            column: pos.column + 1,
        }
    }
}

impl std::fmt::Display for CursorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ln {}, Col {}", self.line, self.column)
    }
}

/// The single line of text along the bottom of the window.
///
/// Normally the caret location; operations such as save overwrite it with a
/// message until the next key release puts the caret back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    text: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            text: CursorStatus::from(Position::ZERO).to_string(),
        }
    }

    pub fn show_cursor(&mut self, status: CursorStatus) {
        self.text = status.to_string();
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.text = message.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
