//! Line-number gutter.
//!
//! Every refresh regenerates the whole panel: count the lines, write
//! `1..=N`.

use std::fmt::Write as _;

/// Read-only line-number panel contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gutter {
    text: String,
    lines: usize,
}

impl Gutter {
    pub fn new() -> Self {
        let mut gutter = Self {
            text: String::new(),
            lines: 0,
        };
        gutter.refresh(1);
        gutter
    }

    /// Rebuilds the panel for a document of `line_count` lines.
    pub fn refresh(&mut self, line_count: usize) {
        let line_count = line_count.max(1);
        self.text.clear();
        for n in 1..=line_count {
            // writing into a String cannot fail
            let _ = writeln!(self.text, "{n}");
        }
        self.lines = line_count;
    }

    /// One number per line, each followed by a newline.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Width in characters of the widest number.
    pub fn digits(&self) -> usize {
        self.lines.to_string().len()
    }
}

impl Default for Gutter {
    fn default() -> Self {
        Self::new()
    }
}
