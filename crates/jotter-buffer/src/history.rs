//! Undo/redo history.
//!
//! The history stores plain insert/delete records keyed by character index.
//! Records are bundled into [`EditGroup`]s and undo/redo always moves a whole
//! group, which is what makes "Replace All" a single step.
//!
//! Quick single-line typing merges into the previous record while the
//! keystrokes touch each other and arrive within [`MERGE_WINDOW`].

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Keystrokes closer together than this may merge into one undo step.
pub const MERGE_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    Insert,
    Delete,
}

/// One recorded change: `content` was inserted at, or deleted from,
/// character index `position`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub kind: EditKind,
    pub position: usize,
    pub content: String,
}

impl Edit {
    pub fn insert(position: usize, content: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Insert,
            position,
            content: content.into(),
        }
    }

    pub fn delete(position: usize, content: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Delete,
            position,
            content: content.into(),
        }
    }

    /// The edit that cancels this one out.
    pub fn inverse(&self) -> Self {
        let kind = match self.kind {
            EditKind::Insert => EditKind::Delete,
            EditKind::Delete => EditKind::Insert,
        };
        Self { kind, ..self.clone() }
    }

    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Folds `next` into `self` when both are newline-free edits of the same
    /// kind that touch each other. Returns `next` back when they don't.
    fn absorb(&mut self, next: Edit) -> Result<(), Edit> {
        if self.kind != next.kind || self.content.contains('\n') || next.content.contains('\n') {
            return Err(next);
        }

        match self.kind {
            // typing forwards
            EditKind::Insert if self.position + self.char_len() == next.position => {
                self.content.push_str(&next.content);
            }
            // backspacing
            EditKind::Delete if next.position + next.char_len() == self.position => {
                self.content.insert_str(0, &next.content);
                self.position = next.position;
            }
            // forward delete keeps hitting the same index
            EditKind::Delete if next.position == self.position => {
                self.content.push_str(&next.content);
            }
            _ => return Err(next),
        }
        Ok(())
    }
}

/// Edits that undo and redo as one step, in the order they were applied.
#[derive(Debug, Clone, Default)]
pub struct EditGroup {
    pub edits: Vec<Edit>,
    /// Last time this group grew. `None` once the group is closed to merging.
    pub touched: Option<Instant>,
}

impl EditGroup {
    fn open(edit: Edit) -> Self {
        Self {
            edits: vec![edit],
            touched: Some(Instant::now()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    fn accepts_merge(&self) -> bool {
        self.edits.len() == 1 && self.touched.is_some_and(|at| at.elapsed() < MERGE_WINDOW)
    }
}

/// Bounded undo/redo stacks.
///
/// Once `limit` groups are stored the oldest group is forgotten.
#[derive(Debug, Clone)]
pub struct History {
    done: VecDeque<EditGroup>,
    undone: Vec<EditGroup>,
    limit: usize,
    /// Set between `begin_group` and `end_group`
    grouping: bool,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            done: VecDeque::new(),
            undone: Vec::new(),
            limit: limit.max(1),
            grouping: false,
        }
    }

    /// Records an applied edit and forgets anything that could be redone.
    pub fn push(&mut self, edit: Edit) {
        self.undone.clear();

        let edit = match self.done.back_mut() {
            Some(group) if self.grouping => {
                group.edits.push(edit);
                return;
            }
            Some(group) if group.accepts_merge() => match group.edits[0].absorb(edit) {
                Ok(()) => {
                    group.touched = Some(Instant::now());
                    return;
                }
                Err(edit) => edit,
            },
            _ => edit,
        };

        self.store(EditGroup::open(edit));
    }

    /// Everything pushed until [`end_group`](Self::end_group) becomes one
    /// undo step.
    pub fn begin_group(&mut self) {
        if !self.grouping {
            self.store(EditGroup::default());
            self.grouping = true;
        }
    }

    /// Closes the open group, dropping it if nothing was pushed.
    pub fn end_group(&mut self) {
        if !std::mem::take(&mut self.grouping) {
            return;
        }
        if self.done.back().is_some_and(EditGroup::is_empty) {
            self.done.pop_back();
        }
    }

    /// Stops the next edit from merging into the latest group.
    pub fn seal(&mut self) {
        if let Some(group) = self.done.back_mut() {
            group.touched = None;
        }
    }

    /// Takes the latest group off the undo stack. The caller reverts its
    /// edits back to front.
    pub fn undo(&mut self) -> Option<EditGroup> {
        self.grouping = false;
        let mut group = self.done.pop_back()?;
        group.touched = None;
        self.undone.push(group.clone());
        Some(group)
    }

    /// Takes the latest undone group back. The caller reapplies its edits
    /// front to back.
    pub fn redo(&mut self) -> Option<EditGroup> {
        let group = self.undone.pop()?;
        self.done.push_back(group.clone());
        Some(group)
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    fn store(&mut self, group: EditGroup) {
        self.done.push_back(group);
        if self.done.len() > self.limit {
            self.done.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undo_count(history: &History) -> usize {
        history.done.len()
    }

    #[test]
    fn test_inverse_swaps_kind_only() {
        let edit = Edit::insert(4, "word");
        assert_eq!(edit.inverse(), Edit::delete(4, "word"));
        assert_eq!(edit.inverse().inverse(), edit);
    }

    #[test]
    fn test_undo_then_redo_moves_group_between_stacks() {
        let mut history = History::new(100);
        history.push(Edit::insert(0, "a"));
        history.seal();
        history.push(Edit::insert(1, "b"));
        assert_eq!(undo_count(&history), 2);

        assert_eq!(history.undo().unwrap().edits, vec![Edit::insert(1, "b")]);
        assert!(history.can_redo());
        assert_eq!(history.redo().unwrap().edits, vec![Edit::insert(1, "b")]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_typing_merges_into_one_step() {
        let mut history = History::new(100);
        for (i, ch) in ["t", "e", "x", "t"].into_iter().enumerate() {
            history.push(Edit::insert(i, ch));
        }
        assert_eq!(undo_count(&history), 1);
        assert_eq!(history.undo().unwrap().edits[0].content, "text");
    }

    #[test]
    fn test_backspace_run_merges_in_reading_order() {
        let mut history = History::new(100);
        history.push(Edit::delete(2, "c"));
        history.push(Edit::delete(1, "b"));
        history.push(Edit::delete(0, "a"));

        let group = history.undo().unwrap();
        assert_eq!(group.edits, vec![Edit::delete(0, "abc")]);
    }

    #[test]
    fn test_newline_starts_new_step() {
        let mut history = History::new(100);
        history.push(Edit::insert(0, "a"));
        history.push(Edit::insert(1, "\n"));
        history.push(Edit::insert(2, "b"));
        assert_eq!(undo_count(&history), 3);
    }

    #[test]
    fn test_sealed_group_does_not_merge() {
        let mut history = History::new(100);
        history.push(Edit::insert(0, "a"));
        history.seal();
        history.push(Edit::insert(1, "b"));
        assert_eq!(undo_count(&history), 2);
    }

    #[test]
    fn test_explicit_group_is_one_step() {
        let mut history = History::new(100);
        history.begin_group();
        history.push(Edit::delete(0, "foofoo"));
        history.push(Edit::insert(0, "barbar"));
        history.end_group();

        assert_eq!(undo_count(&history), 1);
        assert_eq!(history.undo().unwrap().edits.len(), 2);
    }

    #[test]
    fn test_empty_group_leaves_nothing_to_undo() {
        let mut history = History::new(100);
        history.begin_group();
        history.end_group();
        assert!(!history.can_undo());
    }

    #[test]
    fn test_limit_forgets_oldest_group() {
        let mut history = History::new(2);
        for i in 0..3 {
            history.push(Edit::insert(i, "\n"));
        }
        assert_eq!(undo_count(&history), 2);
        assert_eq!(history.undo().unwrap().edits[0].position, 2);
        assert_eq!(history.undo().unwrap().edits[0].position, 1);
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_new_edit_discards_redo() {
        let mut history = History::new(10);
        history.push(Edit::insert(0, "x"));
        history.undo();
        assert!(history.can_redo());
        history.push(Edit::insert(0, "y"));
        assert!(!history.can_redo());
    }
}
