//! Blocking user prompts.
//!
//! The editor never talks to a dialog toolkit directly. Anything that needs
//! an answer from the user goes through [`Prompter`], which the front end
//! implements with native dialogs and tests implement with a script.

use std::path::PathBuf;

/// Answer to "You have unsaved changes. Save before proceeding?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardChoice {
    /// Save first, then continue
    Save,
    /// Continue and lose the changes
    Discard,
    /// Abort the requested operation
    Cancel,
}

/// A named group of file extensions for open/save dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    /// Extensions without the dot; `*` matches anything
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// "Text Files" first, then "All Files".
    pub fn defaults(text_extension: &str) -> Vec<FileFilter> {
        vec![
            FileFilter::new("Text Files", &[text_extension]),
            FileFilter::new("All Files", &["*"]),
        ]
    }
}

/// Modal questions the editor may ask. Every call blocks until answered.
pub trait Prompter {
    /// Three-way unsaved-changes prompt.
    fn confirm_discard(&mut self, document_name: &str) -> DiscardChoice;

    /// File chooser for opening; `None` when cancelled.
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    /// File chooser for saving; `None` when cancelled.
    fn pick_save_path(&mut self, filters: &[FileFilter], suggested_name: &str) -> Option<PathBuf>;

    /// Single-line text entry; `None` when cancelled.
    fn ask_text(&mut self, title: &str, prompt: &str) -> Option<String>;

    /// Modal error report.
    fn show_error(&mut self, title: &str, message: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;

    /// Prompter that replays queued answers and records what it was shown.
    ///
    /// An exhausted queue answers Cancel / `None`.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        pub discard_choices: VecDeque<DiscardChoice>,
        pub open_paths: VecDeque<PathBuf>,
        pub save_paths: VecDeque<PathBuf>,
        pub answers: VecDeque<Option<String>>,
        pub discard_prompts: usize,
        pub errors: Vec<(String, String)>,
    }

    impl ScriptedPrompter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn choose(mut self, choice: DiscardChoice) -> Self {
            self.discard_choices.push_back(choice);
            self
        }

        pub fn open(mut self, path: impl Into<PathBuf>) -> Self {
            self.open_paths.push_back(path.into());
            self
        }

        pub fn save(mut self, path: impl Into<PathBuf>) -> Self {
            self.save_paths.push_back(path.into());
            self
        }

        pub fn answer(mut self, text: Option<&str>) -> Self {
            self.answers.push_back(text.map(str::to_string));
            self
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm_discard(&mut self, _document_name: &str) -> DiscardChoice {
            self.discard_prompts += 1;
            self.discard_choices
                .pop_front()
                .unwrap_or(DiscardChoice::Cancel)
        }

        fn pick_open_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
            self.open_paths.pop_front()
        }

        fn pick_save_path(&mut self, _filters: &[FileFilter], _suggested: &str) -> Option<PathBuf> {
            self.save_paths.pop_front()
        }

        fn ask_text(&mut self, _title: &str, _prompt: &str) -> Option<String> {
            self.answers.pop_front().flatten()
        }

        fn show_error(&mut self, title: &str, message: &str) {
            self.errors.push((title.to_string(), message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters() {
        let filters = FileFilter::defaults("txt");
        assert_eq!(filters[0].name, "Text Files");
        assert_eq!(filters[0].extensions, vec!["txt"]);
        assert_eq!(filters[1].extensions, vec!["*"]);
    }
}
