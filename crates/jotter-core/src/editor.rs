//! Main editor orchestration.
//!
//! `Editor` is the one owned application-state value. It is created at
//! start-up and handed explicitly to every command handler; nothing else
//! holds the document. Dialogs and the clipboard are passed in per call
//! through the [`Prompter`] and [`Clipboard`] seams.

use std::path::{Path, PathBuf};

use jotter_buffer::Position;

use crate::clipboard::Clipboard;
use crate::command::Outcome;
use crate::config::Config;
use crate::document::{Document, UNTITLED};
use crate::event::{EditorEvent, EventBus};
use crate::gutter::Gutter;
use crate::keymap::Keymap;
use crate::prompt::{DiscardChoice, FileFilter, Prompter};
use crate::status::{CursorStatus, StatusBar};
use crate::theme::{Palette, ThemeMode};
use crate::CoreResult;

/// Toolkit input that refreshes derived widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    KeyPress,
    KeyRelease,
    Click,
    Scroll,
}

/// The main editor state.
pub struct Editor {
    /// The open document
    document: Document,

    /// Editor configuration
    config: Config,

    /// Key bindings
    keymap: Keymap,

    /// Open/save dialog filters
    filters: Vec<FileFilter>,

    /// Current palette; every session starts light
    theme: ThemeMode,

    /// Line-number panel
    gutter: Gutter,

    /// Caret position or last operation message
    status: StatusBar,

    /// Event bus for notifications
    event_bus: EventBus,

    /// Whether the editor should quit
    should_quit: bool,
}

impl Editor {
    /// Creates a new editor instance.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an editor with custom configuration.
    pub fn with_config(config: Config) -> Self {
        let keymap = Keymap::from_config(&config);
        let filters = FileFilter::defaults(&config.files.default_extension);
        let document = Document::with_history_limit(config.editor.undo_limit);
        let mut gutter = Gutter::new();
        gutter.refresh(document.line_count());

        Self {
            document,
            config,
            keymap,
            filters,
            theme: ThemeMode::default(),
            gutter,
            status: StatusBar::new(),
            event_bus: EventBus::new(),
            should_quit: false,
        }
    }

    // ==================== Getters ====================

    /// Returns the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the editor configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the keymap.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Returns the open/save dialog filters.
    pub fn filters(&self) -> &[FileFilter] {
        &self.filters
    }

    /// Returns the gutter.
    pub fn gutter(&self) -> &Gutter {
        &self.gutter
    }

    /// Returns the status bar.
    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    /// Window title: `<file name or Untitled> - <app name>`.
    pub fn title(&self) -> String {
        format!(
            "{} - {}",
            self.document.display_name(),
            self.config.window.app_name
        )
    }

    /// Caret position, 1-based.
    pub fn cursor_status(&self) -> CursorStatus {
        CursorStatus::from(self.document.cursor_position())
    }

    // ==================== Derived Widgets ====================

    /// Refreshes the gutter or status bar after toolkit input.
    pub fn handle_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::KeyPress | UiEvent::Click | UiEvent::Scroll => {
                self.gutter.refresh(self.document.line_count());
            }
            UiEvent::KeyRelease => {
                let status = self.cursor_status();
                self.status.show_cursor(status);
            }
        }
    }

    /// Shows a transient message in the status bar.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.status.show_message(message);
    }

    // ==================== File Operations ====================

    /// Replaces the document with an empty Untitled one.
    pub fn new_file(&mut self, prompter: &mut dyn Prompter) -> Outcome {
        if !self.confirm_discard(prompter) {
            return Outcome::Cancelled;
        }

        self.document = Document::with_history_limit(self.config.editor.undo_limit);
        self.after_replace();
        self.emit(EditorEvent::DocumentCleared);
        Outcome::Completed
    }

    /// Opens `path`, or asks for one.
    ///
    /// A file that cannot be read is reported as "Open Error" and the
    /// current document is kept.
    pub fn open_file(&mut self, prompter: &mut dyn Prompter, path: Option<PathBuf>) -> Outcome {
        if !self.confirm_discard(prompter) {
            return Outcome::Cancelled;
        }
        let Some(path) = path.or_else(|| prompter.pick_open_path(&self.filters)) else {
            return Outcome::Cancelled;
        };

        match Document::load(&path, self.config.editor.undo_limit) {
            Ok(document) => {
                self.document = document;
                self.after_replace();
                self.emit(EditorEvent::DocumentOpened(path));
                Outcome::Completed
            }
            Err(e) => {
                tracing::warn!("Open failed: {}", e);
                prompter.show_error("Open Error", &e.to_string());
                Outcome::Failed
            }
        }
    }

    /// Saves to the current path, or falls through to Save As.
    pub fn save(&mut self, prompter: &mut dyn Prompter) -> Outcome {
        match self.document.path().map(Path::to_path_buf) {
            Some(path) => self.write_to(prompter, path),
            None => self.save_as(prompter, None),
        }
    }

    /// Saves to `path`, or asks for one.
    ///
    /// The default extension is appended when the chosen name has none.
    pub fn save_as(&mut self, prompter: &mut dyn Prompter, path: Option<PathBuf>) -> Outcome {
        let path = match path {
            Some(path) => path,
            None => {
                let suggested = self.suggested_name();
                match prompter.pick_save_path(&self.filters, &suggested) {
                    Some(path) => path,
                    None => return Outcome::Cancelled,
                }
            }
        };
        let path = with_default_extension(path, &self.config.files.default_extension);
        self.write_to(prompter, path)
    }

    fn write_to(&mut self, prompter: &mut dyn Prompter, path: PathBuf) -> Outcome {
        match self.document.save_to(&path) {
            Ok(()) => {
                let message = format!("Saved: {}", self.document.display_name());
                self.status.show_message(message);
                self.emit(EditorEvent::DocumentSaved(path));
                Outcome::Completed
            }
            Err(e) => {
                tracing::warn!("Save failed: {}", e);
                prompter.show_error("Save Error", &e.to_string());
                Outcome::Failed
            }
        }
    }

    fn suggested_name(&self) -> String {
        match self.document.path() {
            Some(_) => self.document.display_name().into_owned(),
            None => format!("{}.{}", UNTITLED, self.config.files.default_extension),
        }
    }

    /// Asks before throwing away unsaved changes.
    ///
    /// Returns true if the caller may proceed. Choosing Save proceeds only
    /// if the save actually happened.
    pub fn confirm_discard(&mut self, prompter: &mut dyn Prompter) -> bool {
        if !self.document.is_modified() {
            return true;
        }
        match prompter.confirm_discard(&self.document.display_name()) {
            DiscardChoice::Discard => true,
            DiscardChoice::Cancel => false,
            DiscardChoice::Save => self.save(prompter) == Outcome::Completed,
        }
    }

    fn after_replace(&mut self) {
        self.gutter.refresh(self.document.line_count());
        let status = self.cursor_status();
        self.status.show_cursor(status);
    }

    // ==================== Find & Replace ====================

    /// Replaces every occurrence of a term, asking for whatever is missing.
    ///
    /// An empty or cancelled search term does nothing; a cancelled
    /// replacement deletes the matches.
    pub fn find_replace(
        &mut self,
        prompter: &mut dyn Prompter,
        find: Option<String>,
        replacement: Option<String>,
    ) -> Outcome {
        let find = match find.or_else(|| prompter.ask_text("Find", "Find what:")) {
            Some(find) if !find.is_empty() => find,
            _ => return Outcome::Cancelled,
        };
        let replacement = replacement
            .or_else(|| prompter.ask_text("Replace", "Replace with:"))
            .unwrap_or_default();

        let count = self.document.replace_all(&find, &replacement);
        tracing::debug!("Replaced {} occurrence(s) of {:?}", count, find);
        if count > 0 {
            self.content_changed();
        }
        self.status.show_message(format!("Replaced all '{}'", find));
        Outcome::Completed
    }

    // ==================== Text Editing ====================

    /// Inserts text at the caret.
    pub fn insert_text(&mut self, text: &str) -> CoreResult<()> {
        self.document.insert_at_cursor(text)?;
        self.content_changed();
        Ok(())
    }

    /// Adopts text and caret from a widget that edits its own copy.
    pub fn sync_from_view(&mut self, text: &str, caret: Position) -> bool {
        let changed = self.document.sync_from_view(text, caret);
        if changed {
            self.content_changed();
        } else {
            self.emit(EditorEvent::CursorMoved);
        }
        changed
    }

    /// Moves the caret, dropping any selection.
    pub fn set_cursor(&mut self, pos: Position) {
        self.document.set_cursor_position(pos);
        self.emit(EditorEvent::CursorMoved);
    }

    /// Extends the selection to `pos`.
    pub fn select_to(&mut self, pos: Position) {
        self.document.select_to(pos);
        self.emit(EditorEvent::CursorMoved);
    }

    /// Undoes the last edit group.
    pub fn undo(&mut self) -> CoreResult<Outcome> {
        if !self.document.buffer().can_undo() {
            self.status.show_message("Nothing to undo");
            return Ok(Outcome::Cancelled);
        }
        self.document.undo()?;
        self.content_changed();
        Ok(Outcome::Completed)
    }

    /// Redoes the last undone edit group.
    pub fn redo(&mut self) -> CoreResult<Outcome> {
        if !self.document.buffer().can_redo() {
            self.status.show_message("Nothing to redo");
            return Ok(Outcome::Cancelled);
        }
        self.document.redo()?;
        self.content_changed();
        Ok(Outcome::Completed)
    }

    /// Selects all text.
    pub fn select_all(&mut self) {
        self.document.select_all();
        self.emit(EditorEvent::CursorMoved);
    }

    /// Copies the selection to the clipboard.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> CoreResult<Outcome> {
        let Some(text) = self.document.selected_text() else {
            return Ok(Outcome::Cancelled);
        };
        clipboard.set_text(text)?;
        Ok(Outcome::Completed)
    }

    /// Moves the selection to the clipboard.
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) -> CoreResult<Outcome> {
        if self.copy(clipboard)? == Outcome::Cancelled {
            return Ok(Outcome::Cancelled);
        }
        self.document.delete_selection()?;
        self.content_changed();
        Ok(Outcome::Completed)
    }

    /// Inserts the clipboard text at the caret.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> CoreResult<Outcome> {
        match clipboard.get_text()? {
            Some(text) if !text.is_empty() => {
                self.insert_text(&text)?;
                Ok(Outcome::Completed)
            }
            _ => Ok(Outcome::Cancelled),
        }
    }

    fn content_changed(&mut self) {
        self.gutter.refresh(self.document.line_count());
        self.emit(EditorEvent::DocumentChanged);
    }

    // ==================== Theme ====================

    /// Returns the current theme.
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Returns the colors for the current theme.
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Switches between light and dark.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!("Theme switched to {}", self.theme);
        self.emit(EditorEvent::ThemeChanged(self.theme));
    }

    // ==================== Lifecycle ====================

    /// Quits, after the unsaved-changes prompt.
    pub fn exit(&mut self, prompter: &mut dyn Prompter) -> Outcome {
        if !self.confirm_discard(prompter) {
            return Outcome::Cancelled;
        }
        self.should_quit = true;
        self.emit(EditorEvent::Quit);
        Outcome::Completed
    }

    /// Returns true if the editor should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ==================== Events ====================

    /// Subscribes to editor events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<EditorEvent> {
        self.event_bus.subscribe()
    }

    fn emit(&self, event: EditorEvent) {
        self.event_bus.emit(event);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends `.ext` when the file name has no extension.
fn with_default_extension(path: PathBuf, ext: &str) -> PathBuf {
    if path.extension().is_some() || ext.is_empty() {
        path
    } else {
        path.with_extension(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::LocalClipboard;
    use crate::prompt::testing::ScriptedPrompter;
    use crate::CoreError;

    fn editor_with(text: &str) -> Editor {
        let mut editor = Editor::new();
        editor.insert_text(text).unwrap();
        editor
    }

    #[test]
    fn test_starts_untitled_and_light() {
        let editor = Editor::new();
        assert_eq!(editor.title(), "Untitled - Jotter");
        assert_eq!(editor.theme(), ThemeMode::Light);
        assert_eq!(editor.status().text(), "Ln 1, Col 1");
        assert_eq!(editor.gutter().text(), "1\n");
    }

    #[test]
    fn test_save_then_reopen_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story.txt");
        let content = "once upon a time\n\ttabbed\n\u{2603} snow\n";

        let mut editor = editor_with(content);
        let mut prompter = ScriptedPrompter::new().save(&path);
        assert_eq!(editor.save(&mut prompter), Outcome::Completed);
        assert_eq!(editor.title(), "story.txt - Jotter");
        assert_eq!(editor.status().text(), "Saved: story.txt");
        assert!(!editor.document().is_modified());

        let mut other = Editor::new();
        let outcome = other.open_file(&mut ScriptedPrompter::new(), Some(path));
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(other.document().text(), content);
        assert_eq!(other.gutter().line_count(), 4);
    }

    #[test]
    fn test_new_with_unsaved_edits_asks_first() {
        let mut editor = editor_with("draft");

        let mut prompter = ScriptedPrompter::new().choose(DiscardChoice::Cancel);
        assert_eq!(editor.new_file(&mut prompter), Outcome::Cancelled);
        assert_eq!(prompter.discard_prompts, 1);
        assert_eq!(editor.document().text(), "draft");

        let mut prompter = ScriptedPrompter::new().choose(DiscardChoice::Discard);
        assert_eq!(editor.new_file(&mut prompter), Outcome::Completed);
        assert_eq!(editor.document().text(), "");
        assert!(!editor.document().is_modified());
        assert!(!editor.document().buffer().can_undo());
    }

    #[test]
    fn test_new_without_edits_does_not_ask() {
        let mut editor = Editor::new();
        let mut prompter = ScriptedPrompter::new();
        assert_eq!(editor.new_file(&mut prompter), Outcome::Completed);
        assert_eq!(prompter.discard_prompts, 0);
    }

    #[test]
    fn test_discard_prompt_save_then_continue() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kept.txt");
        let mut editor = editor_with("keep");

        let mut prompter = ScriptedPrompter::new()
            .choose(DiscardChoice::Save)
            .save(&path);
        assert_eq!(editor.new_file(&mut prompter), Outcome::Completed);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep");
        assert_eq!(editor.title(), "Untitled - Jotter");
    }

    #[test]
    fn test_discard_prompt_save_cancelled_aborts() {
        let mut editor = editor_with("keep");
        let mut prompter = ScriptedPrompter::new().choose(DiscardChoice::Save);

        assert_eq!(editor.exit(&mut prompter), Outcome::Cancelled);
        assert!(!editor.should_quit());
        assert_eq!(editor.document().text(), "keep");
    }

    #[test]
    fn test_exit_when_clean() {
        let mut editor = Editor::new();
        let mut rx = editor.subscribe();
        assert_eq!(editor.exit(&mut ScriptedPrompter::new()), Outcome::Completed);
        assert!(editor.should_quit());
        assert_eq!(rx.try_recv().unwrap(), EditorEvent::Quit);
    }

    #[test]
    fn test_find_replace_every_occurrence() {
        let mut editor = editor_with("foofoo");
        let mut prompter = ScriptedPrompter::new()
            .answer(Some("foo"))
            .answer(Some("bar"));
        assert_eq!(
            editor.find_replace(&mut prompter, None, None),
            Outcome::Completed
        );
        assert_eq!(editor.document().text(), "barbar");
        assert_eq!(editor.status().text(), "Replaced all 'foo'");
    }

    #[test]
    fn test_find_replace_cancelled_replacement_deletes() {
        let mut editor = editor_with("abcabc");
        let mut prompter = ScriptedPrompter::new().answer(Some("b")).answer(None);
        editor.find_replace(&mut prompter, None, None);
        assert_eq!(editor.document().text(), "acac");

        editor.undo().unwrap();
        assert_eq!(editor.document().text(), "abcabc");
    }

    #[test]
    fn test_find_replace_empty_term_is_noop() {
        let mut editor = editor_with("abc");
        let mut prompter = ScriptedPrompter::new().answer(Some(""));
        assert_eq!(
            editor.find_replace(&mut prompter, None, None),
            Outcome::Cancelled
        );
        assert_eq!(editor.document().text(), "abc");
        assert!(prompter.answers.is_empty());
    }

    #[test]
    fn test_find_replace_refreshes_gutter() {
        let mut editor = editor_with("a;b;c");
        editor.find_replace(
            &mut ScriptedPrompter::new(),
            Some(";".to_string()),
            Some("\n".to_string()),
        );
        assert_eq!(editor.gutter().text(), "1\n2\n3\n");
    }

    #[test]
    fn test_save_to_unwritable_path_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.txt");
        let mut editor = editor_with("precious");

        let mut prompter = ScriptedPrompter::new();
        let outcome = editor.save_as(&mut prompter, Some(path));

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(prompter.errors.len(), 1);
        assert_eq!(prompter.errors[0].0, "Save Error");
        assert_eq!(editor.document().text(), "precious");
        assert!(editor.document().is_modified());
        assert!(editor.document().path().is_none());
        assert_eq!(editor.title(), "Untitled - Jotter");
    }

    #[test]
    fn test_open_missing_file_keeps_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = editor_with("current");
        let mut prompter = ScriptedPrompter::new()
            .choose(DiscardChoice::Discard)
            .open(dir.path().join("gone.txt"));

        assert_eq!(editor.open_file(&mut prompter, None), Outcome::Failed);
        assert_eq!(prompter.errors[0].0, "Open Error");
        assert_eq!(editor.document().text(), "current");
    }

    #[test]
    fn test_open_cancelled_picker() {
        let mut editor = Editor::new();
        assert_eq!(
            editor.open_file(&mut ScriptedPrompter::new(), None),
            Outcome::Cancelled
        );
    }

    #[test]
    fn test_save_as_appends_default_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = editor_with("x");
        let mut prompter = ScriptedPrompter::new().save(dir.path().join("notes"));

        assert_eq!(editor.save_as(&mut prompter, None), Outcome::Completed);
        assert!(dir.path().join("notes.txt").exists());
        assert_eq!(editor.title(), "notes.txt - Jotter");
    }

    #[test]
    fn test_save_uses_existing_path_without_prompting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.md");
        let mut editor = editor_with("one");
        editor.save_as(&mut ScriptedPrompter::new(), Some(path.clone()));

        editor.insert_text(" two").unwrap();
        let mut prompter = ScriptedPrompter::new();
        assert_eq!(editor.save(&mut prompter), Outcome::Completed);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one two");
    }

    #[test]
    fn test_toggle_theme_twice_restores_light() {
        let mut editor = Editor::new();
        editor.toggle_theme();
        assert_eq!(editor.palette(), Palette::DARK);
        editor.toggle_theme();
        assert_eq!(editor.palette(), Palette::LIGHT);
        assert_eq!(editor.palette().text_background.to_hex(), "#ffffff");
    }

    #[test]
    fn test_status_after_newline_and_typing() {
        let mut editor = Editor::new();
        editor.insert_text("\n").unwrap();
        editor.insert_text("ab").unwrap();
        editor.handle_ui_event(UiEvent::KeyRelease);
        assert_eq!(editor.status().text(), "Ln 2, Col 3");
    }

    #[test]
    fn test_form_feed_and_unicode_separators_stay_on_the_line() {
        let mut editor = Editor::new();
        editor.insert_text("page one\x0cpage two\nend").unwrap();
        editor.handle_ui_event(UiEvent::KeyRelease);
        assert_eq!(editor.gutter().text(), "1\n2\n");
        assert_eq!(editor.status().text(), "Ln 2, Col 4");

        let mut editor = Editor::new();
        editor.insert_text("a\u{2028}b").unwrap();
        editor.handle_ui_event(UiEvent::KeyRelease);
        assert_eq!(editor.gutter().line_count(), 1);
        assert_eq!(editor.status().text(), "Ln 1, Col 4");
    }

    #[test]
    fn test_gutter_follows_edits() {
        let mut editor = Editor::new();
        editor.insert_text("a\nb\n").unwrap();
        assert_eq!(editor.gutter().text(), "1\n2\n3\n");
        editor.handle_ui_event(UiEvent::Scroll);
        assert_eq!(editor.gutter().line_count(), 3);
    }

    #[test]
    fn test_undo_with_empty_history_sets_status() {
        let mut editor = Editor::new();
        assert_eq!(editor.undo().unwrap(), Outcome::Cancelled);
        assert_eq!(editor.status().text(), "Nothing to undo");
    }

    #[test]
    fn test_undo_marks_modified() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = editor_with("saved");
        editor.save_as(&mut ScriptedPrompter::new(), Some(dir.path().join("u.txt")));
        editor.insert_text("!").unwrap();
        editor.undo().unwrap();
        assert_eq!(editor.document().text(), "saved");
        assert!(editor.document().is_modified());
    }

    #[test]
    fn test_cut_and_paste() {
        let mut editor = editor_with("hello world");
        let mut clipboard = LocalClipboard::new();
        editor.set_cursor(Position::new(0, 5));
        editor.select_to(Position::new(0, 11));

        assert_eq!(editor.cut(&mut clipboard).unwrap(), Outcome::Completed);
        assert_eq!(editor.document().text(), "hello");

        editor.set_cursor(Position::new(0, 0));
        editor.paste(&mut clipboard).unwrap();
        assert_eq!(editor.document().text(), " worldhello");
    }

    #[test]
    fn test_copy_without_selection() {
        let mut editor = editor_with("abc");
        let mut clipboard = LocalClipboard::new();
        assert_eq!(editor.copy(&mut clipboard).unwrap(), Outcome::Cancelled);
        assert_eq!(clipboard.get_text().unwrap(), None);
    }

    #[test]
    fn test_sync_from_view_emits_change() {
        let mut editor = Editor::new();
        let mut rx = editor.subscribe();
        assert!(editor.sync_from_view("x\ny", Position::new(1, 1)));
        assert_eq!(rx.try_recv().unwrap(), EditorEvent::DocumentChanged);
        assert_eq!(editor.gutter().line_count(), 2);
    }

    #[test]
    fn test_with_default_extension() {
        assert_eq!(
            with_default_extension(PathBuf::from("a"), "txt"),
            PathBuf::from("a.txt")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("a.md"), "txt"),
            PathBuf::from("a.md")
        );
    }

    #[test]
    fn test_clipboard_error_propagates() {
        struct Broken;
        impl Clipboard for Broken {
            fn get_text(&mut self) -> CoreResult<Option<String>> {
                Err(CoreError::Clipboard("unavailable".to_string()))
            }
            fn set_text(&mut self, _text: String) -> CoreResult<()> {
                Err(CoreError::Clipboard("unavailable".to_string()))
            }
        }

        let mut editor = Editor::new();
        assert!(matches!(
            editor.paste(&mut Broken),
            Err(CoreError::Clipboard(_))
        ));
    }
}
