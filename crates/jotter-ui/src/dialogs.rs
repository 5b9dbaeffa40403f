//! Native dialogs and the system clipboard.
//!
//! Dialogs are the blocking `rfd` variants, run on the UI thread from
//! inside `update`, so a prompt answers before the command continues.

use std::path::PathBuf;

use jotter_core::{Clipboard, CoreError, CoreResult, DiscardChoice, FileFilter, LocalClipboard, Prompter};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// [`Prompter`] backed by native dialogs.
#[derive(Debug, Clone)]
pub struct NativePrompter {
    app_name: String,
}

impl NativePrompter {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    fn file_dialog(&self, title: &str, filters: &[FileFilter]) -> FileDialog {
        filters.iter().fold(
            FileDialog::new().set_title(format!("{} - {}", title, self.app_name)),
            |dialog, filter| dialog.add_filter(&filter.name, &filter.extensions),
        )
    }
}

impl Prompter for NativePrompter {
    fn confirm_discard(&mut self, document_name: &str) -> DiscardChoice {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(&self.app_name)
            .set_description(format!(
                "You have unsaved changes to {}. Save before proceeding?",
                document_name
            ))
            .set_buttons(MessageButtons::YesNoCancel)
            .show();

        match result {
            MessageDialogResult::Yes => DiscardChoice::Save,
            MessageDialogResult::No => DiscardChoice::Discard,
            _ => DiscardChoice::Cancel,
        }
    }

    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        let path = self.file_dialog("Open", filters).pick_file();
        if path.is_none() {
            tracing::debug!("Open dialog cancelled");
        }
        path
    }

    fn pick_save_path(&mut self, filters: &[FileFilter], suggested_name: &str) -> Option<PathBuf> {
        let path = self
            .file_dialog("Save As", filters)
            .set_file_name(suggested_name)
            .save_file();
        if path.is_none() {
            tracing::debug!("Save dialog cancelled");
        }
        path
    }

    fn ask_text(&mut self, title: &str, _prompt: &str) -> Option<String> {
        // native dialogs have no text entry; the find panel passes its
        // terms as command arguments instead
        tracing::debug!("No native text prompt for {:?}", title);
        None
    }

    fn show_error(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

/// [`Clipboard`] backed by the system clipboard.
///
/// Falls back to an in-process clipboard when the system one cannot be
/// opened (headless sessions, missing display server).
pub struct SystemClipboard {
    system: Option<arboard::Clipboard>,
    local: LocalClipboard,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let system = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("System clipboard unavailable, using a local one: {}", e);
                None
            }
        };
        Self {
            system,
            local: LocalClipboard::new(),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> CoreResult<Option<String>> {
        let Some(system) = self.system.as_mut() else {
            return self.local.get_text();
        };
        match system.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(CoreError::Clipboard(e.to_string())),
        }
    }

    fn set_text(&mut self, text: String) -> CoreResult<()> {
        match self.system.as_mut() {
            Some(system) => system
                .set_text(text)
                .map_err(|e| CoreError::Clipboard(e.to_string())),
            None => self.local.set_text(text),
        }
    }
}
