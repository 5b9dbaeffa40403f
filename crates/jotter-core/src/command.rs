//! Command system for editor actions.
//!
//! Menu items and key bindings both produce a [`Command`]. The
//! [`CommandRegistry`] is a dispatch table from command names
//! ("file.save", "edit.undo", ...) to handler functions, so nothing in here
//! knows which toolkit raised the command.
//!
//! Commands may carry their arguments (a path, search strings). When an
//! argument is absent the handler asks the [`Prompter`] for it.

use crate::clipboard::Clipboard;
use crate::editor::Editor;
use crate::prompt::Prompter;
use crate::{CoreError, CoreResult};
use std::collections::HashMap;
use std::path::PathBuf;

/// Built-in editor commands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // File commands
    NewFile,
    OpenFile { path: Option<PathBuf> },
    Save,
    SaveAs { path: Option<PathBuf> },
    Exit,

    // Edit commands
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    FindReplace {
        find: Option<String>,
        replacement: Option<String>,
    },

    // View
    ToggleTheme,
}

impl Command {
    /// Every command, with arguments left for the prompter.
    pub fn all() -> Vec<Command> {
        vec![
            Command::NewFile,
            Command::OpenFile { path: None },
            Command::Save,
            Command::SaveAs { path: None },
            Command::Exit,
            Command::Undo,
            Command::Redo,
            Command::Cut,
            Command::Copy,
            Command::Paste,
            Command::SelectAll,
            Command::FindReplace {
                find: None,
                replacement: None,
            },
            Command::ToggleTheme,
        ]
    }

    /// Stable name used by the dispatch table and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Command::NewFile => "file.new",
            Command::OpenFile { .. } => "file.open",
            Command::Save => "file.save",
            Command::SaveAs { .. } => "file.save_as",
            Command::Exit => "file.exit",
            Command::Undo => "edit.undo",
            Command::Redo => "edit.redo",
            Command::Cut => "edit.cut",
            Command::Copy => "edit.copy",
            Command::Paste => "edit.paste",
            Command::SelectAll => "edit.select_all",
            Command::FindReplace { .. } => "edit.find_replace",
            Command::ToggleTheme => "view.toggle_theme",
        }
    }

    /// Looks a command up by name, with no arguments.
    pub fn from_name(name: &str) -> Option<Command> {
        Command::all().into_iter().find(|c| c.name() == name)
    }

    /// Returns the command's menu label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::NewFile => "New",
            Command::OpenFile { .. } => "Open...",
            Command::Save => "Save",
            Command::SaveAs { .. } => "Save As...",
            Command::Exit => "Exit",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Cut => "Cut",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::SelectAll => "Select All",
            Command::FindReplace { .. } => "Find & Replace...",
            Command::ToggleTheme => "Toggle Dark Mode",
        }
    }
}

/// How a dispatched command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did its work
    Completed,
    /// The user backed out (or there was nothing to do)
    Cancelled,
    /// The command failed; the user has already been told
    Failed,
}

/// Everything a handler may touch.
pub struct CommandContext<'a> {
    pub editor: &'a mut Editor,
    pub prompter: &'a mut dyn Prompter,
    pub clipboard: &'a mut dyn Clipboard,
}

/// A command handler.
pub type Handler = fn(&mut CommandContext<'_>, &Command) -> CoreResult<Outcome>;

/// Dispatch table from command names to handlers.
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Handler>,
}

impl CommandRegistry {
    /// Creates a registry with every built-in command registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("file.new", |ctx, _| Ok(ctx.editor.new_file(ctx.prompter)));
        registry.register("file.open", |ctx, cmd| {
            let path = match cmd {
                Command::OpenFile { path } => path.clone(),
                _ => None,
            };
            Ok(ctx.editor.open_file(ctx.prompter, path))
        });
        registry.register("file.save", |ctx, _| Ok(ctx.editor.save(ctx.prompter)));
        registry.register("file.save_as", |ctx, cmd| {
            let path = match cmd {
                Command::SaveAs { path } => path.clone(),
                _ => None,
            };
            Ok(ctx.editor.save_as(ctx.prompter, path))
        });
        registry.register("file.exit", |ctx, _| Ok(ctx.editor.exit(ctx.prompter)));
        registry.register("edit.undo", |ctx, _| ctx.editor.undo());
        registry.register("edit.redo", |ctx, _| ctx.editor.redo());
        registry.register("edit.cut", |ctx, _| ctx.editor.cut(ctx.clipboard));
        registry.register("edit.copy", |ctx, _| ctx.editor.copy(ctx.clipboard));
        registry.register("edit.paste", |ctx, _| ctx.editor.paste(ctx.clipboard));
        registry.register("edit.select_all", |ctx, _| {
            ctx.editor.select_all();
            Ok(Outcome::Completed)
        });
        registry.register("edit.find_replace", |ctx, cmd| {
            let (find, replacement) = match cmd {
                Command::FindReplace { find, replacement } => (find.clone(), replacement.clone()),
                _ => (None, None),
            };
            Ok(ctx.editor.find_replace(ctx.prompter, find, replacement))
        });
        registry.register("view.toggle_theme", |ctx, _| {
            ctx.editor.toggle_theme();
            Ok(Outcome::Completed)
        });
        registry
    }

    /// Creates a registry with no handlers.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers a handler, replacing any previous one for `name`.
    pub fn register(&mut self, name: &'static str, handler: Handler) {
        self.handlers.insert(name, handler);
    }

    /// Executes a command.
    pub fn execute(&self, cmd: &Command, ctx: &mut CommandContext<'_>) -> CoreResult<Outcome> {
        let handler = self
            .handlers
            .get(cmd.name())
            .ok_or_else(|| CoreError::UnknownCommand(cmd.name().to_string()))?;
        tracing::debug!("Dispatching {}", cmd.name());
        handler(ctx, cmd)
    }

    /// Executes a command, turning internal errors into a status message.
    pub fn dispatch(
        &self,
        cmd: &Command,
        editor: &mut Editor,
        prompter: &mut dyn Prompter,
        clipboard: &mut dyn Clipboard,
    ) -> Outcome {
        let mut ctx = CommandContext {
            editor,
            prompter,
            clipboard,
        };
        match self.execute(cmd, &mut ctx) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("{} failed: {}", cmd.name(), e);
                ctx.editor.show_message(e.to_string());
                Outcome::Failed
            }
        }
    }

    /// Returns all registered command names.
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
