//! # Jotter Core
//!
//! Editor logic with no knowledge of any windowing toolkit.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                         Editor                           │
//! │  ┌──────────┐ ┌────────┐ ┌───────────┐ ┌──────────────┐  │
//! │  │ Document │ │ Gutter │ │ StatusBar │ │  ThemeMode   │  │
//! │  └──────────┘ └────────┘ └───────────┘ └──────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//!        ▲                                       │
//!        │ Command                               │ Prompter / Clipboard
//! ┌──────┴───────────┐                   ┌───────▼─────────┐
//! │ CommandRegistry  │◄──── Keymap ◄──── │   UI front end  │
//! └──────────────────┘                   └─────────────────┘
//! ```
//!
//! The front end translates toolkit input into [`Command`]s, and supplies
//! the [`Prompter`] (dialogs) and [`Clipboard`] seams. Everything else lives
//! in [`Editor`], one owned value passed explicitly to every handler.

pub mod clipboard;
pub mod command;
pub mod config;
pub mod document;
pub mod editor;
pub mod event;
pub mod gutter;
pub mod keymap;
pub mod prompt;
pub mod status;
pub mod theme;

pub use clipboard::{Clipboard, LocalClipboard};
pub use command::{Command, CommandContext, CommandRegistry, Outcome};
pub use config::Config;
pub use document::Document;
pub use editor::{Editor, UiEvent};
pub use event::{EditorEvent, EventBus};
pub use gutter::Gutter;
pub use keymap::{Key, KeyPress, Keymap, Modifiers};
pub use prompt::{DiscardChoice, FileFilter, Prompter};
pub use status::{CursorStatus, StatusBar};
pub use theme::{Color, Palette, ThemeMode};

use std::path::PathBuf;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Buffer error: {0}")]
    Buffer(#[from] jotter_buffer::BufferError),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
