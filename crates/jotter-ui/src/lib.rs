//! # Jotter UI
//!
//! Desktop front end built on iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`], which owns the core `Editor`
//! - **Message**: menu clicks, shortcuts and widget actions
//! - **Update**: turns messages into core `Command`s
//! - **View**: paints the document, gutter and status bar from core state
//!
//! The iced `text_editor` keeps its own copy of the text. Every widget edit
//! is pushed into the core document, and every core-side change (open, new,
//! replace, undo) rebuilds the widget content.

pub mod app;
pub mod dialogs;
pub mod theme;

pub use app::{run, App, Flags};

