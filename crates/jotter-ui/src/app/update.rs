use iced::keyboard::{self, key::Named};
use iced::widget::{text_editor, text_input};
use iced::Task;
use jotter_buffer::Position;
use jotter_core::{Clipboard, Command, EditorEvent, Key, KeyPress, Modifiers, UiEvent};
use std::sync::Arc;
use tokio::sync::broadcast::error::TryRecvError;

use super::{App, FindPanel, Message};

pub fn find_input_id() -> text_input::Id {
    text_input::Id::new("find-input")
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Command(cmd) => {
                self.active_menu = None;
                self.run_command(cmd)
            }

            Message::EditorAction(action) => {
                self.active_menu = None;
                self.status_pinned = false;
                self.perform(action);
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => {
                self.editor.handle_ui_event(UiEvent::KeyPress);
                self.handle_key_pressed(key, modifiers)
            }

            Message::Input(event) => {
                if refreshes_status(self.status_pinned, event) {
                    self.editor.handle_ui_event(event);
                }
                Task::none()
            }

            Message::CloseRequested => {
                self.active_menu = None;
                self.find_panel = None;
                self.run_command(Command::Exit)
            }

            Message::ToggleTopMenu(menu) => {
                self.active_menu = if self.active_menu == Some(menu) {
                    None
                } else {
                    Some(menu)
                };
                Task::none()
            }

            Message::CloseTopMenu => {
                self.active_menu = None;
                Task::none()
            }

            Message::FindInputChanged(value) => {
                if let Some(panel) = self.find_panel.as_mut() {
                    panel.find = value;
                }
                Task::none()
            }

            Message::ReplaceInputChanged(value) => {
                if let Some(panel) = self.find_panel.as_mut() {
                    panel.replacement = value;
                }
                Task::none()
            }

            Message::FindConfirm => match self.find_panel.take() {
                Some(panel) => self.run_command(Command::FindReplace {
                    find: Some(panel.find),
                    replacement: Some(panel.replacement),
                }),
                None => Task::none(),
            },

            Message::FindCancel => {
                self.find_panel = None;
                Task::none()
            }
        };

        self.sync_view();
        task
    }

    fn handle_key_pressed(&mut self, key: keyboard::Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        let command = to_key_press(&key, modifiers)
            .and_then(|keys| self.editor.keymap().lookup(&keys).cloned());

        match command {
            Some(cmd) => self.run_command(cmd),
            None if matches!(key, keyboard::Key::Named(Named::Escape)) => {
                self.active_menu = None;
                self.find_panel = None;
                Task::none()
            }
            None => Task::none(),
        }
    }

    /// Runs a command from a menu item or shortcut.
    pub fn run_command(&mut self, cmd: Command) -> Task<Message> {
        match cmd {
            // the find panel collects both terms, then dispatches with them
            Command::FindReplace { find: None, .. } => {
                self.find_panel = Some(FindPanel::default());
                return text_input::focus(find_input_id());
            }
            // the widget owns the selection
            Command::Cut | Command::Copy | Command::Paste | Command::SelectAll => {
                self.clipboard_command(&cmd);
                return Task::none();
            }
            _ => {}
        }

        let before = self.editor.status().text().to_owned();
        let outcome = self.registry.dispatch(
            &cmd,
            &mut self.editor,
            &mut self.prompter,
            &mut self.clipboard,
        );
        tracing::debug!("{} finished: {:?}", cmd.name(), outcome);
        if self.editor.status().text() != before {
            self.status_pinned = true;
        }

        if self.editor.should_quit() {
            return iced::exit();
        }
        Task::none()
    }

    fn clipboard_command(&mut self, cmd: &Command) {
        let result = match cmd {
            Command::Copy | Command::Cut => match self.content.selection() {
                Some(selected) => self.clipboard.set_text(selected).map(|()| {
                    if *cmd == Command::Cut {
                        self.perform(text_editor::Action::Edit(text_editor::Edit::Delete));
                    }
                }),
                None => Ok(()),
            },
            Command::Paste => self.clipboard.get_text().map(|text| {
                if let Some(text) = text.filter(|t| !t.is_empty()) {
                    self.perform(text_editor::Action::Edit(text_editor::Edit::Paste(
                        Arc::new(text),
                    )));
                }
            }),
            Command::SelectAll => {
                self.perform(text_editor::Action::SelectAll);
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            tracing::warn!("{} failed: {}", cmd.name(), e);
            self.editor.show_message(e.to_string());
        }
    }

    /// Applies a widget action and pushes the result into the document.
    fn perform(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        self.content.perform(action);
        let caret = caret_position(&self.content);

        if is_edit {
            let ending = line_ending(&self.editor.document().text());
            let text = view_text(&self.content, ending);
            self.editor.sync_from_view(&text, caret);
            self.synced_revision = self.editor.document().revision();
        } else {
            self.editor.set_cursor(caret);
        }
    }

    /// Rebuilds the widget when the document changed behind its back.
    pub fn sync_view(&mut self) {
        let mut replaced = false;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    tracing::trace!("Editor event: {:?}", event);
                    replaced |= matches!(
                        event,
                        EditorEvent::DocumentOpened(_) | EditorEvent::DocumentCleared
                    );
                }
                Err(TryRecvError::Lagged(missed)) => {
                    tracing::warn!("Missed {} editor events", missed);
                    replaced = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        if replaced || self.editor.document().revision() != self.synced_revision {
            self.rebuild_content();
        }
    }

    /// Replaces the widget content with the document text and caret.
    pub fn rebuild_content(&mut self) {
        let document = self.editor.document();
        self.content = text_editor::Content::with_text(&document.text());
        place_caret(&mut self.content, document.cursor_position());
        self.synced_revision = document.revision();
    }
}

/// Whether `event` may run the core refresh.
///
/// A message left by a command stays until the document itself gets input,
/// so the key release that follows Ctrl+S or the find panel's Enter does not
/// replace it with the caret position.
pub fn refreshes_status(pinned: bool, event: UiEvent) -> bool {
    !(pinned && event == UiEvent::KeyRelease)
}

/// Translates an iced key event into a keymap chord.
pub fn to_key_press(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<KeyPress> {
    let key = match key {
        keyboard::Key::Character(c) => {
            let mut chars = c.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Key::Char(ch),
                _ => return None,
            }
        }
        keyboard::Key::Named(named) => match named {
            Named::Enter => Key::Enter,
            Named::Tab => Key::Tab,
            Named::Space => Key::Space,
            Named::Backspace => Key::Backspace,
            Named::Delete => Key::Delete,
            Named::Escape => Key::Escape,
            Named::F1 => Key::F(1),
            Named::F2 => Key::F(2),
            Named::F3 => Key::F(3),
            Named::F4 => Key::F(4),
            Named::F5 => Key::F(5),
            Named::F6 => Key::F(6),
            Named::F7 => Key::F(7),
            Named::F8 => Key::F(8),
            Named::F9 => Key::F(9),
            Named::F10 => Key::F(10),
            Named::F11 => Key::F(11),
            Named::F12 => Key::F(12),
            _ => return None,
        },
        keyboard::Key::Unidentified => return None,
    };

    Some(KeyPress::new(
        key,
        Modifiers {
            ctrl: modifiers.control(),
            alt: modifiers.alt(),
            shift: modifiers.shift(),
            meta: modifiers.logo(),
        },
    ))
}

/// "\r\n" if the text already uses it, else "\n".
fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") { "\r\n" } else { "\n" }
}

/// Widget text joined with `ending`, with no newline added at the end.
fn view_text(content: &text_editor::Content, ending: &str) -> String {
    let mut text = String::new();
    for (i, line) in content.lines().enumerate() {
        if i > 0 {
            text.push_str(ending);
        }
        text.push_str(&line);
    }
    text
}

/// Widget caret as a character position (the widget reports byte offsets).
fn caret_position(content: &text_editor::Content) -> Position {
    let (line, index) = content.cursor_position();
    let column = content
        .line(line)
        .map(|text| text.get(..index).unwrap_or(&*text).chars().count())
        .unwrap_or(0);
    Position::new(line, column)
}

/// Walks the widget caret to `pos`.
///
/// `Motion::Right` steps over whole graphemes, so on a line with combining
/// marks the caret can land past the document column.
fn place_caret(content: &mut text_editor::Content, pos: Position) {
    use text_editor::{Action, Motion};

    content.perform(Action::Move(Motion::DocumentStart));
    for _ in 0..pos.line {
        content.perform(Action::Move(Motion::Down));
    }
    content.perform(Action::Move(Motion::Home));
    for _ in 0..pos.column {
        content.perform(Action::Move(Motion::Right));
    }
}
