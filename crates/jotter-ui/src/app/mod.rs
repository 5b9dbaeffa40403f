use iced::widget::text_editor;
use iced::{event, keyboard, mouse, window, Event, Subscription, Task};
use jotter_core::{Command, CommandRegistry, Config, Editor, EditorEvent, UiEvent};
use std::path::PathBuf;
use tokio::sync::broadcast;

use crate::dialogs::{NativePrompter, SystemClipboard};
use crate::theme;

pub mod messages;
pub mod update;
pub mod view;

pub use messages::*;

/// Start-up options from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// File to open before the first frame
    pub file: Option<PathBuf>,
}

/// Terms typed into the Find & Replace panel.
#[derive(Debug, Clone, Default)]
pub struct FindPanel {
    pub find: String,
    pub replacement: String,
}

pub struct App {
    pub editor: Editor,
    pub registry: CommandRegistry,
    pub prompter: NativePrompter,
    pub clipboard: SystemClipboard,
    /// Widget copy of the document text
    pub content: text_editor::Content,
    /// Document revision `content` was last built from or synced to
    pub synced_revision: u64,
    pub events: broadcast::Receiver<EditorEvent>,
    pub active_menu: Option<TopMenu>,
    pub find_panel: Option<FindPanel>,
    /// A command message is showing in the status bar
    pub status_pinned: bool,
}

impl App {
    pub fn new(flags: Flags, config: Config) -> (Self, Task<Message>) {
        let prompter = NativePrompter::new(config.window.app_name.clone());
        let editor = Editor::with_config(config);
        let events = editor.subscribe();

        let mut app = Self {
            editor,
            registry: CommandRegistry::new(),
            prompter,
            clipboard: SystemClipboard::new(),
            content: text_editor::Content::new(),
            synced_revision: 0,
            events,
            active_menu: None,
            find_panel: None,
            status_pinned: false,
        };
        app.rebuild_content();

        let task = match flags.file {
            Some(path) => {
                let task = app.run_command(Command::OpenFile { path: Some(path) });
                app.sync_view();
                task
            }
            None => Task::none(),
        };

        (app, task)
    }

    pub fn title(&self) -> String {
        self.editor.title()
    }

    pub fn theme(&self) -> iced::Theme {
        theme::iced_theme(self.editor.theme())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                match status {
                    // the text editor already acted on it (typing, clipboard keys)
                    event::Status::Captured => Some(Message::Input(UiEvent::KeyPress)),
                    event::Status::Ignored => Some(Message::KeyPressed(key, modifiers)),
                }
            }
            Event::Keyboard(keyboard::Event::KeyReleased { .. }) => {
                Some(Message::Input(UiEvent::KeyRelease))
            }
            Event::Mouse(mouse::Event::WheelScrolled { .. }) => Some(Message::Input(UiEvent::Scroll)),
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                Some(Message::Input(UiEvent::Click))
            }
            Event::Window(window::Event::CloseRequested) => Some(Message::CloseRequested),
            _ => None,
        })
    }
}

pub fn run(flags: Flags, config: Config) -> anyhow::Result<()> {
    let size = iced::Size::new(config.window.width, config.window.height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window(window::Settings {
            size,
            exit_on_close_request: false,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || App::new(flags, config))?;

    Ok(())
}
