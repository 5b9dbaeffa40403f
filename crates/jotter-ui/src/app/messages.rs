use iced::keyboard;
use iced::widget::text_editor;
use jotter_core::{Command, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMenu {
    File,
    Edit,
    View,
}

impl TopMenu {
    pub const ALL: [TopMenu; 3] = [TopMenu::File, TopMenu::Edit, TopMenu::View];

    pub fn label(self) -> &'static str {
        match self {
            TopMenu::File => "File",
            TopMenu::Edit => "Edit",
            TopMenu::View => "View",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Menu items and shortcuts
    Command(Command),

    // Editor
    EditorAction(text_editor::Action),

    // Raw input, for shortcuts and gutter/status refresh
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    Input(UiEvent),
    CloseRequested,

    // Top menu bar
    ToggleTopMenu(TopMenu),
    CloseTopMenu,

    // Find & Replace panel
    FindInputChanged(String),
    ReplaceInputChanged(String),
    FindConfirm,
    FindCancel,
}
