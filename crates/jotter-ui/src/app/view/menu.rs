use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row, Space};
use iced::{Background, Element, Length, Padding};
use jotter_core::Command;

use crate::app::{App, Message, TopMenu};
use crate::theme::{self, Colors};

/// An entry in a dropdown: a command or a divider.
enum MenuEntry {
    Item(Command),
    Separator,
}

fn entries(menu: TopMenu) -> Vec<MenuEntry> {
    use MenuEntry::{Item, Separator};

    match menu {
        TopMenu::File => vec![
            Item(Command::NewFile),
            Item(Command::OpenFile { path: None }),
            Item(Command::Save),
            Item(Command::SaveAs { path: None }),
            Separator,
            Item(Command::Exit),
        ],
        TopMenu::Edit => vec![
            Item(Command::Undo),
            Item(Command::Redo),
            Separator,
            Item(Command::Cut),
            Item(Command::Copy),
            Item(Command::Paste),
            Item(Command::SelectAll),
            Separator,
            Item(Command::FindReplace {
                find: None,
                replacement: None,
            }),
        ],
        TopMenu::View => vec![Item(Command::ToggleTheme)],
    }
}

impl App {
    pub fn view_menu_bar(&self) -> Element<'_, Message> {
        let colors = self.colors();

        let mut menu_items: Vec<Element<'_, Message>> = TopMenu::ALL
            .into_iter()
            .map(|menu| {
                let is_active = self.active_menu == Some(menu);
                button(text(menu.label()).size(12).color(colors.text_foreground))
                    .padding(Padding::from([6, 10]))
                    .style(theme::menu_button_style(colors, is_active))
                    .on_press(Message::ToggleTopMenu(menu))
                    .into()
            })
            .collect();

        menu_items.push(horizontal_space().into());

        let toolbar = Row::with_children(menu_items)
            .spacing(2)
            .padding(Padding::from([4, 8]))
            .align_y(iced::Alignment::Center);

        container(toolbar)
            .width(Length::Fill)
            .style(theme::bar_style(colors))
            .into()
    }

    /// Build a single dropdown menu item with label, shortcut, and action.
    fn menu_item(&self, command: Command, colors: Colors) -> Element<'_, Message> {
        let shortcut = self
            .editor
            .keymap()
            .shortcut_for(&command)
            .map(ToString::to_string)
            .unwrap_or_default();

        button(
            row![
                text(command.display_name()).size(12).color(colors.text_foreground),
                horizontal_space(),
                text(shortcut).size(11).color(colors.muted),
            ]
            .width(Length::Fill)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 16]))
        .style(theme::menu_button_style(colors, false))
        .on_press(Message::Command(command))
        .into()
    }

    fn menu_separator<'a>(colors: Colors) -> Element<'a, Message> {
        container(Space::new(Length::Fill, 1))
            .style(move |_| container::Style {
                background: Some(Background::Color(colors.border)),
                ..Default::default()
            })
            .into()
    }

    pub fn view_menu_dropdown(&self) -> Element<'_, Message> {
        let Some(menu) = self.active_menu else {
            return Space::new(0, 0).into();
        };
        let colors = self.colors();

        let items: Vec<Element<'_, Message>> = entries(menu)
            .into_iter()
            .map(|entry| match entry {
                MenuEntry::Item(command) => self.menu_item(command, colors),
                MenuEntry::Separator => Self::menu_separator(colors),
            })
            .collect();

        let menu_content = Column::with_children(items)
            .width(Length::Fixed(240.0))
            .padding(4);

        let menu_offset_x = match menu {
            TopMenu::File => 8.0,
            TopMenu::Edit => 50.0,
            TopMenu::View => 92.0,
        };

        let menu_box = container(menu_content).style(theme::panel_style(colors));

        column![
            Space::with_height(Length::Fixed(32.0)),
            row![Space::with_width(Length::Fixed(menu_offset_x)), menu_box],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
