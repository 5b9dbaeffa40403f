use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Element, Length, Padding};

use crate::app::update::find_input_id;
use crate::app::{App, Message};
use crate::theme;

impl App {
    pub fn view_find_replace_modal(&self) -> Element<'_, Message> {
        let Some(panel) = self.find_panel.as_ref() else {
            return Space::new(0, 0).into();
        };
        let colors = self.colors();

        let modal_content = column![
            text("Find & Replace").size(16).color(colors.text_foreground),
            Space::with_height(12),
            text("Find what:").size(12).color(colors.muted),
            Space::with_height(4),
            text_input("Search term...", &panel.find)
                .id(find_input_id())
                .on_input(Message::FindInputChanged)
                .on_submit(Message::FindConfirm)
                .padding(Padding::from([8, 12]))
                .size(13)
                .style(theme::input_style(colors)),
            Space::with_height(8),
            text("Replace with:").size(12).color(colors.muted),
            Space::with_height(4),
            text_input("Leave empty to delete matches", &panel.replacement)
                .on_input(Message::ReplaceInputChanged)
                .on_submit(Message::FindConfirm)
                .padding(Padding::from([8, 12]))
                .size(13)
                .style(theme::input_style(colors)),
            Space::with_height(16),
            row![
                button(text("Cancel").size(13))
                    .padding(Padding::from([8, 20]))
                    .style(theme::dialog_button_style(colors, false))
                    .on_press(Message::FindCancel),
                Space::with_width(12),
                button(text("Replace All").size(13))
                    .padding(Padding::from([8, 20]))
                    .style(theme::dialog_button_style(colors, true))
                    .on_press_maybe((!panel.find.is_empty()).then_some(Message::FindConfirm)),
            ]
            .align_y(iced::Alignment::Center),
        ]
        .padding(24)
        .width(Length::Fixed(380.0));

        container(container(modal_content).style(theme::panel_style(colors)))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
