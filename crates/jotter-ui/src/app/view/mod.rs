pub mod dialogs;
pub mod editor;
pub mod menu;

use iced::widget::{column, container, mouse_area, stack, Space};
use iced::{Background, Color, Element, Length};

use crate::app::{App, Message};
use crate::theme::Colors;

impl App {
    pub fn colors(&self) -> Colors {
        Colors::for_mode(self.editor.theme())
    }

    pub fn view(&self) -> Element<'_, Message> {
        let colors = self.colors();

        let main_view: Element<'_, Message> = container(column![
            self.view_menu_bar(),
            self.view_document(),
            self.view_status_bar(),
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(colors.text_background)),
            ..Default::default()
        })
        .into();

        if self.find_panel.is_some() {
            stack![
                main_view,
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(|_| container::Style {
                            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
                            ..Default::default()
                        })
                )
                .on_press(Message::FindCancel),
                self.view_find_replace_modal(),
            ]
            .into()
        } else if self.active_menu.is_some() {
            stack![
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                )
                .on_press(Message::CloseTopMenu),
                main_view,
                self.view_menu_dropdown(),
            ]
            .into()
        } else {
            main_view
        }
    }
}
