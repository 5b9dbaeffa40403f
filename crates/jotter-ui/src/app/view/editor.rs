use iced::widget::text::Wrapping;
use iced::widget::{container, horizontal_space, row, text, text_editor};
use iced::alignment::Horizontal;
use iced::{Element, Font, Length, Padding};

use crate::app::{App, Message};
use crate::theme;

const EDITOR_PADDING: f32 = 16.0;

impl App {
    /// Gutter and text side by side.
    pub fn view_document(&self) -> Element<'_, Message> {
        row![self.view_gutter(), self.view_editor()]
            .height(Length::Fill)
            .into()
    }

    pub fn view_gutter(&self) -> Element<'_, Message> {
        let colors = self.colors();
        let font_size = self.editor.config().editor.font_size;
        let gutter = self.editor.gutter();
        // monospace digits are roughly 0.6em wide
        let width = gutter.digits() as f32 * font_size * 0.6 + 2.0 * EDITOR_PADDING;

        container(
            text(gutter.text())
                .font(Font::MONOSPACE)
                .size(font_size)
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .color(colors.gutter_foreground),
        )
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .padding(Padding {
            top: EDITOR_PADDING,
            right: EDITOR_PADDING,
            bottom: EDITOR_PADDING,
            left: EDITOR_PADDING,
        })
        .style(theme::gutter_style(colors))
        .into()
    }

    pub fn view_editor(&self) -> Element<'_, Message> {
        let colors = self.colors();

        // text_editor scrolls itself; wrapping it in scrollable() would
        // reset the scroll position on every re-render
        text_editor(&self.content)
            .height(Length::Fill)
            .padding(Padding {
                top: EDITOR_PADDING,
                right: 20.0,
                bottom: EDITOR_PADDING,
                left: EDITOR_PADDING,
            })
            .font(Font::MONOSPACE)
            .size(self.editor.config().editor.font_size)
            // one visual row per document line, so the gutter and
            // `place_caret` line up with the text
            .wrapping(Wrapping::None)
            .style(theme::document_style(colors))
            .on_action(Message::EditorAction)
            .into()
    }

    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let colors = self.colors();

        let status_content = row![
            text(self.editor.status().text())
                .size(12)
                .color(colors.text_foreground),
            horizontal_space(),
            text(if self.editor.document().is_modified() {
                "Modified"
            } else {
                ""
            })
            .size(12)
            .color(colors.muted),
        ]
        .padding(Padding::from([6, 12]))
        .align_y(iced::Alignment::Center);

        container(status_content)
            .width(Length::Fill)
            .height(28)
            .style(theme::bar_style(colors))
            .into()
    }
}
