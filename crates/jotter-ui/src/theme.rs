//! Maps the core palette onto iced colors.
//!
//! The document and gutter take their colors straight from
//! [`jotter_core::Palette`]. The surrounding chrome (menu bar, status bar,
//! dialogs) is derived from the same palette so it follows the toggle.

use iced::widget::{button, container, text_editor, text_input};
use iced::{Background, Border, Color, Theme};
use jotter_core::{Palette, ThemeMode};

/// Converts a core color to an iced color.
pub fn to_iced(color: jotter_core::Color) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colors {
    pub text_background: Color,
    pub text_foreground: Color,
    pub gutter_background: Color,
    pub gutter_foreground: Color,
    pub caret: Color,
    pub selection: Color,
    pub hover: Color,
    pub border: Color,
    pub muted: Color,
}

impl From<Palette> for Colors {
    fn from(palette: Palette) -> Self {
        let text_foreground = to_iced(palette.text_foreground);
        let gutter_background = to_iced(palette.gutter_background);
        Self {
            text_background: to_iced(palette.text_background),
            text_foreground,
            gutter_background,
            gutter_foreground: to_iced(palette.gutter_foreground),
            caret: to_iced(palette.caret),
            selection: Color::from_rgba(0.25, 0.46, 0.85, 0.45),
            hover: mix(gutter_background, text_foreground, 0.12),
            border: mix(gutter_background, text_foreground, 0.25),
            muted: mix(gutter_background, text_foreground, 0.6),
        }
    }
}

impl Colors {
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self::from(mode.palette())
    }
}

/// Linear blend from `a` towards `b`.
fn mix(a: Color, b: Color, amount: f32) -> Color {
    Color::from_rgb(
        a.r + (b.r - a.r) * amount,
        a.g + (b.g - a.g) * amount,
        a.b + (b.b - a.b) * amount,
    )
}

/// Built-in iced theme matching the mode, used for scrollbars and inputs.
pub fn iced_theme(mode: ThemeMode) -> Theme {
    if mode.is_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

pub fn document_style(colors: Colors) -> impl Fn(&Theme, text_editor::Status) -> text_editor::Style {
    move |_, _| text_editor::Style {
        background: Background::Color(colors.text_background),
        border: Border {
            width: 0.0,
            radius: 0.0.into(),
            color: Color::TRANSPARENT,
        },
        icon: colors.muted,
        placeholder: colors.muted,
        value: colors.text_foreground,
        selection: colors.selection,
    }
}

pub fn gutter_style(colors: Colors) -> impl Fn(&Theme) -> container::Style {
    move |_| container::Style {
        background: Some(Background::Color(colors.gutter_background)),
        text_color: Some(colors.gutter_foreground),
        ..Default::default()
    }
}

/// Menu bar, status bar and dropdown background.
pub fn bar_style(colors: Colors) -> impl Fn(&Theme) -> container::Style {
    move |_| container::Style {
        background: Some(Background::Color(colors.gutter_background)),
        text_color: Some(colors.text_foreground),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn panel_style(colors: Colors) -> impl Fn(&Theme) -> container::Style {
    move |_| container::Style {
        background: Some(Background::Color(colors.gutter_background)),
        text_color: Some(colors.text_foreground),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn menu_button_style(
    colors: Colors,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let bg = match status {
            _ if active => colors.hover,
            button::Status::Hovered => colors.hover,
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: colors.text_foreground,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub fn dialog_button_style(
    colors: Colors,
    primary: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    const ACCENT: Color = Color::from_rgb(0.36, 0.54, 0.90);
    const ACCENT_HOVER: Color = Color::from_rgb(0.40, 0.58, 0.95);

    move |_, status| {
        let hovered = matches!(status, button::Status::Hovered);
        let (bg, fg) = match (primary, hovered) {
            (true, true) => (ACCENT_HOVER, Color::WHITE),
            (true, false) => (ACCENT, Color::WHITE),
            (false, true) => (colors.hover, colors.text_foreground),
            (false, false) => (colors.text_background, colors.text_foreground),
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: fg,
            border: Border {
                color: if primary { Color::TRANSPARENT } else { colors.border },
                width: if primary { 0.0 } else { 1.0 },
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }
}

pub fn input_style(colors: Colors) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |_, status| text_input::Style {
        background: Background::Color(colors.text_background),
        border: Border {
            color: match status {
                text_input::Status::Focused => colors.caret,
                _ => colors.border,
            },
            width: 1.0,
            radius: 4.0.into(),
        },
        icon: colors.muted,
        placeholder: colors.muted,
        value: colors.text_foreground,
        selection: colors.selection,
    }
}
