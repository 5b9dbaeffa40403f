//! Light/dark palettes.
//!
//! A theme is only a choice between two fixed palettes. The mode is never
//! persisted; every session starts light.

use serde::{Deserialize, Serialize};

/// RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Builds an opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        )
    }

    /// Formats as `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Colors applied to the text area and the gutter.
    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette::LIGHT,
            ThemeMode::Dark => Palette::DARK,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// Colors for the text area and the gutter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text_background: Color,
    pub text_foreground: Color,
    pub gutter_background: Color,
    /// Same as the text foreground in both modes
    pub gutter_foreground: Color,
    /// Same as the text foreground in both modes
    pub caret: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        text_background: Color::from_hex(0xffffff),
        text_foreground: Color::from_hex(0x000000),
        gutter_background: Color::from_hex(0xd3d3d3),
        gutter_foreground: Color::from_hex(0x000000),
        caret: Color::from_hex(0x000000),
    };

    pub const DARK: Palette = Palette {
        text_background: Color::from_hex(0x2e2e2e),
        text_foreground: Color::from_hex(0xdcdcdc),
        gutter_background: Color::from_hex(0x333333),
        gutter_foreground: Color::from_hex(0xdcdcdc),
        caret: Color::from_hex(0xdcdcdc),
    };
}
