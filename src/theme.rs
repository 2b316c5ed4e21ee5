//! Light/dark theme and the colours each one renders with

use ratatui::style::{Color, Style};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                bg: Color::Rgb(243, 244, 246),
                surface: Color::Rgb(255, 255, 255),
                fg: Color::Rgb(17, 24, 39),
                muted: Color::Rgb(107, 114, 128),
                accent: Color::Rgb(59, 130, 246),
                error: Color::Rgb(220, 38, 38),
            },
            Theme::Dark => Palette {
                bg: Color::Rgb(17, 24, 39),
                surface: Color::Rgb(31, 41, 55),
                fg: Color::Rgb(255, 255, 255),
                muted: Color::Rgb(156, 163, 175),
                accent: Color::Rgb(96, 165, 250),
                error: Color::Rgb(239, 68, 68),
            },
        }
    }
}

/// Colours for one theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    /// Panel background
    pub surface: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.fg).bg(self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggle().toggle(), theme);
            assert_ne!(theme.toggle(), theme);
        }
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }
}
