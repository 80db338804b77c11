//! Theme configuration options for cds
//!
//! This module defines the theme configuration options which are read from the cds.toml
//! configuration file.

use crate::utils::parse_color;

use ratatui::style::{Color, Style};
use serde::Deserialize;

/// Theme configuration options
/// Holds the color pair of every element the renderer draws.
/// # Examples
/// ```toml
/// [theme.directory]
/// fg = "blue"
/// [theme.cursor]
/// fg = "white"
/// bg = "#8700ff"
/// ```
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Theme {
    directory: ColorPair,
    executable: ColorPair,
    symlink: ColorPair,
    device: ColorPair,
    marker: ColorPair,
    cursor: ColorPair,
    selected: ColorPair,
    matched: ColorPair,
    details: ColorPair,
    path: ColorPair,
    valid_path: ColorPair,
    invalid_path: ColorPair,
    footer: ColorPair,
    more: ColorPair,
}

const VIOLET: Color = Color::Indexed(93);
const ORANGE: Color = Color::Indexed(208);
const BLUE: Color = Color::Indexed(33);
const GREEN: Color = Color::Indexed(34);
const GRAY: Color = Color::Indexed(245);

impl Default for Theme {
    fn default() -> Self {
        Theme {
            directory: ColorPair::fg(BLUE),
            executable: ColorPair::fg(GREEN),
            symlink: ColorPair::fg(Color::Cyan),
            device: ColorPair::fg(Color::Yellow),
            marker: ColorPair::fg(BLUE),
            cursor: ColorPair {
                fg: Color::White,
                bg: VIOLET,
            },
            selected: ColorPair {
                fg: Color::Black,
                bg: ORANGE,
            },
            matched: ColorPair::fg(ORANGE),
            details: ColorPair::fg(GRAY),
            path: ColorPair::default(),
            valid_path: ColorPair::fg(Color::Green),
            invalid_path: ColorPair::fg(Color::Red),
            footer: ColorPair::fg(GRAY),
            more: ColorPair::fg(VIOLET),
        }
    }
}

macro_rules! style_accessor {
    ($($name:ident),+ $(,)?) => {
        impl Theme {
            $(
                #[inline]
                pub fn $name(&self) -> Style {
                    self.$name.style()
                }
            )+
        }
    };
}

style_accessor!(
    directory,
    executable,
    symlink,
    device,
    marker,
    cursor,
    selected,
    matched,
    details,
    path,
    valid_path,
    invalid_path,
    footer,
    more,
);

/// ColorPair struct to hold foreground and background colors.
/// Used throughout the theme configuration.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

/// Sets both foreground and background to Color::Reset
impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bg: Color::Reset,
        }
    }

    /// Converts the ColorPair to a Style. Reset colors leave the terminal default in place.
    pub fn style(&self) -> Style {
        let mut style = Style::default();
        if self.fg != Color::Reset {
            style = style.fg(self.fg);
        }
        if self.bg != Color::Reset {
            style = style.bg(self.bg);
        }
        style
    }
}

// Helper function to deserialize Theme colors
fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
