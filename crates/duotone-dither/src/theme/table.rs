//! The built-in theme table.

use std::fmt;
use std::str::FromStr;

use super::{ColorPair, ParseThemeError};
use crate::color::Rgb;

/// A built-in color theme.
///
/// Each theme maps to a fixed background/foreground [`ColorPair`].
/// [`Theme::Warm`] is the default.
///
/// ```
/// use duotone_dither::{Rgb, Theme};
///
/// let night: Theme = "night".parse().unwrap();
/// assert_eq!(night.colors().background, Rgb::new(25, 35, 55));
/// assert_eq!(night.colors().foreground, Rgb::new(180, 195, 220));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Salmon on dark olive.
    #[default]
    Warm,
    Cool,
    Sunset,
    Forest,
    /// Light blue-gray on dark navy; the only theme with a dark background.
    Night,
    Monochrome,
    Sepia,
    Ocean,
    Lavender,
    Mint,
    Peach,
    Slate,
}

impl Theme {
    /// Every theme, in table order.
    pub const ALL: [Theme; 12] = [
        Theme::Warm,
        Theme::Cool,
        Theme::Sunset,
        Theme::Forest,
        Theme::Night,
        Theme::Monochrome,
        Theme::Sepia,
        Theme::Ocean,
        Theme::Lavender,
        Theme::Mint,
        Theme::Peach,
        Theme::Slate,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Theme::Warm => "warm",
            Theme::Cool => "cool",
            Theme::Sunset => "sunset",
            Theme::Forest => "forest",
            Theme::Night => "night",
            Theme::Monochrome => "monochrome",
            Theme::Sepia => "sepia",
            Theme::Ocean => "ocean",
            Theme::Lavender => "lavender",
            Theme::Mint => "mint",
            Theme::Peach => "peach",
            Theme::Slate => "slate",
        }
    }

    /// Background and foreground colors for this theme.
    pub const fn colors(self) -> ColorPair {
        let (background, foreground) = match self {
            Theme::Warm => (Rgb::new(234, 186, 175), Rgb::new(58, 74, 62)),
            Theme::Cool => (Rgb::new(200, 215, 230), Rgb::new(45, 55, 72)),
            Theme::Sunset => (Rgb::new(255, 195, 145), Rgb::new(72, 45, 55)),
            Theme::Forest => (Rgb::new(185, 210, 180), Rgb::new(35, 55, 35)),
            Theme::Night => (Rgb::new(25, 35, 55), Rgb::new(180, 195, 220)),
            Theme::Monochrome => (Rgb::new(240, 240, 235), Rgb::new(30, 30, 35)),
            Theme::Sepia => (Rgb::new(235, 220, 198), Rgb::new(82, 62, 45)),
            Theme::Ocean => (Rgb::new(180, 210, 220), Rgb::new(25, 60, 80)),
            Theme::Lavender => (Rgb::new(225, 210, 235), Rgb::new(65, 45, 85)),
            Theme::Mint => (Rgb::new(200, 235, 220), Rgb::new(40, 70, 60)),
            Theme::Peach => (Rgb::new(255, 218, 195), Rgb::new(120, 60, 45)),
            Theme::Slate => (Rgb::new(220, 225, 230), Rgb::new(50, 60, 75)),
        };
        ColorPair::new(background, foreground)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    /// Parse a theme by name (ASCII case-insensitive, whitespace trimmed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseThemeError {
                name: s.to_string(),
            })
    }
}
