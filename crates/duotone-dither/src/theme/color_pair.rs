//! Background/foreground color pair.

use super::Theme;
use crate::color::Rgb;

/// The two colors of a duotone rendition.
///
/// Background is used for dithered cells at `0.0`, foreground for `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair {
    /// Color of unlit cells.
    pub background: Rgb,
    /// Color of lit cells.
    pub foreground: Rgb,
}

impl ColorPair {
    #[inline]
    pub const fn new(background: Rgb, foreground: Rgb) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// Resolve the colors to use from a theme and optional explicit colors.
    ///
    /// Explicit colors win only when *both* are given; a single explicit
    /// color is not enough to skip the theme. Without a theme the default
    /// ([`Theme::Warm`]) applies.
    ///
    /// ```
    /// use duotone_dither::{ColorPair, Rgb, Theme};
    ///
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    ///
    /// let explicit = ColorPair::resolve(Some(Theme::Night), Some(black), Some(white));
    /// assert_eq!(explicit, ColorPair::new(black, white));
    ///
    /// let partial = ColorPair::resolve(Some(Theme::Night), Some(black), None);
    /// assert_eq!(partial, Theme::Night.colors());
    /// ```
    pub fn resolve(
        theme: Option<Theme>,
        background: Option<Rgb>,
        foreground: Option<Rgb>,
    ) -> Self {
        match (background, foreground) {
            (Some(background), Some(foreground)) => Self::new(background, foreground),
            _ => theme.unwrap_or_default().colors(),
        }
    }

    /// Color for a dithered cell.
    #[inline]
    pub fn color_for(&self, lit: bool) -> Rgb {
        if lit {
            self.foreground
        } else {
            self.background
        }
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Theme::default().colors()
    }
}

impl From<Theme> for ColorPair {
    fn from(theme: Theme) -> Self {
        theme.colors()
    }
}
