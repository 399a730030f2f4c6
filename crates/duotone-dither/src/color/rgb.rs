//! 8-bit RGB color type.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A color as three 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(color: Rgb) -> Self {
        image::Rgb(color.to_bytes())
    }
}

impl fmt::Display for Rgb {
    /// Formats as lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB`, case-insensitive, with surrounding
    /// whitespace trimmed. Each channel is exactly two hex digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use duotone_dither::Rgb;
    ///
    /// let salmon: Rgb = "#eabab0".parse().unwrap();
    /// assert_eq!(salmon, Rgb::new(234, 186, 176));
    ///
    /// let same: Rgb = "EABAB0".parse().unwrap();
    /// assert_eq!(salmon, same);
    ///
    /// assert!("#fff".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.chars().count() != 6 {
            return Err(ParseColorError::InvalidLength {
                found: s.chars().count(),
            });
        }
        // from_str_radix tolerates a leading '+', so check digits up front
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(s.to_string()));
        }

        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Self::new(r, g, b))
    }
}
