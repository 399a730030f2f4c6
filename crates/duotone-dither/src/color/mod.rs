//! 8-bit RGB colors and hex parsing.
//!
//! Output colors are plain sRGB bytes; no color-space math happens on them,
//! they are only written into the recolored image.
//!
//! ```
//! use duotone_dither::Rgb;
//!
//! let olive: Rgb = "#3a4a3e".parse().unwrap();
//! assert_eq!(olive, Rgb::new(58, 74, 62));
//! assert_eq!(olive.to_string(), "#3a4a3e");
//! ```

mod error;
mod rgb;

pub use error::ParseColorError;
pub use rgb::Rgb;
