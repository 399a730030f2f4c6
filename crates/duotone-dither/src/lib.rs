//! duotone-dither: two-color dithering for a retro print look
//!
//! This library turns any raster image into a background/foreground
//! rendition: grayscale conversion, tone adjustment, one of three
//! dithering algorithms, then recoloring with a theme or explicit colors.
//!
//! # Quick Start
//!
//! The [`Duotoner`] builder is the primary entry point:
//!
//! ```
//! use duotone_dither::{ColorPair, DitherAlgorithm, Duotoner, Theme};
//! use image::{DynamicImage, RgbImage};
//!
//! let source = DynamicImage::ImageRgb8(RgbImage::new(64, 48));
//! let colors = ColorPair::resolve(Some(Theme::Night), None, None);
//!
//! let image = Duotoner::new(colors)
//!     .algorithm(DitherAlgorithm::Atkinson)
//!     .contrast(1.2)
//!     .render(&source)
//!     .unwrap();
//!
//! assert_eq!((image.width(), image.height()), (64, 48));
//! let rgb = image.to_rgb_image();
//! ```
//!
//! # Grid API
//!
//! The algorithms also work directly on normalized grids:
//!
//! ```
//! use duotone_dither::{Dither, FloydSteinberg, GrayGrid};
//!
//! let grid = GrayGrid::from_fn(8, 8, |x, _| x as f64 / 7.0);
//! let result = FloydSteinberg.dither(&grid);
//! assert_eq!(result.cells().len(), 64);
//! ```
//!
//! # Dithering Algorithms
//!
//! Three algorithms are available via [`DitherAlgorithm`]:
//!
//! - Floyd-Steinberg (100% error propagation, default)
//! - Ordered (8x8 Bayer matrix, no error memory)
//! - Atkinson (75% error propagation)
//!
//! All of them are deterministic.
//!
//! # Pipeline
//!
//! ```text
//! DynamicImage
//!     |
//!     v
//! [Resize]  explicit target, or shrink by pixel scale (Lanczos3)
//!     |
//!     v
//! [Luma]    ITU-R 601-2, 8-bit
//!     |
//!     v
//! [Tone]    contrast around mean, brightness (clip + truncate)
//!     |
//!     v
//! GrayGrid  L / 255, optional invert
//!     |
//!     v
//! [Dither]  Ordered | FloydSteinberg | Atkinson
//!     |
//!     v
//! BinaryGrid + ColorPair = DuotoneImage
//!     |
//!     v
//! [Restore] nearest-neighbor back to source size (pixel scale only)
//! ```
//!
//! Error diffusion runs on `f64` values in `[0, 1]` with a fixed 0.5
//! threshold. Values are not gamma-decoded: the look follows the classic
//! print-style dithers, which threshold encoded gray levels.

pub mod api;
pub mod color;
pub mod dither;
pub mod grid;
pub mod output;
pub mod preprocess;
pub mod theme;

#[cfg(test)]
mod domain_tests;

pub use api::{DitherError, Duotoner};
pub use color::{ParseColorError, Rgb};
pub use dither::{
    Atkinson, Dither, DitherAlgorithm, FloydSteinberg, Ordered, ParseAlgorithmError, BAYER_8X8,
};
pub use grid::{BinaryGrid, GrayGrid, GridError};
pub use output::DuotoneImage;
pub use preprocess::{PreprocessOptions, PreprocessResult, Preprocessor};
pub use theme::{ColorPair, ParseThemeError, Theme};
