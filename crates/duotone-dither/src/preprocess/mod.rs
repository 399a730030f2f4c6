//! Image preprocessing for two-color dithering.
//!
//! This module turns a decoded image into the grayscale grid the dither
//! engine consumes:
//!
//! 1. **Resize** (Lanczos3): explicit target, or shrink by the pixel scale
//! 2. **Grayscale**: ITU-R 601-2 luma on 8-bit values
//! 3. **Contrast / brightness**: blended against a flat image, clipped
//! 4. **Normalize / invert**: `L / 255`, optionally `1 - v`
//!
//! # Processing Order
//!
//! Resize happens **first**, on color pixels. Tone adjustments then run at
//! the working resolution, so a pixel-scaled image is adjusted with the
//! statistics of the reduced image.
//!
//! # Pixel Scale
//!
//! With a pixel scale `s > 1` and no explicit resize, the working image is
//! `floor(w / s)` x `floor(h / s)`. [`PreprocessResult::restore_size`] then
//! records the source size so the caller can blow the dithered result back
//! up with [`resize_nearest`].
//!
//! # Example
//!
//! ```
//! use duotone_dither::{Dither, DitherAlgorithm, PreprocessOptions, Preprocessor};
//! use image::{DynamicImage, RgbImage};
//!
//! let image = DynamicImage::ImageRgb8(RgbImage::new(20, 20));
//! let result = Preprocessor::new(PreprocessOptions::new().resize(10, 10))
//!     .process(&image)
//!     .unwrap();
//!
//! let dithered = DitherAlgorithm::Ordered.dither(&result.grid);
//! assert_eq!(dithered.count_set(), 0);
//! ```

mod enhance;
mod options;
mod preprocessor;
mod resize;

pub use enhance::{adjust_brightness, adjust_contrast, blend, luma601, mean_gray};
pub use options::PreprocessOptions;
pub use preprocessor::{PreprocessResult, Preprocessor};
pub use resize::{check_dimensions, resize_lanczos, resize_nearest, scaled_size};
