//! Duotoner builder: the primary ergonomic entry point for the crate.
//!
//! [`Duotoner`] wraps preprocessing, dithering, recoloring and the
//! pixel-scale restore behind fluent configuration.

use image::DynamicImage;

use crate::dither::{Dither, DitherAlgorithm};
use crate::output::DuotoneImage;
use crate::preprocess::{PreprocessOptions, Preprocessor};
use crate::theme::ColorPair;

use super::DitherError;

/// High-level builder for two-color dithering.
///
/// # Defaults
///
/// - Algorithm: [`DitherAlgorithm::FloydSteinberg`]
/// - Contrast and brightness: 1.0
/// - No inversion, no resize, pixel scale 1
///
/// A `Duotoner` holds no per-image state and can render any number of
/// images.
///
/// # Example
///
/// ```
/// use duotone_dither::{DitherAlgorithm, Duotoner, Theme};
/// use image::{DynamicImage, GrayImage, Luma};
///
/// let source = DynamicImage::ImageLuma8(GrayImage::from_pixel(40, 40, Luma([200])));
/// let image = Duotoner::new(Theme::Sepia.into())
///     .algorithm(DitherAlgorithm::Ordered)
///     .pixel_scale(4)
///     .render(&source)
///     .unwrap();
///
/// assert_eq!((image.width(), image.height()), (40, 40));
/// ```
#[derive(Debug, Clone)]
pub struct Duotoner {
    colors: ColorPair,
    preprocess: PreprocessOptions,
    algorithm: DitherAlgorithm,
}

impl Duotoner {
    /// Create a builder rendering with `colors`.
    pub fn new(colors: ColorPair) -> Self {
        Self {
            colors,
            preprocess: PreprocessOptions::default(),
            algorithm: DitherAlgorithm::default(),
        }
    }

    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.preprocess = self.preprocess.contrast(factor);
        self
    }

    #[inline]
    pub fn brightness(mut self, factor: f32) -> Self {
        self.preprocess = self.preprocess.brightness(factor);
        self
    }

    #[inline]
    pub fn invert(mut self, enabled: bool) -> Self {
        self.preprocess = self.preprocess.invert(enabled);
        self
    }

    /// Resize to an exact size before dithering. Overrides the pixel scale.
    #[inline]
    pub fn resize(mut self, width: u32, height: u32) -> Self {
        self.preprocess = self.preprocess.resize(width, height);
        self
    }

    /// Dither at `1 / scale` resolution and blow the result back up.
    #[inline]
    pub fn pixel_scale(mut self, scale: u32) -> Self {
        self.preprocess = self.preprocess.pixel_scale(scale);
        self
    }

    #[inline]
    pub fn colors(&self) -> &ColorPair {
        &self.colors
    }

    #[inline]
    pub fn algorithm_kind(&self) -> DitherAlgorithm {
        self.algorithm
    }

    #[inline]
    pub fn preprocess_options(&self) -> &PreprocessOptions {
        &self.preprocess
    }

    /// Render `image` as a two-color dithered image.
    ///
    /// Output size is the resize target if one was set, otherwise the
    /// source size (also when a pixel scale is in effect).
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidDimensions`] for an empty image, a
    /// zero-sized resize target, or a pixel scale larger than the image.
    pub fn render(&self, image: &DynamicImage) -> Result<DuotoneImage, DitherError> {
        // 1. Preprocess
        let result = Preprocessor::new(self.preprocess.clone()).process(image)?;

        // 2. Dither
        let grid = self.algorithm.dither(&result.grid);

        // 3. Recolor, restoring the source size on the pixel-scale path
        let output = DuotoneImage::new(grid, self.colors);
        Ok(match result.restore_size {
            Some((width, height)) => output.upscale_nearest(width, height),
            None => output,
        })
    }
}
