//! Core preprocessing logic.
//!
//! The [`Preprocessor`] turns a decoded image into the normalized
//! [`GrayGrid`] the dither engine works on.
//!
//! # Processing Pipeline
//!
//! 1. **Geometry**: resize to an explicit target, or shrink by the pixel
//!    scale (Lanczos3 on RGB)
//! 2. **Grayscale**: ITU-R 601-2 luma
//! 3. **Contrast** around the mean gray, if the factor is not 1.0
//! 4. **Brightness**, if the factor is not 1.0
//! 5. **Normalize** to `[0.0, 1.0]`
//! 6. **Invert**, if requested

use image::{DynamicImage, GenericImageView};

use crate::api::DitherError;
use crate::grid::GrayGrid;
use crate::preprocess::PreprocessOptions;

use super::enhance::{adjust_brightness, adjust_contrast, luma601};
use super::resize::{check_dimensions, resize_lanczos, scaled_size};

/// Result of preprocessing an image.
///
/// # Example
///
/// ```
/// use duotone_dither::{PreprocessOptions, Preprocessor};
/// use image::{DynamicImage, GrayImage};
///
/// let image = DynamicImage::ImageLuma8(GrayImage::new(40, 20));
/// let result = Preprocessor::new(PreprocessOptions::new().pixel_scale(4))
///     .process(&image)
///     .unwrap();
///
/// assert_eq!((result.width, result.height), (10, 5));
/// assert_eq!(result.restore_size, Some((40, 20)));
/// ```
#[derive(Debug, Clone)]
pub struct PreprocessResult {
    /// Normalized grayscale values, ready for dithering.
    pub grid: GrayGrid,

    /// Working width (after resize or pixel scaling).
    pub width: usize,

    /// Working height (after resize or pixel scaling).
    pub height: usize,

    /// Size to blow the dithered result back up to.
    ///
    /// `Some` only when the pixel-scale path was taken; it holds the source
    /// dimensions.
    pub restore_size: Option<(u32, u32)>,
}

/// Image preprocessor.
///
/// Holds only its options; one instance can process any number of images.
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    options: PreprocessOptions,
}

impl Preprocessor {
    /// Create a new preprocessor with the given options.
    #[inline]
    pub fn new(options: PreprocessOptions) -> Self {
        Self { options }
    }

    /// Process an image with the complete preprocessing pipeline.
    ///
    /// Alpha is discarded; any source color type is first brought to 8-bit
    /// RGB.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidDimensions`] if the image is empty, the
    /// resize target has a zero side, or the pixel scale exceeds the image.
    pub fn process(&self, image: &DynamicImage) -> Result<PreprocessResult, DitherError> {
        let (source_width, source_height) = image.dimensions();
        check_dimensions(source_width, source_height)?;

        let options = &self.options;
        let target = match options.resize {
            Some(size) => Some(size),
            None if options.uses_pixel_scale() => Some(scaled_size(
                source_width,
                source_height,
                options.pixel_scale,
            )?),
            None => None,
        };

        let mut rgb = image.to_rgb8();
        if let Some((width, height)) = target {
            rgb = resize_lanczos(rgb, width, height)?;
        }
        let (width, height) = rgb.dimensions();

        let mut luma: Vec<u8> = rgb.pixels().map(|p| luma601(p.0)).collect();
        if options.contrast != 1.0 {
            adjust_contrast(&mut luma, options.contrast);
        }
        if options.brightness != 1.0 {
            adjust_brightness(&mut luma, options.brightness);
        }

        let values = luma.iter().map(|&l| l as f64 / 255.0).collect();
        let mut grid = GrayGrid::new(width as usize, height as usize, values)?;
        if options.invert {
            grid.invert();
        }

        Ok(PreprocessResult {
            grid,
            width: width as usize,
            height: height as usize,
            restore_size: options
                .uses_pixel_scale()
                .then_some((source_width, source_height)),
        })
    }
}
