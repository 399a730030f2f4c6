//! Preprocessing options and configuration.
//!
//! This module provides the [`PreprocessOptions`] struct for configuring
//! image preprocessing before dithering.

/// Configuration options for image preprocessing.
///
/// # Defaults
///
/// - Resize: disabled (keep the source dimensions)
/// - Pixel scale: 1 (no block scaling)
/// - Contrast: 1.0 (no change)
/// - Brightness: 1.0 (no change)
/// - Invert: off
///
/// # Example
///
/// ```
/// use duotone_dither::PreprocessOptions;
///
/// let options = PreprocessOptions::new()
///     .pixel_scale(4)
///     .contrast(1.3)
///     .invert(true);
/// assert_eq!(options.pixel_scale, 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessOptions {
    /// Absolute target size `(width, height)`.
    ///
    /// Takes precedence over `pixel_scale`.
    pub resize: Option<(u32, u32)>,

    /// Block size for the pixelated look.
    ///
    /// With a value `s > 1` (and no `resize`), dithering runs on an image
    /// `s` times smaller in each dimension and the result is blown back up
    /// to the source size with nearest-neighbor sampling.
    pub pixel_scale: u32,

    /// Contrast factor around the image's mean gray.
    ///
    /// - 1.0 = no change
    /// - 0.0 = flat gray
    /// - above 1.0 = stronger contrast
    pub contrast: f32,

    /// Brightness multiplier.
    ///
    /// - 1.0 = no change
    /// - 0.0 = black
    pub brightness: f32,

    /// Swap light and dark after normalization.
    pub invert: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            resize: None,
            pixel_scale: 1,
            contrast: 1.0,
            brightness: 1.0,
            invert: false,
        }
    }
}

impl PreprocessOptions {
    /// Create new preprocessing options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set absolute target dimensions, resized with Lanczos3.
    #[inline]
    pub fn resize(mut self, width: u32, height: u32) -> Self {
        self.resize = Some((width, height));
        self
    }

    /// Set the pixel-scale factor.
    #[inline]
    pub fn pixel_scale(mut self, scale: u32) -> Self {
        self.pixel_scale = scale;
        self
    }

    /// Set contrast factor.
    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.contrast = factor;
        self
    }

    /// Set brightness factor.
    #[inline]
    pub fn brightness(mut self, factor: f32) -> Self {
        self.brightness = factor;
        self
    }

    /// Set inversion.
    #[inline]
    pub fn invert(mut self, enabled: bool) -> Self {
        self.invert = enabled;
        self
    }

    /// Whether the pixel-scale round trip applies.
    ///
    /// An explicit resize target disables it.
    #[inline]
    pub fn uses_pixel_scale(&self) -> bool {
        self.pixel_scale > 1 && self.resize.is_none()
    }
}
