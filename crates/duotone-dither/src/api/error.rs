//! Unified error type for the duotone-dither public API.

use crate::grid::GridError;
use std::fmt;

/// Error returned by [`Duotoner::render`](crate::Duotoner::render) and the
/// preprocessing steps behind it.
///
/// # Example
///
/// ```
/// use duotone_dither::{ColorPair, DitherError, Duotoner};
/// use image::{DynamicImage, RgbImage};
///
/// let image = DynamicImage::ImageRgb8(RgbImage::new(3, 3));
/// let err = Duotoner::new(ColorPair::default())
///     .pixel_scale(4)
///     .render(&image)
///     .unwrap_err();
/// assert!(matches!(err, DitherError::InvalidDimensions { width: 0, height: 0 }));
/// ```
#[derive(Debug)]
pub enum DitherError {
    /// A target or working size has a zero dimension.
    ///
    /// Raised for a zero resize target, a zero-sized input, or a pixel
    /// scale larger than the image.
    InvalidDimensions {
        /// Requested or computed width
        width: u32,
        /// Requested or computed height
        height: u32,
    },
    /// Grid construction failed
    Grid(GridError),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions {}x{}", width, height)
            }
            DitherError::Grid(err) => write!(f, "grid error: {}", err),
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::InvalidDimensions { .. } => None,
            DitherError::Grid(err) => Some(err),
        }
    }
}

impl From<GridError> for DitherError {
    fn from(err: GridError) -> Self {
        DitherError::Grid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let err = DitherError::InvalidDimensions {
            width: 0,
            height: 12,
        };
        assert_eq!(err.to_string(), "invalid dimensions 0x12");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_grid_error_has_source() {
        let err: DitherError = GridError::SizeMismatch {
            expected: 4,
            actual: 3,
        }
        .into();
        assert!(err.to_string().starts_with("grid error:"));
        assert!(err.source().is_some());
    }
}
