//! Image resizing.
//!
//! Downscaling uses Lanczos3 on RGB pixels, before any grayscale
//! conversion. Restoring a pixel-scaled result uses nearest-neighbor on the
//! two-level grid so blocks keep hard edges.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, RgbImage};

use crate::api::DitherError;
use crate::grid::BinaryGrid;

/// Working size for a pixel-scale factor: `(width / scale, height / scale)`.
///
/// # Errors
///
/// Returns [`DitherError::InvalidDimensions`] if either side rounds down to
/// zero.
pub fn scaled_size(width: u32, height: u32, scale: u32) -> Result<(u32, u32), DitherError> {
    let scale = scale.max(1);
    let size = (width / scale, height / scale);
    check_dimensions(size.0, size.1)?;
    Ok(size)
}

/// Reject sizes with a zero side.
pub fn check_dimensions(width: u32, height: u32) -> Result<(), DitherError> {
    if width == 0 || height == 0 {
        return Err(DitherError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Resize RGB pixels with a Lanczos3 filter.
///
/// Returns the input unchanged if the size already matches.
pub fn resize_lanczos(image: RgbImage, width: u32, height: u32) -> Result<RgbImage, DitherError> {
    check_dimensions(width, height)?;
    if image.dimensions() == (width, height) {
        return Ok(image);
    }
    Ok(imageops::resize(&image, width, height, FilterType::Lanczos3))
}

/// Scale a two-level grid to `width` x `height` with nearest-neighbor
/// sampling.
pub fn resize_nearest(grid: &BinaryGrid, width: u32, height: u32) -> BinaryGrid {
    if (grid.width(), grid.height()) == (width as usize, height as usize) {
        return grid.clone();
    }

    let mask = GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        let lit = grid.get(x as usize, y as usize);
        Luma([if lit { 255 } else { 0 }])
    });
    let scaled = imageops::resize(&mask, width, height, FilterType::Nearest);

    let mut output = BinaryGrid::empty(width as usize, height as usize);
    for (x, y, pixel) in scaled.enumerate_pixels() {
        output.set(x as usize, y as usize, pixel.0[0] >= 128);
    }
    output
}
