//! DuotoneImage: a dithered grid paired with its two colors.
//!
//! The boolean grid is canonical; RGB forms are computed on demand by
//! looking up the background or foreground color for each cell.

use image::RgbImage;

use crate::grid::BinaryGrid;
use crate::preprocess::resize_nearest;
use crate::theme::ColorPair;

/// The recolored result of a duotone render.
///
/// # Example
///
/// ```
/// use duotone_dither::{BinaryGrid, ColorPair, DuotoneImage, Rgb};
///
/// let colors = ColorPair::new(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
/// let grid = BinaryGrid::new(2, 1, vec![false, true]).unwrap();
/// let image = DuotoneImage::new(grid, colors);
///
/// assert_eq!(image.to_rgb(), vec![0, 0, 0, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuotoneImage {
    grid: BinaryGrid,
    colors: ColorPair,
}

impl DuotoneImage {
    pub fn new(grid: BinaryGrid, colors: ColorPair) -> Self {
        Self { grid, colors }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The two colors, background first.
    #[inline]
    pub fn colors(&self) -> &ColorPair {
        &self.colors
    }

    /// The underlying two-level grid.
    #[inline]
    pub fn grid(&self) -> &BinaryGrid {
        &self.grid
    }

    /// Row-major cells as palette indices: 0 = background, 1 = foreground.
    pub fn indices(&self) -> Vec<u8> {
        self.grid.cells().iter().map(|&lit| lit as u8).collect()
    }

    /// Flat RGB bytes, three per cell, row-major.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.grid.cells().len() * 3);
        for &lit in self.grid.cells() {
            rgb.extend_from_slice(&self.colors.color_for(lit).to_bytes());
        }
        rgb
    }

    /// Recolored image as an `image` buffer.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            let lit = self.grid.get(x as usize, y as usize);
            self.colors.color_for(lit).into()
        })
    }

    /// Blow the image up (or down) to `width` x `height` with
    /// nearest-neighbor sampling, keeping hard block edges.
    pub fn upscale_nearest(&self, width: u32, height: u32) -> Self {
        Self {
            grid: resize_nearest(&self.grid, width, height),
            colors: self.colors,
        }
    }
}
