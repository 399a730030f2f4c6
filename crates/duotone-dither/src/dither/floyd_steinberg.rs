//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg is the most widely known error diffusion algorithm.
//! It distributes 100% of the quantization error to 4 neighbors, producing
//! smooth gradients whose local density tracks the input gray level.

use crate::grid::{BinaryGrid, GrayGrid};

use super::{diffuse_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// The default algorithm.
///
/// # Algorithm
///
/// The Floyd-Steinberg kernel distributes error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Total: 16/16 = 100% error propagation.
///
/// Pixels are visited left to right on every row; there is no serpentine
/// scanning.
///
/// # Example
///
/// ```
/// use duotone_dither::{Dither, FloydSteinberg, GrayGrid};
///
/// let grid = GrayGrid::filled(10, 10, 0.5);
/// let result = FloydSteinberg.dither(&grid);
/// assert_eq!(result.count_set(), 50);
/// ```
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, grid: &GrayGrid) -> BinaryGrid {
        diffuse_with_kernel(grid, &FLOYD_STEINBERG)
    }
}
