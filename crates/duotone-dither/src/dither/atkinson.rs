//! Atkinson error diffusion dithering algorithm.
//!
//! Atkinson dithering distributes only 75% of the quantization error (6/8).
//! The rest is dropped, which keeps large light and dark areas clean.

use crate::grid::{BinaryGrid, GrayGrid};

use super::{diffuse_with_kernel, Dither, ATKINSON};

/// Atkinson error diffusion dithering.
///
/// # Algorithm
///
/// The Atkinson kernel distributes error to 6 neighbors:
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Each neighbor receives 1/8 of the error, for a total of 6/8 = 75%.
/// The discarded quarter is not renormalized.
///
/// # Example
///
/// ```
/// use duotone_dither::{Atkinson, Dither, GrayGrid};
///
/// let grid = GrayGrid::filled(8, 8, 0.9);
/// let result = Atkinson.dither(&grid);
/// assert_eq!(result.count_set(), 64);
/// ```
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, grid: &GrayGrid) -> BinaryGrid {
        diffuse_with_kernel(grid, &ATKINSON)
    }
}
