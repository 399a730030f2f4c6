//! Ordered (Bayer) dithering.
//!
//! Each cell is compared against a position-dependent threshold taken from
//! a tiled 8x8 Bayer matrix. No error is carried between cells, so the
//! result for one cell never depends on any other.

use crate::grid::{BinaryGrid, GrayGrid};

use super::Dither;

/// The 8x8 Bayer index matrix, indexed `[y % 8][x % 8]`.
///
/// Contains every integer in `0..64` exactly once. The threshold for a cell
/// is the entry divided by 64.
pub const BAYER_8X8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Threshold in `[0.0, 63/64]` for the cell at (`x`, `y`).
#[inline]
pub fn bayer_threshold(x: usize, y: usize) -> f64 {
    BAYER_8X8[y % 8][x % 8] as f64 / 64.0
}

/// Ordered dithering with the 8x8 Bayer matrix.
///
/// A cell is lit iff its value is strictly greater than
/// [`bayer_threshold`] at its position. A value of `0.0` is never lit; a
/// value of `1.0` is always lit.
///
/// ```
/// use duotone_dither::{Dither, GrayGrid, Ordered};
///
/// let grid = GrayGrid::filled(8, 8, 0.5);
/// assert_eq!(Ordered.dither(&grid).count_set(), 32);
/// ```
pub struct Ordered;

impl Dither for Ordered {
    fn dither(&self, grid: &GrayGrid) -> BinaryGrid {
        let width = grid.width();
        let mut output = BinaryGrid::empty(width, grid.height());
        for (i, &value) in grid.values().iter().enumerate() {
            let (x, y) = (i % width, i / width);
            output.set(x, y, value > bayer_threshold(x, y));
        }
        output
    }
}
