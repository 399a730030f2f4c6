//! Two-level dithering algorithms.
//!
//! Each algorithm turns a [`GrayGrid`] into a [`BinaryGrid`] of the same
//! size:
//!
//! - **Ordered**: 8x8 Bayer thresholds, no error memory
//! - **Floyd-Steinberg**: error diffusion, 100% propagation (default)
//! - **Atkinson**: error diffusion, 75% propagation
//!
//! # Architecture
//!
//! All algorithms implement the [`Dither`] trait. [`DitherAlgorithm`] is the
//! tag used to pick one at runtime and implements [`Dither`] itself by
//! dispatching to the matching unit struct.
//!
//! The two error-diffusion algorithms share [`diffuse_with_kernel`] and
//! differ only in their [`Kernel`].
//!
//! # Example
//!
//! ```
//! use duotone_dither::{Dither, DitherAlgorithm, GrayGrid};
//!
//! let grid = GrayGrid::filled(4, 4, 0.5);
//! let result = DitherAlgorithm::Atkinson.dither(&grid);
//! assert_eq!((result.width(), result.height()), (4, 4));
//! ```

mod atkinson;
mod floyd_steinberg;
mod kernel;
mod ordered;

pub use atkinson::Atkinson;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;
pub use ordered::{bayer_threshold, Ordered, BAYER_8X8};

use std::fmt;
use std::str::FromStr;

use crate::grid::{BinaryGrid, GrayGrid};

/// Quantization threshold shared by the error-diffusion algorithms.
///
/// A cell is lit only if its (error-adjusted) value is strictly greater.
pub const THRESHOLD: f64 = 0.5;

/// Trait for two-level dithering algorithms.
///
/// Implementations must be deterministic: the same grid always yields the
/// same result.
pub trait Dither {
    /// Dither a grayscale grid.
    ///
    /// # Returns
    ///
    /// A [`BinaryGrid`] with the same dimensions as `grid`.
    fn dither(&self, grid: &GrayGrid) -> BinaryGrid;
}

/// Dither algorithm selection.
///
/// Parses from and displays as the command-line names
/// `floyd-steinberg`, `ordered` and `atkinson`.
///
/// ```
/// use duotone_dither::DitherAlgorithm;
///
/// let algo: DitherAlgorithm = "ordered".parse().unwrap();
/// assert_eq!(algo, DitherAlgorithm::Ordered);
/// assert_eq!(DitherAlgorithm::default().to_string(), "floyd-steinberg");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg error diffusion (100% propagation).
    #[default]
    FloydSteinberg,

    /// Ordered dithering with the 8x8 Bayer matrix.
    ///
    /// Fixed periodic pattern. Every cell is independent of its neighbors.
    Ordered,

    /// Atkinson error diffusion (75% propagation).
    ///
    /// Sharper and less noisy than Floyd-Steinberg; loses some midtone
    /// accuracy.
    Atkinson,
}

impl DitherAlgorithm {
    /// Every algorithm, in command-line listing order.
    pub const ALL: [DitherAlgorithm; 3] = [
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::Ordered,
        DitherAlgorithm::Atkinson,
    ];

    /// Command-line name.
    pub const fn name(self) -> &'static str {
        match self {
            DitherAlgorithm::FloydSteinberg => "floyd-steinberg",
            DitherAlgorithm::Ordered => "ordered",
            DitherAlgorithm::Atkinson => "atkinson",
        }
    }

    /// Whether the algorithm carries error between cells.
    ///
    /// Error-diffusion output depends on raster evaluation order.
    pub const fn diffuses_error(self) -> bool {
        !matches!(self, DitherAlgorithm::Ordered)
    }
}

impl Dither for DitherAlgorithm {
    fn dither(&self, grid: &GrayGrid) -> BinaryGrid {
        match self {
            DitherAlgorithm::FloydSteinberg => FloydSteinberg.dither(grid),
            DitherAlgorithm::Ordered => Ordered.dither(grid),
            DitherAlgorithm::Atkinson => Atkinson.dither(grid),
        }
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a dither algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    /// The name that failed to parse
    pub name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = DitherAlgorithm::ALL.iter().map(|a| a.name()).collect();
        write!(
            f,
            "unknown dither method {:?} (expected one of: {})",
            self.name,
            names.join(", ")
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for DitherAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        DitherAlgorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseAlgorithmError {
                name: s.to_string(),
            })
    }
}

/// Core error diffusion loop parameterized by kernel.
///
/// Cells are visited in strict raster order (top to bottom, left to right).
/// Each cell is lit if its accumulated value exceeds [`THRESHOLD`]; the
/// difference between that value and the emitted level is spread to the
/// kernel's neighbors. Targets outside the grid are skipped.
///
/// The input grid is copied into a scratch buffer that is mutated in place
/// and dropped on return.
pub(crate) fn diffuse_with_kernel(grid: &GrayGrid, kernel: &Kernel) -> BinaryGrid {
    let width = grid.width();
    let height = grid.height();
    let mut work: Vec<f64> = grid.values().to_vec();
    let mut output = BinaryGrid::empty(width, height);
    let divisor = kernel.divisor as f64;

    for y in 0..height {
        for x in 0..width {
            let current = work[y * width + x];
            let lit = current > THRESHOLD;
            output.set(x, y, lit);

            let error = current - if lit { 1.0 } else { 0.0 };
            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                let ny = y + dy as usize;
                if nx >= 0 && (nx as usize) < width && ny < height {
                    work[ny * width + nx as usize] += error * weight as f64 / divisor;
                }
            }
        }
    }

    output
}
