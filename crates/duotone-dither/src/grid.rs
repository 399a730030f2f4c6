//! Row-major grids exchanged between the preprocessor and the dither engine.
//!
//! [`GrayGrid`] carries normalized luminance in `[0.0, 1.0]`; [`BinaryGrid`]
//! carries the dithered result, one boolean per cell (`true` is foreground).

use std::fmt;

/// Error returned when a grid's backing storage does not match its dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// `width * height` differs from the number of values supplied.
    SizeMismatch {
        /// Cells implied by the dimensions
        expected: usize,
        /// Values actually supplied
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::SizeMismatch { expected, actual } => write!(
                f,
                "grid size mismatch: dimensions need {} values, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A normalized grayscale grid.
///
/// Values are `f64` so the error-diffusion arithmetic carries the same
/// precision end to end. Values are expected in `[0.0, 1.0]` but are not
/// clamped; the dither engine treats anything above its threshold as lit.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayGrid {
    values: Vec<f64>,
    width: usize,
    height: usize,
}

impl GrayGrid {
    /// Create a grid from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SizeMismatch`] if `values.len() != width * height`.
    pub fn new(width: usize, height: usize, values: Vec<f64>) -> Result<Self, GridError> {
        if values.len() != width * height {
            return Err(GridError::SizeMismatch {
                expected: width * height,
                actual: values.len(),
            });
        }
        Ok(Self {
            values,
            width,
            height,
        })
    }

    /// Create a grid where every cell holds `value`.
    pub fn filled(width: usize, height: usize, value: f64) -> Self {
        Self {
            values: vec![value; width * height],
            width,
            height,
        }
    }

    /// Create a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            values,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) out of bounds"
        );
        self.values[y * self.width + x]
    }

    /// Row-major view of all values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Replace every value `v` with `1.0 - v`.
    pub fn invert(&mut self) {
        for v in &mut self.values {
            *v = 1.0 - *v;
        }
    }

    /// Copy of this grid with every value inverted.
    pub fn inverted(&self) -> Self {
        let mut grid = self.clone();
        grid.invert();
        grid
    }
}

/// A dithered two-level grid.
///
/// Each cell is exactly one of two states, so the "only 0.0 or 1.0"
/// invariant holds by construction. [`BinaryGrid::value`] exposes a cell as
/// `0.0`/`1.0` for callers that want the numeric form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl BinaryGrid {
    /// Create a grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SizeMismatch`] if `cells.len() != width * height`.
    pub fn new(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        if cells.len() != width * height {
            return Err(GridError::SizeMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// All-background grid of the given size.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at (`x`, `y`) is foreground.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) out of bounds"
        );
        self.cells[y * self.width + x]
    }

    /// Numeric form of a cell: `1.0` for foreground, `0.0` for background.
    #[inline]
    pub fn value(&self, x: usize, y: usize) -> f64 {
        if self.get(x, y) {
            1.0
        } else {
            0.0
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, on: bool) {
        self.cells[y * self.width + x] = on;
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of foreground cells.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
