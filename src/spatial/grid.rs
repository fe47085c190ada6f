//! Color assignment grid built during one generation pass
//!
//! Each cell corresponds to one sampled source pixel. Cells start unset and
//! may be assigned exactly once; unset cells produce no block.

use ndarray::Array2;

use crate::algorithm::palette::Color;
use crate::io::error::{Result, SketchError};

/// Grid dimensions needed to cover a raster at the given stride
///
/// Returns `(rows, cols)`, rounding partial strides up.
pub const fn grid_dimensions(width: u32, height: u32, stride: u32) -> (usize, usize) {
    if stride == 0 {
        return (0, 0);
    }
    (
        height.div_ceil(stride) as usize,
        width.div_ceil(stride) as usize,
    )
}

/// Row-major mapping from `(row, col)` to an optional block color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    cells: Array2<Option<Color>>,
}

impl ColorGrid {
    /// Create a grid with every cell unset
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), None),
        }
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Color assigned at a cell, `None` when unset or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.cells.get([row, col]).copied().flatten()
    }

    /// Assign a color to an unset cell
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cell lies outside the grid
    /// - The cell already holds a color
    pub fn assign(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        let (rows, cols) = (self.rows(), self.cols());
        let cell = self
            .cells
            .get_mut([row, col])
            .ok_or_else(|| SketchError::InvalidParameter {
                parameter: "cell",
                value: format!("({row}, {col})"),
                reason: format!("outside {rows}x{cols} grid"),
            })?;

        if cell.is_some() {
            return Err(SketchError::CellReassigned { row, col });
        }

        *cell = Some(color);
        Ok(())
    }

    /// Number of cells holding a color
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Set cells in row-major order as `(row, col, color)`
    pub fn painted_cells(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((row, col), cell)| cell.map(|color| (row, col, color)))
    }
}
