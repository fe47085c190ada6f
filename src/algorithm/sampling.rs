//! Stride sampling of the source raster into a color grid

use rand::Rng;

use crate::algorithm::selection::choose_color;
use crate::io::error::{Result, SketchError, invalid_parameter};
use crate::spatial::grid::{ColorGrid, grid_dimensions};
use crate::spatial::raster::{Raster, is_paintable};

/// Check that a raster and stride can produce a grid
///
/// # Errors
///
/// Returns an error if:
/// - The stride is zero
/// - The raster has no pixels
pub fn validate_source<S: Raster + ?Sized>(source: &S, stride: u32) -> Result<()> {
    if stride == 0 {
        return Err(invalid_parameter("stride", &stride, &"must be positive"));
    }

    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(SketchError::InvalidSourceData {
            reason: format!("raster is {width}x{height}"),
        });
    }

    Ok(())
}

/// Build a color grid by visiting every stride point in row-major order
///
/// Only near-white sample points receive a color; the rest stay unset.
///
/// # Errors
///
/// Returns an error if the stride is zero or the raster is empty
pub fn sample_grid<S, R>(source: &S, stride: u32, rng: &mut R) -> Result<ColorGrid>
where
    S: Raster + ?Sized,
    R: Rng,
{
    validate_source(source, stride)?;

    let (width, height) = source.dimensions();
    let (rows, cols) = grid_dimensions(width, height, stride);
    let mut grid = ColorGrid::new(rows, cols);

    for row in 0..rows {
        for col in 0..cols {
            let x = col as u32 * stride;
            let y = row as u32 * stride;

            let paintable = source.rgba(x, y).is_some_and(is_paintable);
            if paintable {
                let color = choose_color(&grid, row, col, rng);
                grid.assign(row, col, color)?;
            }
        }
    }

    Ok(grid)
}
