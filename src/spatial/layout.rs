//! Block placement from a populated grid

use crate::algorithm::palette::Color;
use crate::spatial::grid::ColorGrid;

/// Filled rectangle with its color and jitter amplitude scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// Left edge in art canvas pixels
    pub x: f32,
    /// Top edge in art canvas pixels
    pub y: f32,
    /// Width in art canvas pixels
    pub width: f32,
    /// Height in art canvas pixels
    pub height: f32,
    /// Fill color
    pub color: Color,
    /// Multiplier applied to the stroke jitter amplitude
    pub amplitude_scale: f32,
}

/// Mapping from grid cells to art canvas rectangles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    /// Source pixels between sampled grid points
    pub stride: u32,
    /// Art canvas pixels per source pixel
    pub scale: f32,
    /// Amplitude scale given to every emitted block
    pub amplitude_scale: f32,
    /// Source raster width in pixels, used to clip the last column
    pub source_width: u32,
    /// Source raster height in pixels, used to clip the last row
    pub source_height: u32,
}

impl BlockLayout {
    /// Art canvas size covering the scaled source raster
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            (self.source_width as f32 * self.scale).ceil() as u32,
            (self.source_height as f32 * self.scale).ceil() as u32,
        )
    }

    /// Rectangle of one cell as `(x, y, width, height)`, clipped to the raster
    pub fn cell_rect(&self, row: usize, col: usize) -> (f32, f32, f32, f32) {
        let stride = self.stride as f32;
        let left = col as f32 * stride;
        let top = row as f32 * stride;
        let right = (left + stride).min(self.source_width as f32);
        let bottom = (top + stride).min(self.source_height as f32);

        (
            left * self.scale,
            top * self.scale,
            (right - left).max(0.0) * self.scale,
            (bottom - top).max(0.0) * self.scale,
        )
    }

    /// One block per painted cell, in row-major order
    pub fn blocks(&self, grid: &ColorGrid) -> Vec<Block> {
        grid.painted_cells()
            .map(|(row, col, color)| {
                let (x, y, width, height) = self.cell_rect(row, col);
                Block {
                    x,
                    y,
                    width,
                    height,
                    color,
                    amplitude_scale: self.amplitude_scale,
                }
            })
            .collect()
    }
}
