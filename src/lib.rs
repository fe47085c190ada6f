//! Mondrian-style compositions sampled from a source raster
//!
//! Near-white points of the source are colored from a weighted palette that
//! avoids repeating a neighbor's color, drawn as blocks with hand-drawn
//! outlines, and the finished canvas is hung in a framed wall scene.

#![forbid(unsafe_code)]

/// Color sampling, grid generation and the interactive sketch session
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Interpolation helpers and coherent noise
pub mod math;
/// Hand-drawn block rendering, art canvas and frame scene
pub mod render;
/// Color grid, raster access and block placement
pub mod spatial;

pub use io::error::{Result, SketchError};
