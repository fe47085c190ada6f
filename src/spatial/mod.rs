//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - The per-pass color grid
//! - Read access to source rasters
//! - Block placement on the art canvas

/// Color assignment grid
pub mod grid;
/// Block placement from grid cells
pub mod layout;
/// Source raster pixel access
pub mod raster;

pub use grid::ColorGrid;
