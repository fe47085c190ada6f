/// Generation passes and sketch configuration
pub mod executor;
/// Fixed block palette and sampling weights
pub mod palette;
/// Stride sampling of the source raster
pub mod sampling;
/// Neighbor-aware weighted color selection
pub mod selection;
/// Regenerate/resize session over one source raster
pub mod session;
