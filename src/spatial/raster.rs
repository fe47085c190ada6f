//! Read-only pixel access to the source raster

use image::RgbaImage;

use crate::io::configuration::PAINTABLE_THRESHOLD;

/// Source of RGBA pixels with fixed dimensions
pub trait Raster {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// RGBA channels at `(x, y)`, `None` outside the raster
    fn rgba(&self, x: u32, y: u32) -> Option<[u8; 4]>;
}

impl Raster for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.get_pixel_checked(x, y).map(|pixel| pixel.0)
    }
}

/// Whether a pixel is near-white enough to receive a block
///
/// Alpha is ignored.
pub const fn is_paintable(rgba: [u8; 4]) -> bool {
    rgba[0] > PAINTABLE_THRESHOLD && rgba[1] > PAINTABLE_THRESHOLD && rgba[2] > PAINTABLE_THRESHOLD
}
