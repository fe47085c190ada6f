//! Off-screen art canvas: the source raster with sketched blocks on top

use tiny_skia as sk;

use crate::io::error::{Result, SketchError};
use crate::math::noise::NoiseField;
use crate::render::hand_drawn::draw_block;
use crate::spatial::layout::Block;
use crate::spatial::raster::Raster;

/// Allocate a transparent pixmap
///
/// # Errors
///
/// Returns an error if either dimension is zero or the allocation fails
pub fn new_pixmap(width: u32, height: u32) -> Result<sk::Pixmap> {
    sk::Pixmap::new(width, height).ok_or(SketchError::Canvas { width, height })
}

/// Copy a raster into a pixmap of the same size
///
/// # Errors
///
/// Returns an error if the raster is empty
pub fn raster_to_pixmap<S: Raster + ?Sized>(source: &S) -> Result<sk::Pixmap> {
    let (width, height) = source.dimensions();
    let mut pixmap = new_pixmap(width, height)?;

    for (index, pixel) in pixmap.pixels_mut().iter_mut().enumerate() {
        let x = (index % width as usize) as u32;
        let y = (index / width as usize) as u32;
        let [r, g, b, a] = source.rgba(x, y).unwrap_or([0, 0, 0, 0]);
        *pixel = sk::ColorU8::from_rgba(r, g, b, a).premultiply();
    }

    Ok(pixmap)
}

/// Render the art canvas for one generation pass
///
/// The source raster is drawn first at `scale`, then each block in order.
///
/// # Errors
///
/// Returns an error if the canvas or the raster copy cannot be allocated
pub fn render_art<S, N>(
    source: &S,
    canvas_size: (u32, u32),
    scale: f32,
    blocks: &[Block],
    noise: &N,
) -> Result<sk::Pixmap>
where
    S: Raster + ?Sized,
    N: NoiseField + ?Sized,
{
    let mut canvas = new_pixmap(canvas_size.0, canvas_size.1)?;
    let backdrop = raster_to_pixmap(source)?;

    let paint = sk::PixmapPaint {
        quality: sk::FilterQuality::Bilinear,
        ..sk::PixmapPaint::default()
    };
    canvas.draw_pixmap(
        0,
        0,
        backdrop.as_ref(),
        &paint,
        sk::Transform::from_scale(scale, scale),
        None,
    );

    for block in blocks {
        draw_block(&mut canvas, block, noise);
    }

    Ok(canvas)
}
