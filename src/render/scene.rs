//! Framed wall scene with a responsive layout
//!
//! Horizontal bands (wall, skirting, floor) always span the full output
//! width and stretch vertically with the output height. The frame keeps its
//! proportions: it is scaled uniformly by the smaller of the two axis ratios
//! and stays anchored to the same spot on the wall.

use tiny_skia as sk;

use crate::io::configuration::{
    ART_OPENING, BACKDROP_RGB, FLOOR_LINE_BAND, FLOOR_LINE_RGB, FLOOR_STRIPS, FRAME_ANCHOR,
    FRAME_LAYERS, MAX_OUTPUT_DIMENSION, REFERENCE_HEIGHT, REFERENCE_WIDTH, WALL_BAND, WALL_RGB,
};
use crate::io::error::{Result, invalid_parameter};
use crate::render::canvas::new_pixmap;

/// Placement of the reference design on an output surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    width: u32,
    height: u32,
    scale_x: f32,
    scale_y: f32,
    frame_scale: f32,
}

impl SceneLayout {
    /// Lay the scene out for an output of `width` × `height` pixels
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds the size limit
    pub fn new(width: u32, height: u32) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 || value > MAX_OUTPUT_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_OUTPUT_DIMENSION}"),
                ));
            }
        }

        let scale_x = width as f32 / REFERENCE_WIDTH;
        let scale_y = height as f32 / REFERENCE_HEIGHT;

        Ok(Self {
            width,
            height,
            scale_x,
            scale_y,
            frame_scale: scale_x.min(scale_y),
        })
    }

    /// Output size in pixels
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Uniform scale applied to the frame and its contents
    pub const fn frame_scale(&self) -> f32 {
        self.frame_scale
    }

    /// Full-width band for a reference `(top, height)`
    pub fn band(&self, top: f32, height: f32) -> Option<sk::Rect> {
        sk::Rect::from_xywh(
            0.0,
            top * self.scale_y,
            self.width as f32,
            height * self.scale_y,
        )
    }

    /// Map a reference `[x, y, width, height]` belonging to the frame
    pub fn frame_rect(&self, rect: [f32; 4]) -> Option<sk::Rect> {
        let [x, y, width, height] = rect;
        let anchor_x = self.width as f32 / 2.0;
        let anchor_y = FRAME_ANCHOR[1] * self.scale_y;

        sk::Rect::from_xywh(
            (x - FRAME_ANCHOR[0]).mul_add(self.frame_scale, anchor_x),
            (y - FRAME_ANCHOR[1]).mul_add(self.frame_scale, anchor_y),
            width * self.frame_scale,
            height * self.frame_scale,
        )
    }

    /// Transform fitting an art canvas of `art_size` into the mat opening
    ///
    /// The aspect ratio is preserved and the art is centered in the opening.
    pub fn art_transform(&self, art_size: (u32, u32)) -> Option<sk::Transform> {
        let opening = self.frame_rect(ART_OPENING)?;
        let (art_width, art_height) = (art_size.0 as f32, art_size.1 as f32);
        if art_width <= 0.0 || art_height <= 0.0 {
            return None;
        }

        let fit = (opening.width() / art_width).min(opening.height() / art_height);
        let tx = (opening.width() - art_width * fit).mul_add(0.5, opening.left());
        let ty = (opening.height() - art_height * fit).mul_add(0.5, opening.top());

        Some(sk::Transform::from_row(fit, 0.0, 0.0, fit, tx, ty))
    }
}

fn fill(pixmap: &mut sk::Pixmap, rect: Option<sk::Rect>, rgb: [u8; 3]) {
    let Some(rect) = rect else {
        return;
    };
    let mut paint = sk::Paint::default();
    paint.set_color_rgba8(rgb[0], rgb[1], rgb[2], u8::MAX);
    pixmap.fill_rect(rect, &paint, sk::Transform::identity(), None);
}

/// Paint the wall, floor and frame without any artwork
///
/// # Errors
///
/// Returns an error if the output surface cannot be allocated
pub fn render_backdrop(layout: &SceneLayout) -> Result<sk::Pixmap> {
    let (width, height) = layout.size();
    let mut pixmap = new_pixmap(width, height)?;
    pixmap.fill(sk::Color::from_rgba8(
        BACKDROP_RGB[0],
        BACKDROP_RGB[1],
        BACKDROP_RGB[2],
        u8::MAX,
    ));

    fill(&mut pixmap, layout.band(WALL_BAND.0, WALL_BAND.1), WALL_RGB);
    fill(
        &mut pixmap,
        layout.band(FLOOR_LINE_BAND.0, FLOOR_LINE_BAND.1),
        FLOOR_LINE_RGB,
    );
    for (top, band_height, rgb) in FLOOR_STRIPS {
        fill(&mut pixmap, layout.band(top, band_height), rgb);
    }

    for (rect, rgb) in FRAME_LAYERS {
        fill(&mut pixmap, layout.frame_rect(rect), rgb);
    }

    Ok(pixmap)
}

/// Composite an art canvas into the framed scene
///
/// # Errors
///
/// Returns an error if the output surface cannot be allocated
pub fn render_scene(layout: &SceneLayout, art: &sk::Pixmap) -> Result<sk::Pixmap> {
    let mut pixmap = render_backdrop(layout)?;

    if let Some(transform) = layout.art_transform((art.width(), art.height())) {
        let paint = sk::PixmapPaint {
            quality: sk::FilterQuality::Bilinear,
            ..sk::PixmapPaint::default()
        };
        pixmap.draw_pixmap(0, 0, art.as_ref(), &paint, transform, None);
    }

    Ok(pixmap)
}
