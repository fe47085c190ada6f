//! Sketched block rendering
//!
//! A block is filled flat, then traced several times with open paths whose
//! points wander off the nominal edge by a noise-driven, clamped offset.
//! Earlier layers are thicker and more opaque; a faint wide outline on top
//! softens the result.

use tiny_skia as sk;

use crate::io::configuration::{
    EDGE_STEP, GLOW_ALPHA, GLOW_WIDTH, INK_RGB, LAYER_COUNT, LAYER_NOISE_OFFSET,
    NOISE_FREQUENCY, STROKE_ALPHA_FIRST, STROKE_ALPHA_LAST, STROKE_AMPLITUDE, STROKE_WIDTH_FIRST,
    STROKE_WIDTH_LAST,
};
use crate::math::interpolation::{layer_fraction, lerp};
use crate::math::noise::NoiseField;
use crate::spatial::layout::Block;

// Keeps the y displacement uncorrelated with the x displacement
const Y_CHANNEL_OFFSET: f64 = 53.1;

/// Stroke width and alpha of one outline layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    /// Stroke width in canvas pixels
    pub width: f32,
    /// Stroke alpha
    pub alpha: u8,
}

/// Style of `layer` out of `count`, interpolated from first to last
pub fn layer_style(layer: usize, count: usize) -> LayerStyle {
    let t = layer_fraction(layer, count);
    let width = lerp(f64::from(STROKE_WIDTH_FIRST), f64::from(STROKE_WIDTH_LAST), t);
    let alpha = lerp(f64::from(STROKE_ALPHA_FIRST), f64::from(STROKE_ALPHA_LAST), t);

    LayerStyle {
        width: width as f32,
        alpha: alpha.round().clamp(0.0, 255.0) as u8,
    }
}

/// Largest displacement a block's outline may take from its nominal edge
pub fn max_offset(block: &Block) -> f32 {
    STROKE_AMPLITUDE * block.amplitude_scale.max(0.0)
}

/// Noise-driven displacement of an edge point for one layer
///
/// Both components lie within `[-amplitude, amplitude]`.
pub fn jitter_offset<N: NoiseField + ?Sized>(
    noise: &N,
    x: f32,
    y: f32,
    layer: usize,
    amplitude: f32,
) -> (f32, f32) {
    let shift = layer as f64 * f64::from(LAYER_NOISE_OFFSET);
    let nx = f64::from(x * NOISE_FREQUENCY) + shift;
    let ny = f64::from(y * NOISE_FREQUENCY) + shift;

    let amplitude = f64::from(amplitude);
    let to_offset = |value: f64| {
        let offset = (value - 0.5) * 2.0 * amplitude;
        offset.clamp(-amplitude, amplitude) as f32
    };

    (
        to_offset(noise.sample(nx, ny)),
        to_offset(noise.sample(nx + Y_CHANNEL_OFFSET, ny + Y_CHANNEL_OFFSET)),
    )
}

/// Jittered points along each of the four edges for one layer
///
/// Edges run top, right, bottom, left; each edge is its own open polyline
/// including both corners.
pub fn jittered_edges<N: NoiseField + ?Sized>(
    block: &Block,
    noise: &N,
    layer: usize,
) -> [Vec<(f32, f32)>; 4] {
    let (left, top) = (block.x, block.y);
    let (right, bottom) = (block.x + block.width, block.y + block.height);
    let amplitude = max_offset(block);

    let corners = [
        ((left, top), (right, top)),
        ((right, top), (right, bottom)),
        ((right, bottom), (left, bottom)),
        ((left, bottom), (left, top)),
    ];

    corners.map(|(start, end)| {
        let length = (end.0 - start.0).hypot(end.1 - start.1);
        let segments = (length / EDGE_STEP).ceil().max(1.0) as usize;

        (0..=segments)
            .map(|i| {
                let t = i as f32 / segments as f32;
                let x = (end.0 - start.0).mul_add(t, start.0);
                let y = (end.1 - start.1).mul_add(t, start.1);
                let (dx, dy) = jitter_offset(noise, x, y, layer, amplitude);
                (x + dx, y + dy)
            })
            .collect()
    })
}

fn solid_paint(rgb: [u8; 3], alpha: u8) -> sk::Paint<'static> {
    let mut paint = sk::Paint::default();
    paint.set_color_rgba8(rgb[0], rgb[1], rgb[2], alpha);
    paint.anti_alias = true;
    paint
}

fn round_stroke(width: f32) -> sk::Stroke {
    sk::Stroke {
        width,
        line_cap: sk::LineCap::Round,
        line_join: sk::LineJoin::Round,
        ..sk::Stroke::default()
    }
}

fn polyline_path(edges: &[Vec<(f32, f32)>]) -> Option<sk::Path> {
    let mut pb = sk::PathBuilder::new();
    for edge in edges {
        let mut points = edge.iter();
        let Some(&(x, y)) = points.next() else {
            continue;
        };
        pb.move_to(x, y);
        for &(x, y) in points {
            pb.line_to(x, y);
        }
    }
    pb.finish()
}

/// Draw one block as a flat fill with sketched outlines
///
/// Blocks with an empty rectangle draw nothing.
pub fn draw_block<N: NoiseField + ?Sized>(pixmap: &mut sk::Pixmap, block: &Block, noise: &N) {
    let Some(rect) = sk::Rect::from_xywh(block.x, block.y, block.width, block.height)
        .filter(|rect| rect.width() > 0.0 && rect.height() > 0.0)
    else {
        return;
    };

    let fill = solid_paint(block.color.rgb(), u8::MAX);
    pixmap.fill_rect(rect, &fill, sk::Transform::identity(), None);

    for layer in 0..LAYER_COUNT {
        let style = layer_style(layer, LAYER_COUNT);
        let edges = jittered_edges(block, noise, layer);
        if let Some(path) = polyline_path(&edges) {
            pixmap.stroke_path(
                &path,
                &solid_paint(INK_RGB, style.alpha),
                &round_stroke(style.width),
                sk::Transform::identity(),
                None,
            );
        }
    }

    let glow = sk::PathBuilder::from_rect(rect);
    pixmap.stroke_path(
        &glow,
        &solid_paint(INK_RGB, GLOW_ALPHA),
        &round_stroke(GLOW_WIDTH),
        sk::Transform::identity(),
        None,
    );
}
