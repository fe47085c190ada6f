//! Tests for the responsive frame layout and scene compositing

#[cfg(test)]
mod tests {
    use mondrian_frame::io::configuration::{
        ART_OPENING, FLOOR_STRIPS, FRAME_LAYERS, MAX_OUTPUT_DIMENSION, WALL_RGB,
    };
    use mondrian_frame::render::canvas::new_pixmap;
    use mondrian_frame::render::scene::{SceneLayout, render_backdrop, render_scene};
    use tiny_skia::Color;

    fn rgb_at(pixmap: &tiny_skia::Pixmap, x: u32, y: u32) -> [u8; 3] {
        let pixel = pixmap.pixel(x, y).unwrap().demultiply();
        [pixel.red(), pixel.green(), pixel.blue()]
    }

    // Tests output sizes outside the allowed range are rejected
    // Verified by removing the upper bound
    #[test]
    fn test_layout_validates_size() {
        assert!(SceneLayout::new(0, 100).is_err());
        assert!(SceneLayout::new(100, 0).is_err());
        assert!(SceneLayout::new(MAX_OUTPUT_DIMENSION + 1, 100).is_err());
        assert!(SceneLayout::new(1920, 1200).is_ok());
    }

    // Tests the reference size maps the frame onto itself
    // Verified by anchoring the frame at the top-left corner
    #[test]
    fn test_reference_size_is_identity() {
        let layout = SceneLayout::new(1920, 1200).unwrap();
        assert!((layout.frame_scale() - 1.0).abs() < 1e-6);

        let opening = layout.frame_rect(ART_OPENING).unwrap();
        assert!((opening.left() - 675.0).abs() < 1e-3);
        assert!((opening.top() - 168.0).abs() < 1e-3);
        assert!((opening.width() - 566.0).abs() < 1e-3);
        assert!((opening.height() - 575.0).abs() < 1e-3);
    }

    // Tests a wide output keeps the frame size and centers it
    // Verified by scaling the frame with the horizontal ratio
    #[test]
    fn test_wide_output_centers_frame() {
        let layout = SceneLayout::new(3840, 1200).unwrap();
        assert!((layout.frame_scale() - 1.0).abs() < 1e-6);

        let face = layout.frame_rect(FRAME_LAYERS[1].0).unwrap();
        assert!((face.left() - 1580.0).abs() < 1e-3);
        assert!((face.width() - 666.0).abs() < 1e-3);

        let band = layout.band(2.0, 911.0).unwrap();
        assert!((band.width() - 3840.0).abs() < 1e-3);
    }

    // Tests a half-size output halves the frame
    // Verified by using the larger axis ratio
    #[test]
    fn test_small_output_shrinks_frame() {
        let layout = SceneLayout::new(960, 900).unwrap();
        assert!((layout.frame_scale() - 0.5).abs() < 1e-6);

        let opening = layout.frame_rect(ART_OPENING).unwrap();
        assert!((opening.width() - 283.0).abs() < 1e-3);
    }

    // Tests art is fitted into the opening with its aspect kept
    // Verified by stretching to the opening instead of fitting
    #[test]
    fn test_art_transform_fits_and_centers() {
        let layout = SceneLayout::new(1920, 1200).unwrap();
        let transform = layout.art_transform((100, 100)).unwrap();

        assert!((transform.sx - 5.66).abs() < 1e-4);
        assert!((transform.sy - 5.66).abs() < 1e-4);
        assert!((transform.tx - 675.0).abs() < 1e-3);
        assert!((transform.ty - 172.5).abs() < 1e-3);

        assert!(layout.art_transform((0, 10)).is_none());
    }

    // Tests wall, floor and mat colors land where expected
    // Verified by skipping the floor strips
    #[test]
    fn test_backdrop_colors() {
        let layout = SceneLayout::new(1920, 1200).unwrap();
        let pixmap = render_backdrop(&layout).unwrap();

        assert_eq!(rgb_at(&pixmap, 10, 10), WALL_RGB);
        assert_eq!(rgb_at(&pixmap, 10, 1050), FLOOR_STRIPS[5].2);
        assert_eq!(rgb_at(&pixmap, 660, 155), FRAME_LAYERS[2].1);
        assert_eq!(rgb_at(&pixmap, 10, 1150), [0xFF, 0xFF, 0xFF]);
    }

    // Tests the art canvas is composited inside the opening
    // Verified by drawing the art at the origin
    #[test]
    fn test_scene_contains_art() {
        let layout = SceneLayout::new(1920, 1200).unwrap();
        let mut art = new_pixmap(100, 100).unwrap();
        art.fill(Color::from_rgba8(200, 10, 10, 255));

        let scene = render_scene(&layout, &art).unwrap();
        assert_eq!(rgb_at(&scene, 958, 455), [200, 10, 10]);
        assert_eq!(rgb_at(&scene, 10, 10), WALL_RGB);
    }
}
