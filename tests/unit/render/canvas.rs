//! Tests for pixmap allocation, raster copies and art canvas assembly

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use mondrian_frame::SketchError;
    use mondrian_frame::algorithm::palette::Color;
    use mondrian_frame::math::noise::ValueNoise;
    use mondrian_frame::render::canvas::{new_pixmap, raster_to_pixmap, render_art};
    use mondrian_frame::spatial::layout::Block;

    // Tests zero-sized canvases are reported with their size
    // Verified by returning a 1x1 pixmap instead
    #[test]
    fn test_new_pixmap_rejects_empty() {
        match new_pixmap(0, 10) {
            Err(SketchError::Canvas { width, height }) => assert_eq!((width, height), (0, 10)),
            other => unreachable!("expected canvas error, got {:?}", other.map(|p| p.width())),
        }
        assert!(new_pixmap(4, 4).is_ok());
    }

    // Tests raster pixels are copied to the same positions
    // Verified by transposing the copy
    #[test]
    fn test_raster_to_pixmap_copies_pixels() {
        let img = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8 * 80, y as u8 * 90, 30, 255]));
        let pixmap = raster_to_pixmap(&img).unwrap();

        assert_eq!((pixmap.width(), pixmap.height()), (3, 2));
        for (x, y, pixel) in img.enumerate_pixels() {
            let copied = pixmap.pixel(x, y).unwrap().demultiply();
            assert_eq!(
                [copied.red(), copied.green(), copied.blue(), copied.alpha()],
                pixel.0
            );
        }
    }

    // Tests blocks are painted over the source raster
    // Verified by drawing the raster after the blocks
    #[test]
    fn test_render_art_layers_blocks_over_source() {
        let source = RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 255]));
        let blocks = [Block {
            x: 0.0,
            y: 0.0,
            width: 25.0,
            height: 25.0,
            color: Color::Red,
            amplitude_scale: 1.0,
        }];
        let art = render_art(&source, (50, 50), 1.0, &blocks, &ValueNoise::new(1)).unwrap();

        let inside = art.pixel(12, 12).unwrap().demultiply();
        assert_eq!(
            [inside.red(), inside.green(), inside.blue()],
            Color::Red.rgb()
        );

        let outside = art.pixel(40, 40).unwrap().demultiply();
        assert_eq!(
            [outside.red(), outside.green(), outside.blue(), outside.alpha()],
            [0, 0, 0, 255]
        );
    }

    // Tests the source is scaled onto a larger canvas
    // Verified by ignoring the scale transform
    #[test]
    fn test_render_art_scales_source() {
        let source = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 255, 255]));
        let art = render_art(&source, (20, 20), 2.0, &[], &ValueNoise::new(1)).unwrap();

        let far = art.pixel(17, 17).unwrap().demultiply();
        assert_eq!([far.blue(), far.alpha()], [255, 255]);
    }
}
