//! Source raster loading and PNG export of rendered surfaces

use crate::io::error::{Result, SketchError};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;
use tiny_skia::Pixmap;

/// Load a source raster as 8-bit RGBA
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The image has no pixels
pub fn load_source_raster(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| SketchError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgba = img.to_rgba8();

    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(SketchError::InvalidSourceData {
            reason: format!("'{}' has no pixels", path.display()),
        });
    }

    Ok(rgba)
}

/// Convert a premultiplied pixmap into a straight-alpha image
pub fn pixmap_to_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = ImageBuffer::new(pixmap.width(), pixmap.height());

    for (pixel, target) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        let color = pixel.demultiply();
        *target = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }

    img
}

/// Export a rendered surface as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_pixmap_as_png(pixmap: &Pixmap, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    pixmap_to_image(pixmap)
        .save(output_path)
        .map_err(|e| SketchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
