//! Interactive sketch state: one source raster, its current artwork and the
//! output size
//!
//! `regenerate` stands in for a pointer click and `resize` for a window
//! resize. Only `regenerate` touches the artwork.

use tiny_skia::Pixmap;
use tracing::debug;

use crate::algorithm::executor::{ArtGenerator, Artwork, SketchConfig};
use crate::io::error::Result;
use crate::render::canvas::render_art;
use crate::render::scene::{SceneLayout, render_scene};
use crate::spatial::raster::Raster;

/// A source raster with its generator, current artwork and scene layout
pub struct Sketch<S: Raster> {
    source: S,
    generator: ArtGenerator,
    artwork: Artwork,
    scene: SceneLayout,
}

impl<S: Raster> Sketch<S> {
    /// Validate the inputs and run the first generation pass
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the raster is empty
    pub fn new(source: S, config: &SketchConfig) -> Result<Self> {
        let scene = SceneLayout::new(config.output_width, config.output_height)?;
        let mut generator = ArtGenerator::new(&source, config)?;
        let artwork = generator.generate(&source)?;

        Ok(Self {
            source,
            generator,
            artwork,
            scene,
        })
    }

    /// Discard the current artwork and build a new one with fresh draws
    ///
    /// # Errors
    ///
    /// Returns an error if the generation pass fails
    pub fn regenerate(&mut self) -> Result<&Artwork> {
        self.artwork = self.generator.generate(&self.source)?;
        Ok(&self.artwork)
    }

    /// Change the output size; the artwork is left untouched
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or too large
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.scene = SceneLayout::new(width, height)?;
        debug!(width, height, "resized scene");
        Ok(())
    }

    /// Current artwork
    pub const fn artwork(&self) -> &Artwork {
        &self.artwork
    }

    /// Current scene layout
    pub const fn scene(&self) -> &SceneLayout {
        &self.scene
    }

    /// Number of generation passes run so far, including the first
    pub const fn passes(&self) -> usize {
        self.generator.passes
    }

    /// Render the art canvas alone, at the configured art scale
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be allocated
    pub fn render_art(&self) -> Result<Pixmap> {
        let layout = self.generator.layout();
        render_art(
            &self.source,
            layout.canvas_size(),
            layout.scale,
            &self.artwork.blocks,
            &self.artwork.noise,
        )
    }

    /// Render the full framed scene
    ///
    /// # Errors
    ///
    /// Returns an error if either surface cannot be allocated
    pub fn render(&self) -> Result<Pixmap> {
        let art = self.render_art()?;
        render_scene(&self.scene, &art)
    }
}
