use crate::{
    algorithm::sampling::{sample_grid, validate_source},
    io::configuration::{
        DEFAULT_JITTER, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_SEED, DEFAULT_STRIDE,
    },
    io::error::{Result, invalid_parameter},
    math::noise::ValueNoise,
    spatial::grid::ColorGrid,
    spatial::layout::{Block, BlockLayout},
    spatial::raster::Raster,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

/// Parameters controlling sampling, stroke jitter and output size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchConfig {
    /// Source pixels between sampled grid points
    pub stride: u32,
    /// Art canvas pixels per source pixel
    pub art_scale: f32,
    /// Jitter amplitude scale given to every block
    pub amplitude_scale: f32,
    /// Output scene width in pixels
    pub output_width: u32,
    /// Output scene height in pixels
    pub output_height: u32,
    /// Seed of the random stream shared by every regeneration
    pub seed: u64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            art_scale: 1.0,
            amplitude_scale: DEFAULT_JITTER,
            output_width: DEFAULT_OUTPUT_WIDTH,
            output_height: DEFAULT_OUTPUT_HEIGHT,
            seed: DEFAULT_SEED,
        }
    }
}

impl SketchConfig {
    /// Check the parameters that do not depend on the source raster
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The stride is zero
    /// - The art scale is not a positive finite number
    /// - The amplitude scale is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if self.stride == 0 {
            return Err(invalid_parameter("stride", &self.stride, &"must be positive"));
        }
        if !self.art_scale.is_finite() || self.art_scale <= 0.0 {
            return Err(invalid_parameter(
                "art_scale",
                &self.art_scale,
                &"must be a positive number",
            ));
        }
        if !self.amplitude_scale.is_finite() || self.amplitude_scale < 0.0 {
            return Err(invalid_parameter(
                "amplitude_scale",
                &self.amplitude_scale,
                &"must be zero or positive",
            ));
        }
        Ok(())
    }
}

/// Result of one generation pass
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    /// Color assignment for every sampled point
    pub grid: ColorGrid,
    /// Blocks in row-major order, ready to draw
    pub blocks: Vec<Block>,
    /// Noise field driving this pass's stroke jitter
    pub noise: ValueNoise,
}

/// Runs generation passes over one source raster with a seeded random stream
pub struct ArtGenerator {
    rng: StdRng,
    layout: BlockLayout,
    /// Number of completed passes
    pub passes: usize,
}

impl ArtGenerator {
    /// Create a generator for a raster of the given size
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the raster is empty
    pub fn new<S: Raster + ?Sized>(source: &S, config: &SketchConfig) -> Result<Self> {
        config.validate()?;
        validate_source(source, config.stride)?;

        let (source_width, source_height) = source.dimensions();
        let layout = BlockLayout {
            stride: config.stride,
            scale: config.art_scale,
            amplitude_scale: config.amplitude_scale,
            source_width,
            source_height,
        };

        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            layout,
            passes: 0,
        })
    }

    /// Block placement used for every pass
    pub const fn layout(&self) -> &BlockLayout {
        &self.layout
    }

    /// Run one full pass: sample the grid, lay out blocks, pick a noise seed
    ///
    /// Nothing from a previous pass is reused.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is empty
    pub fn generate<S: Raster + ?Sized>(&mut self, source: &S) -> Result<Artwork> {
        let grid = sample_grid(source, self.layout.stride, &mut self.rng)?;
        let blocks = self.layout.blocks(&grid);
        let noise = ValueNoise::new(self.rng.random::<u64>());
        self.passes += 1;

        debug!(
            pass = self.passes,
            rows = grid.rows(),
            cols = grid.cols(),
            painted = grid.painted_count(),
            "generated artwork"
        );

        Ok(Artwork {
            grid,
            blocks,
            noise,
        })
    }
}
