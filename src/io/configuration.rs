//! Composition constants and runtime configuration defaults

// Sampling
/// Channel value every RGB component must exceed for a pixel to be paintable
pub const PAINTABLE_THRESHOLD: u8 = 240;

/// Default distance in source pixels between sampled grid points
pub const DEFAULT_STRIDE: u32 = 25;

// Relative weights, summing to 100
/// Sampling weight of gray blocks
pub const GRAY_WEIGHT: u32 = 10;
/// Sampling weight of yellow blocks
pub const YELLOW_WEIGHT: u32 = 60;
/// Sampling weight of red blocks
pub const RED_WEIGHT: u32 = 10;
/// Sampling weight of blue blocks
pub const BLUE_WEIGHT: u32 = 20;

// Hand-drawn stroke settings
/// Number of jittered outline passes drawn over each block
pub const LAYER_COUNT: usize = 3;
/// Maximum jitter in canvas pixels before the per-block amplitude scale
pub const STROKE_AMPLITUDE: f32 = 2.5;
/// Frequency applied to canvas coordinates before sampling the noise field
pub const NOISE_FREQUENCY: f32 = 0.04;
/// Noise-space distance between consecutive outline layers
pub const LAYER_NOISE_OFFSET: f32 = 97.3;
/// Distance in canvas pixels between jittered points along an edge
pub const EDGE_STEP: f32 = 4.0;
/// Stroke width of the first (thickest) outline layer
pub const STROKE_WIDTH_FIRST: f32 = 3.2;
/// Stroke width of the last (thinnest) outline layer
pub const STROKE_WIDTH_LAST: f32 = 1.0;
/// Stroke alpha of the first (most opaque) outline layer
pub const STROKE_ALPHA_FIRST: u8 = 230;
/// Stroke alpha of the last (most transparent) outline layer
pub const STROKE_ALPHA_LAST: u8 = 90;
/// Width of the soft glow outline
pub const GLOW_WIDTH: f32 = 6.0;
/// Alpha of the soft glow outline
pub const GLOW_ALPHA: u8 = 28;
/// Ink color of every outline pass
pub const INK_RGB: [u8; 3] = [28, 27, 26];

// Noise field
/// Number of summed octaves in the value-noise field
pub const NOISE_OCTAVES: u32 = 4;
/// Amplitude falloff between consecutive octaves
pub const NOISE_FALLOFF: f64 = 0.5;

// Scene reference design; every rectangle below is expressed in this space
/// Width of the reference scene
pub const REFERENCE_WIDTH: f32 = 1920.0;
/// Height of the reference scene
pub const REFERENCE_HEIGHT: f32 = 1200.0;

/// Wall band: top and height
pub const WALL_BAND: (f32, f32) = (2.0, 911.0);
/// Wall color
pub const WALL_RGB: [u8; 3] = [0xF5, 0xF4, 0xF0];
/// Floor line band: top and height
pub const FLOOR_LINE_BAND: (f32, f32) = (913.0, 8.0);
/// Floor line color
pub const FLOOR_LINE_RGB: [u8; 3] = [0x6C, 0x4D, 0x38];
/// Floor strips from the skirting downwards: top, height and color
pub const FLOOR_STRIPS: [(f32, f32, [u8; 3]); 6] = [
    (921.0, 8.0, [0xA8, 0x89, 0x74]),
    (929.0, 12.0, [0xDB, 0xBD, 0xA5]),
    (941.0, 20.0, [0xCE, 0xB1, 0xA1]),
    (961.0, 30.0, [0xDD, 0xC3, 0xAC]),
    (991.0, 40.0, [0xDD, 0xBF, 0xA7]),
    (1031.0, 50.0, [0xE4, 0xC9, 0xB4]),
];
/// Frame layers drawn back to front: x, y, width, height and color
pub const FRAME_LAYERS: [([f32; 4], [u8; 3]); 4] = [
    ([630.0, 132.0, 670.0, 677.0], [0xA8, 0x89, 0x74]),
    ([620.0, 120.0, 666.0, 664.0], [0xE1, 0xE0, 0xDC]),
    ([655.0, 150.0, 606.0, 622.0], [0xBF, 0xA8, 0x9A]),
    ([656.0, 751.0, 600.0, 21.0], [0xA8, 0x89, 0x74]),
];
/// Reference point the frame scales around: horizontal center, vertical middle
pub const FRAME_ANCHOR: [f32; 2] = [960.0, 464.5];
/// Opening inside the mat where the artwork hangs: x, y, width, height
pub const ART_OPENING: [f32; 4] = [675.0, 168.0, 566.0, 575.0];
/// Background behind everything, visible only where no band covers
pub const BACKDROP_RGB: [u8; 3] = [0xFF, 0xFF, 0xFF];

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default output width in pixels
pub const DEFAULT_OUTPUT_WIDTH: u32 = 1920;
/// Default output height in pixels
pub const DEFAULT_OUTPUT_HEIGHT: u32 = 1200;
/// Default number of regenerated variants per source raster
pub const DEFAULT_VARIANTS: usize = 1;
/// Default per-block jitter amplitude scale
pub const DEFAULT_JITTER: f32 = 1.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output dimension
pub const MAX_OUTPUT_DIMENSION: u32 = 16_384;
/// Maximum number of variants rendered per source raster
pub const MAX_VARIANTS: usize = 1_000;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mondrian";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
