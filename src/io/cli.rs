//! Command-line interface for rendering framed compositions from PNG files

use crate::algorithm::executor::SketchConfig;
use crate::algorithm::session::Sketch;
use crate::io::configuration::{
    DEFAULT_JITTER, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_SEED, DEFAULT_STRIDE,
    DEFAULT_VARIANTS, MAX_VARIANTS, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, SketchError, invalid_parameter};
use crate::io::image::{export_pixmap_as_png, load_source_raster};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "mondrian-frame")]
#[command(
    author,
    version,
    about = "Render Mondrian-style compositions from a source raster and hang them in a frame"
)]
/// Command-line arguments for the rendering tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Source pixels between sampled grid points
    #[arg(short = 't', long, default_value_t = DEFAULT_STRIDE)]
    pub stride: u32,

    /// Number of regenerated variants to render per file
    #[arg(short = 'n', long, default_value_t = DEFAULT_VARIANTS)]
    pub variants: usize,

    /// Output width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub width: u32,

    /// Output height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_OUTPUT_HEIGHT)]
    pub height: u32,

    /// Stroke jitter amplitude scale (0 draws straight outlines)
    #[arg(short, long, default_value_t = DEFAULT_JITTER)]
    pub jitter: f32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,

    /// Enable debug logging (RUST_LOG may refine it)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Sketch configuration derived from the arguments
    pub const fn sketch_config(&self) -> SketchConfig {
        SketchConfig {
            stride: self.stride,
            art_scale: 1.0,
            amplitude_scale: self.jitter,
            output_width: self.width,
            output_height: self.height,
            seed: self.seed,
        }
    }
}

/// Orchestrates batch rendering of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, target validation or any
    /// render fails
    pub fn process(&self) -> Result<Vec<PathBuf>> {
        if self.cli.variants == 0 || self.cli.variants > MAX_VARIANTS {
            return Err(invalid_parameter(
                "variants",
                &self.cli.variants,
                &format!("must be between 1 and {MAX_VARIANTS}"),
            ));
        }
        self.cli.sketch_config().validate()?;

        let files = self.collect_files()?;
        if files.is_empty() {
            info!("nothing to render");
            return Ok(Vec::new());
        }

        if let Some(ref pm) = self.progress_manager {
            pm.initialize(files.len(), self.cli.variants);
        }

        let mut written = Vec::new();
        for file in &files {
            written.extend(self.process_file(file)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        info!(files = files.len(), outputs = written.len(), "rendering complete");

        Ok(written)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_png(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"must be a PNG image",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| SketchError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_png(&path) && !is_rendered_output(&path) && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let existing = output_path(input_path, 0, self.cli.variants);
        if existing.exists() {
            warn!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<Vec<PathBuf>> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let raster = load_source_raster(input_path)?;
        let mut sketch = Sketch::new(raster, &self.cli.sketch_config())?;

        let mut written = Vec::new();
        for variant in 0..self.cli.variants {
            if variant > 0 {
                sketch.regenerate()?;
            }

            let scene = sketch.render()?;
            let path = output_path(input_path, variant, self.cli.variants);
            export_pixmap_as_png(&scene, &path)?;

            debug!(
                output = %path.display(),
                blocks = sketch.artwork().blocks.len(),
                "wrote composition"
            );
            written.push(path);

            if let Some(ref pm) = self.progress_manager {
                pm.complete_variant();
            }
        }

        debug!(
            input = %input_path.display(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "finished file"
        );

        Ok(written)
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

// Outputs land next to their inputs, so directory runs must not re-read them
fn is_rendered_output(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().contains(OUTPUT_SUFFIX))
}

/// Output path for one variant of `input_path`
///
/// A single variant is written as `<stem>_mondrian.png`; several variants
/// are numbered from 1 as `<stem>_mondrian_<n>.png`.
pub fn output_path(input_path: &Path, variant: usize, variants: usize) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = if variants > 1 {
        format!("{}{OUTPUT_SUFFIX}_{}.png", stem.to_string_lossy(), variant + 1)
    } else {
        format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy())
    };

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
