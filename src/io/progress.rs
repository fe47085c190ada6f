//! Render progress across every source file and variant

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar counting rendered variants
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden-until-initialized progress manager
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Set the total number of renders across all files
    pub fn initialize(&self, file_count: usize, variants: usize) {
        self.bar.set_length(file_count.saturating_mul(variants) as u64);
        self.bar.set_position(0);
    }

    /// Show which file is being rendered
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count one finished render
    pub fn complete_variant(&self) {
        self.bar.inc(1);
    }

    /// Number of renders counted so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of renders expected
    pub fn total(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
