//! Input/output, configuration and diagnostics
//!
//! This module contains:
//! - Command-line parsing and batch processing
//! - Composition constants and defaults
//! - Error types
//! - Raster loading and PNG export
//! - Logging and progress display

/// Command-line parsing and batch file processing
pub mod cli;
/// Composition constants and runtime defaults
pub mod configuration;
/// Error types for all sketch operations
pub mod error;
/// Source raster loading and PNG export
pub mod image;
/// Diagnostic log setup
pub mod logging;
/// Render progress display
pub mod progress;
