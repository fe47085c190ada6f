//! Mathematical utilities for noise and stroke styling

/// Linear and smoothstep interpolation
pub mod interpolation;
/// Seeded multi-octave value noise
pub mod noise;
