//! Seeded coherent noise for stroke jitter
//!
//! Lattice values come from an integer hash of the seed and cell corners,
//! are eased with smoothstep and summed over several octaves. The result is
//! normalised to `[0, 1]`, so `0.5` means "no displacement".

use crate::io::configuration::{NOISE_FALLOFF, NOISE_OCTAVES};
use crate::math::interpolation::{lerp, smoothstep};

/// Deterministic 2D field sampled at arbitrary real coordinates
pub trait NoiseField {
    /// Field value at `(x, y)`, always within `[0, 1]`
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Multi-octave value noise with an explicit seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueNoise {
    seed: u64,
    octaves: u32,
}

impl ValueNoise {
    /// Create a noise field with the default octave count
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            octaves: NOISE_OCTAVES,
        }
    }

    /// Create a noise field with a specific octave count (at least one)
    pub const fn with_octaves(seed: u64, octaves: u32) -> Self {
        Self {
            seed,
            octaves: if octaves == 0 { 1 } else { octaves },
        }
    }

    /// Seed the field was created with
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    // Pseudo-random lattice value in [0, 1] for one octave
    fn lattice(&self, octave: u32, ix: i64, iy: i64) -> f64 {
        let mut h = self.seed ^ (u64::from(octave)).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        h ^= (ix as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        h = h.rotate_left(31);
        h ^= (iy as u64).wrapping_mul(0x94D0_49BB_1331_11EB);
        let mixed = mix64(h);
        (mixed >> 11) as f64 / (1u64 << 53) as f64
    }

    fn octave_value(&self, octave: u32, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let tx = smoothstep(x - x0);
        let ty = smoothstep(y - y0);
        let (ix, iy) = (x0 as i64, y0 as i64);

        let top = lerp(
            self.lattice(octave, ix, iy),
            self.lattice(octave, ix + 1, iy),
            tx,
        );
        let bottom = lerp(
            self.lattice(octave, ix, iy + 1),
            self.lattice(octave, ix + 1, iy + 1),
            tx,
        );
        lerp(top, bottom, ty)
    }
}

impl NoiseField for ValueNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut norm = 0.0;
        let mut amplitude = 0.5;
        let mut frequency = 1.0;

        for octave in 0..self.octaves {
            total += amplitude * self.octave_value(octave, x * frequency, y * frequency);
            norm += amplitude;
            amplitude *= NOISE_FALLOFF;
            frequency *= 2.0;
        }

        if norm > 0.0 {
            (total / norm).clamp(0.0, 1.0)
        } else {
            0.5
        }
    }
}

// SplitMix64 finaliser
const fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
