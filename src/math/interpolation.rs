//! Scalar interpolation helpers shared by the noise field and the stroke layers

/// Linear interpolation between `start` and `end` at parameter `t`
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    (end - start).mul_add(t, start)
}

/// Hermite smoothstep easing of `t` clamped to `[0, 1]`
///
/// Zero slope at both ends.
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * 2.0f64.mul_add(-t, 3.0)
}

/// Position of `index` along `count` evenly spaced layers, in `[0, 1]`
///
/// A single layer sits at 0 so it takes the first-layer settings.
pub fn layer_fraction(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    (index.min(count - 1)) as f64 / (count - 1) as f64
}
