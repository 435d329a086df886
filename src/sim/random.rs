//! Bounded uniform sampling for spawn placement and velocity jitter

use glam::Vec2;
use rand::Rng;

/// Uniform float in `[min, max)`. Returns `min` when the range is empty or
/// not finite.
pub fn random_float<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min >= max || !(max - min).is_finite() {
        return min;
    }
    rng.random_range(min..max)
}

/// Uniform vector with each component drawn from its own range
pub fn random_vec2<R: Rng + ?Sized>(
    rng: &mut R,
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
) -> Vec2 {
    let x = random_float(rng, min_x, max_x);
    let y = random_float(rng, min_y, max_y);
    Vec2::new(x, y)
}

/// Uniform vector in the square `[-extent, extent)²`
#[inline]
pub fn random_jitter<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> Vec2 {
    random_vec2(rng, -extent, extent, -extent, extent)
}
