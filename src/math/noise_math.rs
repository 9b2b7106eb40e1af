//! Interpolation and clamping primitives for the cloud noise sampler.

/// Smoothstep - quintic Hermite interpolation (NOT cubic!)
///
/// Formula: 6x^5 - 15x^4 + 10x^3
///
/// Applied to fractional lattice offsets before interpolation; continuous
/// first and second derivatives at cell boundaries keep octave layers free
/// of visible seams.
#[inline]
#[must_use]
pub fn smoothstep(x: f64) -> f64 {
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

/// Floor to `i32`, rounding toward negative infinity.
#[inline]
#[must_use]
pub fn floor(v: f64) -> i32 {
    let i = v as i32;
    if v < f64::from(i) { i - 1 } else { i }
}

/// Linear interpolation, clamped to be non-negative.
///
/// Formula: max(0, a + alpha * (b - a))
///
/// The clamp is part of the primitive, not an external post-step: every
/// interpolation stage of the trilinear blend floors its result at zero,
/// which biases the whole field upward relative to canonical Perlin noise.
/// Intentional - see `lerp_clamps_negative_results` below before changing.
#[inline]
#[must_use]
pub fn lerp(alpha: f64, a: f64, b: f64) -> f64 {
    (a + alpha * (b - a)).max(0.0)
}

/// Bilinear interpolation over 4 corner values, built on the clamping [`lerp`].
#[inline]
#[must_use]
pub fn lerp2(a1: f64, a2: f64, x00: f64, x10: f64, x01: f64, x11: f64) -> f64 {
    lerp(a2, lerp(a1, x00, x10), lerp(a1, x01, x11))
}

/// Trilinear interpolation over 8 corner values, built on the clamping [`lerp`].
///
/// Blends along x first within each (y, z) pair, then y, then z.
#[inline]
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn lerp3(
    a1: f64,
    a2: f64,
    a3: f64,
    x000: f64,
    x100: f64,
    x010: f64,
    x110: f64,
    x001: f64,
    x101: f64,
    x011: f64,
    x111: f64,
) -> f64 {
    lerp(
        a3,
        lerp2(a1, a2, x000, x100, x010, x110),
        lerp2(a1, a2, x001, x101, x011, x111),
    )
}

/// Clamp a value to the range [min, max].
#[inline]
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
