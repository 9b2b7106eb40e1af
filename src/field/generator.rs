//! Octave-based density field generation.
//!
//! Layers several passes of [`CloudNoise`] over the lattice, each pass at
//! twice the previous pass's frequency and half its weight, and clamps the
//! accumulated result into `[0, 1]`.

use crate::error::{FieldError, Result};
use crate::field::DensityField;
use crate::math::clamp;
use crate::noise::CloudNoise;

/// Noise-lattice cubes spanning each axis on the lowest-frequency octave.
const BASE_CUBE_COUNT: f64 = 4.0;

/// Octaves accumulated into the field by default.
const DEFAULT_OCTAVES: u32 = 4;

/// Octave-based cloud density field generator.
///
/// Pure with respect to external state: the output depends only on the
/// requested dimensions, the octave count and the sampler's permutation
/// table, so identical calls produce bit-identical fields.
#[derive(Debug, Clone)]
pub struct FieldGenerator {
    noise: CloudNoise,
    octaves: u32,
}

impl Default for FieldGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldGenerator {
    /// Creates a generator with the fixed permutation table and the default
    /// four octaves.
    #[must_use]
    pub fn new() -> Self {
        Self {
            noise: CloudNoise::default(),
            octaves: DEFAULT_OCTAVES,
        }
    }

    /// Replaces the noise sampler, e.g. to inject an alternate permutation
    /// table.
    #[must_use]
    pub fn with_noise(mut self, noise: CloudNoise) -> Self {
        self.noise = noise;
        self
    }

    /// Sets the number of octaves accumulated into the field.
    ///
    /// # Panics
    /// Panics if `octaves` is zero.
    #[must_use]
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        assert!(octaves >= 1, "at least one octave is required");
        self.octaves = octaves;
        self
    }

    /// The sampler this generator draws from.
    #[inline]
    #[must_use]
    pub const fn noise(&self) -> &CloudNoise {
        &self.noise
    }

    /// Generates the full density field for the given lattice resolution.
    ///
    /// Every cell of the returned field lies in `[0, 1]`. Octaves run in
    /// increasing-frequency order and later octaves add onto the values
    /// written by earlier ones, so their ordering is load-bearing.
    ///
    /// # Errors
    /// [`FieldError::InvalidDimension`] if any axis length is zero or
    /// negative; nothing is allocated in that case.
    pub fn generate(&self, dim_x: i32, dim_y: i32, dim_z: i32) -> Result<DensityField> {
        for (axis, value) in [("x", dim_x), ("y", dim_y), ("z", dim_z)] {
            if value <= 0 {
                return Err(FieldError::InvalidDimension { axis, value });
            }
        }

        log::debug!(
            "generating {dim_x}x{dim_y}x{dim_z} density field ({} octaves)",
            self.octaves
        );

        let mut field = DensityField::zeroed(dim_x, dim_y, dim_z);

        for q in 0..self.octaves {
            // grid_factor(q) = BASE_CUBE_COUNT * 2^q cubes per axis; the
            // octave's weight is the reciprocal of the same power of two.
            let pow2 = 2.0_f64.powi(q as i32);
            let grid = BASE_CUBE_COUNT * pow2;
            let step_x = f64::from(dim_x) / grid;
            let step_y = f64::from(dim_y) / grid;
            let step_z = f64::from(dim_z) / grid;
            let last = q + 1 == self.octaves;

            for i in 0..dim_x {
                for j in 0..dim_y {
                    for k in 0..dim_z {
                        // Cross-axis convention: the x lattice coordinate
                        // comes from index j, y from index i, z from index k.
                        // This determines the field's anisotropy; do not
                        // "straighten" it.
                        let x = f64::from(j) / step_x;
                        let y = f64::from(i) / step_y;
                        let z = f64::from(k) / step_z;

                        let contribution = clamp(self.noise.sample(x, y, z), 0.0, 1.0);

                        let cell = field.get_mut(i, j, k);
                        if q == 0 {
                            *cell = contribution;
                        } else {
                            *cell += contribution / pow2;
                        }
                        // Partial sums may exceed 1 between octaves; only
                        // the final octave's output is contractually bounded.
                        if last {
                            *cell = clamp(*cell, 0.0, 1.0);
                        }
                    }
                }
            }
        }

        log::debug!("density field complete ({} cells)", field.len());
        Ok(field)
    }
}
