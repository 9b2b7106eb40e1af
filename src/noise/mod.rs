//! Gradient noise primitives for cloud density synthesis.
//!
//! - [`CloudNoise`] - Single-octave 3D gradient noise over a fixed
//!   permutation table; the [`FieldGenerator`](crate::FieldGenerator)
//!   samples it once per cell per octave.

mod cloud_noise;

pub use cloud_noise::CloudNoise;
