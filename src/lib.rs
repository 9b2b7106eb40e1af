//! Deterministic 3D volumetric cloud density field generation.
//!
//! This crate synthesizes a scalar density field in `[0, 1]` over a caller-chosen
//! lattice by accumulating four octaves of 3D gradient (Perlin-style) noise.
//! The permutation table driving gradient selection is a fixed constant, so for
//! a given set of dimensions the output is bit-for-bit reproducible.
//!
//! # Key types
//!
//! - [`CloudNoise`] - Single-octave gradient noise sampler
//! - [`FieldGenerator`] - Runs the octave passes and accumulates the field
//! - [`DensityField`] - The generated volume, immutable once returned
//! - [`FieldError`] - Rejection of non-positive dimensions, the only failure mode
//!
//! # Example
//!
//! ```
//! use cloudfield::FieldGenerator;
//!
//! let field = FieldGenerator::new().generate(8, 8, 8).unwrap();
//! assert!(field.values().iter().all(|v| (0.0..=1.0).contains(v)));
//! ```

mod error;
pub mod field;
pub mod math;
pub mod noise;

pub use error::{FieldError, Result};
pub use field::{DensityField, FieldGenerator};
pub use noise::CloudNoise;
