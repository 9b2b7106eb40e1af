//! Density field generation.
//!
//! - [`FieldGenerator`] - Runs the octave passes over the lattice
//! - [`DensityField`] - The generated volume, one `f64` in [0, 1] per cell

mod density_field;
mod generator;

pub use density_field::DensityField;
pub use generator::FieldGenerator;
