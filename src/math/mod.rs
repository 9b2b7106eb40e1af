//! Math utilities for noise generation.

pub mod noise_math;

pub use noise_math::{clamp, floor, lerp, lerp2, lerp3, smoothstep};
