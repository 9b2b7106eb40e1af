use thiserror::Error;

/// Errors produced while generating a density field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// A requested axis length was zero or negative.
    ///
    /// Bad dimensions are rejected before any allocation happens; silently
    /// substituting a default size would corrupt downstream geometry.
    #[error("invalid dimension: axis {axis} must be positive, got {value}")]
    InvalidDimension {
        /// Name of the offending axis (`"x"`, `"y"` or `"z"`).
        axis: &'static str,
        /// The rejected length.
        value: i32,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FieldError>;
