//! Shape construction errors

use std::fmt;

/// Error returned by the checked (`try_new`) shape constructors
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    /// A size parameter is negative, NaN or infinite
    InvalidDimension {
        /// Shape being built ("circle", "cube", ...)
        shape: &'static str,
        /// Name of the offending parameter ("radius", "side", ...)
        dimension: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidDimension { shape, dimension, value } => write!(
                f,
                "Invalid {} {}: {} (must be finite and non-negative)",
                shape, dimension, value
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Accept a size parameter if it is finite and non-negative
///
/// Zero is allowed: a zero-sized shape is degenerate but well defined.
pub(crate) fn check_dimension(
    shape: &'static str,
    dimension: &'static str,
    value: f64,
) -> Result<f64, ShapeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        log::debug!("Rejected {} {} = {}", shape, dimension, value);
        Err(ShapeError::InvalidDimension { shape, dimension, value })
    }
}
