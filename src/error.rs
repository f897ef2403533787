//! Error type for the recoverable input problems of an extraction.
//!
//! Broken internal invariants (lookup table symmetry, vertex range arithmetic) are not represented
//! here: they panic, since they can only come from a defect in the crate itself.

use thiserror::Error;

/// Errors returned when the input of an extraction is malformed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DmcError {
    /// A bounding box axis is not finite or is empty.
    #[error("invalid bounds on the {axis} axis: min {min} must be finite and below max {max}")]
    InvalidBounds {
        /// The offending axis, `'x'`, `'y'` or `'z'`.
        axis: char,
        /// The minimum coordinate on that axis.
        min: f32,
        /// The maximum coordinate on that axis.
        max: f32,
    },

    /// The iso-value is NaN or infinite.
    #[error("iso-value must be finite, got {0}")]
    NonFiniteIsoValue(f32),

    /// A dense grid was built from a buffer of the wrong length.
    #[error("grid needs {expected} samples, got {actual}")]
    DataLengthMismatch {
        /// Number of samples implied by the grid dimensions.
        expected: usize,
        /// Number of samples provided.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DmcError::InvalidBounds {
            axis: 'y',
            min: 1.,
            max: -1.,
        };
        assert_eq!(
            err.to_string(),
            "invalid bounds on the y axis: min 1 must be finite and below max -1"
        );

        let err = DmcError::NonFiniteIsoValue(f32::INFINITY);
        assert_eq!(err.to_string(), "iso-value must be finite, got inf");

        let err = DmcError::DataLengthMismatch {
            expected: 27,
            actual: 8,
        };
        assert_eq!(err.to_string(), "grid needs 27 samples, got 8");
    }
}
