//! Error types.

use thiserror::Error;

/// Result alias for fallible simpix operations.
pub type Result<T> = std::result::Result<T, SimpixError>;

/// Errors raised while setting up an annealing run.
///
/// Every variant is detected before the initial shuffle. Once the engine
/// is constructed, the annealing loop cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimpixError {
    /// Source and target images do not share the same geometry.
    #[error(
        "source is {}x{} but target is {}x{}",
        source_dims.0,
        source_dims.1,
        target_dims.0,
        target_dims.1
    )]
    DimensionMismatch {
        /// `(width, height)` of the source image.
        source_dims: (usize, usize),
        /// `(width, height)` of the target image.
        target_dims: (usize, usize),
    },

    /// Buffer contents are unusable (empty, or length disagrees with geometry).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Schedule parameters are out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = SimpixError::DimensionMismatch {
            source_dims: (2, 2),
            target_dims: (3, 2),
        };
        assert_eq!(err.to_string(), "source is 2x2 but target is 3x2");
    }

    #[test]
    fn test_invalid_input_message() {
        let err = SimpixError::InvalidInput("empty buffer".into());
        assert_eq!(err.to_string(), "invalid input: empty buffer");
    }
}
