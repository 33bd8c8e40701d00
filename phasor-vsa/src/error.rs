//! Error types for phasor-vsa.

use thiserror::Error;

/// Result type alias for phasor-vsa operations.
pub type Result<T> = std::result::Result<T, VsaError>;

/// Errors that can occur during hypervector and resonator operations.
#[derive(Debug, Error)]
pub enum VsaError {
    /// Dimension mismatch between operands.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Two sequences that must pair up element by element have different lengths.
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Expected number of elements.
        expected: usize,
        /// Actual number of elements.
        actual: usize,
    },

    /// Scalar input with no defined grid position (NaN or infinite).
    #[error("invalid value: {0}")]
    InvalidValue(f64),

    /// Sample outside the representation's value set.
    #[error("invalid binary sample: {0} (expected -1 or +1)")]
    InvalidSample(i32),

    /// Operation not defined on a zero-dimensional vector.
    #[error("operation not supported on empty vector")]
    EmptyVector,

    /// Empty input where non-empty was required.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Invalid configuration parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Index out of bounds.
    #[error("index {index} out of bounds for size {size}")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The size of the container.
        size: usize,
    },

    /// Wrong number of per-factor values for a codebook.
    #[error("factor count mismatch: expected {expected}, got {actual}")]
    FactorCountMismatch {
        /// Number of factors in the codebook.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// Resonator search hit its iteration cap without reaching the threshold.
    #[error("resonator did not converge after {iterations} iterations (confidences: {confidences:?})")]
    NotConverged {
        /// Iterations performed.
        iterations: usize,
        /// Per-factor confidences from the final iteration.
        confidences: Vec<f64>,
    },

    /// A finished resonator run was stepped again.
    #[error("resonator search already finished after {iterations} iterations")]
    SearchFinished {
        /// Iterations performed before the search ended.
        iterations: usize,
    },
}

/// Check that `actual` matches `expected`.
pub(crate) fn check_length(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(VsaError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Check that vector dimension `actual` matches `expected`.
pub(crate) fn check_dimension(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(VsaError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
