//! Similarity measures for phasor vectors.
//!
//! These functions measure how similar two vectors are, used for codebook
//! matching and confidence estimation.

use crate::error::Result;
use crate::phasor::PhasorHv;

/// Real part of the normalized inner product.
///
/// Returns a value in [-1, 1] where:
/// - 1.0 = identical
/// - 0.0 = orthogonal (expected for independent random vectors)
/// - -1.0 = every phase rotated by pi
///
/// # Formula
///
/// ```text
/// sim(a, b) = Re( sum_i a_i * conj(b_i) ) / D
/// ```
///
/// # Errors
///
/// Returns error if vectors have different dimensions or are empty.
pub fn similarity(a: &PhasorHv, b: &PhasorHv) -> Result<f64> {
    a.similarity(b)
}

/// Similarity of `query` against every vector in `entries`, in order.
///
/// # Errors
///
/// Returns error if any entry's dimension differs from the query's.
pub fn similarity_profile(query: &PhasorHv, entries: &[PhasorHv]) -> Result<Vec<f64>> {
    entries.iter().map(|entry| entry.similarity(query)).collect()
}
