//! Vector Symbolic Architecture (VSA) operations on hypervectors.
//!
//! This module provides the free-function form of the algebra:
//!
//! - **Bind / Unbind**: Composition and its exact inverse
//! - **Superimpose**: Elementwise sum renormalized per representation
//! - **Similarity**: Normalized inner product for codebook matching
//!
//! All functions reject operands of differing dimension.
//!
//! ## References
//!
//! - Plate, T. "Holographic Reduced Representations"
//! - Frady, E.P. et al. "Resonator Networks"

mod bind;
mod similarity;
mod superpose;

pub use bind::{bind, bind_many, unbind};
pub use similarity::{similarity, similarity_profile};
pub use superpose::{superimpose, superimpose_weighted, superimpose_with_stats};
