//! Phasor hypervector algebra with resonator-network factorization.
//!
//! This crate represents symbols and continuous values as high-dimensional
//! vectors of unit-magnitude complex numbers (phasors), in the style of
//! Fourier holographic reduced representations. A quantized value is encoded
//! by raising a random basis vector to a fractional power, several values are
//! combined by binding, and a resonator network recovers the individual values
//! from the bound composite without searching every combination.
//!
//! # Features
//!
//! - **Core Types**: [`PhasorHv`] (complex phasors), [`BinaryHv`] (bipolar ±1)
//! - **VSA Operations**: Bind, Unbind, Superimpose, Similarity in [`vsa`]
//! - **Fractional Power Encoding**: [`PhasorHv::encode`] with smooth similarity decay
//! - **Codebooks**: [`Codebook`] over an inclusive quantization grid
//! - **Factorization**: [`ResonatorNetwork`] with an explicit iteration cap
//!
//! # Quick Start
//!
//! ```rust
//! use phasor_vsa::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let config = CodebookConfig::default()
//!     .with_dimension(2000)
//!     .with_max_range(5.0)
//!     .with_resolution(1.0);
//! let codebook = build_codebook(&config, &mut rng)?;
//!
//! // Bind one level per factor into a single composite.
//! let composite = codebook.compose(&[3, 7, 10])?;
//!
//! // Factor it back.
//! let result = ResonatorNetwork::new(&codebook, composite, 0.5)?.find_factors(&mut rng)?;
//! assert_eq!(codebook.decode(&result.indices)?, vec![-2.0, 2.0, 5.0]);
//! # Ok::<(), VsaError>(())
//! ```
//!
//! # Representation
//!
//! Every sample of a [`PhasorHv`] is `e^{iθ}`:
//!
//! ```text
//! Operation    | Per sample
//! -------------+-----------------------------
//! bind         | a * b          (phases add)
//! unbind       | a * conj(b)    (phases subtract)
//! inverse      | -a             (rotate by π)
//! encode(x)    | a^x            (phase scaled by x)
//! similarity   | Re(Σ a * conj(b)) / D
//! ```
//!
//! # Randomness
//!
//! Every operation that draws random numbers takes a caller-supplied
//! [`rand::Rng`], so seeded generators give reproducible runs.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod binary;
mod codebook;
mod config;
mod error;
mod hypervector;
mod phasor;
mod resonator;
pub mod vsa;

pub use binary::BinaryHv;
pub use codebook::{build_codebook, quantization_grid, Codebook};
pub use config::{CodebookConfig, PhaseDistribution, ResonatorConfig, MAX_GRID_LEVELS};
pub use error::{Result, VsaError};
pub use hypervector::{Hypervector, Superposition};
pub use phasor::PhasorHv;
pub use resonator::{Factorization, IterationReport, Resonance, ResonatorNetwork, SearchState};

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use phasor_vsa::prelude::*;
/// ```
pub mod prelude {
    pub use crate::codebook::{build_codebook, Codebook};
    pub use crate::config::{CodebookConfig, PhaseDistribution, ResonatorConfig};
    pub use crate::hypervector::Hypervector;
    pub use crate::phasor::PhasorHv;
    pub use crate::resonator::{Factorization, ResonatorNetwork, SearchState};
    pub use crate::vsa::{bind, similarity, superimpose, unbind};
    pub use crate::{Result, VsaError};
}
