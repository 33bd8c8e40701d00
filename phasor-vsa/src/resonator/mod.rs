// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Resonator network: factor a bound composite back into codebook levels.
//!
//! Given one codebook column per factor and a composite formed by binding one
//! vector per factor, the network searches the joint space of level
//! combinations without enumerating it. It alternates between unbinding the
//! other factors' current estimates, projecting onto each codebook, and
//! re-estimating each factor as a confidence-weighted blend of its column.
//!
//! # Usage
//!
//! ```
//! use phasor_vsa::{Codebook, CodebookConfig, ResonatorNetwork};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let config = CodebookConfig::default()
//!     .with_dimension(1024)
//!     .with_max_range(3.0)
//!     .with_resolution(1.0);
//! let codebook = Codebook::build(&config, &mut rng).unwrap();
//! let composite = codebook.compose(&[1, 5, 3]).unwrap();
//!
//! let network = ResonatorNetwork::new(&codebook, composite, 0.5).unwrap();
//! let result = network.find_factors(&mut rng).unwrap();
//! assert!(result.is_converged());
//! assert_eq!(result.indices, vec![1, 5, 3]);
//! ```

mod search;

pub use search::{IterationReport, Resonance, SearchState};

use rand::Rng;

use crate::codebook::Codebook;
use crate::config::ResonatorConfig;
use crate::error::{check_dimension, Result, VsaError};
use crate::phasor::PhasorHv;

/// Outcome of a complete resonator run.
#[derive(Debug, Clone, PartialEq)]
pub struct Factorization {
    /// Winning level per factor from the final iteration.
    pub indices: Vec<usize>,
    /// Iterations performed.
    pub iterations: usize,
    /// Per-factor confidences from the final iteration.
    pub confidences: Vec<f64>,
    /// [`SearchState::Converged`] or [`SearchState::Exhausted`].
    pub state: SearchState,
    /// Minimum per-factor confidence after each iteration.
    pub min_confidence_history: Vec<f64>,
}

impl Factorization {
    /// Whether every factor cleared the threshold.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.state == SearchState::Converged
    }

    /// Keep only converged results.
    ///
    /// # Errors
    ///
    /// Returns [`VsaError::NotConverged`] if the run was exhausted.
    pub fn into_converged(self) -> Result<Self> {
        if self.is_converged() {
            Ok(self)
        } else {
            Err(VsaError::NotConverged {
                iterations: self.iterations,
                confidences: self.confidences,
            })
        }
    }
}

/// A composite vector paired with the codebook it should factor against.
#[derive(Debug, Clone)]
pub struct ResonatorNetwork<'a> {
    codebook: &'a Codebook,
    composite: PhasorHv,
    config: ResonatorConfig,
}

impl<'a> ResonatorNetwork<'a> {
    /// Create a network with the given confidence threshold and the default
    /// iteration cap.
    ///
    /// # Errors
    ///
    /// Returns error if the threshold is outside `(0, 1)`, the codebook is
    /// empty, or the composite's dimension differs from the codebook's.
    pub fn new(codebook: &'a Codebook, composite: PhasorHv, confidence_threshold: f64) -> Result<Self> {
        Self::with_config(
            codebook,
            composite,
            ResonatorConfig::default().with_confidence_threshold(confidence_threshold),
        )
    }

    /// Create a network from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid, the codebook is empty,
    /// or the composite's dimension differs from the codebook's.
    pub fn with_config(
        codebook: &'a Codebook,
        composite: PhasorHv,
        config: ResonatorConfig,
    ) -> Result<Self> {
        config.validate()?;
        if codebook.num_factors() == 0 || codebook.is_empty() {
            return Err(VsaError::EmptyInput("codebook has no entries".to_string()));
        }
        check_dimension(codebook.dimension(), composite.len())?;

        Ok(Self {
            codebook,
            composite,
            config,
        })
    }

    /// The codebook being searched.
    #[must_use]
    pub fn codebook(&self) -> &Codebook {
        self.codebook
    }

    /// The composite being factored.
    #[must_use]
    pub fn composite(&self) -> &PhasorHv {
        &self.composite
    }

    /// The search configuration.
    #[must_use]
    pub fn config(&self) -> &ResonatorConfig {
        &self.config
    }

    /// Begin a run that the caller advances with [`Resonance::step`].
    ///
    /// # Errors
    ///
    /// Returns error if the initial superposition fails.
    pub fn start<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Resonance<'_>> {
        Resonance::new(self.codebook, &self.composite, &self.config, rng)
    }

    /// Iterate until every factor's confidence exceeds the threshold or the
    /// iteration cap is reached.
    ///
    /// Exhaustion is not an error here; check [`Factorization::state`] or use
    /// [`Factorization::into_converged`].
    ///
    /// # Errors
    ///
    /// Returns error only if an internal vector operation fails.
    pub fn find_factors<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Factorization> {
        let mut run = self.start(rng)?;
        let mut min_confidence_history = Vec::new();

        let last = loop {
            let report = run.step(rng)?;
            min_confidence_history.push(report.min_confidence());
            if report.state.is_terminal() {
                break report;
            }
        };

        match last.state {
            SearchState::Converged => tracing::info!(
                iterations = last.iteration,
                indices = ?last.winners,
                confidences = ?last.confidences,
                "resonator converged"
            ),
            _ => tracing::warn!(
                iterations = last.iteration,
                threshold = self.config.confidence_threshold,
                confidences = ?last.confidences,
                "resonator exhausted its iteration cap without converging"
            ),
        }

        Ok(Factorization {
            indices: last.winners,
            iterations: last.iteration,
            confidences: last.confidences,
            state: last.state,
            min_confidence_history,
        })
    }
}
