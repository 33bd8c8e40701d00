// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! One resonator run, advanced an iteration at a time.
//!
//! ```text
//!            all confidences > threshold
//! Searching ----------------------------> Converged
//!     |
//!     | iteration == max_iterations
//!     v
//! Exhausted
//! ```
//!
//! Each iteration, for every factor `f`:
//!
//! 1. `noisy_f = unbind(composite, bind(estimates of every other factor))`
//! 2. `scores_f[k] = |similarity(codebook[f][k], noisy_f)|`
//! 3. `confidence_f = max(scores_f)`, winner = argmax with random tie-break
//! 4. `estimate_f = superimpose(codebook[f][k] * scores_f[k] for all k)`
//!
//! All noisy estimates are taken from the previous iteration's estimates.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::codebook::Codebook;
use crate::config::ResonatorConfig;
use crate::error::{Result, VsaError};
use crate::phasor::PhasorHv;
use crate::vsa;

/// Where a resonator run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchState {
    /// Still iterating.
    #[default]
    Searching,
    /// Every factor's confidence exceeded the threshold.
    Converged,
    /// The iteration cap was reached first.
    Exhausted,
}

impl SearchState {
    /// Whether the run has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Searching)
    }
}

/// What one iteration observed.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Best absolute similarity per factor.
    pub confidences: Vec<f64>,
    /// Best-matching level per factor.
    pub winners: Vec<usize>,
    /// State after this iteration.
    pub state: SearchState,
    /// Samples perturbed while re-estimating.
    pub degenerate_samples: usize,
}

impl IterationReport {
    /// Lowest confidence across factors.
    #[must_use]
    pub fn min_confidence(&self) -> f64 {
        self.confidences
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }
}

/// Working state of one factorization.
///
/// Created by [`super::ResonatorNetwork::start`]; the estimates are owned by
/// the run and dropped with it.
#[derive(Debug)]
pub struct Resonance<'a> {
    codebook: &'a Codebook,
    composite: &'a PhasorHv,
    config: &'a ResonatorConfig,
    estimates: Vec<PhasorHv>,
    iteration: usize,
    state: SearchState,
}

impl<'a> Resonance<'a> {
    /// Seed every estimate with the superposition of its whole codebook column.
    pub(crate) fn new<R: Rng + ?Sized>(
        codebook: &'a Codebook,
        composite: &'a PhasorHv,
        config: &'a ResonatorConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let estimates = (0..codebook.num_factors())
            .map(|factor| vsa::superimpose(codebook.factor(factor)?, rng))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            codebook,
            composite,
            config,
            estimates,
            iteration: 0,
            state: SearchState::Searching,
        })
    }

    /// Iterations performed so far.
    #[must_use]
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Current per-factor estimates.
    #[must_use]
    pub fn estimates(&self) -> &[PhasorHv] {
        &self.estimates
    }

    /// Run one iteration.
    ///
    /// # Errors
    ///
    /// Returns [`VsaError::SearchFinished`] if the run already ended.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<IterationReport> {
        if self.state.is_terminal() {
            return Err(VsaError::SearchFinished {
                iterations: self.iteration,
            });
        }
        self.iteration += 1;

        let num_factors = self.estimates.len();
        let mut all_scores = Vec::with_capacity(num_factors);
        let mut confidences = Vec::with_capacity(num_factors);
        let mut winners = Vec::with_capacity(num_factors);

        for factor in 0..num_factors {
            let noisy = self.composite.unbind(&self.others_bound(factor)?)?;
            let scores: Vec<f64> = vsa::similarity_profile(&noisy, self.codebook.factor(factor)?)?
                .into_iter()
                .map(f64::abs)
                .collect();

            let confidence = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            winners.push(pick_winner(&scores, confidence, rng));
            confidences.push(confidence);
            all_scores.push(scores);
        }

        let threshold = self.config.confidence_threshold;
        self.state = if confidences.iter().all(|&c| c > threshold) {
            SearchState::Converged
        } else if self.iteration >= self.config.max_iterations {
            SearchState::Exhausted
        } else {
            SearchState::Searching
        };

        let mut degenerate_samples = 0;
        if !self.state.is_terminal() {
            for (factor, scores) in all_scores.iter().enumerate() {
                let blend =
                    vsa::superimpose_weighted(self.codebook.factor(factor)?, scores, rng)?;
                degenerate_samples += blend.degenerate_samples;
                self.estimates[factor] = blend.vector;
            }
        }

        tracing::debug!(
            iteration = self.iteration,
            ?confidences,
            ?winners,
            state = ?self.state,
            "resonator iteration"
        );

        Ok(IterationReport {
            iteration: self.iteration,
            confidences,
            winners,
            state: self.state,
            degenerate_samples,
        })
    }

    /// Bind of every estimate except `factor`'s; the identity for one factor.
    fn others_bound(&self, factor: usize) -> Result<PhasorHv> {
        self.estimates
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != factor)
            .try_fold(PhasorHv::identity(self.composite.len()), |acc, (_, est)| {
                acc.bind(est)
            })
    }
}

/// Index of a maximal score, uniform among exact ties.
#[allow(clippy::float_cmp)]
fn pick_winner<R: Rng + ?Sized>(scores: &[f64], best: f64, rng: &mut R) -> usize {
    let tied: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s == best)
        .map(|(i, _)| i)
        .collect();
    tied.choose(rng).copied().unwrap_or(0)
}
