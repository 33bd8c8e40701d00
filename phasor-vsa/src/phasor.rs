// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Phasor hypervectors: vectors of unit-magnitude complex samples.
//!
//! The phase of each sample carries the information. Binding adds phases,
//! unbinding subtracts them, and fractional-power encoding scales them, so a
//! continuous scalar maps onto a smooth one-parameter family of vectors.
//!
//! Every operator except [`PhasorHv::scaled`] and [`PhasorHv::from_samples`]
//! keeps samples on the unit circle.

use std::f64::consts::PI;

use num_complex::Complex64;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::PhaseDistribution;
use crate::error::{check_dimension, Result, VsaError};
use crate::hypervector::{Hypervector, Superposition};

/// A hypervector of complex phasors.
#[derive(Debug, Clone, PartialEq)]
pub struct PhasorHv {
    samples: Vec<Complex64>,
}

impl PhasorHv {
    /// Wrap raw samples without normalizing them.
    #[must_use]
    pub fn from_samples(samples: Vec<Complex64>) -> Self {
        Self { samples }
    }

    /// Build unit phasors from phase angles in radians.
    #[must_use]
    pub fn from_phases(phases: &[f64]) -> Self {
        Self {
            samples: phases.iter().map(|&phi| Complex64::cis(phi)).collect(),
        }
    }

    /// The binding identity: every sample is `1 + 0i`.
    #[must_use]
    pub fn identity(dimension: usize) -> Self {
        Self {
            samples: vec![Complex64::new(1.0, 0.0); dimension],
        }
    }

    /// Draw a random phasor vector.
    ///
    /// # Errors
    ///
    /// Returns error if `dimension` is zero or the distribution parameters
    /// are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use phasor_vsa::{PhaseDistribution, PhasorHv};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let v = PhasorHv::random(512, &PhaseDistribution::Uniform, &mut rng).unwrap();
    /// assert_eq!(v.len(), 512);
    /// assert!((v.similarity(&v).unwrap() - 1.0).abs() < 1e-12);
    /// ```
    pub fn random<R: Rng + ?Sized>(
        dimension: usize,
        distribution: &PhaseDistribution,
        rng: &mut R,
    ) -> Result<Self> {
        if dimension == 0 {
            return Err(VsaError::EmptyVector);
        }

        let phases: Vec<f64> = match *distribution {
            PhaseDistribution::Uniform => (0..dimension)
                .map(|_| rng.random_range(-PI..PI))
                .collect(),
            PhaseDistribution::Normal { mean, std_dev } => {
                let normal = Normal::new(mean, std_dev)
                    .map_err(|e| VsaError::InvalidConfig(format!("phase distribution: {e}")))?;
                (0..dimension).map(|_| normal.sample(rng)).collect()
            }
        };

        Ok(Self::from_phases(&phases))
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the vector has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Principal phase of every sample, in `(-pi, pi]`.
    #[must_use]
    pub fn phases(&self) -> Vec<f64> {
        self.samples.iter().map(|z| z.arg()).collect()
    }

    /// Project every sample back onto the unit circle.
    ///
    /// Zero samples get a random phase. Returns how many were zero.
    pub fn normalize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut degenerate = 0;
        for z in &mut self.samples {
            let (unit, was_zero) = unit_phasor(*z, rng);
            *z = unit;
            degenerate += usize::from(was_zero);
        }
        degenerate
    }

    /// Bind: elementwise product, i.e. phase addition.
    ///
    /// # Errors
    ///
    /// Returns error if dimensions differ.
    pub fn bind(&self, other: &Self) -> Result<Self> {
        check_dimension(self.len(), other.len())?;
        Ok(Self {
            samples: self
                .samples
                .iter()
                .zip(&other.samples)
                .map(|(a, b)| *a * *b)
                .collect(),
        })
    }

    /// Unbind: elementwise product with the conjugate of `key`.
    ///
    /// `bound.bind(key)?.unbind(key)? == bound` up to rounding.
    ///
    /// # Errors
    ///
    /// Returns error if dimensions differ.
    pub fn unbind(&self, key: &Self) -> Result<Self> {
        check_dimension(self.len(), key.len())?;
        Ok(Self {
            samples: self
                .samples
                .iter()
                .zip(&key.samples)
                .map(|(a, b)| *a * b.conj())
                .collect(),
        })
    }

    /// Rotate every phase by pi.
    ///
    /// This is negation, not the conjugate inverse that [`Self::unbind`] applies.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            samples: self.samples.iter().map(|z| -*z).collect(),
        }
    }

    /// Real part of the normalized inner product `sum(a_i * conj(b_i)) / D`.
    ///
    /// # Errors
    ///
    /// Returns error if dimensions differ or the vectors are empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn similarity(&self, other: &Self) -> Result<f64> {
        check_dimension(self.len(), other.len())?;
        if self.is_empty() {
            return Err(VsaError::EmptyVector);
        }

        let dot: f64 = self
            .samples
            .iter()
            .zip(&other.samples)
            .map(|(a, b)| (*a * b.conj()).re)
            .sum();

        Ok(dot / self.len() as f64)
    }

    /// Fractional-power encoding: raise every sample to the power `state`.
    ///
    /// On the principal branch this multiplies each phase in `(-pi, pi]` by
    /// `state`; `encode(0.0)` is the identity vector.
    ///
    /// A NaN or infinite `state` has no phase to scale to and yields NaN
    /// samples off the unit circle. [`crate::Codebook::encode`] rejects such
    /// values instead.
    #[must_use]
    pub fn encode(&self, state: f64) -> Self {
        Self {
            samples: self.samples.iter().map(|z| z.powf(state)).collect(),
        }
    }

    /// Multiply every sample by a real weight.
    ///
    /// The result is off the unit circle whenever `weight.abs() != 1`; it is
    /// meant as input to a superposition, which renormalizes.
    #[must_use]
    pub fn scaled(&self, weight: f64) -> Self {
        Self {
            samples: self.samples.iter().map(|z| *z * weight).collect(),
        }
    }
}

impl Hypervector for PhasorHv {
    type Sample = Complex64;
    type Accumulator = Complex64;

    fn dimension(&self) -> usize {
        self.samples.len()
    }

    fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    fn accumulate(&self, sums: &mut [Complex64]) {
        for (acc, z) in sums.iter_mut().zip(&self.samples) {
            *acc += *z;
        }
    }

    fn combine<R: Rng + ?Sized>(sums: Vec<Complex64>, rng: &mut R) -> Superposition<Self> {
        let mut vector = Self { samples: sums };
        let degenerate_samples = vector.normalize(rng);
        Superposition {
            vector,
            degenerate_samples,
        }
    }
}

/// Unit phasor with the phase of `z`; a random phase when `z` is zero.
fn unit_phasor<R: Rng + ?Sized>(z: Complex64, rng: &mut R) -> (Complex64, bool) {
    let magnitude = z.norm();
    if magnitude == 0.0 {
        (Complex64::cis(rng.random_range(-PI..PI)), true)
    } else {
        (z / magnitude, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EPS: f64 = 1e-9;

    fn random_pair(dim: usize, seed: u64) -> (PhasorHv, PhasorHv) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let a = PhasorHv::random(dim, &PhaseDistribution::Uniform, &mut rng).unwrap();
        let b = PhasorHv::random(dim, &PhaseDistribution::Uniform, &mut rng).unwrap();
        (a, b)
    }

    fn assert_unit(v: &PhasorHv) {
        for (i, z) in v.samples().iter().enumerate() {
            assert!((z.norm() - 1.0).abs() < EPS, "sample {i} has magnitude {}", z.norm());
        }
    }

    #[test]
    fn test_random_samples_on_unit_circle() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let uniform = PhasorHv::random(256, &PhaseDistribution::Uniform, &mut rng).unwrap();
        let normal = PhasorHv::random(256, &PhaseDistribution::normal(2.0), &mut rng).unwrap();
        assert_unit(&uniform);
        assert_unit(&normal);
    }

    #[test]
    fn test_random_deterministic() {
        let dist = PhaseDistribution::default();
        let a = PhasorHv::random(128, &dist, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let b = PhasorHv::random(128, &dist, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let c = PhasorHv::random(128, &dist, &mut ChaCha8Rng::seed_from_u64(10)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_rejects_empty_and_bad_spread() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            PhasorHv::random(0, &PhaseDistribution::Uniform, &mut rng),
            Err(VsaError::EmptyVector)
        ));
        assert!(PhasorHv::random(8, &PhaseDistribution::normal(-1.0), &mut rng).is_err());
    }

    #[test]
    fn test_zero_spread_gives_constant_phase() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let dist = PhaseDistribution::Normal {
            mean: 0.25,
            std_dev: 0.0,
        };
        let v = PhasorHv::random(16, &dist, &mut rng).unwrap();
        for phi in v.phases() {
            assert!((phi - 0.25).abs() < EPS);
        }
    }

    #[test]
    fn test_bind_unbind_inverse() {
        let (a, b) = random_pair(1000, 42);
        let recovered = a.bind(&b).unwrap().unbind(&b).unwrap();
        assert!((recovered.similarity(&a).unwrap() - 1.0).abs() < EPS);
        for (x, y) in recovered.samples().iter().zip(a.samples()) {
            assert!((*x - *y).norm() < EPS);
        }
    }

    #[test]
    fn test_self_similarity() {
        let (a, _) = random_pair(777, 3);
        assert!((a.similarity(&a).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_random_vectors_nearly_orthogonal() {
        let (a, b) = random_pair(4096, 11);
        assert!(a.similarity(&b).unwrap().abs() < 0.1);
    }

    #[test]
    fn test_bind_commutative_and_associative() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let dist = PhaseDistribution::Uniform;
        let a = PhasorHv::random(300, &dist, &mut rng).unwrap();
        let b = PhasorHv::random(300, &dist, &mut rng).unwrap();
        let c = PhasorHv::random(300, &dist, &mut rng).unwrap();

        let ab = a.bind(&b).unwrap();
        let ba = b.bind(&a).unwrap();
        for (x, y) in ab.samples().iter().zip(ba.samples()) {
            assert!((*x - *y).norm() < EPS);
        }

        let left = ab.bind(&c).unwrap();
        let right = a.bind(&b.bind(&c).unwrap()).unwrap();
        for (x, y) in left.samples().iter().zip(right.samples()) {
            assert!((*x - *y).norm() < EPS);
        }
    }

    #[test]
    fn test_bind_keeps_unit_magnitude() {
        let (a, b) = random_pair(500, 8);
        assert_unit(&a.bind(&b).unwrap());
        assert_unit(&a.unbind(&b).unwrap());
        assert_unit(&a.encode(3.7));
        assert_unit(&a.inverse());
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let a = PhasorHv::random(10, &PhaseDistribution::Uniform, &mut rng).unwrap();
        let b = PhasorHv::random(12, &PhaseDistribution::Uniform, &mut rng).unwrap();

        assert!(matches!(
            a.bind(&b),
            Err(VsaError::DimensionMismatch {
                expected: 10,
                actual: 12
            })
        ));
        assert!(a.unbind(&b).is_err());
        assert!(a.similarity(&b).is_err());
    }

    #[test]
    fn test_similarity_empty() {
        let empty = PhasorHv::from_samples(Vec::new());
        assert!(matches!(empty.similarity(&empty), Err(VsaError::EmptyVector)));
    }

    #[test]
    fn test_identity_encoding() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let basis = PhasorHv::random(64, &PhaseDistribution::default(), &mut rng).unwrap();
        let encoded = basis.encode(0.0);
        for z in encoded.samples() {
            assert!((*z - Complex64::new(1.0, 0.0)).norm() < EPS);
        }
        assert_eq!(encoded, PhasorHv::identity(64));
    }

    #[test]
    fn test_encode_one_is_basis() {
        let (a, _) = random_pair(64, 4);
        for (x, y) in a.encode(1.0).samples().iter().zip(a.samples()) {
            assert!((*x - *y).norm() < EPS);
        }
    }

    #[test]
    fn test_encode_scales_principal_phase() {
        let basis = PhasorHv::from_phases(&[0.5, -1.0, 3.0]);
        let phases = basis.encode(0.5).phases();
        assert!((phases[0] - 0.25).abs() < EPS);
        assert!((phases[1] + 0.5).abs() < EPS);
        assert!((phases[2] - 1.5).abs() < EPS);
    }

    #[test]
    fn test_encode_non_finite_state_leaves_unit_circle() {
        let basis = PhasorHv::from_phases(&[0.5, -1.0, 3.0]);
        for state in [f64::NAN, f64::INFINITY] {
            for z in basis.encode(state).samples() {
                assert!(z.re.is_nan() || z.im.is_nan(), "state {state}: {z}");
            }
        }
    }

    #[test]
    fn test_encoding_similarity_decays_with_distance() {
        // Phases ~ N(0, 1): E[cos(s * phi)] = exp(-s^2 / 2).
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let basis = PhasorHv::random(4000, &PhaseDistribution::normal(1.0), &mut rng).unwrap();
        let origin = basis.encode(0.0);

        let sims: Vec<f64> = [0.0, 0.5, 1.0, 1.5, 2.0]
            .iter()
            .map(|&s| origin.similarity(&basis.encode(s)).unwrap())
            .collect();

        assert!((sims[0] - 1.0).abs() < EPS);
        for pair in sims.windows(2) {
            assert!(pair[1] < pair[0], "similarity not decreasing: {sims:?}");
        }
        assert!((sims[2] - (-0.5_f64).exp()).abs() < 0.05);
    }

    #[test]
    fn test_inverse_differs_from_conjugate() {
        let v = PhasorHv::from_phases(&[0.3, 1.2]);
        let negated = v.inverse();
        let conjugated = PhasorHv::identity(2).unbind(&v).unwrap();

        assert!((v.similarity(&negated).unwrap() + 1.0).abs() < EPS);
        assert!((negated.phases()[0] - (0.3 - PI)).abs() < EPS);
        assert!((conjugated.phases()[0] + 0.3).abs() < EPS);
        assert_ne!(negated, conjugated);
    }

    #[test]
    fn test_inverse_twice_is_identity() {
        let (a, _) = random_pair(32, 6);
        assert_eq!(a.inverse().inverse(), a);
    }

    #[test]
    fn test_scaled_then_normalize_restores() {
        let (a, _) = random_pair(50, 12);
        let mut scaled = a.scaled(0.2);
        assert!((scaled.samples()[0].norm() - 0.2).abs() < EPS);

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(scaled.normalize(&mut rng), 0);
        for (x, y) in scaled.samples().iter().zip(a.samples()) {
            assert!((*x - *y).norm() < EPS);
        }
    }

    #[test]
    fn test_normalize_perturbs_zero_samples() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut v = PhasorHv::from_samples(vec![
            Complex64::new(0.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(0.0, 0.0),
        ]);
        assert_eq!(v.normalize(&mut rng), 2);
        assert_unit(&v);
        assert!((v.samples()[1] - Complex64::new(1.0, 0.0)).norm() < EPS);
    }
}
