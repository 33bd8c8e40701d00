//! Bipolar hypervectors with samples in `{-1, +1}`.
//!
//! Binding is the elementwise product, which is its own inverse. Superposition
//! is a per-sample majority vote; an exact tie is broken at random.

use rand::Rng;

use crate::error::{check_dimension, Result, VsaError};
use crate::hypervector::{Hypervector, Superposition};

/// A hypervector of `±1` samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryHv {
    samples: Vec<i8>,
}

impl BinaryHv {
    /// Build from explicit samples.
    ///
    /// # Errors
    ///
    /// Returns error if any sample is not `-1` or `+1`.
    pub fn from_samples(samples: Vec<i8>) -> Result<Self> {
        if let Some(&bad) = samples.iter().find(|&&s| s != 1 && s != -1) {
            return Err(VsaError::InvalidSample(i32::from(bad)));
        }
        Ok(Self { samples })
    }

    /// Draw each sample as `-1` or `+1` with equal probability.
    ///
    /// # Errors
    ///
    /// Returns error if `dimension` is zero.
    pub fn random<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Result<Self> {
        if dimension == 0 {
            return Err(VsaError::EmptyVector);
        }
        Ok(Self {
            samples: (0..dimension).map(|_| random_sign(rng)).collect(),
        })
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

    /// Elementwise product.
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
                .map(|(a, b)| a * b)
                .collect(),
        })
    }

    /// Inverse of [`Self::bind`]; identical to it since every sample squares to one.
    ///
    /// # Errors
    ///
    /// Returns error if dimensions differ.
    pub fn unbind(&self, key: &Self) -> Result<Self> {
        self.bind(key)
    }

    /// Flip every sample.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            samples: self.samples.iter().map(|s| -s).collect(),
        }
    }

    /// Normalized dot product, in `[-1, 1]`.
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
        let dot: i64 = self
            .samples
            .iter()
            .zip(&other.samples)
            .map(|(&a, &b)| i64::from(a * b))
            .sum();
        Ok(dot as f64 / self.len() as f64)
    }
}

impl Hypervector for BinaryHv {
    type Sample = i8;
    type Accumulator = i32;

    fn dimension(&self) -> usize {
        self.samples.len()
    }

    fn samples(&self) -> &[i8] {
        &self.samples
    }

    fn accumulate(&self, sums: &mut [i32]) {
        for (acc, &s) in sums.iter_mut().zip(&self.samples) {
            *acc += i32::from(s);
        }
    }

    fn combine<R: Rng + ?Sized>(sums: Vec<i32>, rng: &mut R) -> Superposition<Self> {
        let mut degenerate_samples = 0;
        let samples = sums
            .into_iter()
            .map(|sum| match sum.signum() {
                1 => 1,
                -1 => -1,
                _ => {
                    degenerate_samples += 1;
                    random_sign(rng)
                }
            })
            .collect();

        Superposition {
            vector: Self { samples },
            degenerate_samples,
        }
    }
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> i8 {
    if rng.random_bool(0.5) {
        1
    } else {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vsa::superimpose_with_stats;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_from_samples_validates() {
        assert!(BinaryHv::from_samples(vec![1, -1, 1]).is_ok());
        assert!(matches!(
            BinaryHv::from_samples(vec![1, 0, -1]),
            Err(VsaError::InvalidSample(0))
        ));
    }

    #[test]
    fn test_random_is_balanced() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let v = BinaryHv::random(10_000, &mut rng).unwrap();
        let positives = v.samples().iter().filter(|&&s| s == 1).count();
        assert!((4_500..5_500).contains(&positives), "positives: {positives}");
    }

    #[test]
    fn test_bind_is_self_inverse() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let a = BinaryHv::random(256, &mut rng).unwrap();
        let b = BinaryHv::random(256, &mut rng).unwrap();

        let bound = a.bind(&b).unwrap();
        assert_eq!(bound.unbind(&b).unwrap(), a);
        assert!(bound.similarity(&a).unwrap().abs() < 0.3);
    }

    #[test]
    fn test_similarity_and_inverse() {
        let a = BinaryHv::from_samples(vec![1, -1, 1, 1]).unwrap();
        let b = BinaryHv::from_samples(vec![1, 1, 1, -1]).unwrap();

        assert!((a.similarity(&a).unwrap() - 1.0).abs() < f64::EPSILON);
        assert!((a.similarity(&a.inverse()).unwrap() + 1.0).abs() < f64::EPSILON);
        assert!(a.similarity(&b).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = BinaryHv::from_samples(vec![1, -1, 1]).unwrap();
        let b = BinaryHv::from_samples(vec![1, -1]).unwrap();
        assert!(a.bind(&b).is_err());
        assert!(a.similarity(&b).is_err());
    }

    #[test]
    fn test_majority_superposition() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let a = BinaryHv::from_samples(vec![1, 1, -1]).unwrap();
        let b = BinaryHv::from_samples(vec![1, -1, -1]).unwrap();
        let c = BinaryHv::from_samples(vec![-1, 1, -1]).unwrap();

        let result = superimpose_with_stats(&[a, b, c], &mut rng).unwrap();
        assert_eq!(result.degenerate_samples, 0);
        assert_eq!(result.vector.samples(), &[1, 1, -1]);
    }

    #[test]
    fn test_tied_superposition_breaks_randomly() {
        let a = BinaryHv::from_samples(vec![1; 2000]).unwrap();
        let b = a.inverse();

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result = superimpose_with_stats(&[a, b], &mut rng).unwrap();
        assert_eq!(result.degenerate_samples, 2000);

        let positives = result.vector.samples().iter().filter(|&&s| s == 1).count();
        assert!((800..1200).contains(&positives), "positives: {positives}");
    }
}
