//! Superposition (elementwise sum, renormalized).
//!
//! Superposition combines multiple vectors into one that is similar to all
//! inputs. The sum is representation-agnostic; the renormalization rule comes
//! from [`Hypervector::combine`].

use rand::Rng;

use crate::error::{check_dimension, check_length, Result, VsaError};
use crate::hypervector::{Hypervector, Superposition};
use crate::phasor::PhasorHv;

/// Superimpose vectors and return the normalized result.
///
/// Degenerate (exactly zero) sums are resolved with `rng`.
///
/// # Errors
///
/// Returns error if `vectors` is empty or dimensions differ.
///
/// # Examples
///
/// ```
/// use phasor_vsa::{PhasorHv, vsa::{similarity, superimpose}};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
/// let a = PhasorHv::from_phases(&[0.0, 0.0, 0.0]);
/// let b = PhasorHv::from_phases(&[0.4, 0.4, 0.4]);
///
/// let s = superimpose(&[a.clone(), b], &mut rng).unwrap();
/// assert!((similarity(&s, &a).unwrap() - 0.2_f64.cos()).abs() < 1e-12);
/// ```
pub fn superimpose<H, R>(vectors: &[H], rng: &mut R) -> Result<H>
where
    H: Hypervector,
    R: Rng + ?Sized,
{
    superimpose_with_stats(vectors, rng).map(Superposition::into_vector)
}

/// Superimpose vectors, also reporting how many samples were degenerate.
///
/// # Errors
///
/// Returns error if `vectors` is empty or dimensions differ.
pub fn superimpose_with_stats<H, R>(vectors: &[H], rng: &mut R) -> Result<Superposition<H>>
where
    H: Hypervector,
    R: Rng + ?Sized,
{
    let first = vectors
        .first()
        .ok_or_else(|| VsaError::EmptyInput("cannot superimpose empty vector list".to_string()))?;

    let dim = first.dimension();
    let mut sums = vec![H::Accumulator::default(); dim];
    for v in vectors {
        check_dimension(dim, v.dimension())?;
        v.accumulate(&mut sums);
    }

    let result = H::combine(sums, rng);
    if result.degenerate_samples > 0 {
        tracing::trace!(
            degenerate = result.degenerate_samples,
            dimension = dim,
            "perturbed zero-sum samples during superposition"
        );
    }
    Ok(result)
}

/// Superimpose phasor vectors after scaling each by its weight.
///
/// Entries with larger weights pull the resulting phases toward themselves;
/// a zero weight removes an entry.
///
/// # Errors
///
/// Returns error if `entries` is empty, the weight count differs from the
/// entry count, or dimensions differ.
pub fn superimpose_weighted<R: Rng + ?Sized>(
    entries: &[PhasorHv],
    weights: &[f64],
    rng: &mut R,
) -> Result<Superposition<PhasorHv>> {
    check_length(entries.len(), weights.len())?;
    let weighted: Vec<PhasorHv> = entries
        .iter()
        .zip(weights)
        .map(|(entry, &weight)| entry.scaled(weight))
        .collect();
    superimpose_with_stats(&weighted, rng)
}
