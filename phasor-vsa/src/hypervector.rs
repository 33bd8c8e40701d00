//! Capability interface shared by every hypervector representation.
//!
//! Superposition is the one operation that is generic across representations:
//! sum the samples elementwise, then collapse each sum back into the
//! representation's canonical form. The collapse rule is what differs, so it
//! lives on the trait ([`Hypervector::combine`]) and [`crate::vsa::superimpose`]
//! dispatches through it.

use rand::Rng;

/// A fixed-dimension hypervector with a representation-specific superposition rule.
pub trait Hypervector: Clone {
    /// One element of the vector.
    type Sample: Copy;

    /// Running elementwise sum used while superimposing.
    type Accumulator: Copy + Default;

    /// Number of samples.
    fn dimension(&self) -> usize;

    /// The samples in order.
    fn samples(&self) -> &[Self::Sample];

    /// Add this vector's samples into `sums`.
    ///
    /// `sums.len()` equals [`Self::dimension`]; callers check this.
    fn accumulate(&self, sums: &mut [Self::Accumulator]);

    /// Collapse elementwise sums into canonical form.
    ///
    /// Sums with no defined canonical value (exact zeros) are resolved with
    /// `rng` and counted in [`Superposition::degenerate_samples`].
    fn combine<R: Rng + ?Sized>(sums: Vec<Self::Accumulator>, rng: &mut R) -> Superposition<Self>;
}

/// Result of a superposition, with the number of samples that had to be perturbed.
#[derive(Debug, Clone, PartialEq)]
pub struct Superposition<H> {
    /// The normalized superposition.
    pub vector: H,
    /// Samples whose sum was exactly zero and were resolved at random.
    pub degenerate_samples: usize,
}

impl<H> Superposition<H> {
    /// Discard the statistics.
    #[must_use]
    pub fn into_vector(self) -> H {
        self.vector
    }
}
