//! Bind operation (composition via phase addition).
//!
//! Binding creates associations between vectors. Use `unbind` to recover
//! the original: `unbind(bind(a, b), b) == a`.

use crate::error::{Result, VsaError};
use crate::phasor::PhasorHv;

/// Bind two vectors element-wise.
///
/// The result is dissimilar to both inputs. Binding is commutative and
/// associative.
///
/// # Errors
///
/// Returns error if vectors have different dimensions.
///
/// # Examples
///
/// ```
/// use phasor_vsa::{PhasorHv, vsa::{bind, similarity, unbind}};
///
/// let a = PhasorHv::from_phases(&[0.1, 0.2, 0.3, 0.4]);
/// let b = PhasorHv::from_phases(&[1.0, -1.0, 2.0, -2.0]);
///
/// let bound = bind(&a, &b).unwrap();
/// let recovered = unbind(&bound, &b).unwrap();
/// assert!((similarity(&recovered, &a).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub fn bind(a: &PhasorHv, b: &PhasorHv) -> Result<PhasorHv> {
    a.bind(b)
}

/// Unbind a vector - the inverse of bind.
///
/// Multiplies by the conjugate of `key`, which on the unit circle is the
/// exact group inverse.
///
/// # Errors
///
/// Returns error if vectors have different dimensions.
pub fn unbind(bound: &PhasorHv, key: &PhasorHv) -> Result<PhasorHv> {
    bound.unbind(key)
}

/// Bind multiple vectors sequentially.
///
/// Computes `bind(bind(bind(v[0], v[1]), v[2]), ...)`.
///
/// # Errors
///
/// Returns error if `vectors` is empty or dimensions differ.
pub fn bind_many(vectors: &[&PhasorHv]) -> Result<PhasorHv> {
    let (first, rest) = vectors
        .split_first()
        .ok_or_else(|| VsaError::EmptyInput("cannot bind empty vector list".to_string()))?;

    rest.iter().try_fold((*first).clone(), |acc, v| acc.bind(v))
}
