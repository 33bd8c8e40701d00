//! Codebooks of fractional-power encoded values.
//!
//! A codebook holds, for every factor, one hypervector per quantization
//! level: `entry(level, factor) = bases[factor].encode(grid[level])`. The grid
//! runs from `-max_range` to `+max_range` in steps of `resolution`.
//!
//! ```text
//!              factor 0     factor 1     factor 2
//! grid[0]   -> b0^g0        b1^g0        b2^g0
//! grid[1]   -> b0^g1        b1^g1        b2^g1
//!   ...
//! ```

use rand::Rng;

use crate::config::CodebookConfig;
use crate::error::{check_dimension, check_length, Result, VsaError};
use crate::phasor::PhasorHv;
use crate::vsa;

/// Quantization levels from `-max_range` to `+max_range` inclusive.
///
/// # Errors
///
/// Returns error if the range or resolution is not positive, or the grid
/// would hold fewer than two levels.
///
/// # Examples
///
/// ```
/// use phasor_vsa::quantization_grid;
///
/// let grid = quantization_grid(1.0, 0.5).unwrap();
/// assert_eq!(grid, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn quantization_grid(max_range: f64, resolution: f64) -> Result<Vec<f64>> {
    let config = CodebookConfig::default()
        .with_max_range(max_range)
        .with_resolution(resolution);
    config.validate()?;

    Ok((0..config.num_levels())
        .map(|k| -max_range + k as f64 * resolution)
        .collect())
}

/// Per-factor hypervectors for every quantization level.
#[derive(Debug, Clone)]
pub struct Codebook {
    /// Factor-major: `columns[factor][level]`.
    columns: Vec<Vec<PhasorHv>>,
    grid: Vec<f64>,
    bases: Vec<PhasorHv>,
}

/// Build a codebook from a configuration; see [`Codebook::build`].
///
/// # Errors
///
/// Returns error if the configuration is invalid.
pub fn build_codebook<R: Rng + ?Sized>(config: &CodebookConfig, rng: &mut R) -> Result<Codebook> {
    Codebook::build(config, rng)
}

impl Codebook {
    /// Draw one basis per factor and encode every grid level against it.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use phasor_vsa::{Codebook, CodebookConfig};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let config = CodebookConfig::default()
    ///     .with_dimension(256)
    ///     .with_max_range(2.0)
    ///     .with_resolution(1.0);
    /// let codebook = Codebook::build(&config, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
    ///
    /// assert_eq!(codebook.num_factors(), 3);
    /// assert_eq!(codebook.len(), 5);
    /// assert_eq!(codebook.grid(), &[-2.0, -1.0, 0.0, 1.0, 2.0]);
    /// ```
    pub fn build<R: Rng + ?Sized>(config: &CodebookConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let grid = quantization_grid(config.max_range, config.resolution)?;

        let bases = (0..config.num_factors)
            .map(|_| PhasorHv::random(config.dimension, &config.distribution, rng))
            .collect::<Result<Vec<_>>>()?;

        let columns = bases
            .iter()
            .map(|basis| grid.iter().map(|&level| basis.encode(level)).collect())
            .collect();

        tracing::debug!(
            factors = config.num_factors,
            levels = grid.len(),
            dimension = config.dimension,
            "built codebook"
        );

        Ok(Self {
            columns,
            grid,
            bases,
        })
    }

    /// Wrap hand-built columns, one per factor, indexed by level.
    ///
    /// The codebook has no bases, so [`Self::encode`] is unavailable.
    ///
    /// # Errors
    ///
    /// Returns error if there are no factors or levels, the columns have
    /// unequal lengths, the grid length differs from the column length, or
    /// the entries' dimensions differ.
    pub fn from_columns(columns: Vec<Vec<PhasorHv>>, grid: Vec<f64>) -> Result<Self> {
        let first = columns
            .first()
            .ok_or_else(|| VsaError::EmptyInput("codebook has no factors".to_string()))?;
        let levels = first.len();
        let dimension = first
            .first()
            .map(PhasorHv::len)
            .ok_or_else(|| VsaError::EmptyInput("codebook has no levels".to_string()))?;
        if dimension == 0 {
            return Err(VsaError::EmptyVector);
        }

        check_length(levels, grid.len())?;
        for column in &columns {
            check_length(levels, column.len())?;
            for entry in column {
                check_dimension(dimension, entry.len())?;
            }
        }

        Ok(Self {
            columns,
            grid,
            bases: Vec::new(),
        })
    }

    /// Number of factors.
    #[must_use]
    pub fn num_factors(&self) -> usize {
        self.columns.len()
    }

    /// Number of quantization levels (rows).
    #[must_use]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Whether the codebook has no levels. Never true for a constructed codebook.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Dimension shared by every entry.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.columns
            .first()
            .and_then(|column| column.first())
            .map_or(0, PhasorHv::len)
    }

    /// Grid values, one per level.
    #[must_use]
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Basis vector per factor; empty for [`Self::from_columns`] codebooks.
    #[must_use]
    pub fn bases(&self) -> &[PhasorHv] {
        &self.bases
    }

    /// All entries for one factor, ordered by level.
    ///
    /// # Errors
    ///
    /// Returns error if `factor` is out of range.
    pub fn factor(&self, factor: usize) -> Result<&[PhasorHv]> {
        self.columns
            .get(factor)
            .map(Vec::as_slice)
            .ok_or(VsaError::IndexOutOfBounds {
                index: factor,
                size: self.columns.len(),
            })
    }

    /// The entry for `factor` at `level`.
    ///
    /// # Errors
    ///
    /// Returns error if either index is out of range.
    pub fn entry(&self, level: usize, factor: usize) -> Result<&PhasorHv> {
        self.factor(factor)?
            .get(level)
            .ok_or(VsaError::IndexOutOfBounds {
                index: level,
                size: self.grid.len(),
            })
    }

    /// Grid value at `level`.
    ///
    /// # Errors
    ///
    /// Returns error if `level` is out of range.
    pub fn level(&self, level: usize) -> Result<f64> {
        self.grid
            .get(level)
            .copied()
            .ok_or(VsaError::IndexOutOfBounds {
                index: level,
                size: self.grid.len(),
            })
    }

    /// Index of the grid level closest to `value`; ties go to the lower level.
    ///
    /// Values beyond either end of the grid snap to that end.
    ///
    /// # Errors
    ///
    /// Returns [`VsaError::InvalidValue`] if `value` is NaN or infinite.
    pub fn nearest_level(&self, value: f64) -> Result<usize> {
        if !value.is_finite() {
            return Err(VsaError::InvalidValue(value));
        }
        Ok(self
            .grid
            .iter()
            .enumerate()
            .fold((0, f64::INFINITY), |(best, best_dist), (i, &level)| {
                let dist = (level - value).abs();
                if dist < best_dist {
                    (i, dist)
                } else {
                    (best, best_dist)
                }
            })
            .0)
    }

    /// Encode an arbitrary value against a factor's basis.
    ///
    /// # Errors
    ///
    /// Returns error if `value` is not finite, `factor` is out of range, or
    /// the codebook has no bases.
    pub fn encode(&self, factor: usize, value: f64) -> Result<PhasorHv> {
        if !value.is_finite() {
            return Err(VsaError::InvalidValue(value));
        }
        self.bases
            .get(factor)
            .map(|basis| basis.encode(value))
            .ok_or(VsaError::IndexOutOfBounds {
                index: factor,
                size: self.bases.len(),
            })
    }

    /// Bind one entry per factor into a composite vector.
    ///
    /// # Errors
    ///
    /// Returns error if `levels` does not have one index per factor or an
    /// index is out of range.
    pub fn compose(&self, levels: &[usize]) -> Result<PhasorHv> {
        self.check_factor_count(levels.len())?;
        let entries = levels
            .iter()
            .enumerate()
            .map(|(factor, &level)| self.entry(level, factor))
            .collect::<Result<Vec<_>>>()?;
        vsa::bind_many(&entries)
    }

    /// Map a level index per factor back to grid values.
    ///
    /// # Errors
    ///
    /// Returns error if `levels` does not have one index per factor or an
    /// index is out of range.
    pub fn decode(&self, levels: &[usize]) -> Result<Vec<f64>> {
        self.check_factor_count(levels.len())?;
        levels.iter().map(|&level| self.level(level)).collect()
    }

    fn check_factor_count(&self, actual: usize) -> Result<()> {
        if actual != self.num_factors() {
            return Err(VsaError::FactorCountMismatch {
                expected: self.num_factors(),
                actual,
            });
        }
        Ok(())
    }
}
