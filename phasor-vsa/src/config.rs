//! Configuration types for codebook construction and resonator search.
//!
//! - [`PhaseDistribution`]: how random basis phases are drawn
//! - [`CodebookConfig`]: quantization grid and basis settings
//! - [`ResonatorConfig`]: confidence threshold and iteration cap

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VsaError};

/// Largest quantization grid a [`CodebookConfig`] accepts.
pub const MAX_GRID_LEVELS: usize = 1 << 20;

/// Distribution of the random phases of a basis hypervector.
///
/// A wider spread makes encoded values diverge faster per unit of encoded
/// value: finer discrimination between nearby levels, more aliasing across
/// the encoding range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhaseDistribution {
    /// Phases uniform over `[-pi, pi)`.
    Uniform,
    /// Phases drawn from `N(mean, std_dev^2)`, wrapped onto the circle.
    Normal {
        /// Mean phase.
        mean: f64,
        /// Standard deviation of the phase.
        std_dev: f64,
    },
}

impl Default for PhaseDistribution {
    fn default() -> Self {
        Self::Normal {
            mean: 0.0,
            std_dev: 100.0 * PI,
        }
    }
}

impl PhaseDistribution {
    /// Zero-mean normal distribution with the given spread.
    #[must_use]
    pub const fn normal(std_dev: f64) -> Self {
        Self::Normal { mean: 0.0, std_dev }
    }

    /// Validate the distribution parameters.
    ///
    /// # Errors
    ///
    /// Returns error if the normal parameters are not finite or the
    /// standard deviation is negative.
    pub fn validate(&self) -> Result<()> {
        if let Self::Normal { mean, std_dev } = *self {
            if !mean.is_finite() {
                return Err(VsaError::InvalidConfig("mean must be finite".to_string()));
            }
            if !std_dev.is_finite() || std_dev < 0.0 {
                return Err(VsaError::InvalidConfig(
                    "std_dev must be finite and >= 0".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Configuration for building a codebook.
///
/// # Example
///
/// ```
/// use phasor_vsa::{CodebookConfig, PhaseDistribution};
///
/// let config = CodebookConfig::default()
///     .with_dimension(2048)
///     .with_max_range(5.0)
///     .with_resolution(1.0)
///     .with_distribution(PhaseDistribution::Uniform);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.num_levels(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodebookConfig {
    /// Number of factors (one basis vector and one codebook column each).
    pub num_factors: usize,

    /// Hypervector dimension.
    pub dimension: usize,

    /// Grid spans `[-max_range, max_range]`.
    pub max_range: f64,

    /// Spacing between adjacent grid levels.
    pub resolution: f64,

    /// Distribution of the basis phases.
    pub distribution: PhaseDistribution,
}

impl Default for CodebookConfig {
    fn default() -> Self {
        Self {
            num_factors: 3,
            dimension: 10_000,
            max_range: 10.0,
            resolution: 0.5,
            distribution: PhaseDistribution::default(),
        }
    }
}

impl CodebookConfig {
    /// Set the number of factors.
    #[must_use]
    pub const fn with_num_factors(mut self, num_factors: usize) -> Self {
        self.num_factors = num_factors;
        self
    }

    /// Set the hypervector dimension.
    #[must_use]
    pub const fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the grid half-width.
    #[must_use]
    pub const fn with_max_range(mut self, max_range: f64) -> Self {
        self.max_range = max_range;
        self
    }

    /// Set the grid spacing.
    #[must_use]
    pub const fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the basis phase distribution.
    #[must_use]
    pub const fn with_distribution(mut self, distribution: PhaseDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Number of grid levels this configuration produces.
    ///
    /// Returns 0 for non-positive or non-finite range/resolution and
    /// saturates at `usize::MAX` for spans too wide to count.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn num_levels(&self) -> usize {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.max_range) || !valid(self.resolution) {
            return 0;
        }
        let span = 2.0 * self.max_range / self.resolution;
        let levels = (span + span.max(1.0) * 1e-9).floor() + 1.0;
        if levels >= usize::MAX as f64 {
            usize::MAX
        } else {
            levels as usize
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.num_factors == 0 {
            return Err(VsaError::InvalidConfig(
                "num_factors must be > 0".to_string(),
            ));
        }

        if self.dimension == 0 {
            return Err(VsaError::InvalidConfig("dimension must be > 0".to_string()));
        }

        if !self.max_range.is_finite() || self.max_range <= 0.0 {
            return Err(VsaError::InvalidConfig(
                "max_range must be finite and > 0".to_string(),
            ));
        }

        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(VsaError::InvalidConfig(
                "resolution must be finite and > 0".to_string(),
            ));
        }

        let levels = self.num_levels();
        if levels < 2 {
            return Err(VsaError::InvalidConfig(format!(
                "grid with resolution {} over +/-{} has fewer than 2 levels",
                self.resolution, self.max_range
            )));
        }
        if levels > MAX_GRID_LEVELS {
            return Err(VsaError::InvalidConfig(format!(
                "grid with resolution {} over +/-{} exceeds {MAX_GRID_LEVELS} levels",
                self.resolution, self.max_range
            )));
        }

        self.distribution.validate()
    }
}

/// Configuration for the resonator search.
///
/// # Example
///
/// ```
/// use phasor_vsa::ResonatorConfig;
///
/// let config = ResonatorConfig::default()
///     .with_confidence_threshold(0.6)
///     .with_max_iterations(200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonatorConfig {
    /// Every factor's confidence must exceed this, in `(0, 1)`.
    pub confidence_threshold: f64,

    /// Iteration cap; the search reports exhaustion when it is reached.
    pub max_iterations: usize,
}

impl Default for ResonatorConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
            max_iterations: 1000,
        }
    }
}

impl ResonatorConfig {
    /// Set the confidence threshold.
    #[must_use]
    pub const fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Set the iteration cap.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        // NaN fails both comparisons, so test for the valid range.
        if !(self.confidence_threshold > 0.0 && self.confidence_threshold < 1.0) {
            return Err(VsaError::InvalidConfig(format!(
                "confidence_threshold must be in (0, 1), got {}",
                self.confidence_threshold
            )));
        }

        if self.max_iterations == 0 {
            return Err(VsaError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_codebook_config() {
        let config = CodebookConfig::default();
        assert_eq!(config.num_factors, 3);
        assert_eq!(config.dimension, 10_000);
        assert_eq!(config.num_levels(), 41);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_num_levels_keeps_endpoint() {
        // 0.1 steps accumulate float error; the +max level must survive.
        let config = CodebookConfig::default()
            .with_max_range(1.0)
            .with_resolution(0.1);
        assert_eq!(config.num_levels(), 21);

        let config = CodebookConfig::default()
            .with_max_range(1.0)
            .with_resolution(0.3);
        assert_eq!(config.num_levels(), 7);
    }

    #[test]
    fn test_codebook_config_rejects_degenerate_grid() {
        let base = CodebookConfig::default();
        assert!(base.clone().with_resolution(0.0).validate().is_err());
        assert!(base.clone().with_resolution(-0.5).validate().is_err());
        assert!(base.clone().with_max_range(0.0).validate().is_err());
        assert!(base.clone().with_max_range(f64::NAN).validate().is_err());
        assert!(base.clone().with_num_factors(0).validate().is_err());
        assert!(base.clone().with_dimension(0).validate().is_err());

        // Step wider than the whole range leaves a single level.
        let single = base.with_max_range(1.0).with_resolution(3.0);
        assert_eq!(single.num_levels(), 1);
        assert!(single.validate().is_err());
    }

    #[test]
    fn test_codebook_config_rejects_oversized_grid() {
        let huge = CodebookConfig::default()
            .with_max_range(1e300)
            .with_resolution(1e-300);
        assert_eq!(huge.num_levels(), usize::MAX);
        match huge.validate() {
            Err(VsaError::InvalidConfig(msg)) => assert!(msg.contains("exceeds"), "{msg}"),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }

        // Countable but far too many levels to allocate.
        let wide = CodebookConfig::default()
            .with_max_range(1e12)
            .with_resolution(1.0);
        assert!(wide.num_levels() > MAX_GRID_LEVELS);
        assert!(matches!(wide.validate(), Err(VsaError::InvalidConfig(_))));

        // The cap itself is accepted.
        let at_cap = CodebookConfig::default()
            .with_max_range(0.5 * (MAX_GRID_LEVELS - 1) as f64)
            .with_resolution(1.0);
        assert_eq!(at_cap.num_levels(), MAX_GRID_LEVELS);
        assert!(at_cap.validate().is_ok());
    }

    #[test]
    fn test_distribution_validation() {
        assert!(PhaseDistribution::Uniform.validate().is_ok());
        assert!(PhaseDistribution::normal(1.0).validate().is_ok());
        assert!(PhaseDistribution::normal(0.0).validate().is_ok());
        assert!(PhaseDistribution::normal(-1.0).validate().is_err());
        assert!(PhaseDistribution::normal(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_resonator_config_threshold_bounds() {
        let config = ResonatorConfig::default();
        assert!((config.confidence_threshold - 0.5).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());

        for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let config = ResonatorConfig::default().with_confidence_threshold(bad);
            assert!(config.validate().is_err(), "threshold {bad} accepted");
        }

        assert!(ResonatorConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = CodebookConfig::default().with_distribution(PhaseDistribution::Uniform);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"kind\":\"uniform\""));
        let parsed: CodebookConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
