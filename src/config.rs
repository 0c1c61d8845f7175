//! Caller-supplied configuration.
//!
//! The engine reads no files. The surrounding system loads whatever
//! configuration format it owns and hands the knobs in as plain values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::generator::DepositVariant;
use crate::reading::{TierScaling, UpliftPolicy};

/// Tuning knobs for prospecting readings.
///
/// # Examples
///
/// ```
/// use prospector::{DepositVariant, ProspectingConfig};
///
/// let config = ProspectingConfig::default();
/// let variant = DepositVariant::new("nativecopper", 10.0);
/// assert!((config.scaled_tries(&variant) - 7.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProspectingConfig {
    /// Scale applied to a variant's per-chunk trial count before
    /// estimation. Below 1.0 this biases readings upward, compensating
    /// for deposits the sampling pass cannot see.
    pub tries_per_chunk_scale_factor: f64,
    /// Multiplier on the base detection radius.
    pub ore_detection_multiplier: f64,
    /// Divider shrinking the effective sampled volume used for
    /// parts-per-thousand readings. Applied squared.
    pub ore_calculation_divider: f64,
    /// Factor-to-tier mapping.
    pub tier_scaling: TierScaling,
    /// Trace/poor uplift policy.
    pub uplift: UpliftPolicy,
}

impl Default for ProspectingConfig {
    fn default() -> Self {
        Self {
            tries_per_chunk_scale_factor: 0.70,
            ore_detection_multiplier: 1.0,
            ore_calculation_divider: 1.0,
            tier_scaling: TierScaling::default(),
            uplift: UpliftPolicy::default(),
        }
    }
}

impl ProspectingConfig {
    /// The variant's trial count with the scale factor applied.
    #[must_use]
    pub fn scaled_tries(&self, variant: &DepositVariant) -> f64 {
        variant.tries_per_chunk * self.tries_per_chunk_scale_factor
    }

    /// The detection radius after the multiplier, in blocks.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn detection_radius(&self, base_radius: u32) -> u32 {
        (f64::from(base_radius) * self.ore_detection_multiplier) as u32
    }

    /// Shrinks a sampled block count by the calculation divider, squared.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn scaled_sample_blocks(&self, sampled_blocks: u64) -> u64 {
        (sampled_blocks as f64 / (self.ore_calculation_divider * self.ore_calculation_divider))
            as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_reference_configuration() {
        let config = ProspectingConfig::default();
        assert!((config.tries_per_chunk_scale_factor - 0.70).abs() < f64::EPSILON);
        assert!((config.ore_detection_multiplier - 1.0).abs() < f64::EPSILON);
        assert!((config.ore_calculation_divider - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.tier_scaling, TierScaling::Linear);
        assert!(!config.uplift.enabled);
        assert!(config.uplift.no_generator_to_poor);
    }

    #[test]
    fn detection_radius_scales_and_truncates() {
        let config = ProspectingConfig {
            ore_detection_multiplier: 1.5,
            ..ProspectingConfig::default()
        };
        assert_eq!(config.detection_radius(16), 24);
        assert_eq!(config.detection_radius(5), 7);
    }

    #[test]
    fn sample_blocks_shrink_by_squared_divider() {
        let config = ProspectingConfig {
            ore_calculation_divider: 2.0,
            ..ProspectingConfig::default()
        };
        assert_eq!(config.scaled_sample_blocks(1024), 256);
    }
}
