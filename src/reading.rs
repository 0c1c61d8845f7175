//! Readings, density tiers, and the trace-uplift policy.
//!
//! Pure classification over visibility factors. Building and delivering
//! user-facing text stays with the caller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Factors at or below this threshold are not reported at all.
pub const MENTION_THRESHOLD: f64 = 0.002;

/// Visibility factor corresponding to the "poor" tier.
///
/// Used both as the point-mass branch's below-exact result and as the
/// floor the poor-uplift raises a factor to.
pub const POOR_FACTOR: f64 = 0.15;

/// A single ore reading produced for a sampled region.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OreReading {
    /// Observed matching blocks per thousand sampled blocks.
    pub parts_per_thousand: f64,
    /// Visibility factor in `[0, 1]`.
    pub total_factor: f64,
}

impl OreReading {
    /// Builds a reading from `observed` matching blocks counted over
    /// `sampled_blocks` candidate blocks. `sampled_blocks` must be
    /// non-zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(observed: u64, sampled_blocks: u64, total_factor: f64) -> Self {
        Self {
            parts_per_thousand: observed as f64 / sampled_blocks as f64 * 1000.0,
            total_factor,
        }
    }

    /// Returns `true` if the reading is prominent enough to report.
    #[must_use]
    pub fn is_mentionable(&self) -> bool {
        self.total_factor > MENTION_THRESHOLD
    }
}

/// How visibility factors map onto density tiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TierScaling {
    /// The stock mapping, `factor × 7.5`: the top tiers compress into the
    /// upper third of the range.
    Vanilla,
    /// Linear mapping, `factor × 5.0`: one tier per fifth of the range.
    #[default]
    Linear,
}

impl TierScaling {
    fn tier_index(self, factor: f64) -> usize {
        let scale = match self {
            Self::Vanilla => 7.5,
            Self::Linear => 5.0,
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (factor * scale) as usize;
        index.min(5)
    }
}

/// Reported density tier of a reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DensityTier {
    /// Barely more than a trace.
    VeryPoor,
    /// A poor deposit; the tier [`POOR_FACTOR`] lands in.
    Poor,
    /// A workable deposit.
    Decent,
    /// A rich deposit.
    High,
    /// A very rich deposit.
    VeryHigh,
    /// The top of the scale.
    UltraHigh,
}

impl DensityTier {
    /// Classifies a visibility factor, or `None` when the factor is at or
    /// below [`MENTION_THRESHOLD`] and should not be reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use prospector::{DensityTier, TierScaling};
    ///
    /// let tier = DensityTier::from_factor(0.15, TierScaling::Vanilla);
    /// assert_eq!(tier, Some(DensityTier::Poor));
    /// assert_eq!(DensityTier::from_factor(0.001, TierScaling::Vanilla), None);
    /// ```
    #[must_use]
    pub fn from_factor(factor: f64, scaling: TierScaling) -> Option<Self> {
        if factor <= MENTION_THRESHOLD {
            return None;
        }
        Some(match scaling.tier_index(factor) {
            0 => Self::VeryPoor,
            1 => Self::Poor,
            2 => Self::Decent,
            3 => Self::High,
            4 => Self::VeryHigh,
            _ => Self::UltraHigh,
        })
    }
}

/// Why an uplift adjusted a factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UpliftReason {
    /// Raised to the poor-tier floor.
    Poor,
    /// Raised to just above the mention threshold.
    Trace,
}

/// Outcome of applying an [`UpliftPolicy`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uplift {
    /// The (possibly raised) visibility factor.
    pub factor: f64,
    /// The adjustment applied, if any.
    pub reason: Option<UpliftReason>,
}

/// Policy for raising barely-visible readings so real finds are not
/// silently dropped from a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UpliftPolicy {
    /// Master toggle; when `false`, factors pass through unchanged.
    pub enabled: bool,
    /// Raise every factor below the poor floor to the poor floor.
    pub all_to_poor: bool,
    /// Raise factors below the poor floor to it when the factor came from
    /// the caller's fallback rather than a registered calculator.
    pub no_generator_to_poor: bool,
}

impl Default for UpliftPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            all_to_poor: false,
            no_generator_to_poor: true,
        }
    }
}

impl UpliftPolicy {
    /// Applies the policy to `factor`.
    ///
    /// Poor-uplift takes precedence over trace-uplift. `had_calculator`
    /// reports whether the factor came from a registered calculator or
    /// from the caller's fallback computation.
    #[must_use]
    pub fn apply(&self, factor: f64, had_calculator: bool) -> Uplift {
        if !self.enabled {
            return Uplift {
                factor,
                reason: None,
            };
        }

        if factor < POOR_FACTOR
            && (self.all_to_poor || (!had_calculator && self.no_generator_to_poor))
        {
            return Uplift {
                factor: POOR_FACTOR,
                reason: Some(UpliftReason::Poor),
            };
        }

        if factor <= MENTION_THRESHOLD {
            return Uplift {
                factor: MENTION_THRESHOLD + 1e-6,
                reason: Some(UpliftReason::Trace),
            };
        }

        Uplift {
            factor,
            reason: None,
        }
    }
}
