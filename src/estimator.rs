//! Log-normal percentile estimation for disc-shaped deposit generators.
//!
//! A disc generator produces roughly `thickness × radius² × π` matching
//! blocks per placement attempt, with `tries` attempts per chunk. The
//! estimator treats that volume as log-normal, propagates the shape
//! parameters' means and approximate standard deviations into log-space
//! with the delta method, and reads the observed count's percentile off a
//! standard-normal CDF. Constant work per call, no simulation.

use core::f64::consts::PI;

use crate::distribution::{DistributionShape, NaturalFloat};
use crate::error::{Error, Result};
use crate::generator::{DepositGenerator, DepositVariant};
use crate::normal::{AbramowitzStegun, NormalCdf};
use crate::reading::POOR_FACTOR;

/// Side length in blocks of the reference chunk area.
///
/// Sampled-area normalization compares the sampled footprint against one
/// `CHUNK_SIZE × CHUNK_SIZE` column.
pub const CHUNK_SIZE: u32 = 32;

/// Percentile estimator for disc deposit generators.
///
/// Stateless and cheap to construct; a single instance can serve any
/// number of threads. The standard-normal CDF is pluggable, see
/// [`NormalCdf`].
///
/// # Examples
///
/// ```
/// use prospector::prelude::*;
///
/// let estimator = DiscEstimator::new();
/// let generator = DepositGenerator::new(
///     GeneratorKind::Disc,
///     NaturalFloat::new(5.0, 0.0, 0.5, DistributionShape::Uniform),
///     NaturalFloat::new(2.0, 0.0, 0.3, DistributionShape::Uniform),
/// );
/// let variant = DepositVariant::new("nativecopper", 10.0);
///
/// let p = estimator.percentile(&generator, &variant, 1571, None).unwrap();
/// assert!((0.0..=1.0).contains(&p));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DiscEstimator<C = AbramowitzStegun> {
    cdf: C,
}

impl DiscEstimator {
    /// Creates an estimator backed by the default fixed-precision CDF.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cdf: AbramowitzStegun,
        }
    }
}

impl Default for DiscEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: NormalCdf> DiscEstimator<C> {
    /// Creates an estimator backed by a caller-supplied CDF.
    #[must_use]
    pub fn with_cdf(cdf: C) -> Self {
        Self { cdf }
    }

    /// Estimates the percentile of `observed` against the generator's
    /// output distribution.
    ///
    /// When `sampled_radius` is given, the observation came from a square
    /// of half-width `sampled_radius` blocks instead of one chunk, and the
    /// variant's per-chunk trial count is scaled by the area ratio
    /// `(2 · sampled_radius)² / CHUNK_SIZE²` before estimation; a
    /// half-chunk radius of 16 is the identity.
    ///
    /// The result is clamped to `[0, 1]`. Inputs are never clamped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveMean`] when either axis has a zero or
    /// negative mean, [`Error::NonPositiveTries`] when the effective trial
    /// count is not positive, [`Error::ZeroSampledRadius`] for a zero
    /// sampled radius, and [`Error::DegenerateSpread`] when both axes
    /// carry zero spread without being point-mass shaped.
    #[allow(clippy::cast_precision_loss)]
    pub fn percentile(
        &self,
        generator: &DepositGenerator,
        variant: &DepositVariant,
        observed: u64,
        sampled_radius: Option<u32>,
    ) -> Result<f64> {
        let radius_mean = positive_mean("radius", &generator.radius)?;
        let thickness_mean = positive_mean("thickness", &generator.thickness)?;
        let tries = effective_tries(variant.tries_per_chunk, sampled_radius)?;

        // A point mass on one axis alone is fine; its log-variance term
        // simply vanishes below.
        if generator.radius.shape == DistributionShape::Point
            && generator.thickness.shape == DistributionShape::Point
        {
            return Ok(point_mass_percentile(
                radius_mean,
                thickness_mean,
                tries,
                observed,
            ));
        }

        let radius_std = generator.radius.approximate_std();
        let thickness_std = generator.thickness.approximate_std();

        // Continuity correction for integer counts; ln(0.5) keeps an
        // observation of zero finite.
        let log_empirical = (observed as f64 + 0.5).ln();

        // Delta method: Var[ln X] ≈ (Std[X] / Mean[X])², assuming small
        // relative spread.
        let log_radius_var = (radius_std / radius_mean).powi(2);
        let log_thickness_var = (thickness_std / thickness_mean).powi(2);

        // Volume ∝ thickness × radius² × π × tries, and for a log-normal
        // E[ln X] = ln E[X] − Var[ln X] / 2. Radius enters squared, so its
        // log-variance carries a squared coefficient.
        let log_mean = (thickness_mean.ln() - 0.5 * log_thickness_var)
            + 2.0 * (radius_mean.ln() - 0.5 * log_radius_var)
            + (PI * tries).ln();
        let log_std = (log_thickness_var + 4.0 * log_radius_var).sqrt();
        if log_std == 0.0 {
            return Err(Error::DegenerateSpread);
        }

        let z = (log_empirical - log_mean) / log_std;
        Ok(self.cdf.cdf(z).clamp(0.0, 1.0))
    }
}

fn positive_mean(axis: &'static str, parameter: &NaturalFloat) -> Result<f64> {
    let mean = parameter.mean();
    if mean > 0.0 {
        Ok(mean)
    } else {
        Err(Error::NonPositiveMean { axis, mean })
    }
}

/// Scales the per-chunk trial count by the sampled footprint relative to
/// one chunk.
fn effective_tries(tries_per_chunk: f64, sampled_radius: Option<u32>) -> Result<f64> {
    let tries = match sampled_radius {
        Some(0) => return Err(Error::ZeroSampledRadius),
        Some(radius) => {
            let side = 2.0 * f64::from(radius);
            tries_per_chunk * (side / f64::from(CHUNK_SIZE)).powi(2)
        }
        None => tries_per_chunk,
    };
    if tries > 0.0 {
        Ok(tries)
    } else {
        Err(Error::NonPositiveTries(tries))
    }
}

/// Both axes are deterministic: the deposit volume is an exact constant.
///
/// A below-exact observation still found real ore, so it reports at the
/// poor tier rather than zero; above-exact saturates; exact equality is
/// the median. The comparison uses the real-valued volume, never a
/// rounded one.
#[allow(clippy::cast_precision_loss)]
fn point_mass_percentile(radius_mean: f64, thickness_mean: f64, tries: f64, observed: u64) -> f64 {
    let exact = thickness_mean * radius_mean.powi(2) * PI * tries;
    let observed = observed as f64;
    if observed < exact {
        POOR_FACTOR
    } else if observed > exact {
        1.0
    } else {
        0.5
    }
}
