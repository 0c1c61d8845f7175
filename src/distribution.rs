//! Distribution-parameter model for generator shape axes.
//!
//! A [`NaturalFloat`] describes one randomized scalar quantity of a deposit
//! generator (a radius or a thickness): a center, an additive offset, a
//! shape-dependent spread magnitude, and a named noise shape.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The noise shape of a [`NaturalFloat`].
///
/// Centered shapes add noise in `[-spread, spread]` around the mean; the
/// inverse-exponential family is one-sided, adding noise in `[0, spread]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistributionShape {
    /// All mass at the mean.
    Point,
    /// Uniform noise.
    Uniform,
    /// Sum of two uniforms, triangular noise.
    Triangular,
    /// Irwin-Hall average of 3 uniforms.
    Gaussian,
    /// Irwin-Hall average of 6 uniforms.
    NarrowGaussian,
    /// Irwin-Hall average of 12 uniforms.
    VeryNarrowGaussian,
    /// Product of 2 unit uniforms.
    InvExp,
    /// Product of 3 unit uniforms.
    StrongInvExp,
    /// Product of 4 unit uniforms.
    StrongerInvExp,
}

/// One randomized scalar of a deposit generator.
///
/// # Examples
///
/// ```
/// use prospector::{DistributionShape, NaturalFloat};
///
/// let radius = NaturalFloat::new(5.0, 0.0, 0.5, DistributionShape::Gaussian);
/// assert!((radius.mean() - 5.0).abs() < f64::EPSILON);
/// assert!(radius.approximate_std() > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NaturalFloat {
    /// Center of the distribution before the offset is applied.
    pub average: f64,
    /// Additive shift; the mean is `average + offset`.
    pub offset: f64,
    /// Shape-dependent spread magnitude (not itself a standard deviation).
    pub spread: f64,
    /// The noise shape.
    pub shape: DistributionShape,
}

impl NaturalFloat {
    /// Creates a new distribution parameter.
    #[must_use]
    pub fn new(average: f64, offset: f64, spread: f64, shape: DistributionShape) -> Self {
        Self {
            average,
            offset,
            spread,
            shape,
        }
    }

    /// Creates a point-mass parameter: all mass at `average`, no noise.
    #[must_use]
    pub fn point(average: f64) -> Self {
        Self::new(average, 0.0, 0.0, DistributionShape::Point)
    }

    /// The mean of the distribution.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.average + self.offset
    }

    /// Approximate standard deviation as a fixed linear function of `spread`.
    ///
    /// The coefficients approximate the generation-time noise constructions
    /// (uniform noise, Irwin-Hall averages, unit-uniform products) rather
    /// than being exact statistics of the named shapes. They are fixed
    /// constants; the percentile estimate depends on reproducing them
    /// as-is.
    #[must_use]
    pub fn approximate_std(&self) -> f64 {
        match self.shape {
            DistributionShape::Point => 0.0,
            DistributionShape::Uniform | DistributionShape::Gaussian => {
                self.spread / 3.0_f64.sqrt()
            }
            DistributionShape::Triangular | DistributionShape::NarrowGaussian => {
                self.spread / 6.0_f64.sqrt()
            }
            DistributionShape::VeryNarrowGaussian => self.spread / 12.0_f64.sqrt(),
            DistributionShape::InvExp => self.spread * 0.25,
            DistributionShape::StrongInvExp => self.spread * 0.15,
            DistributionShape::StrongerInvExp => self.spread * 0.10,
        }
    }

    /// Draws one value the way the world generator would.
    ///
    /// Centered shapes return `mean() + noise * spread` with noise in
    /// `[-1, 1]`; the inverse-exponential family adds a one-sided noise
    /// term in `[0, 1]`.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> f64 {
        self.mean() + self.noise(rng) * self.spread
    }

    fn noise(&self, rng: &mut fastrand::Rng) -> f64 {
        match self.shape {
            DistributionShape::Point => 0.0,
            DistributionShape::Uniform => 2.0 * rng.f64() - 1.0,
            DistributionShape::Triangular => rng.f64() + rng.f64() - 1.0,
            DistributionShape::Gaussian => irwin_hall(rng, 3),
            DistributionShape::NarrowGaussian => irwin_hall(rng, 6),
            DistributionShape::VeryNarrowGaussian => irwin_hall(rng, 12),
            DistributionShape::InvExp => rng.f64() * rng.f64(),
            DistributionShape::StrongInvExp => rng.f64() * rng.f64() * rng.f64(),
            DistributionShape::StrongerInvExp => rng.f64() * rng.f64() * rng.f64() * rng.f64(),
        }
    }
}

/// Average of `n` unit uniforms, rescaled to `[-1, 1]`.
fn irwin_hall(rng: &mut fastrand::Rng, n: u32) -> f64 {
    let sum: f64 = (0..n).map(|_| rng.f64()).sum();
    2.0 * (sum / f64::from(n)) - 1.0
}
