//! Standard-normal CDF utilities.
//!
//! The estimator consumes the CDF through the [`NormalCdf`] trait so a
//! higher-precision implementation can replace the fixed-precision default
//! without touching the percentile formula.

/// A standard-normal cumulative distribution function.
pub trait NormalCdf: Send + Sync {
    /// Evaluates `Φ(z) = P(Z ≤ z)` for `Z ~ N(0, 1)`.
    fn cdf(&self, z: f64) -> f64;
}

// Abramowitz & Stegun 7.1.26 coefficients.
const A1: f64 = 0.254_829_592;
const A2: f64 = -0.284_496_736;
const A3: f64 = 1.421_413_741;
const A4: f64 = -1.453_152_027;
const A5: f64 = 1.061_405_429;
const P: f64 = 0.327_591_1;

/// Fixed-precision CDF built on the Abramowitz-Stegun error function.
///
/// # Algorithm
///
/// `Φ(z) = (1 + erf(z / √2)) / 2` with erf evaluated by Abramowitz &
/// Stegun formula 7.1.26 (Horner form), extended to negative arguments via
/// odd symmetry.
///
/// Reference: Abramowitz & Stegun (1964), *Handbook of Mathematical
/// Functions*, formula 7.1.26, p. 299.
///
/// # Accuracy
///
/// Maximum absolute error of the erf term ≤ 1.5 × 10⁻⁷.
///
/// # Examples
///
/// ```
/// use prospector::{AbramowitzStegun, NormalCdf};
///
/// let cdf = AbramowitzStegun;
/// assert!((cdf.cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!((cdf.cdf(1.96) - 0.975).abs() < 1e-4);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AbramowitzStegun;

impl AbramowitzStegun {
    /// Error function approximation per formula 7.1.26.
    #[must_use]
    pub fn erf(x: f64) -> f64 {
        let t = 1.0 / (1.0 + P * x.abs());
        let poly = t * (A1 + t * (A2 + t * (A3 + t * (A4 + t * A5))));
        let magnitude = 1.0 - poly * (-x * x).exp();
        if x < 0.0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl NormalCdf for AbramowitzStegun {
    fn cdf(&self, z: f64) -> f64 {
        0.5 * (1.0 + Self::erf(z / core::f64::consts::SQRT_2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erf_is_odd() {
        for x in [0.1, 0.5, 1.0, 2.0, 4.0] {
            let pos = AbramowitzStegun::erf(x);
            let neg = AbramowitzStegun::erf(-x);
            assert!((pos + neg).abs() < f64::EPSILON, "erf({x}) not odd");
        }
    }

    #[test]
    fn erf_known_values() {
        // erf(1) = 0.8427007929... exactly; the approximation is within
        // its documented error bound.
        assert!((AbramowitzStegun::erf(1.0) - 0.842_700_792_9).abs() < 1.5e-7);
        assert!(AbramowitzStegun::erf(0.0).abs() < 1e-8);
        assert!((AbramowitzStegun::erf(5.0) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn cdf_known_values() {
        let cdf = AbramowitzStegun;
        assert!((cdf.cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((cdf.cdf(1.0) - 0.841_344_746_1).abs() < 1.5e-7);
        assert!((cdf.cdf(-1.0) - 0.158_655_253_9).abs() < 1.5e-7);
        assert!((cdf.cdf(1.96) - 0.975_002_105).abs() < 1.5e-7);
    }

    #[test]
    fn cdf_saturates_in_the_tails() {
        let cdf = AbramowitzStegun;
        assert!(cdf.cdf(10.0) <= 1.0);
        assert!(cdf.cdf(10.0) > 0.999_999);
        assert!(cdf.cdf(-10.0) >= 0.0);
        assert!(cdf.cdf(-10.0) < 1e-6);
    }

    #[test]
    fn cdf_complement_symmetry() {
        let cdf = AbramowitzStegun;
        for z in [0.25, 0.8, 1.5, 3.0] {
            let sum = cdf.cdf(z) + cdf.cdf(-z);
            assert!((sum - 1.0).abs() < 1e-12, "Φ({z}) + Φ(-{z}) = {sum}");
        }
    }
}
