//! Calculator registry with ancestor-chain dispatch.
//!
//! Maps a [`GeneratorKind`] to the percentile calculator responsible for
//! it. Resolution walks the kind's ancestor chain, so a calculator
//! registered for a general kind serves every specialization that has no
//! calculator of its own. An unregistered chain resolves to `None`;
//! fallback policy for that case belongs to the caller, not the registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::estimator::DiscEstimator;
use crate::generator::{DepositGenerator, DepositVariant, GeneratorKind};

/// A registered percentile calculator.
///
/// Receives the generator instance, its variant, the observed block count,
/// and the optional sampled-area radius in blocks. Calculators that
/// predate sampled-area normalization simply ignore the radius.
pub type Calculator =
    Arc<dyn Fn(&DepositGenerator, &DepositVariant, u64, Option<u32>) -> Result<f64> + Send + Sync>;

/// Registry mapping generator kinds to percentile calculators.
///
/// Registrations typically happen once at start-up and resolution is
/// read-heavy afterwards; the map sits behind a reader-writer lock, so a
/// shared registry is safe to use from any number of threads, including
/// late registrations.
///
/// # Examples
///
/// ```
/// use prospector::prelude::*;
///
/// let registry = CalculatorRegistry::with_default();
///
/// // A specialization with no calculator of its own falls back to the
/// // disc calculator.
/// let generator = DepositGenerator::new(
///     GeneratorKind::FollowSurfaceDisc,
///     NaturalFloat::new(4.0, 0.0, 0.4, DistributionShape::Triangular),
///     NaturalFloat::new(1.5, 0.0, 0.2, DistributionShape::Triangular),
/// );
/// let variant = DepositVariant::new("galena", 6.0);
/// assert!(registry.resolve(&generator, &variant, 400, None).unwrap().is_some());
/// ```
pub struct CalculatorRegistry {
    calculators: RwLock<HashMap<GeneratorKind, Calculator>>,
}

impl CalculatorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculators: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry with the disc estimator registered for
    /// [`GeneratorKind::Disc`].
    #[must_use]
    pub fn with_default() -> Self {
        let registry = Self::new();
        let estimator = DiscEstimator::new();
        registry.register(GeneratorKind::Disc, move |generator, variant, observed, radius| {
            estimator.percentile(generator, variant, observed, radius)
        });
        registry
    }

    /// Registers `calculator` for `kind`, replacing any prior entry.
    pub fn register<F>(&self, kind: GeneratorKind, calculator: F)
    where
        F: Fn(&DepositGenerator, &DepositVariant, u64, Option<u32>) -> Result<f64>
            + Send
            + Sync
            + 'static,
    {
        self.calculators.write().insert(kind, Arc::new(calculator));
    }

    /// Returns `true` if a calculator is registered for exactly `kind`
    /// (ancestors are not consulted).
    #[must_use]
    pub fn contains(&self, kind: GeneratorKind) -> bool {
        self.calculators.read().contains_key(&kind)
    }

    /// Resolves and invokes the calculator for `generator`.
    ///
    /// Walks the generator's kind chain from most specific upward and
    /// invokes the first registered calculator. Returns `Ok(None)` when no
    /// kind along the chain is registered; the caller owns the fallback
    /// policy for that case (e.g. a noise-map-derived factor).
    ///
    /// # Errors
    ///
    /// Propagates the calculator's error (a parameter contract violation).
    pub fn resolve(
        &self,
        generator: &DepositGenerator,
        variant: &DepositVariant,
        observed: u64,
        sampled_radius: Option<u32>,
    ) -> Result<Option<f64>> {
        // Clone the matched calculator out of the lock before invoking it,
        // so calculators may themselves consult the registry.
        let matched = {
            let calculators = self.calculators.read();
            generator
                .kind
                .self_and_ancestors()
                .find_map(|kind| calculators.get(&kind).cloned())
        };

        match matched {
            Some(calculator) => calculator(generator, variant, observed, sampled_radius).map(Some),
            None => {
                trace_debug!(
                    "no calculator registered for {} or any ancestor kind",
                    generator.kind
                );
                Ok(None)
            }
        }
    }
}

impl Default for CalculatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
