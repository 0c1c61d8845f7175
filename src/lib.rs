#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Closed-form percentile estimation for procedural ore-deposit readings.
//!
//! World generators place randomized deposits: a disc-shaped deposit has a
//! random radius and thickness, and a variant-specific number of placement
//! attempts per chunk. Given those shape parameters and an empirically
//! observed count of matching blocks in a sampled region, this crate
//! estimates where the observation falls in the generator's output
//! distribution: a visibility factor in `[0, 1]` that downstream code uses
//! to decide how prominently a reading is reported.
//!
//! The estimate is a log-normal moment-matching approximation: the deposit
//! volume `thickness × radius² × π × tries` is treated as log-normal, the
//! shape parameters' means and approximate standard deviations propagate
//! into log-space via the delta method, and the percentile is read off a
//! standard-normal CDF. No simulation, constant work per call.
//!
//! # Getting Started
//!
//! ```
//! use prospector::prelude::*;
//!
//! let registry = CalculatorRegistry::with_default();
//!
//! let generator = DepositGenerator::new(
//!     GeneratorKind::Disc,
//!     NaturalFloat::new(5.0, 0.0, 0.5, DistributionShape::Gaussian),
//!     NaturalFloat::new(2.0, 0.0, 0.3, DistributionShape::Gaussian),
//! );
//! let variant = DepositVariant::new("nativecopper", 10.0);
//!
//! let factor = registry.resolve(&generator, &variant, 1571, None).unwrap();
//! assert!(factor.is_some());
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`NaturalFloat`] | One randomized scalar of a generator (radius, thickness) with a named noise shape. |
//! | [`DepositGenerator`] / [`DepositVariant`] | A generator instance (kind + shape parameters) and its named configuration. |
//! | [`DiscEstimator`] | The percentile engine for disc-shaped deposits. |
//! | [`CalculatorRegistry`] | Maps generator kinds to calculators, walking the kind's ancestor chain on lookup. |
//! | [`NormalCdf`] | Pluggable standard-normal CDF; [`AbramowitzStegun`] is the fixed-precision default. |
//! | [`DensityTier`] / [`UpliftPolicy`] | Classification of factors into reporting tiers and the trace-uplift policy. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public value types | off |
//! | `tracing` | Debug events via [`tracing`](https://docs.rs/tracing) when resolution finds no calculator | off |

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod config;
mod distribution;
mod error;
mod estimator;
mod generator;
mod normal;
mod reading;
mod registry;

pub use config::ProspectingConfig;
pub use distribution::{DistributionShape, NaturalFloat};
pub use error::{Error, Result};
pub use estimator::{DiscEstimator, CHUNK_SIZE};
pub use generator::{DepositGenerator, DepositVariant, GeneratorKind};
pub use normal::{AbramowitzStegun, NormalCdf};
pub use reading::{
    DensityTier, OreReading, TierScaling, Uplift, UpliftPolicy, UpliftReason, MENTION_THRESHOLD,
    POOR_FACTOR,
};
pub use registry::{Calculator, CalculatorRegistry};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use prospector::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ProspectingConfig;
    pub use crate::distribution::{DistributionShape, NaturalFloat};
    pub use crate::error::{Error, Result};
    pub use crate::estimator::DiscEstimator;
    pub use crate::generator::{DepositGenerator, DepositVariant, GeneratorKind};
    pub use crate::normal::{AbramowitzStegun, NormalCdf};
    pub use crate::reading::{DensityTier, OreReading, TierScaling, UpliftPolicy};
    pub use crate::registry::CalculatorRegistry;
}
