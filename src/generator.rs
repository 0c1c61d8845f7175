//! Deposit-generator kinds, instances, and variants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::NaturalFloat;

/// Identifies a deposit-generator algorithm.
///
/// Kinds form a linear specialization chain (every kind has at most one
/// parent); [`CalculatorRegistry::resolve`](crate::CalculatorRegistry::resolve)
/// walks from the most specific kind upward through [`parent`](Self::parent)
/// until it finds a registered calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeneratorKind {
    /// Root of the kind hierarchy.
    Base,
    /// Disc-shaped deposits: a thickness × radius² cylinder-like volume.
    Disc,
    /// Discs placed relative to the terrain surface.
    FollowSurfaceDisc,
    /// Discs placed relative to sea level.
    FollowSeaLevelDisc,
    /// Discs placed at any depth.
    AnywhereDisc,
    /// Deposits spawned inside a parent deposit.
    ChildDeposit,
    /// Surface-following alluvial deposits.
    Alluvial,
}

impl GeneratorKind {
    /// The immediate ancestor kind, or `None` for the root.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Base => None,
            Self::Disc | Self::ChildDeposit => Some(Self::Base),
            Self::FollowSurfaceDisc | Self::FollowSeaLevelDisc | Self::AnywhereDisc => {
                Some(Self::Disc)
            }
            Self::Alluvial => Some(Self::FollowSurfaceDisc),
        }
    }

    /// Walks from this kind upward through its ancestor chain, inclusive.
    pub fn self_and_ancestors(self) -> impl Iterator<Item = Self> {
        core::iter::successors(Some(self), |kind| kind.parent())
    }
}

impl core::fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::Disc => "disc",
            Self::FollowSurfaceDisc => "followsurface-disc",
            Self::FollowSeaLevelDisc => "followsealevel-disc",
            Self::AnywhereDisc => "anywhere-disc",
            Self::ChildDeposit => "childdeposit",
            Self::Alluvial => "alluvial",
        };
        write!(f, "{name}")
    }
}

/// An instance of a deposit generator: its kind plus shape parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepositGenerator {
    /// The generator's most specific kind.
    pub kind: GeneratorKind,
    /// Disc radius distribution, in blocks.
    pub radius: NaturalFloat,
    /// Disc thickness distribution, in blocks.
    pub thickness: NaturalFloat,
}

impl DepositGenerator {
    /// Creates a new generator description.
    #[must_use]
    pub fn new(kind: GeneratorKind, radius: NaturalFloat, thickness: NaturalFloat) -> Self {
        Self {
            kind,
            radius,
            thickness,
        }
    }
}

/// A named configuration of a deposit generator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepositVariant {
    /// Material code of the deposit (e.g. `"nativecopper"`).
    pub ore_code: String,
    /// Expected number of independent placement attempts per chunk.
    pub tries_per_chunk: f64,
}

impl DepositVariant {
    /// Creates a new variant.
    #[must_use]
    pub fn new(ore_code: impl Into<String>, tries_per_chunk: f64) -> Self {
        Self {
            ore_code: ore_code.into(),
            tries_per_chunk,
        }
    }
}
