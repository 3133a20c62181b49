//! Galactic shape options and the allowed system-count range.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Macro-layout pattern that drives system placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalaxyShape {
    #[default]
    TwoArmSpiral,
    FourArmSpiral,
    Elliptical,
    IrregularCluster,
    Ring,
}

impl GalaxyShape {
    pub const ALL: [GalaxyShape; 5] = [
        GalaxyShape::TwoArmSpiral,
        GalaxyShape::FourArmSpiral,
        GalaxyShape::Elliptical,
        GalaxyShape::IrregularCluster,
        GalaxyShape::Ring,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalaxyShape::TwoArmSpiral => "two-arm-spiral",
            GalaxyShape::FourArmSpiral => "four-arm-spiral",
            GalaxyShape::Elliptical => "elliptical",
            GalaxyShape::IrregularCluster => "irregular-cluster",
            GalaxyShape::Ring => "ring",
        }
    }
}

impl fmt::Display for GalaxyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GalaxyShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GalaxyShape::ALL
            .iter()
            .copied()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = GalaxyShape::ALL.iter().map(|s| s.as_str()).collect();
                format!("unknown galaxy shape '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Inclusive range of system counts a generation may produce.
///
/// `min <= max` holds for every value of this type, including deserialized
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCountRange")]
pub struct SystemCountRange {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
struct RawCountRange {
    min: u32,
    max: u32,
}

impl TryFrom<RawCountRange> for SystemCountRange {
    type Error = ConfigError;

    fn try_from(raw: RawCountRange) -> Result<Self, Self::Error> {
        SystemCountRange::new(raw.min, raw.max)
    }
}

impl SystemCountRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// A range that always yields exactly `count` systems.
    pub fn exactly(count: u32) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, count: usize) -> bool {
        (self.min as usize..=self.max as usize).contains(&count)
    }

    /// Draw a count uniformly from `min..=max`.
    pub fn sample(&self, rng: &mut dyn RngCore) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for SystemCountRange {
    fn default() -> Self {
        Self { min: 100, max: 200 }
    }
}
