//! Generator configuration.
//!
//! A [`GalaxyConfig`] is an immutable snapshot passed by reference into every
//! generation call. Invalid values are rejected here, at the configuration
//! boundary, so the generator itself never has to second-guess its inputs.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::shape::{GalaxyShape, SystemCountRange};
use crate::star::StarDistribution;

/// Geometry of the map canvas and the shape-specific placement constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapLayout {
    /// Side length of the square map, in map units.
    pub map_size: f64,
    /// Radians of twist added per map unit of radius in spiral placement.
    pub spiral_factor: f64,
    /// Y-axis compression applied to elliptical placement.
    pub ellipse_y_scale: f64,
}

impl MapLayout {
    /// Fraction of the map size used as the maximum galactic radius.
    pub const RADIUS_FRACTION: f64 = 0.4;

    pub fn center(&self) -> (f64, f64) {
        (self.map_size / 2.0, self.map_size / 2.0)
    }

    pub fn max_radius(&self) -> f64 {
        self.map_size * Self::RADIUS_FRACTION
    }
}

impl Default for MapLayout {
    fn default() -> Self {
        Self {
            map_size: 2000.0,
            spiral_factor: 0.005,
            ellipse_y_scale: 0.7,
        }
    }
}

/// Constraints on hyperlane construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneRules {
    /// Longest hyperlane allowed, in map units.
    pub max_distance: f64,
    /// Most lanes a single system's nearest-neighbour pass may add.
    pub max_lanes_per_system: usize,
    /// Probability that a new lane is rated dangerous.
    pub dangerous_chance: f64,
}

impl Default for LaneRules {
    fn default() -> Self {
        Self {
            max_distance: 300.0,
            max_lanes_per_system: 3,
            dangerous_chance: 0.2,
        }
    }
}

/// Probabilities for the per-system attribute rolls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeRules {
    pub anomaly_chance: f64,
    /// Independent chance for each special status to apply.
    pub special_status_chance: f64,
}

impl Default for AttributeRules {
    fn default() -> Self {
        Self {
            anomaly_chance: 0.1,
            special_status_chance: 0.05,
        }
    }
}

/// Everything the generator reads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// Shape used when a generation call does not name one.
    pub default_shape: GalaxyShape,
    pub system_count: SystemCountRange,
    pub star_distribution: StarDistribution,
    pub layout: MapLayout,
    pub lanes: LaneRules,
    pub attributes: AttributeRules,
}

impl GalaxyConfig {
    /// Parse a JSON configuration and validate it. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GalaxyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the count range with one that always yields `count` systems.
    pub fn with_system_count(mut self, count: u32) -> Self {
        self.system_count = SystemCountRange::exactly(count);
        self
    }

    pub fn with_default_shape(mut self, shape: GalaxyShape) -> Self {
        self.default_shape = shape;
        self
    }

    /// Check the numeric fields that their types cannot constrain.
    ///
    /// The count range and star weights are already validated by their own
    /// constructors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("layout.map_size", self.layout.map_size)?;
        finite("layout.spiral_factor", self.layout.spiral_factor)?;
        unit_interval("layout.ellipse_y_scale", self.layout.ellipse_y_scale)?;
        positive("lanes.max_distance", self.lanes.max_distance)?;
        unit_interval("lanes.dangerous_chance", self.lanes.dangerous_chance)?;
        unit_interval("attributes.anomaly_chance", self.attributes.anomaly_chance)?;
        unit_interval(
            "attributes.special_status_chance",
            self.attributes.special_status_chance,
        )?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::OutOfRange { field, value });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::OutOfRange { field, value });
    }
    Ok(())
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfRange { field, value });
    }
    Ok(())
}
