//! Error types for configuration and galaxy snapshots.

use thiserror::Error;

use crate::galaxy::SystemId;
use crate::star::StarType;

/// Rejected generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("system count range is inverted: min {min} > max {max}")]
    InvertedRange { min: u32, max: u32 },
    #[error("star type {star_type:?} has invalid weight {weight} (must be finite and > 0)")]
    InvalidWeight { star_type: StarType, weight: f64 },
    #[error("{field} = {value} is outside its allowed range")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors surfaced by galaxy generation, queries, and snapshot validation.
#[derive(Debug, Error)]
pub enum GalaxyError {
    /// The count range resolved to zero systems, so there is no start system.
    #[error("galaxy has no systems; cannot choose a player start")]
    NoSystems,
    #[error("no system with id {0}")]
    UnknownSystem(SystemId),
    #[error("route step {from} -> {to} is not joined by a hyperlane")]
    RouteNotConnected { from: SystemId, to: SystemId },
    #[error("system id {0} appears more than once")]
    DuplicateSystemId(SystemId),
    #[error("hyperlane connects system {0} to itself")]
    SelfLoop(SystemId),
    #[error("more than one hyperlane joins {0} and {1}")]
    DuplicateHyperlane(SystemId, SystemId),
    #[error("hyperlane {from} -> {to} references a missing system")]
    DanglingHyperlane { from: SystemId, to: SystemId },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to (de)serialize galaxy: {0}")]
    Serialization(#[from] serde_json::Error),
}
