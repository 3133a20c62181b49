//! Procedural galaxy generation.
//!
//! Builds a snapshot of star systems placed according to a galactic shape,
//! joined by a sparse graph of hyperlanes, with per-system attributes and a
//! designated player-start system.
//!
//! ```
//! use galaxy_core::{generate_galaxy, GalaxyConfig, GalaxyShape};
//! use rand::SeedableRng;
//!
//! let config = GalaxyConfig::default().with_system_count(50);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let galaxy = generate_galaxy(Some(GalaxyShape::Elliptical), &config, &mut rng).unwrap();
//!
//! assert_eq!(galaxy.systems.len(), 50);
//! assert!(galaxy.player_system().unwrap().explored);
//! ```

pub mod attributes;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod galaxy;
pub mod generator;
pub mod hyperlane;
pub mod names;
pub mod placement;
pub mod shape;
pub mod star;

pub use config::{AttributeRules, GalaxyConfig, LaneRules, MapLayout};
pub use connectivity::{analyze_connectivity, ConnectivityReport};
pub use error::{ConfigError, GalaxyError};
pub use galaxy::{Galaxy, GalaxySummary, Resource, SpecialStatus, StarSystem, SystemId};
pub use generator::{generate_galaxy, GalaxyGenerator};
pub use hyperlane::{Danger, Hyperlane};
pub use placement::Position;
pub use shape::{GalaxyShape, SystemCountRange};
pub use star::{StarDistribution, StarType, StarTypeWeight};

/// Re-export so callers can name the RNG parameter without depending on
/// `rand` directly.
pub use rand::RngCore;
