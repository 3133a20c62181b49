//! Galaxy assembly: the single entry point that ties placement, sampling,
//! naming and lane building together.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::attributes::roll_attributes;
use crate::config::GalaxyConfig;
use crate::connectivity::analyze_connectivity;
use crate::error::GalaxyError;
use crate::galaxy::{Galaxy, StarSystem, SystemId};
use crate::hyperlane::build_hyperlanes;
use crate::names::generate_system_name;
use crate::placement::place_systems;
use crate::shape::GalaxyShape;

/// Generate a fresh galaxy.
///
/// `shape` falls back to `config.default_shape`. All randomness is drawn from
/// `rng`, so a seeded generator gives a reproducible galaxy. The first placed
/// system becomes the player start and is the only explored system.
///
/// # Errors
///
/// Returns [`GalaxyError::NoSystems`] when the configured count range yields
/// zero systems.
///
/// # Panics
///
/// `config` is trusted as given. A probability outside `[0, 1]` (for example
/// `lanes.dangerous_chance = 1.5`) panics inside the RNG. Run
/// [`GalaxyConfig::validate`] on hand-built configurations first, or use
/// [`GalaxyGenerator::new`], which does so.
pub fn generate_galaxy(
    shape: Option<GalaxyShape>,
    config: &GalaxyConfig,
    rng: &mut dyn RngCore,
) -> Result<Galaxy, GalaxyError> {
    let shape = shape.unwrap_or(config.default_shape);
    let count = config.system_count.sample(rng) as usize;
    log::debug!("generating {} galaxy with {} systems", shape, count);

    if config.star_distribution.is_empty() {
        log::warn!("star distribution is empty; every system will use the fallback star type");
    }

    let positions = place_systems(count, shape, &config.layout, rng);
    let mut systems: Vec<StarSystem> = positions
        .into_iter()
        .enumerate()
        .map(|(i, position)| {
            let star_type = config.star_distribution.sample(rng);
            let name = generate_system_name(rng);
            let mut system = StarSystem::new(SystemId(i as u32), name, position, star_type);
            roll_attributes(&mut system, &config.attributes, rng);
            system
        })
        .collect();

    let start = systems.first_mut().ok_or(GalaxyError::NoSystems)?;
    start.explored = true;
    let player_position = start.id;

    let hyperlanes = build_hyperlanes(&systems, &config.lanes, rng);
    log::debug!("built {} hyperlanes", hyperlanes.len());

    let galaxy = Galaxy {
        systems,
        hyperlanes,
        shape,
        player_position,
        player_route: None,
    };

    let connectivity = analyze_connectivity(&galaxy);
    if !connectivity.is_connected() {
        log::warn!(
            "galaxy is split into {} components ({} isolated systems)",
            connectivity.components.len(),
            connectivity.isolated.len()
        );
    }
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", galaxy.summary_with(&connectivity).describe());
    }

    Ok(galaxy)
}

/// Owns a configuration and generates galaxies from it.
#[derive(Debug, Clone, Default)]
pub struct GalaxyGenerator {
    config: GalaxyConfig,
}

impl GalaxyGenerator {
    /// Wrap a configuration after validating it.
    pub fn new(config: GalaxyConfig) -> Result<Self, GalaxyError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    pub fn generate(
        &self,
        shape: Option<GalaxyShape>,
        rng: &mut dyn RngCore,
    ) -> Result<Galaxy, GalaxyError> {
        generate_galaxy(shape, &self.config, rng)
    }

    /// Reproducible generation from a 64-bit seed.
    pub fn generate_seeded(
        &self,
        shape: Option<GalaxyShape>,
        seed: u64,
    ) -> Result<Galaxy, GalaxyError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(shape, &mut rng)
    }

    /// Generation from the thread-local entropy source.
    pub fn generate_random(&self, shape: Option<GalaxyShape>) -> Result<Galaxy, GalaxyError> {
        self.generate(shape, &mut rand::thread_rng())
    }
}
