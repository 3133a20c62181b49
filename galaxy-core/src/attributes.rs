//! Per-system attribute rolls: planets, anomalies, resources, special status.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::config::AttributeRules;
use crate::galaxy::{Resource, SpecialStatus, StarSystem};
use crate::star::StarType;

/// Most resource kinds a single system can hold.
pub const MAX_RESOURCES: usize = 3;

/// Upper bound on planets orbiting a star of this type.
pub fn max_planets(star_type: StarType) -> u32 {
    match star_type {
        StarType::BlackHole => 2,
        StarType::NeutronStar => 3,
        StarType::BlueGiant => 6,
        multiple if multiple.is_multiple() => 8,
        _ => 12,
    }
}

/// Fill in the randomized attributes of a freshly placed system.
pub fn roll_attributes(system: &mut StarSystem, rules: &AttributeRules, rng: &mut dyn RngCore) {
    system.planet_count = rng.gen_range(0..=max_planets(system.star_type));
    system.anomaly_present = rng.gen_bool(rules.anomaly_chance);

    let resource_count = rng.gen_range(0..=MAX_RESOURCES);
    system.resources = Resource::ALL
        .choose_multiple(rng, resource_count)
        .copied()
        .collect();

    system.special_status = SpecialStatus::ALL
        .iter()
        .copied()
        .filter(|_| rng.gen_bool(rules.special_status_chance))
        .collect();
}
