//! Hyperlane graph construction.

use std::collections::HashSet;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::config::LaneRules;
use crate::galaxy::{StarSystem, SystemId};

/// Coarse hazard classification of a hyperlane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Danger {
    Safe,
    Dangerous,
    /// Hazard unknown to the player. Never stored by the generator; see
    /// [`crate::Galaxy::perceived_danger`].
    Unexplored,
}

/// An undirected traversable connection between two systems.
///
/// `from_system_id` is the system whose nearest-neighbour pass created the
/// lane; travel is allowed in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperlane {
    pub from_system_id: SystemId,
    pub to_system_id: SystemId,
    pub danger: Danger,
}

impl Hyperlane {
    /// Whether this lane joins `a` and `b`, in either order.
    pub fn connects(&self, a: SystemId, b: SystemId) -> bool {
        (self.from_system_id == a && self.to_system_id == b)
            || (self.from_system_id == b && self.to_system_id == a)
    }

    pub fn touches(&self, id: SystemId) -> bool {
        self.from_system_id == id || self.to_system_id == id
    }

    /// The endpoint opposite `id`, if `id` is one of the endpoints.
    pub fn other_end(&self, id: SystemId) -> Option<SystemId> {
        if self.from_system_id == id {
            Some(self.to_system_id)
        } else if self.to_system_id == id {
            Some(self.from_system_id)
        } else {
            None
        }
    }

    /// Order-independent key for deduplication.
    pub fn key(&self) -> (SystemId, SystemId) {
        lane_key(self.from_system_id, self.to_system_id)
    }
}

pub(crate) fn lane_key(a: SystemId, b: SystemId) -> (SystemId, SystemId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Connect each system to its nearest neighbours.
///
/// For every system, candidates within `rules.max_distance` are sorted by
/// distance and at most `rules.max_lanes_per_system` of them are linked,
/// skipping pairs that an earlier pass already joined. A system with no
/// candidate in range gets no lanes from its own pass, so the result may be
/// disconnected.
///
/// The neighbour search is O(n²), which is fine at a few hundred systems.
pub fn build_hyperlanes(
    systems: &[StarSystem],
    rules: &LaneRules,
    rng: &mut dyn RngCore,
) -> Vec<Hyperlane> {
    let mut lanes = Vec::new();
    let mut existing: HashSet<(SystemId, SystemId)> = HashSet::new();

    for system in systems {
        let mut candidates: Vec<(&StarSystem, f64)> = systems
            .iter()
            .filter(|other| other.id != system.id)
            .map(|other| (other, system.position.distance_to(&other.position)))
            .filter(|(_, dist)| *dist <= rules.max_distance)
            .collect();

        candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        for (neighbor, _) in candidates.into_iter().take(rules.max_lanes_per_system) {
            if !existing.insert(lane_key(system.id, neighbor.id)) {
                continue;
            }

            let danger = if rng.gen_bool(rules.dangerous_chance) {
                Danger::Dangerous
            } else {
                Danger::Safe
            };

            lanes.push(Hyperlane {
                from_system_id: system.id,
                to_system_id: neighbor.id,
                danger,
            });
        }
    }

    lanes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Position;
    use crate::star::StarType;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn system_at(id: u32, x: f64, y: f64) -> StarSystem {
        StarSystem::new(
            SystemId(id),
            format!("Test {}", id),
            Position::new(x, y),
            StarType::RedDwarf,
        )
    }

    fn rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(42)
    }

    #[test]
    fn lane_helpers_work_in_both_directions() {
        let lane = Hyperlane {
            from_system_id: SystemId(4),
            to_system_id: SystemId(2),
            danger: Danger::Safe,
        };
        assert!(lane.connects(SystemId(2), SystemId(4)));
        assert!(lane.connects(SystemId(4), SystemId(2)));
        assert!(!lane.connects(SystemId(4), SystemId(3)));
        assert_eq!(lane.other_end(SystemId(2)), Some(SystemId(4)));
        assert_eq!(lane.other_end(SystemId(9)), None);
        assert_eq!(lane.key(), (SystemId(2), SystemId(4)));
    }

    #[test]
    fn links_only_within_max_distance() {
        let systems = vec![
            system_at(0, 0.0, 0.0),
            system_at(1, 100.0, 0.0),
            system_at(2, 1000.0, 0.0),
        ];
        let lanes = build_hyperlanes(&systems, &LaneRules::default(), &mut rng());

        assert_eq!(lanes.len(), 1);
        assert!(lanes[0].connects(SystemId(0), SystemId(1)));
        assert!(!lanes.iter().any(|l| l.touches(SystemId(2))));
    }

    #[test]
    fn reverse_pass_does_not_duplicate_lanes() {
        let systems = vec![system_at(0, 0.0, 0.0), system_at(1, 50.0, 0.0)];
        let lanes = build_hyperlanes(&systems, &LaneRules::default(), &mut rng());
        assert_eq!(lanes.len(), 1);
        assert_eq!(lanes[0].from_system_id, SystemId(0));
    }

    #[test]
    fn each_pass_links_its_nearest_candidates() {
        // A hub with five neighbours at increasing distances.
        let mut systems = vec![system_at(0, 500.0, 500.0)];
        for i in 1..=5 {
            systems.push(system_at(i, 500.0 + 40.0 * i as f64, 500.0));
        }
        let lanes = build_hyperlanes(&systems, &LaneRules::default(), &mut rng());

        let from_hub: Vec<SystemId> = lanes
            .iter()
            .filter(|l| l.from_system_id == SystemId(0))
            .map(|l| l.to_system_id)
            .collect();
        assert_eq!(from_hub, vec![SystemId(1), SystemId(2), SystemId(3)]);
    }

    #[test]
    fn out_degree_is_bounded_but_total_degree_may_exceed_it() {
        // Ring of satellites around a hub: every satellite's nearest
        // neighbour includes the hub, so the hub collects inbound lanes.
        let mut systems = vec![system_at(0, 1000.0, 1000.0)];
        for i in 0..8 {
            let angle = i as f64 * std::f64::consts::TAU / 8.0;
            systems.push(system_at(
                i + 1,
                1000.0 + 100.0 * angle.cos(),
                1000.0 + 100.0 * angle.sin(),
            ));
        }
        let rules = LaneRules::default();
        let lanes = build_hyperlanes(&systems, &rules, &mut rng());

        let mut out_degree: HashMap<SystemId, usize> = HashMap::new();
        for lane in &lanes {
            *out_degree.entry(lane.from_system_id).or_default() += 1;
        }
        assert!(out_degree.values().all(|&d| d <= rules.max_lanes_per_system));

        let hub_degree = lanes.iter().filter(|l| l.touches(SystemId(0))).count();
        assert!(hub_degree > rules.max_lanes_per_system);
    }

    #[test]
    fn danger_follows_the_configured_chance() {
        let systems: Vec<StarSystem> = (0..400)
            .map(|i| system_at(i, (i % 20) as f64 * 50.0, (i / 20) as f64 * 50.0))
            .collect();

        let all_safe = LaneRules {
            dangerous_chance: 0.0,
            ..LaneRules::default()
        };
        let lanes = build_hyperlanes(&systems, &all_safe, &mut rng());
        assert!(lanes.iter().all(|l| l.danger == Danger::Safe));

        let lanes = build_hyperlanes(&systems, &LaneRules::default(), &mut rng());
        let dangerous = lanes.iter().filter(|l| l.danger == Danger::Dangerous).count() as f64;
        let ratio = dangerous / lanes.len() as f64;
        assert!((ratio - 0.2).abs() < 0.05, "dangerous ratio {}", ratio);
        assert!(lanes.iter().all(|l| l.danger != Danger::Unexplored));
    }
}
