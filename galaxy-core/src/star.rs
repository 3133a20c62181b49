//! Star classifications and the weighted star-type sampler.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Classification of a system's primary star (or multi-star configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarType {
    /// Class M.
    RedDwarf,
    /// Class G.
    YellowMainSequence,
    /// Class A.
    White,
    /// Class O.
    BlueGiant,
    NeutronStar,
    BlackHole,
    Binary,
    Trinary,
}

impl StarType {
    pub const ALL: [StarType; 8] = [
        StarType::RedDwarf,
        StarType::YellowMainSequence,
        StarType::White,
        StarType::BlueGiant,
        StarType::NeutronStar,
        StarType::BlackHole,
        StarType::Binary,
        StarType::Trinary,
    ];

    /// Returned whenever the sampler cannot pick from its distribution.
    pub const FALLBACK: StarType = StarType::YellowMainSequence;

    pub fn is_multiple(&self) -> bool {
        matches!(self, StarType::Binary | StarType::Trinary)
    }
}

/// One entry of the star-type distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarTypeWeight {
    pub star_type: StarType,
    pub weight: f64,
}

/// Discrete distribution over star types.
///
/// Weights are finite and strictly positive, and so is their sum. They do
/// not need to sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<StarTypeWeight>", into = "Vec<StarTypeWeight>")]
pub struct StarDistribution {
    entries: Vec<StarTypeWeight>,
}

impl TryFrom<Vec<StarTypeWeight>> for StarDistribution {
    type Error = ConfigError;

    fn try_from(entries: Vec<StarTypeWeight>) -> Result<Self, Self::Error> {
        StarDistribution::new(entries)
    }
}

impl From<StarDistribution> for Vec<StarTypeWeight> {
    fn from(distribution: StarDistribution) -> Self {
        distribution.entries
    }
}

impl StarDistribution {
    pub fn new(entries: Vec<StarTypeWeight>) -> Result<Self, ConfigError> {
        if let Some(bad) = entries
            .iter()
            .find(|e| !e.weight.is_finite() || e.weight <= 0.0)
        {
            return Err(ConfigError::InvalidWeight {
                star_type: bad.star_type,
                weight: bad.weight,
            });
        }
        let distribution = Self { entries };
        let total = distribution.total_weight();
        if !total.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "star_distribution.total_weight",
                value: total,
            });
        }
        Ok(distribution)
    }

    /// Build a distribution from `(type, weight)` pairs.
    pub fn from_pairs(pairs: &[(StarType, f64)]) -> Result<Self, ConfigError> {
        Self::new(
            pairs
                .iter()
                .map(|&(star_type, weight)| StarTypeWeight { star_type, weight })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[StarTypeWeight] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Expected probability of `star_type` under this distribution.
    pub fn probability(&self, star_type: StarType) -> f64 {
        let total = self.total_weight();
        if total <= 0.0 {
            return 0.0;
        }
        self.entries
            .iter()
            .filter(|e| e.star_type == star_type)
            .map(|e| e.weight)
            .sum::<f64>()
            / total
    }

    /// Draw a star type with `P(type) = weight / total`.
    ///
    /// Never fails: an empty distribution, or a draw that slips past the last
    /// accumulated weight, yields [`StarType::FALLBACK`].
    pub fn sample(&self, rng: &mut dyn RngCore) -> StarType {
        let total = self.total_weight();
        if self.entries.is_empty() || total <= 0.0 {
            return StarType::FALLBACK;
        }

        let roll = rng.gen::<f64>() * total;
        let mut accumulated = 0.0;
        for entry in &self.entries {
            accumulated += entry.weight;
            if accumulated > roll {
                return entry.star_type;
            }
        }

        StarType::FALLBACK
    }
}

impl Default for StarDistribution {
    fn default() -> Self {
        let entries = [
            (StarType::RedDwarf, 40.0),
            (StarType::YellowMainSequence, 25.0),
            (StarType::White, 15.0),
            (StarType::BlueGiant, 5.0),
            (StarType::NeutronStar, 3.0),
            (StarType::BlackHole, 2.0),
            (StarType::Binary, 10.0),
        ]
        .iter()
        .map(|&(star_type, weight)| StarTypeWeight { star_type, weight })
        .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashMap;

    /// An RNG that always returns the largest possible value, pushing
    /// `gen::<f64>()` as close to 1.0 as it goes.
    struct MaxRng;

    impl RngCore for MaxRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }
        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0xff);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0xff);
            Ok(())
        }
    }

    #[test]
    fn observed_frequencies_match_weights() {
        let distribution = StarDistribution::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let draws = 10_000;

        let mut counts: HashMap<StarType, usize> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(distribution.sample(&mut rng)).or_default() += 1;
        }

        for entry in distribution.entries() {
            let expected = distribution.probability(entry.star_type);
            let hits = counts.get(&entry.star_type).copied().unwrap_or(0);
            let observed = hits as f64 / draws as f64;
            // ~4 standard deviations for the largest class at n = 10k.
            assert!(
                (observed - expected).abs() < 0.02,
                "{:?}: observed {:.3}, expected {:.3}",
                entry.star_type,
                observed,
                expected
            );
        }
        assert!(!counts.contains_key(&StarType::Trinary));
    }

    #[test]
    fn empty_distribution_falls_back() {
        let distribution = StarDistribution::new(vec![]).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        assert_eq!(distribution.sample(&mut rng), StarType::FALLBACK);
    }

    #[test]
    fn top_of_range_draw_lands_on_last_entry() {
        let distribution =
            StarDistribution::from_pairs(&[(StarType::RedDwarf, 1.0), (StarType::BlackHole, 1.0)])
                .unwrap();
        assert_eq!(distribution.sample(&mut MaxRng), StarType::BlackHole);
    }

    #[test]
    fn single_entry_always_wins() {
        let distribution = StarDistribution::from_pairs(&[(StarType::Trinary, 0.5)]).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        assert!((0..100).all(|_| distribution.sample(&mut rng) == StarType::Trinary));
    }

    #[test]
    fn non_positive_or_non_finite_weights_are_rejected() {
        for weight in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let result = StarDistribution::from_pairs(&[(StarType::White, weight)]);
            assert!(
                matches!(
                    result,
                    Err(ConfigError::InvalidWeight {
                        star_type: StarType::White,
                        ..
                    })
                ),
                "weight {} should be rejected",
                weight
            );
        }
    }

    #[test]
    fn weights_summing_past_f64_max_are_rejected() {
        let huge = [(StarType::RedDwarf, 1e308), (StarType::BlackHole, 1e308)];
        let result = StarDistribution::from_pairs(&huge);
        assert!(matches!(
            result,
            Err(ConfigError::OutOfRange {
                field: "star_distribution.total_weight",
                ..
            })
        ));

        let json = r#"[
            {"star_type": "white", "weight": 1e308},
            {"star_type": "binary", "weight": 1e308}
        ]"#;
        assert!(serde_json::from_str::<StarDistribution>(json).is_err());

        let large = [(StarType::RedDwarf, 1e307), (StarType::BlackHole, 1e307)];
        let large = StarDistribution::from_pairs(&large).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let draws: Vec<StarType> = (0..200).map(|_| large.sample(&mut rng)).collect();
        assert!(draws.iter().all(|t| *t != StarType::FALLBACK));
        assert!(draws.contains(&StarType::RedDwarf) && draws.contains(&StarType::BlackHole));
    }

    #[test]
    fn distribution_deserializes_from_a_plain_list() {
        let json = r#"[
            {"star_type": "black_hole", "weight": 2.0},
            {"star_type": "binary", "weight": 6.0}
        ]"#;
        let distribution: StarDistribution = serde_json::from_str(json).unwrap();
        assert_eq!(distribution.entries().len(), 2);
        assert!((distribution.probability(StarType::Binary) - 0.75).abs() < 1e-12);

        let bad = r#"[{"star_type": "white", "weight": -1.0}]"#;
        assert!(serde_json::from_str::<StarDistribution>(bad).is_err());
    }
}
