//! Star system designations.

use rand::{Rng, RngCore};

const PREFIXES: &[&str] = &[
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Theta", "Kappa", "Sigma", "Omega",
    "Nova", "Vega", "Rigel", "Altair", "Kepler", "Gliese", "Tau", "Lyra", "Orion", "Draco",
];

const SUFFIXES: &[&str] = &[
    "Prime", "Minor", "Major", "Secundus", "Tertius", "Reach", "Deep", "Station",
];

/// Largest numeric designator a name can carry.
pub const MAX_DESIGNATOR: u32 = 999;

/// Generate a display name like "Kepler 442" or "Sigma 17 Prime".
///
/// Names are not unique: two systems in one galaxy may share a designation.
pub fn generate_system_name(rng: &mut dyn RngCore) -> String {
    let prefix = PREFIXES[rng.gen_range(0..PREFIXES.len())];
    let designator = rng.gen_range(1..=MAX_DESIGNATOR);

    if rng.gen_bool(0.5) {
        let suffix = SUFFIXES[rng.gen_range(0..SUFFIXES.len())];
        format!("{} {} {}", prefix, designator, suffix)
    } else {
        format!("{} {}", prefix, designator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn names_follow_prefix_number_suffix_layout() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let name = generate_system_name(&mut rng);
            let parts: Vec<&str> = name.split(' ').collect();
            assert!(parts.len() == 2 || parts.len() == 3, "unexpected name {:?}", name);
            assert!(PREFIXES.contains(&parts[0]));

            let designator: u32 = parts[1].parse().unwrap();
            assert!((1..=MAX_DESIGNATOR).contains(&designator));

            if parts.len() == 3 {
                assert!(SUFFIXES.contains(&parts[2]));
            }
        }
    }

    #[test]
    fn roughly_half_of_names_carry_a_suffix() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(9);
        let with_suffix = (0..2000)
            .map(|_| generate_system_name(&mut rng))
            .filter(|name| name.split(' ').count() == 3)
            .count();
        assert!((800..1200).contains(&with_suffix), "{} names had suffixes", with_suffix);
    }

    #[test]
    fn name_variety() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let names: HashSet<String> = (0..100).map(|_| generate_system_name(&mut rng)).collect();
        assert!(names.len() > 80);
    }
}
