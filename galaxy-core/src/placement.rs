//! Spatial placement of star systems on the map.

use std::f64::consts::{PI, TAU};

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::config::MapLayout;
use crate::shape::GalaxyShape;

/// A point in map units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether the point lies inside the `[0, size] x [0, size]` square.
    pub fn within_square(&self, size: f64) -> bool {
        (0.0..=size).contains(&self.x) && (0.0..=size).contains(&self.y)
    }
}

/// Compute one position per system for the given shape.
///
/// Systems may land arbitrarily close together; no collision avoidance is
/// attempted.
pub fn place_systems(
    count: usize,
    shape: GalaxyShape,
    layout: &MapLayout,
    rng: &mut dyn RngCore,
) -> Vec<Position> {
    (0..count)
        .map(|_| match shape {
            GalaxyShape::TwoArmSpiral => two_arm_spiral_point(layout, rng),
            GalaxyShape::Elliptical => elliptical_point(layout, rng),
            // Only two shapes have bespoke density functions; the rest spread
            // uniformly over the map.
            GalaxyShape::FourArmSpiral | GalaxyShape::IrregularCluster | GalaxyShape::Ring => {
                uniform_point(layout, rng)
            }
        })
        .collect()
}

fn two_arm_spiral_point(layout: &MapLayout, rng: &mut dyn RngCore) -> Position {
    let mut angle = rng.gen::<f64>() * TAU;
    let radius = rng.gen::<f64>() * layout.max_radius();
    let arm_offset = if rng.gen_bool(0.5) { 0.0 } else { PI };

    angle += arm_offset + radius * layout.spiral_factor;
    polar_to_map(layout, radius, angle, 1.0)
}

fn elliptical_point(layout: &MapLayout, rng: &mut dyn RngCore) -> Position {
    // sqrt keeps the density uniform over area instead of piling up at the core.
    let radius = rng.gen::<f64>().sqrt() * layout.max_radius();
    let angle = rng.gen::<f64>() * TAU;
    polar_to_map(layout, radius, angle, layout.ellipse_y_scale)
}

fn uniform_point(layout: &MapLayout, rng: &mut dyn RngCore) -> Position {
    Position::new(
        rng.gen::<f64>() * layout.map_size,
        rng.gen::<f64>() * layout.map_size,
    )
}

fn polar_to_map(layout: &MapLayout, radius: f64, angle: f64, y_scale: f64) -> Position {
    let (cx, cy) = layout.center();
    Position::new(
        cx + radius * angle.cos(),
        cy + radius * angle.sin() * y_scale,
    )
}
