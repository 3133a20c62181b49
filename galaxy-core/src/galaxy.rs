//! The galaxy snapshot and the systems it contains.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::connectivity::{analyze_connectivity, ConnectivityReport};
use crate::error::GalaxyError;
use crate::hyperlane::{lane_key, Danger, Hyperlane};
use crate::placement::Position;
use crate::shape::GalaxyShape;
use crate::star::StarType;

/// Identifier of a star system, unique within one galaxy snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemId(pub u32);

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exploitable resources a system may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Metals,
    RareElements,
    Gas,
    Water,
    Organics,
    Exotics,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Metals,
        Resource::RareElements,
        Resource::Gas,
        Resource::Water,
        Resource::Organics,
        Resource::Exotics,
    ];
}

/// Notable features that set a system apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialStatus {
    AncientRuins,
    Derelict,
    Nebula,
    TradeHub,
}

impl SpecialStatus {
    pub const ALL: [SpecialStatus; 4] = [
        SpecialStatus::AncientRuins,
        SpecialStatus::Derelict,
        SpecialStatus::Nebula,
        SpecialStatus::TradeHub,
    ];
}

/// A single star system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub id: SystemId,
    pub name: String,
    pub position: Position,
    pub star_type: StarType,
    /// Set by the fog-of-war tracker as the player visits systems.
    pub explored: bool,
    /// Filled in by the territory layer, never by the generator.
    pub controlling_faction: Option<String>,
    pub planet_count: u32,
    pub anomaly_present: bool,
    pub resources: Vec<Resource>,
    pub special_status: Vec<SpecialStatus>,
}

impl StarSystem {
    /// An unexplored, unclaimed system with no planets or features.
    pub fn new(
        id: SystemId,
        name: impl Into<String>,
        position: Position,
        star_type: StarType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            star_type,
            explored: false,
            controlling_faction: None,
            planet_count: 0,
            anomaly_present: false,
            resources: Vec::new(),
            special_status: Vec::new(),
        }
    }
}

/// A generated galaxy: the aggregate handed to map, route and exploration
/// consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Galaxy {
    pub systems: Vec<StarSystem>,
    pub hyperlanes: Vec<Hyperlane>,
    pub shape: GalaxyShape,
    /// The system the player currently occupies.
    pub player_position: SystemId,
    /// Planned path, written by an external route planner.
    pub player_route: Option<Vec<SystemId>>,
}

impl Galaxy {
    pub fn system(&self, id: SystemId) -> Option<&StarSystem> {
        self.systems.iter().find(|s| s.id == id)
    }

    pub fn system_mut(&mut self, id: SystemId) -> Option<&mut StarSystem> {
        self.systems.iter_mut().find(|s| s.id == id)
    }

    pub fn player_system(&self) -> Option<&StarSystem> {
        self.system(self.player_position)
    }

    /// All lanes touching `id`, whichever pass created them.
    pub fn hyperlanes_of(&self, id: SystemId) -> impl Iterator<Item = &Hyperlane> + '_ {
        self.hyperlanes.iter().filter(move |lane| lane.touches(id))
    }

    /// Systems one hyperlane away from `id`.
    pub fn neighbors(&self, id: SystemId) -> Vec<SystemId> {
        self.hyperlanes_of(id)
            .filter_map(|lane| lane.other_end(id))
            .collect()
    }

    pub fn are_connected(&self, a: SystemId, b: SystemId) -> bool {
        self.hyperlanes.iter().any(|lane| lane.connects(a, b))
    }

    /// Record that the player has explored `id`.
    pub fn mark_explored(&mut self, id: SystemId) -> Result<(), GalaxyError> {
        let system = self.system_mut(id).ok_or(GalaxyError::UnknownSystem(id))?;
        system.explored = true;
        Ok(())
    }

    pub fn set_controlling_faction(
        &mut self,
        id: SystemId,
        faction: Option<String>,
    ) -> Result<(), GalaxyError> {
        let system = self.system_mut(id).ok_or(GalaxyError::UnknownSystem(id))?;
        system.controlling_faction = faction;
        Ok(())
    }

    /// Store a planned route. Every step must exist and consecutive steps
    /// must share a hyperlane.
    pub fn set_player_route(&mut self, route: Vec<SystemId>) -> Result<(), GalaxyError> {
        self.check_route(&route)?;
        self.player_route = Some(route);
        Ok(())
    }

    pub fn clear_player_route(&mut self) {
        self.player_route = None;
    }

    fn check_route(&self, route: &[SystemId]) -> Result<(), GalaxyError> {
        self.check_route_ids(route)?;
        for step in route.windows(2) {
            if !self.are_connected(step[0], step[1]) {
                return Err(GalaxyError::RouteNotConnected {
                    from: step[0],
                    to: step[1],
                });
            }
        }
        Ok(())
    }

    fn check_route_ids(&self, route: &[SystemId]) -> Result<(), GalaxyError> {
        match route.iter().find(|id| self.system(**id).is_none()) {
            Some(missing) => Err(GalaxyError::UnknownSystem(*missing)),
            None => Ok(()),
        }
    }

    /// The danger rating as the player sees it: lanes with no explored
    /// endpoint read as [`Danger::Unexplored`].
    pub fn perceived_danger(&self, lane: &Hyperlane) -> Danger {
        let explored = |id| self.system(id).is_some_and(|s| s.explored);
        if explored(lane.from_system_id) || explored(lane.to_system_id) {
            lane.danger
        } else {
            Danger::Unexplored
        }
    }

    /// Check the structural invariants consumers rely on.
    ///
    /// A stored route only needs to name existing systems. Its steps may
    /// include jumps that do not follow a hyperlane.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        let mut ids = HashSet::with_capacity(self.systems.len());
        for system in &self.systems {
            if !ids.insert(system.id) {
                return Err(GalaxyError::DuplicateSystemId(system.id));
            }
        }

        let mut pairs = HashSet::with_capacity(self.hyperlanes.len());
        for lane in &self.hyperlanes {
            let (from, to) = (lane.from_system_id, lane.to_system_id);
            if from == to {
                return Err(GalaxyError::SelfLoop(from));
            }
            if !ids.contains(&from) || !ids.contains(&to) {
                return Err(GalaxyError::DanglingHyperlane { from, to });
            }
            if !pairs.insert(lane_key(from, to)) {
                let (a, b) = lane_key(from, to);
                return Err(GalaxyError::DuplicateHyperlane(a, b));
            }
        }

        if !ids.contains(&self.player_position) {
            return Err(GalaxyError::UnknownSystem(self.player_position));
        }
        if let Some(route) = &self.player_route {
            self.check_route_ids(route)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, GalaxyError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, GalaxyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a snapshot written by [`Galaxy::to_json`], rejecting ones that
    /// break the structural invariants.
    pub fn from_json(json: &str) -> Result<Self, GalaxyError> {
        let galaxy: Galaxy = serde_json::from_str(json)?;
        galaxy.validate()?;
        Ok(galaxy)
    }

    pub fn summary(&self) -> GalaxySummary {
        self.summary_with(&analyze_connectivity(self))
    }

    /// Like [`Galaxy::summary`], reusing a connectivity report already
    /// computed for this galaxy.
    pub fn summary_with(&self, connectivity: &ConnectivityReport) -> GalaxySummary {
        let mut star_types = BTreeMap::new();
        for system in &self.systems {
            *star_types.entry(system.star_type).or_insert(0) += 1;
        }

        GalaxySummary {
            shape: self.shape,
            systems: self.systems.len(),
            hyperlanes: self.hyperlanes.len(),
            dangerous_hyperlanes: self
                .hyperlanes
                .iter()
                .filter(|l| l.danger == Danger::Dangerous)
                .count(),
            explored: self.systems.iter().filter(|s| s.explored).count(),
            anomalies: self.systems.iter().filter(|s| s.anomaly_present).count(),
            isolated: connectivity.isolated.len(),
            star_types,
        }
    }
}

/// Headline numbers for a galaxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalaxySummary {
    pub shape: GalaxyShape,
    pub systems: usize,
    pub hyperlanes: usize,
    pub dangerous_hyperlanes: usize,
    pub explored: usize,
    pub anomalies: usize,
    pub isolated: usize,
    pub star_types: BTreeMap<StarType, usize>,
}

impl GalaxySummary {
    pub fn describe(&self) -> String {
        format!(
            "{} galaxy: {} systems, {} hyperlanes ({} dangerous), {} explored, {} anomalies, {} isolated",
            self.shape,
            self.systems,
            self.hyperlanes,
            self.dangerous_hyperlanes,
            self.explored,
            self.anomalies,
            self.isolated
        )
    }
}
