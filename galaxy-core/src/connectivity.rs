//! Reachability analysis over the hyperlane graph.
//!
//! The nearest-neighbour builder does not guarantee a connected galaxy. This
//! module reports the components so callers can decide what to do with
//! stranded systems; it never adds lanes.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::galaxy::{Galaxy, SystemId};

/// Connected components of a galaxy's hyperlane graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectivityReport {
    /// Components sorted largest first; ids within a component are ascending.
    pub components: Vec<Vec<SystemId>>,
    /// Systems with no hyperlane at all.
    pub isolated: Vec<SystemId>,
}

impl ConnectivityReport {
    /// True when every system can reach every other (an empty galaxy counts).
    pub fn is_connected(&self) -> bool {
        self.components.len() <= 1
    }

    pub fn largest_component_size(&self) -> usize {
        self.components.first().map_or(0, Vec::len)
    }
}

struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}

/// Group systems by reachability through hyperlanes.
///
/// Lanes referencing unknown systems are ignored.
pub fn analyze_connectivity(galaxy: &Galaxy) -> ConnectivityReport {
    let index: HashMap<SystemId, usize> = galaxy
        .systems
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id, i))
        .collect();

    let mut sets = DisjointSet::new(galaxy.systems.len());
    let mut degree = vec![0usize; galaxy.systems.len()];

    for lane in &galaxy.hyperlanes {
        if let (Some(&a), Some(&b)) = (
            index.get(&lane.from_system_id),
            index.get(&lane.to_system_id),
        ) {
            sets.union(a, b);
            degree[a] += 1;
            degree[b] += 1;
        }
    }

    let mut groups: BTreeMap<usize, Vec<SystemId>> = BTreeMap::new();
    for (i, system) in galaxy.systems.iter().enumerate() {
        groups.entry(sets.find(i)).or_default().push(system.id);
    }

    let mut components: Vec<Vec<SystemId>> = groups
        .into_values()
        .map(|mut ids| {
            ids.sort();
            ids
        })
        .collect();
    components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])));

    let mut isolated: Vec<SystemId> = galaxy
        .systems
        .iter()
        .zip(&degree)
        .filter(|(_, &d)| d == 0)
        .map(|(s, _)| s.id)
        .collect();
    isolated.sort();

    ConnectivityReport {
        components,
        isolated,
    }
}
