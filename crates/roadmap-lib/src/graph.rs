use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::keypoints::{KeyPoints, Waypoint, WaypointId};
use crate::roads::{Way, WayId};

/// Edge within the road graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: WaypointId,
    /// Great-circle length in meters.
    pub distance: f64,
    /// Way that most recently wrote this edge.
    pub way: WayId,
}

/// Undirected weighted road graph used by pathfinding algorithms.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    waypoints: Arc<HashMap<WaypointId, Waypoint>>,
    adjacency: Arc<HashMap<WaypointId, Vec<Edge>>>,
    ways: Arc<HashMap<WayId, Way>>,
    incident: Arc<HashMap<WaypointId, Vec<WayId>>>,
}

impl Graph {
    pub fn waypoint(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.get(&id)
    }

    pub fn contains(&self, id: WaypointId) -> bool {
        self.waypoints.contains_key(&id)
    }

    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.adjacency.values().map(Vec::len).sum();
        directed / 2
    }

    /// Return the neighbours for a given waypoint identifier.
    pub fn neighbours(&self, id: WaypointId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_between(&self, from: WaypointId, to: WaypointId) -> Option<&Edge> {
        self.neighbours(from).iter().find(|edge| edge.target == to)
    }

    pub fn way(&self, id: WayId) -> Option<&Way> {
        self.ways.get(&id)
    }

    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    /// Ways passing through a waypoint, in the order they were read.
    pub fn ways_at(&self, id: WaypointId) -> &[WayId] {
        self.incident.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Incrementally connects waypoints into a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    waypoints: HashMap<WaypointId, Waypoint>,
    adjacency: HashMap<WaypointId, Vec<Edge>>,
    ways: HashMap<WayId, Way>,
    incident: HashMap<WaypointId, Vec<WayId>>,
    skipped_pairs: usize,
}

impl GraphBuilder {
    pub fn new(key_points: KeyPoints) -> Self {
        Self {
            waypoints: key_points.into_waypoints(),
            ..Self::default()
        }
    }

    /// Connect each consecutive pair of `members` with a symmetric edge.
    ///
    /// An edge that already exists takes the newly computed weight. Pairs that
    /// reference an unknown waypoint are skipped.
    pub fn insert_way(&mut self, way: Way, members: &[WaypointId]) {
        for pair in members.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if from == to {
                continue;
            }
            let (Some(a), Some(b)) = (self.waypoints.get(&from), self.waypoints.get(&to)) else {
                warn!(way = way.id, from, to, "way references unknown key point");
                self.skipped_pairs += 1;
                continue;
            };

            let distance = a.position.distance_to(&b.position);
            self.insert_edge(from, to, distance, way.id);
            self.insert_edge(to, from, distance, way.id);
        }

        for &member in members {
            if !self.waypoints.contains_key(&member) {
                continue;
            }
            let ways = self.incident.entry(member).or_default();
            if !ways.contains(&way.id) {
                ways.push(way.id);
            }
        }

        self.ways.insert(way.id, way);
    }

    fn insert_edge(&mut self, from: WaypointId, to: WaypointId, distance: f64, way: WayId) {
        let edges = self.adjacency.entry(from).or_default();
        if let Some(existing) = edges.iter_mut().find(|edge| edge.target == to) {
            existing.distance = distance;
            existing.way = way;
            return;
        }
        edges.push(Edge {
            target: to,
            distance,
            way,
        });
    }

    /// Number of member pairs dropped because a waypoint was unknown.
    pub fn skipped_pairs(&self) -> usize {
        self.skipped_pairs
    }

    pub fn build(self) -> Graph {
        Graph {
            waypoints: Arc::new(self.waypoints),
            adjacency: Arc::new(self.adjacency),
            ways: Arc::new(self.ways),
            incident: Arc::new(self.incident),
        }
    }
}
