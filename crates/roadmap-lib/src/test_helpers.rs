// Test-only helpers for `roadmap-lib` unit tests.
#![allow(dead_code)]
use crate::geo::GeoPosition;
use crate::graph::{Graph, GraphBuilder};
use crate::keypoints::{KeyPoints, WaypointId};
use crate::roads::{Way, WayId};

/// Builder that lays out waypoints and ways without going through text input.
///
/// Waypoints receive dense indices in the order they are added.
pub struct GraphFixture {
    key_points: KeyPoints,
    ways: Vec<(Way, Vec<WaypointId>)>,
}

impl GraphFixture {
    pub fn new() -> Self {
        Self {
            key_points: KeyPoints::default(),
            ways: Vec::new(),
        }
    }

    /// Add a waypoint on the equator, `id` thousandths of a degree east.
    pub fn waypoint(self, id: WaypointId) -> Self {
        self.waypoint_at(id, 0.0, id as f64 * 0.001)
    }

    pub fn waypoint_at(mut self, id: WaypointId, latitude: f64, longitude: f64) -> Self {
        self.key_points
            .insert(id, GeoPosition::new(latitude, longitude));
        self
    }

    pub fn way(mut self, id: WayId, members: &[WaypointId]) -> Self {
        self.ways.push((
            Way {
                id,
                one_way: false,
                name: format!("Way {id}"),
            },
            members.to_vec(),
        ));
        self
    }

    pub fn build(self) -> Graph {
        let mut builder = GraphBuilder::new(self.key_points);
        for (way, members) in self.ways {
            builder.insert_way(way, &members);
        }
        builder.build()
    }
}
