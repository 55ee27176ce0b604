//! Common test utilities and fixture helpers.
//!
//! Fixtures are laid out in meters east/north of the origin near the equator,
//! where one meter east maps to a fixed fraction of a degree of longitude.
#![allow(dead_code)]

use std::f64::consts::PI;
use std::fmt::Write as _;
use std::fs;

use roadmap_lib::{build_graph, DatasetPaths, LoadedGraph, WayId, WaypointId, EARTH_RADIUS_METERS};
use tempfile::TempDir;

/// Length of one degree of arc along a great circle.
pub const METERS_PER_DEGREE: f64 = EARTH_RADIUS_METERS * PI / 180.0;

/// Text fixture for the key point and road files.
#[derive(Debug, Clone, Default)]
pub struct RoadMapFixture {
    pub key_points: String,
    pub roads: String,
}

impl RoadMapFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key point `east` and `north` meters from the origin.
    pub fn point(mut self, id: WaypointId, east: f64, north: f64) -> Self {
        let _ = writeln!(
            self.key_points,
            "{id} {} {}",
            north / METERS_PER_DEGREE,
            east / METERS_PER_DEGREE
        );
        self
    }

    pub fn way(mut self, id: WayId, name: &str, members: &[WaypointId]) -> Self {
        let _ = writeln!(self.roads, "way {id}");
        let _ = writeln!(self.roads, "oneway 0");
        let _ = writeln!(self.roads, "name {name}");
        for member in members {
            let _ = writeln!(self.roads, "id {member}");
        }
        self
    }

    /// Append raw text to the road file.
    pub fn raw_roads(mut self, text: &str) -> Self {
        self.roads.push_str(text);
        self
    }

    pub fn build(&self) -> LoadedGraph {
        build_graph(&self.key_points, &self.roads)
    }

    /// Write both files into a fresh temporary directory.
    pub fn write(&self) -> (TempDir, DatasetPaths) {
        let dir = TempDir::new().expect("create temp dir");
        let paths = DatasetPaths::in_dir(dir.path());
        fs::write(&paths.key_points, &self.key_points).expect("write key points");
        fs::write(&paths.roads, &self.roads).expect("write roads");
        (dir, paths)
    }
}

/// Straight chain 1 - 2 - 3 with legs of 100 m and 150 m.
pub fn chain_fixture() -> RoadMapFixture {
    RoadMapFixture::new()
        .point(1, 0.0, 0.0)
        .point(2, 100.0, 0.0)
        .point(3, 250.0, 0.0)
        .way(10, "Chain Street", &[1, 2, 3])
}

/// Graph where relaxing in FIFO order settles waypoint 4 through the detour
/// via 6 before the straight road 1 - 2 - 3 - 4 - 5 is fully explored.
///
/// The shortest route from 1 to 5 is 400 m along the straight road.
pub fn detour_fixture() -> RoadMapFixture {
    RoadMapFixture::new()
        .point(1, 0.0, 0.0)
        .point(2, 100.0, 0.0)
        .point(3, 200.0, 0.0)
        .point(4, 300.0, 0.0)
        .point(5, 400.0, 0.0)
        .point(6, 150.0, 1000.0)
        .way(20, "Hill Road", &[1, 6, 4])
        .way(21, "Valley Road", &[1, 2, 3, 4, 5])
}

/// [`detour_fixture`] plus a side road 1 - 7 - 5 of about 721 m.
///
/// In FIFO order waypoint 4 is dequeued while it still carries the distance
/// through the hill detour, so it never offers 5 the 400 m straight route and
/// 5 keeps the side road as its predecessor.
pub fn side_road_fixture() -> RoadMapFixture {
    detour_fixture()
        .point(7, 200.0, -300.0)
        .way(22, "Side Road", &[1, 7, 5])
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
