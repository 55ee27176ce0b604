use tracing::info;

use crate::dataset::DatasetPaths;
use crate::error::{ParseTruncation, Result};
use crate::graph::{Graph, GraphBuilder};
use crate::keypoints::{load_key_points, parse_key_points, KeyPoints};
use crate::roads::{load_roads, parse_roads, RoadsReport};

/// Diagnostics collected while building a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub waypoints: usize,
    pub duplicate_waypoints: usize,
    pub key_points_truncation: Option<ParseTruncation>,
    pub roads: RoadsReport,
    /// Way segments dropped because a member was not a known key point.
    pub skipped_pairs: usize,
}

impl LoadReport {
    /// Whether either input stopped early at a malformed record.
    pub fn is_truncated(&self) -> bool {
        self.key_points_truncation.is_some() || self.roads.truncation.is_some()
    }
}

/// A built graph together with its load diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub report: LoadReport,
}

/// Build a graph from in-memory key point and road inputs.
pub fn build_graph(key_points: &str, roads: &str) -> LoadedGraph {
    let mut pending = PendingGraph::new(parse_key_points(key_points));
    let roads = parse_roads(roads, &mut pending.builder);
    pending.finish(roads)
}

/// Load both input files and build the road graph.
///
/// Each file is read completely before the next one is opened.
pub fn load_graph(paths: &DatasetPaths) -> Result<LoadedGraph> {
    let mut pending = PendingGraph::new(load_key_points(&paths.key_points)?);
    let roads = load_roads(&paths.roads, &mut pending.builder)?;
    let loaded = pending.finish(roads);

    info!(
        waypoints = loaded.graph.waypoint_count(),
        edges = loaded.graph.edge_count(),
        ways = loaded.graph.way_count(),
        truncated = loaded.report.is_truncated(),
        "road map loaded"
    );
    Ok(loaded)
}

struct PendingGraph {
    builder: GraphBuilder,
    report: LoadReport,
}

impl PendingGraph {
    fn new(key_points: KeyPoints) -> Self {
        let report = LoadReport {
            waypoints: key_points.len(),
            duplicate_waypoints: key_points.duplicates(),
            key_points_truncation: key_points.truncation().cloned(),
            ..LoadReport::default()
        };
        Self {
            builder: GraphBuilder::new(key_points),
            report,
        }
    }

    fn finish(mut self, roads: RoadsReport) -> LoadedGraph {
        self.report.roads = roads;
        self.report.skipped_pairs = self.builder.skipped_pairs();
        LoadedGraph {
            graph: self.builder.build(),
            report: self.report,
        }
    }
}
