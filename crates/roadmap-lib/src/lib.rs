//! Road map library entry points.
//!
//! This crate reads the key point and road files, builds an undirected graph
//! weighted by great-circle distance, and runs shortest-path searches over it.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod keypoints;
pub mod loader;
pub mod output;
pub mod path;
pub mod roads;
pub mod routing;

mod tokens;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use dataset::{default_data_dir, resolve_dataset_paths, DatasetOverrides, DatasetPaths};
pub use error::{Error, ParseTruncation, Result};
pub use geo::{haversine_distance, GeoPosition, EARTH_RADIUS_METERS};
pub use graph::{Edge, Graph, GraphBuilder};
pub use keypoints::{load_key_points, parse_key_points, KeyPoints, Waypoint, WaypointId};
pub use loader::{build_graph, load_graph, LoadReport, LoadedGraph};
pub use output::{RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_route, find_route_a_star, find_route_dijkstra, find_route_fifo, Route};
pub use roads::{load_roads, parse_roads, RoadsReport, Way, WayId, DEFAULT_WAY_NAME};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
