//! Route planning over a loaded road graph.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search algorithms (Dijkstra, A*, FIFO relaxation)
//! - [`RouteRequest`] - A single source/destination query
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! Each algorithm is wrapped in a [`RoutePlanner`] so the orchestration in
//! [`plan_route`] does not depend on any particular search.
//!
//! # Example
//!
//! ```no_run
//! use roadmap_lib::{load_graph, plan_route, DatasetPaths, RouteRequest};
//!
//! let paths = DatasetPaths::in_dir(std::path::Path::new("files"));
//! let loaded = load_graph(&paths)?;
//! let plan = plan_route(&loaded.graph, &RouteRequest::dijkstra(1, 42))?;
//! println!("{} hops, {:.0} m", plan.hop_count(), plan.distance);
//! # Ok::<(), roadmap_lib::Error>(())
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, FifoPlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::keypoints::WaypointId;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm with a priority queue (shortest distance).
    #[default]
    Dijkstra,
    /// A* search guided by great-circle distance to the goal.
    #[serde(rename = "a-star")]
    AStar,
    /// Relaxation in first-in-first-out visit order; not always optimal.
    Fifo,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
            RouteAlgorithm::Fifo => "fifo",
        };
        f.write_str(value)
    }
}

/// Single source/destination route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: WaypointId,
    pub goal: WaypointId,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    pub fn new(start: WaypointId, goal: WaypointId, algorithm: RouteAlgorithm) -> Self {
        Self {
            start,
            goal,
            algorithm,
        }
    }

    /// Convenience constructor for shortest-distance routes.
    pub fn dijkstra(start: WaypointId, goal: WaypointId) -> Self {
        Self::new(start, goal, RouteAlgorithm::Dijkstra)
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: WaypointId,
    pub goal: WaypointId,
    pub steps: Vec<WaypointId>,
    /// Total route length in meters.
    pub distance: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

fn ensure_known(graph: &Graph, id: WaypointId) -> Result<()> {
    if graph.contains(id) {
        Ok(())
    } else {
        Err(Error::UnknownWaypoint { id })
    }
}

/// Compute a route using the requested algorithm.
///
/// Both endpoints must be known waypoints. An unreachable destination is
/// reported as [`Error::RouteNotFound`].
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    ensure_known(graph, request.start)?;
    ensure_known(graph, request.goal)?;

    let planner = select_planner(request.algorithm);
    if !planner.is_optimal() {
        debug!(algorithm = %planner.algorithm(), "planner does not guarantee shortest routes");
    }

    let route = planner
        .find_path(graph, request.start, request.goal)
        .ok_or(Error::RouteNotFound {
            start: request.start,
            goal: request.goal,
        })?;

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        start: request.start,
        goal: request.goal,
        steps: route.steps,
        distance: route.distance,
    })
}
