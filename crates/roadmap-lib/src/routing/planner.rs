//! Route planning strategies.
//!
//! Each search algorithm sits behind the [`RoutePlanner`] trait so
//! `plan_route` can pick one at runtime.

use crate::graph::Graph;
use crate::keypoints::WaypointId;
use crate::path::{find_route_a_star, find_route_dijkstra, find_route_fifo, Route};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph.
    ///
    /// Returns `Some(route)` if the goal is reachable, `None` otherwise.
    fn find_path(&self, graph: &Graph, start: WaypointId, goal: WaypointId) -> Option<Route>;

    /// Whether the returned route is guaranteed to be the shortest one.
    fn is_optimal(&self) -> bool {
        true
    }
}

/// Dijkstra planner for weighted shortest routes.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &Graph, start: WaypointId, goal: WaypointId) -> Option<Route> {
        find_route_dijkstra(graph, start, goal)
    }
}

/// A* planner using great-circle distance as the heuristic.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(&self, graph: &Graph, start: WaypointId, goal: WaypointId) -> Option<Route> {
        find_route_a_star(graph, start, goal)
    }
}

/// FIFO relaxation planner.
///
/// Visits waypoints in discovery order rather than by distance, so routes can
/// be longer than necessary on unevenly weighted graphs.
#[derive(Debug, Clone, Default)]
pub struct FifoPlanner;

impl RoutePlanner for FifoPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Fifo
    }

    fn find_path(&self, graph: &Graph, start: WaypointId, goal: WaypointId) -> Option<Route> {
        find_route_fifo(graph, start, goal)
    }

    fn is_optimal(&self) -> bool {
        false
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
        RouteAlgorithm::Fifo => Box::new(FifoPlanner),
    }
}
