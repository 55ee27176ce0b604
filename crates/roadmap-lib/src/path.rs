use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::geo::GeoPosition;
use crate::graph::Graph;
use crate::keypoints::WaypointId;

/// Path found by a search, with its total length in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub steps: Vec<WaypointId>,
    pub distance: f64,
}

impl Route {
    fn single(id: WaypointId) -> Self {
        Self {
            steps: vec![id],
            distance: 0.0,
        }
    }
}

/// Per-query distances, predecessors, and visited flags indexed by the
/// waypoints' dense index.
struct SearchState {
    distances: Vec<f64>,
    predecessors: Vec<Option<WaypointId>>,
    visited: Vec<bool>,
}

impl SearchState {
    fn new(graph: &Graph, start_index: usize) -> Self {
        let count = graph.waypoint_count();
        let mut distances = vec![f64::INFINITY; count];
        distances[start_index] = 0.0;
        Self {
            distances,
            predecessors: vec![None; count],
            visited: vec![false; count],
        }
    }

    fn relax(&mut self, from: WaypointId, to_index: usize, candidate: f64) -> bool {
        if candidate < self.distances[to_index] {
            self.distances[to_index] = candidate;
            self.predecessors[to_index] = Some(from);
            true
        } else {
            false
        }
    }

    /// Walk predecessors back from `goal`.
    ///
    /// Returns `None` when `goal` was never reached. The walk is bounded by the
    /// waypoint count so a corrupt chain cannot loop. The route distance is the
    /// sum of the edges along the rebuilt steps, not the goal's tentative
    /// distance, which can be stale after FIFO relaxation.
    fn reconstruct(&self, graph: &Graph, start: WaypointId, goal: WaypointId) -> Option<Route> {
        let goal_index = index_of(graph, goal)?;
        if !self.distances[goal_index].is_finite() {
            return None;
        }

        let mut steps = vec![goal];
        let mut current = goal;
        while current != start {
            if steps.len() > self.distances.len() {
                return None;
            }
            current = self.predecessors[index_of(graph, current)?]?;
            steps.push(current);
        }
        steps.reverse();

        let mut distance = 0.0;
        for pair in steps.windows(2) {
            distance += graph.edge_between(pair[0], pair[1])?.distance;
        }
        Some(Route { steps, distance })
    }
}

fn index_of(graph: &Graph, id: WaypointId) -> Option<usize> {
    graph.waypoint(id).map(|waypoint| waypoint.index)
}

fn position_of(graph: &Graph, id: WaypointId) -> Option<GeoPosition> {
    graph.waypoint(id).map(|waypoint| waypoint.position)
}

/// Find the shortest route between `start` and `goal` using Dijkstra's algorithm.
pub fn find_route(graph: &Graph, start: WaypointId, goal: WaypointId) -> Option<Route> {
    find_route_dijkstra(graph, start, goal)
}

/// Run Dijkstra's algorithm with a min-priority queue keyed by tentative distance.
pub fn find_route_dijkstra(graph: &Graph, start: WaypointId, goal: WaypointId) -> Option<Route> {
    let start_index = index_of(graph, start)?;
    index_of(graph, goal)?;
    if start == goal {
        return Some(Route::single(start));
    }

    let mut state = SearchState::new(graph, start_index);
    let mut queue = BinaryHeap::new();
    queue.push(QueueEntry::new(start, start_index, 0.0));

    while let Some(entry) = queue.pop() {
        if state.visited[entry.index] {
            continue;
        }
        state.visited[entry.index] = true;

        if entry.node == goal {
            break;
        }

        let current_distance = state.distances[entry.index];
        for edge in graph.neighbours(entry.node) {
            let Some(next_index) = index_of(graph, edge.target) else {
                continue;
            };
            if state.visited[next_index] {
                continue;
            }
            let next_cost = current_distance + edge.distance;
            if state.relax(entry.node, next_index, next_cost) {
                queue.push(QueueEntry::new(edge.target, next_index, next_cost));
            }
        }
    }

    state.reconstruct(graph, start, goal)
}

/// Run A* search guided by the great-circle distance to the goal.
///
/// Edge weights are great-circle distances themselves, so the heuristic never
/// overestimates.
pub fn find_route_a_star(graph: &Graph, start: WaypointId, goal: WaypointId) -> Option<Route> {
    let start_index = index_of(graph, start)?;
    let goal_position = position_of(graph, goal)?;
    if start == goal {
        return Some(Route::single(start));
    }

    let heuristic = |id: WaypointId| {
        position_of(graph, id)
            .map(|position| position.distance_to(&goal_position))
            .unwrap_or(0.0)
    };

    let mut state = SearchState::new(graph, start_index);
    let mut queue = BinaryHeap::new();
    queue.push(AStarEntry::new(start, start_index, 0.0, heuristic(start)));

    while let Some(entry) = queue.pop() {
        if entry.cost.0 > state.distances[entry.index] {
            continue;
        }

        if entry.node == goal {
            break;
        }

        for edge in graph.neighbours(entry.node) {
            let Some(next_index) = index_of(graph, edge.target) else {
                continue;
            };
            let tentative = entry.cost.0 + edge.distance;
            if state.relax(entry.node, next_index, tentative) {
                queue.push(AStarEntry::new(
                    edge.target,
                    next_index,
                    tentative,
                    heuristic(edge.target),
                ));
            }
        }
    }

    state.reconstruct(graph, start, goal)
}

/// Relax edges in plain first-in-first-out visit order.
///
/// A waypoint is marked visited when it is dequeued and when it is first
/// discovered, so each is enqueued at most once. Every neighbour is relaxed
/// regardless of its visited flag and the search runs until the queue drains.
/// Without a priority queue the result is not guaranteed to be the shortest
/// path on graphs with uneven weights. Only the predecessor chain is kept from
/// the search; the returned distance is the length of that chain.
pub fn find_route_fifo(graph: &Graph, start: WaypointId, goal: WaypointId) -> Option<Route> {
    let start_index = index_of(graph, start)?;
    index_of(graph, goal)?;
    if start == goal {
        return Some(Route::single(start));
    }

    let mut state = SearchState::new(graph, start_index);
    let mut queue = VecDeque::new();
    queue.push_back((start, start_index));

    while let Some((current, current_index)) = queue.pop_front() {
        state.visited[current_index] = true;
        let current_distance = state.distances[current_index];

        for edge in graph.neighbours(current) {
            let Some(next_index) = index_of(graph, edge.target) else {
                continue;
            };
            if !state.visited[next_index] {
                state.visited[next_index] = true;
                queue.push_back((edge.target, next_index));
            }
            state.relax(current, next_index, current_distance + edge.distance);
        }
    }

    state.reconstruct(graph, start, goal)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: WaypointId,
    index: usize,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: WaypointId, index: usize, cost: f64) -> Self {
        Self {
            node,
            index,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: WaypointId,
    index: usize,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(node: WaypointId, index: usize, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            index,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
