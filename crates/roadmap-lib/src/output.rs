use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::GeoPosition;
use crate::graph::Graph;
use crate::keypoints::WaypointId;
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Header line followed by the space-separated identifiers.
    PlainText,
    /// One line per step with street name and leg length.
    Detailed,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: WaypointId,
    /// Names of every way passing through the endpoint.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub streets: Vec<String>,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: WaypointId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<GeoPosition>,
    /// Name of the way used to reach this step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Length of the leg ending at this step, in meters.
    pub distance: f64,
}

impl RouteStep {
    fn display_street(&self) -> &str {
        self.street.as_deref().unwrap_or("-")
    }
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    /// Total route length in meters.
    pub distance: f64,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary annotated with positions and street names.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        let (Some(&first), Some(&last)) = (plan.steps.first(), plan.steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut previous: Option<WaypointId> = None;
        let mut steps = Vec::with_capacity(plan.steps.len());
        for (index, &id) in plan.steps.iter().enumerate() {
            let edge = previous.and_then(|from| graph.edge_between(from, id));
            steps.push(RouteStep {
                index,
                id,
                position: graph.waypoint(id).map(|waypoint| waypoint.position),
                street: edge
                    .and_then(|edge| graph.way(edge.way))
                    .map(|way| way.name.clone()),
                distance: edge.map(|edge| edge.distance).unwrap_or(0.0),
            });
            previous = Some(id);
        }

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            distance: plan.distance,
            start: endpoint(graph, first),
            goal: endpoint(graph, last),
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Detailed => self.render_detailed(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Road from {} to {}:", self.start.id, self.goal.id);
        let _ = writeln!(buffer);
        let joined = self
            .steps
            .iter()
            .map(|step| step.id.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(buffer, "{joined}");
        buffer
    }

    fn render_detailed(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Road from {} to {} ({} hops, {:.1} m, algorithm: {})",
            self.start.id, self.goal.id, self.hops, self.distance, self.algorithm
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: {} via {} (+{:.1} m)",
                step.index,
                step.id,
                step.display_street(),
                step.distance
            );
        }
        buffer
    }
}

fn endpoint(graph: &Graph, id: WaypointId) -> RouteEndpoint {
    RouteEndpoint {
        id,
        streets: graph
            .ways_at(id)
            .iter()
            .filter_map(|way| graph.way(*way))
            .map(|way| way.name.clone())
            .collect(),
    }
}
