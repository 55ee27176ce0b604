//! Route command handler for computing paths between waypoints.

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::{info, warn};

use roadmap_lib::{
    load_graph, plan_route, resolve_dataset_paths, DatasetOverrides, LoadReport, RouteAlgorithm,
    RouteRequest, RouteSummary, WaypointId,
};

use crate::output::{render_summary, OutputFormat};

/// Search algorithm names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    /// Dijkstra's algorithm (shortest distance).
    #[default]
    Dijkstra,
    /// A* guided by great-circle distance.
    AStar,
    /// FIFO-order relaxation; may return longer routes.
    Fifo,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
            AlgorithmArg::Fifo => RouteAlgorithm::Fifo,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub dataset: DatasetOverrides,
    /// Source and destination, when a query was requested.
    pub endpoints: Option<(WaypointId, WaypointId)>,
    pub algorithm: AlgorithmArg,
    pub format: OutputFormat,
}

/// Load the road map and, when endpoints were given, render the route.
///
/// Returns the rendered output, or `None` when no query was requested.
pub fn handle_route_command(args: &RouteCommandArgs) -> Result<Option<String>> {
    let paths = resolve_dataset_paths(&args.dataset)
        .context("failed to resolve the road map file locations")?;
    let loaded = load_graph(&paths).with_context(|| {
        format!(
            "failed to load road map from {} and {}",
            paths.key_points.display(),
            paths.roads.display()
        )
    })?;
    report_warnings(&loaded.report);

    let Some((start, goal)) = args.endpoints else {
        info!("no source and destination given; skipping route query");
        return Ok(None);
    };

    let request = RouteRequest::new(start, goal, args.algorithm.into());
    let plan = plan_route(&loaded.graph, &request)?;
    let summary = RouteSummary::from_plan(&loaded.graph, &plan)?;
    render_summary(&summary, args.format).map(Some)
}

fn report_warnings(report: &LoadReport) {
    if let Some(truncation) = &report.key_points_truncation {
        warn!("key point file: {truncation}");
    }
    if let Some(truncation) = &report.roads.truncation {
        warn!("road file: {truncation}");
    }
    if report.skipped_pairs > 0 {
        warn!(
            skipped = report.skipped_pairs,
            "road segments referenced unknown key points"
        );
    }
}
