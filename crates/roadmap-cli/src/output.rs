//! Output formatting for route rendering.

use anyhow::{Context, Result};
use clap::ValueEnum;

use roadmap_lib::{RouteRenderMode, RouteSummary};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Header line plus the space-separated waypoint identifiers.
    #[default]
    Text,
    /// One line per step with street names and leg lengths.
    Detailed,
    /// Pretty-printed JSON summary.
    Json,
}

/// Render a route summary in the requested format.
pub fn render_summary(summary: &RouteSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Detailed => Ok(summary.render(RouteRenderMode::Detailed)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(summary).context("failed to serialise route")?;
            json.push('\n');
            Ok(json)
        }
    }
}
