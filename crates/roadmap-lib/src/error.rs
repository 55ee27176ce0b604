use std::path::PathBuf;

use thiserror::Error;

use crate::keypoints::WaypointId;

/// Convenient result alias for the road map library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// An input file could not be opened or read.
    #[error("file {path} could not be opened")]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No suitable data directory could be resolved for this platform.
    #[error("failed to resolve a data directory for the road map files")]
    DataDirUnavailable,

    /// Raised when a query endpoint is not a known waypoint.
    #[error("unknown waypoint: {id}")]
    UnknownWaypoint { id: WaypointId },

    /// Raised when no route could be found between two waypoints.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: WaypointId, goal: WaypointId },

    /// Raised when a computed route plan lacks any waypoints.
    #[error("route plan was empty")]
    EmptyRoutePlan,
}

/// Warning raised when a record fails to parse.
///
/// Reading stops at the offending token; everything read before it is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse truncated early at line {line}: expected {expected}, found {}", describe_token(.found))]
pub struct ParseTruncation {
    pub line: usize,
    pub expected: &'static str,
    pub found: Option<String>,
}

fn describe_token(found: &Option<String>) -> String {
    match found {
        Some(token) => format!("'{token}'"),
        None => "end of input".to_string(),
    }
}
