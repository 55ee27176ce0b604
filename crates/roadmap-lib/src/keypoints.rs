use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, ParseTruncation, Result};
use crate::geo::GeoPosition;
use crate::tokens::Tokens;

/// Numeric identifier for a waypoint (key point).
pub type WaypointId = i64;

/// Geographic node of the road network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub id: WaypointId,
    /// Dense zero-based index assigned in file order.
    pub index: usize,
    pub position: GeoPosition,
}

/// Waypoints read from a key point file.
#[derive(Debug, Clone, Default)]
pub struct KeyPoints {
    waypoints: HashMap<WaypointId, Waypoint>,
    duplicates: usize,
    truncation: Option<ParseTruncation>,
}

impl KeyPoints {
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.values()
    }

    /// Number of records whose identifier had already been seen.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Warning recorded when reading stopped at a malformed record.
    pub fn truncation(&self) -> Option<&ParseTruncation> {
        self.truncation.as_ref()
    }

    /// Insert or overwrite a waypoint.
    ///
    /// A repeated identifier takes the new position but keeps its original
    /// index so indices stay contiguous.
    pub fn insert(&mut self, id: WaypointId, position: GeoPosition) {
        let next_index = self.waypoints.len();
        match self.waypoints.entry(id) {
            Entry::Occupied(mut entry) => {
                debug!(id, "duplicate key point overwrites earlier record");
                entry.get_mut().position = position;
                self.duplicates += 1;
            }
            Entry::Vacant(entry) => {
                entry.insert(Waypoint {
                    id,
                    index: next_index,
                    position,
                });
            }
        }
    }

    pub(crate) fn into_waypoints(self) -> HashMap<WaypointId, Waypoint> {
        self.waypoints
    }
}

/// Parse `<id> <latitude> <longitude>` triplets until end of input.
///
/// A token that fails to parse ends the read; the triplets before it are kept
/// and the failure is recorded as a [`ParseTruncation`].
pub fn parse_key_points(input: &str) -> KeyPoints {
    let mut key_points = KeyPoints::default();
    let mut tokens = Tokens::new(input);

    while let Some(first) = tokens.next() {
        let record = first
            .text
            .parse::<WaypointId>()
            .map_err(|_| ParseTruncation {
                line: first.line,
                expected: "key point id",
                found: Some(first.text.to_string()),
            })
            .and_then(|id| {
                let latitude = tokens.parse_next::<f64>("latitude")?;
                let longitude = tokens.parse_next::<f64>("longitude")?;
                Ok((id, GeoPosition::new(latitude, longitude)))
            });

        match record {
            Ok((id, position)) => key_points.insert(id, position),
            Err(truncation) => {
                warn!(%truncation, "key point file truncated");
                key_points.truncation = Some(truncation);
                break;
            }
        }
    }

    key_points
}

/// Read and parse a key point file.
pub fn load_key_points(path: &Path) -> Result<KeyPoints> {
    let input = fs::read_to_string(path).map_err(|source| Error::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let key_points = parse_key_points(&input);
    debug!(
        path = %path.display(),
        waypoints = key_points.len(),
        duplicates = key_points.duplicates(),
        "loaded key points"
    );
    Ok(key_points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_dense_indices_in_file_order() {
        let key_points = parse_key_points("10 48.0 17.0\n20 48.1 17.1\n30 48.2 17.2\n");
        assert_eq!(key_points.len(), 3);
        assert_eq!(key_points.get(10).map(|w| w.index), Some(0));
        assert_eq!(key_points.get(20).map(|w| w.index), Some(1));
        assert_eq!(key_points.get(30).map(|w| w.index), Some(2));
        assert!(key_points.truncation().is_none());
    }

    #[test]
    fn triplets_may_span_lines() {
        let key_points = parse_key_points("1 48.0\n17.0 2\n48.5 17.5");
        assert_eq!(key_points.len(), 2);
        let second = key_points.get(2).expect("second waypoint");
        assert_eq!(second.position, GeoPosition::new(48.5, 17.5));
    }

    #[test]
    fn duplicate_id_overwrites_position_and_keeps_index() {
        let key_points = parse_key_points("1 1.0 1.0\n2 2.0 2.0\n1 3.0 3.0\n");
        assert_eq!(key_points.len(), 2);
        assert_eq!(key_points.duplicates(), 1);
        let first = key_points.get(1).expect("waypoint 1");
        assert_eq!(first.index, 0);
        assert_eq!(first.position, GeoPosition::new(3.0, 3.0));
    }

    #[test]
    fn malformed_token_truncates_and_keeps_earlier_records() {
        let key_points = parse_key_points("1 1.0 1.0\n2 north 2.0\n3 3.0 3.0\n");
        assert_eq!(key_points.len(), 1);
        let truncation = key_points.truncation().expect("truncation recorded");
        assert_eq!(truncation.line, 2);
        assert_eq!(truncation.expected, "latitude");
        assert_eq!(truncation.found.as_deref(), Some("north"));
    }

    #[test]
    fn incomplete_trailing_triplet_is_reported() {
        let key_points = parse_key_points("1 1.0 1.0\n2 2.0");
        assert_eq!(key_points.len(), 1);
        let truncation = key_points.truncation().expect("truncation recorded");
        assert_eq!(truncation.expected, "longitude");
        assert_eq!(truncation.found, None);
    }

    #[test]
    fn empty_input_yields_no_waypoints() {
        let key_points = parse_key_points("");
        assert!(key_points.is_empty());
        assert!(key_points.truncation().is_none());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load_key_points(Path::new("/definitely/not/here/keyPoints.txt"))
            .expect_err("missing file");
        assert!(matches!(err, Error::FileUnavailable { .. }));
    }
}
