use std::fs;
use std::mem;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::{Error, ParseTruncation, Result};
use crate::graph::GraphBuilder;
use crate::keypoints::WaypointId;
use crate::tokens::Tokens;

/// Numeric identifier for a way.
pub type WayId = i64;

/// Name given to ways that never carry a `name` or `operator` tag.
pub const DEFAULT_WAY_NAME: &str = "NONAME";

/// Road attributes shared by every segment of one way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Way {
    pub id: WayId,
    /// Parsed and retained; routing treats every way as two-way.
    pub one_way: bool,
    pub name: String,
}

impl Way {
    fn unnamed(id: WayId) -> Self {
        Self {
            id,
            one_way: false,
            name: DEFAULT_WAY_NAME.to_string(),
        }
    }
}

/// Keyword tags recognised in a road file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Way,
    Id,
    OneWay,
    Name,
    Operator,
}

impl Tag {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "way" => Some(Tag::Way),
            "id" => Some(Tag::Id),
            "oneway" => Some(Tag::OneWay),
            "name" => Some(Tag::Name),
            "operator" => Some(Tag::Operator),
            _ => None,
        }
    }
}

/// Statistics gathered while reading a road file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadsReport {
    /// Ways committed to the graph.
    pub ways: usize,
    /// Blocks discarded because they had no usable way identifier.
    pub dropped_ways: usize,
    /// Tokens outside the tag vocabulary.
    pub ignored_tokens: usize,
    pub truncation: Option<ParseTruncation>,
}

#[derive(Debug)]
struct PendingWay {
    way: Way,
    members: Vec<WaypointId>,
}

impl PendingWay {
    fn new(id: WayId) -> Self {
        Self {
            way: Way::unnamed(id),
            members: Vec::new(),
        }
    }

    fn commit(self, builder: &mut GraphBuilder, report: &mut RoadsReport) {
        if self.way.id != 0 {
            builder.insert_way(self.way, &self.members);
            report.ways += 1;
        } else if !self.members.is_empty() {
            warn!(
                members = self.members.len(),
                "dropping key points listed outside a way block"
            );
            report.dropped_ways += 1;
        }
    }
}

/// Parse a tagged road stream and connect every way into `builder`.
///
/// `way <id>` starts a new block and commits the previous one. The block still
/// pending at end of input is committed as well, so files need no trailing
/// sentinel record.
pub fn parse_roads(input: &str, builder: &mut GraphBuilder) -> RoadsReport {
    let mut report = RoadsReport::default();
    let mut tokens = Tokens::new(input);
    let mut pending = PendingWay::new(0);

    while let Some(token) = tokens.next() {
        let Some(tag) = Tag::parse(token.text) else {
            trace!(line = token.line, token = token.text, "ignoring unknown token");
            report.ignored_tokens += 1;
            continue;
        };

        let step = match tag {
            Tag::Way => tokens.parse_next::<WayId>("way id").map(|id| {
                mem::replace(&mut pending, PendingWay::new(id)).commit(builder, &mut report);
            }),
            Tag::Id => tokens
                .parse_next::<WaypointId>("key point id")
                .map(|id| pending.members.push(id)),
            Tag::OneWay => tokens
                .parse_next::<u8>("oneway flag")
                .and_then(|flag| match flag {
                    0 => Ok(false),
                    1 => Ok(true),
                    other => Err(ParseTruncation {
                        line: token.line,
                        expected: "oneway flag",
                        found: Some(other.to_string()),
                    }),
                })
                .map(|one_way| pending.way.one_way = one_way),
            Tag::Name | Tag::Operator => {
                pending.way.name = tokens.rest_of_line().to_string();
                Ok(())
            }
        };

        if let Err(truncation) = step {
            warn!(%truncation, "road file truncated");
            report.truncation = Some(truncation);
            break;
        }
    }

    pending.commit(builder, &mut report);
    report
}

/// Read a road file and connect every way into `builder`.
pub fn load_roads(path: &Path, builder: &mut GraphBuilder) -> Result<RoadsReport> {
    let input = fs::read_to_string(path).map_err(|source| Error::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let report = parse_roads(&input, builder);
    debug!(
        path = %path.display(),
        ways = report.ways,
        ignored_tokens = report.ignored_tokens,
        "loaded roads"
    );
    Ok(report)
}
