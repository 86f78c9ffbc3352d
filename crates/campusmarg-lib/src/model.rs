//! Graph and route data types shared by the store, planners and cache.
//!
//! The serde representation mirrors the JSON documents exchanged with the
//! mobile client: camelCase field names, lowercase enum values, and
//! `accessible`/`bidirectional` defaulting to `true` when omitted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Walking speed in distance units per time unit.
pub const WALKING_SPEED: f64 = 1.4;

/// Classification of a node in the building graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Room,
    Corridor,
    Junction,
    Stair,
    Lift,
}

impl NodeKind {
    /// Stairs and lifts connect floors.
    pub fn is_transition(self) -> bool {
        matches!(self, NodeKind::Stair | NodeKind::Lift)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            NodeKind::Room => "room",
            NodeKind::Corridor => "corridor",
            NodeKind::Junction => "junction",
            NodeKind::Stair => "stair",
            NodeKind::Lift => "lift",
        };
        f.write_str(value)
    }
}

/// Planar position of a node on its floor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    /// Manhattan distance in raw (x, y) space.
    pub fn manhattan_to(&self, other: &Coordinates) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Addressable point in the building graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub floor: i32,
    pub coordinates: Coordinates,
    #[serde(default = "default_true")]
    pub accessible: bool,
    /// Identity of the physical stairwell or lift shaft this transition belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shaft: Option<String>,
}

impl Node {
    /// Convenience constructor for an accessible node without a shaft.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: NodeKind,
        floor: i32,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            floor,
            coordinates: Coordinates { x, y },
            accessible: true,
            shaft: None,
        }
    }

    pub fn inaccessible(mut self) -> Self {
        self.accessible = false;
        self
    }

    pub fn in_shaft(mut self, shaft: impl Into<String>) -> Self {
        self.shaft = Some(shaft.into());
        self
    }

    /// Position of this node including its floor.
    pub fn position(&self) -> StepCoordinate {
        StepCoordinate {
            x: self.coordinates.x,
            y: self.coordinates.y,
            floor: self.floor,
        }
    }
}

/// Weighted connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
    #[serde(default = "default_true")]
    pub bidirectional: bool,
}

impl Edge {
    /// Bidirectional edge between `from` and `to`.
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
            bidirectional: true,
        }
    }

    /// Edge that may only be walked from `from` to `to`.
    pub fn one_way(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            bidirectional: false,
            ..Self::new(from, to, weight)
        }
    }
}

fn default_true() -> bool {
    true
}

/// Routing mode requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteMode {
    #[default]
    Normal,
    /// Excludes nodes flagged as not accessible.
    Wheelchair,
    Emergency,
}

impl RouteMode {
    /// Map the client's accessibility toggle onto a mode.
    pub fn from_accessibility(accessible: bool) -> Self {
        if accessible {
            RouteMode::Wheelchair
        } else {
            RouteMode::Normal
        }
    }

    /// Whether a node may appear on a route in this mode.
    pub fn admits(self, node: &Node) -> bool {
        self != RouteMode::Wheelchair || node.accessible
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteMode::Normal => "normal",
            RouteMode::Wheelchair => "wheelchair",
            RouteMode::Emergency => "emergency",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(RouteMode::Normal),
            "wheelchair" => Ok(RouteMode::Wheelchair),
            "emergency" => Ok(RouteMode::Emergency),
            other => Err(format!("unknown route mode '{other}'")),
        }
    }
}

/// Position of a step endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepCoordinate {
    pub x: f64,
    pub y: f64,
    pub floor: i32,
}

/// One edge traversal rendered with an instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub from: String,
    pub to: String,
    pub coordinates: [StepCoordinate; 2],
    pub instruction: String,
}

/// Complete route with aggregate distance and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    pub mode: RouteMode,
    pub path: Vec<PathStep>,
    pub total_distance: f64,
    pub total_time: f64,
    #[serde(default)]
    pub cached: bool,
}

impl PathResult {
    /// Result representing "no route"; callers must not read it as a zero-length walk.
    pub fn unreachable(mode: RouteMode) -> Self {
        Self {
            mode,
            path: Vec::new(),
            total_distance: 0.0,
            total_time: 0.0,
            cached: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Id of the first node on the route.
    pub fn origin(&self) -> Option<&str> {
        self.path.first().map(|step| step.from.as_str())
    }

    /// Id of the last node on the route.
    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(|step| step.to.as_str())
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Walking time for a distance at [`WALKING_SPEED`].
pub fn walking_time(distance: f64) -> f64 {
    round2(distance / WALKING_SPEED)
}

/// Route query as received from the client.
///
/// On the wire the mode is given either as the client's boolean
/// `accessibilityMode` toggle or as an explicit `mode`. Unknown fields are
/// rejected so a misspelled toggle cannot silently fall back to normal mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RouteQueryWire")]
pub struct RouteQuery {
    pub origin_id: String,
    pub destination_id: String,
    pub mode: RouteMode,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RouteQueryWire {
    origin_id: String,
    destination_id: String,
    #[serde(default)]
    mode: Option<RouteMode>,
    #[serde(default)]
    accessibility_mode: Option<bool>,
}

impl TryFrom<RouteQueryWire> for RouteQuery {
    type Error = String;

    fn try_from(wire: RouteQueryWire) -> std::result::Result<Self, Self::Error> {
        let mode = match (wire.mode, wire.accessibility_mode) {
            (Some(mode), Some(accessible)) if (mode == RouteMode::Wheelchair) != accessible => {
                return Err(format!("mode {mode} contradicts accessibilityMode {accessible}"));
            }
            (Some(mode), _) => mode,
            (None, Some(accessible)) => RouteMode::from_accessibility(accessible),
            (None, None) => RouteMode::default(),
        };
        Ok(Self::new(wire.origin_id, wire.destination_id, mode))
    }
}

impl RouteQuery {
    pub fn new(
        origin_id: impl Into<String>,
        destination_id: impl Into<String>,
        mode: RouteMode,
    ) -> Self {
        Self {
            origin_id: origin_id.into(),
            destination_id: destination_id.into(),
            mode,
        }
    }

    /// Build a query from the client's `accessibilityMode` toggle.
    pub fn from_accessibility(
        origin_id: impl Into<String>,
        destination_id: impl Into<String>,
        accessibility_mode: bool,
    ) -> Self {
        Self::new(
            origin_id,
            destination_id,
            RouteMode::from_accessibility(accessibility_mode),
        )
    }
}
