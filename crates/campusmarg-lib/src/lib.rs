//! CampusMarg library entry points.
//!
//! This crate loads an indoor building graph (rooms, corridors, junctions,
//! stairs and lifts across floors) into memory and plans walking routes over
//! it, optionally restricted to accessible nodes. Higher-level consumers (the
//! CLI, a future HTTP front end) should only depend on the functions exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod cache;
pub mod error;
pub mod graph;
pub mod instruction;
pub mod log;
pub mod model;
pub mod path;
pub mod routing;
pub mod service;
pub mod snapshot;
pub mod transition;

pub use cache::{CacheKey, PathCache};
pub use error::{Error, Result};
pub use graph::{GraphStore, GraphView, Link};
pub use instruction::{instruction_for, vertical_instruction};
pub use log::{read_path_log, JsonLinesPathLog, NullPathLog, PathLog, PathLogEntry};
pub use model::{
    Coordinates, Edge, Node, NodeKind, PathResult, PathStep, RouteMode, RouteQuery,
    StepCoordinate,
};
pub use path::{plan_single_floor, shortest_path};
pub use routing::{plan_route, CrossFloorPlanner, RoutePlanner, SingleFloorPlanner};
pub use service::RouteService;
pub use snapshot::{load_graph_document, load_graph_store, parse_graph_document, GraphDocument};
pub use transition::{nearest_transition, nearest_transition_on_floor};
