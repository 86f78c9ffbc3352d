//! Route planning module.
//!
//! This module provides:
//! - [`RoutePlanner`] - Strategy trait implemented by the planners
//! - [`SingleFloorPlanner`] - Dijkstra between two nodes on one floor
//! - [`CrossFloorPlanner`] - Stitches routes across floors through a shaft
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Example
//!
//! ```ignore
//! use campusmarg_lib::{load_graph_store, plan_route, RouteQuery};
//!
//! let store = load_graph_store("docs/fixtures/campus.json".as_ref())?;
//! let query = RouteQuery::from_accessibility("R101", "R203", true);
//! let result = plan_route(&store, &query)?;
//! println!("{} steps, {} units", result.path.len(), result.total_distance);
//! ```

mod planner;

pub use planner::{
    select_planner, vertical_steps, CrossFloorPlanner, RoutePlanner, SingleFloorPlanner,
};

use crate::error::Result;
use crate::graph::GraphStore;
use crate::model::{PathResult, RouteQuery};
use crate::path::resolve_node;

/// Compute a route for `query` against the current snapshot.
///
/// Same-floor queries return an empty path when the destination is
/// unreachable. Cross-floor queries fail with
/// [`Error::NoTransitionAvailable`](crate::Error::NoTransitionAvailable) when
/// the graph has no stairs or lifts and with
/// [`Error::NoPathFound`](crate::Error::NoPathFound) when no shaft links the
/// two floors reachably.
pub fn plan_route(store: &GraphStore, query: &RouteQuery) -> Result<PathResult> {
    let origin = store.node(resolve_node(store, &query.origin_id)?);
    let destination = store.node(resolve_node(store, &query.destination_id)?);

    let planner = select_planner(origin, destination);
    tracing::debug!(
        origin = %origin.id,
        destination = %destination.id,
        mode = %query.mode,
        planner = planner.name(),
        "planning route"
    );
    planner.plan(store, origin, destination, query.mode)
}
