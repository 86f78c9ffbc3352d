//! Route planning strategies.
//!
//! Same-floor queries run a single Dijkstra search; queries spanning floors
//! are stitched from two searches joined by a vertical run through a stair or
//! lift shaft. Both implement [`RoutePlanner`] so the orchestrator only picks
//! a strategy.

use crate::error::{Error, Result};
use crate::graph::GraphStore;
use crate::instruction::vertical_instruction;
use crate::model::{walking_time, Node, PathResult, PathStep, RouteMode, StepCoordinate};
use crate::path::{plan_single_floor, render_steps, shortest_path, Route};
use crate::transition::{
    crossings, has_transitions, shaft_key, shaft_member, Crossing, ShaftKey,
};

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Plan a route between two nodes already known to exist in `store`.
    fn plan(
        &self,
        store: &GraphStore,
        origin: &Node,
        destination: &Node,
        mode: RouteMode,
    ) -> Result<PathResult>;
}

/// Dijkstra restricted to nodes that share a floor in practice.
///
/// An unreachable destination yields an empty [`PathResult`].
#[derive(Debug, Clone, Default)]
pub struct SingleFloorPlanner;

impl RoutePlanner for SingleFloorPlanner {
    fn name(&self) -> &'static str {
        "single-floor"
    }

    fn plan(
        &self,
        store: &GraphStore,
        origin: &Node,
        destination: &Node,
        mode: RouteMode,
    ) -> Result<PathResult> {
        plan_single_floor(store, &origin.id, &destination.id, mode)
    }
}

/// Stitches origin → transition, the vertical run, and transition → destination.
///
/// Crossings are tried nearest-first; the first one whose two walking legs
/// are both reachable under `mode` wins.
#[derive(Debug, Clone, Default)]
pub struct CrossFloorPlanner;

impl RoutePlanner for CrossFloorPlanner {
    fn name(&self) -> &'static str {
        "cross-floor"
    }

    fn plan(
        &self,
        store: &GraphStore,
        origin: &Node,
        destination: &Node,
        mode: RouteMode,
    ) -> Result<PathResult> {
        if !has_transitions(store) {
            return Err(Error::NoTransitionAvailable);
        }

        let origin_index = index_of(store, origin)?;
        let destination_index = index_of(store, destination)?;

        for crossing in crossings(store, origin, destination, mode) {
            let start_index = index_of(store, crossing.start)?;
            let end_index = index_of(store, crossing.end)?;

            let Some(to_transition) = shortest_path(store, origin_index, start_index, mode) else {
                tracing::debug!(transition = %crossing.start.id, "origin cannot reach transition");
                continue;
            };
            let Some(from_transition) = shortest_path(store, end_index, destination_index, mode)
            else {
                tracing::debug!(transition = %crossing.end.id, "transition cannot reach destination");
                continue;
            };

            tracing::debug!(
                start = %crossing.start.id,
                end = %crossing.end.id,
                shaft = %shaft_key(crossing.start),
                "stitching cross-floor route"
            );
            return Ok(stitch(store, &crossing, &to_transition, &from_transition, mode));
        }

        Err(Error::NoPathFound {
            origin: origin.id.clone(),
            destination: destination.id.clone(),
        })
    }
}

/// Pick the planner for an origin/destination pair.
pub fn select_planner(origin: &Node, destination: &Node) -> Box<dyn RoutePlanner> {
    if origin.floor == destination.floor {
        Box::new(SingleFloorPlanner)
    } else {
        Box::new(CrossFloorPlanner)
    }
}

fn stitch(
    store: &GraphStore,
    crossing: &Crossing<'_>,
    to_transition: &Route,
    from_transition: &Route,
    mode: RouteMode,
) -> PathResult {
    let vertical = vertical_steps(store, crossing);
    let vertical_count = vertical.len();

    let mut path = render_steps(store, &to_transition.nodes);
    path.extend(vertical);
    path.extend(render_steps(store, &from_transition.nodes));

    PathResult {
        mode,
        total_distance: to_transition.distance
            + vertical_count as f64
            + from_transition.distance,
        // Estimated from the number of steps, not the distance walked.
        total_time: walking_time(path.len() as f64),
        path,
        cached: false,
    }
}

/// One step per floor crossed inside the shaft of `crossing`.
pub fn vertical_steps(store: &GraphStore, crossing: &Crossing<'_>) -> Vec<PathStep> {
    let key = shaft_key(crossing.start);
    let target = crossing.end.floor;
    let mut steps = Vec::new();
    let mut floor = crossing.start.floor;

    while floor != target {
        let next = if floor < target { floor + 1 } else { floor - 1 };
        let (from_id, from_at) = shaft_stop(store, crossing.start, key, floor);
        let (to_id, to_at) = shaft_stop(store, crossing.start, key, next);
        steps.push(PathStep {
            from: from_id,
            to: to_id,
            coordinates: [from_at, to_at],
            instruction: vertical_instruction(crossing.start.kind, floor, next),
        });
        floor = next;
    }
    steps
}

/// Shaft member on `floor`, or the starting transition projected onto that floor.
fn shaft_stop(
    store: &GraphStore,
    start: &Node,
    key: ShaftKey<'_>,
    floor: i32,
) -> (String, StepCoordinate) {
    match shaft_member(store, key, floor) {
        Some(member) => (member.id.clone(), member.position()),
        None => (
            start.id.clone(),
            StepCoordinate {
                x: start.coordinates.x,
                y: start.coordinates.y,
                floor,
            },
        ),
    }
}

fn index_of(store: &GraphStore, node: &Node) -> Result<usize> {
    store.node_index(&node.id).ok_or_else(|| Error::Internal {
        message: format!("node {} missing from snapshot index", node.id),
    })
}
