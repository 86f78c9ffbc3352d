use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::graph::GraphStore;
use crate::instruction::instruction_for;
use crate::model::{walking_time, PathResult, PathStep, RouteMode};

/// Node sequence and cost of a found route, addressed by snapshot index.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub nodes: Vec<usize>,
    pub distance: f64,
}

/// Run Dijkstra's algorithm between two snapshot indices.
///
/// In wheelchair mode nodes flagged `accessible = false` are never entered,
/// and an inaccessible origin yields no route. Among nodes at equal tentative
/// distance the one earlier in snapshot order is settled first, and a node's
/// predecessor only changes on a strictly shorter distance.
pub fn shortest_path(
    store: &GraphStore,
    origin: usize,
    destination: usize,
    mode: RouteMode,
) -> Option<Route> {
    if !mode.admits(store.node(origin)) {
        return None;
    }

    let count = store.len();
    let mut distances = vec![f64::INFINITY; count];
    let mut parents: Vec<Option<usize>> = vec![None; count];
    let mut visited = vec![false; count];
    let mut queue = BinaryHeap::new();

    distances[origin] = 0.0;
    queue.push(QueueEntry::new(origin, 0.0));

    while let Some(entry) = queue.pop() {
        if visited[entry.node] {
            continue;
        }
        visited[entry.node] = true;

        if entry.node == destination {
            return Some(Route {
                nodes: reconstruct_path(&parents, origin, destination),
                distance: distances[destination],
            });
        }

        let current_distance = distances[entry.node];
        for link in store.neighbours(entry.node) {
            let next = link.target;
            if visited[next] || !mode.admits(store.node(next)) {
                continue;
            }

            let next_cost = current_distance + link.weight;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    None
}

/// Shortest route between two node ids rendered as a [`PathResult`].
///
/// An unreachable destination produces an empty path with zero distance;
/// callers must read that as "no route". Unknown ids fail with
/// [`Error::NodeNotFound`].
pub fn plan_single_floor(
    store: &GraphStore,
    origin_id: &str,
    destination_id: &str,
    mode: RouteMode,
) -> Result<PathResult> {
    let origin = resolve_node(store, origin_id)?;
    let destination = resolve_node(store, destination_id)?;

    let Some(route) = shortest_path(store, origin, destination, mode) else {
        tracing::debug!(
            origin = origin_id,
            destination = destination_id,
            %mode,
            "destination unreachable"
        );
        return Ok(PathResult::unreachable(mode));
    };

    Ok(PathResult {
        mode,
        path: render_steps(store, &route.nodes),
        total_distance: route.distance,
        total_time: walking_time(route.distance),
        cached: false,
    })
}

/// Turn consecutive node indices into instruction-bearing steps.
pub fn render_steps(store: &GraphStore, nodes: &[usize]) -> Vec<PathStep> {
    nodes
        .windows(2)
        .map(|pair| {
            let from = store.node(pair[0]);
            let to = store.node(pair[1]);
            PathStep {
                from: from.id.clone(),
                to: to.id.clone(),
                coordinates: [from.position(), to.position()],
                instruction: instruction_for(from, to),
            }
        })
        .collect()
}

pub(crate) fn resolve_node(store: &GraphStore, id: &str) -> Result<usize> {
    store.node_index(id).ok_or_else(|| Error::NodeNotFound {
        id: id.to_string(),
        suggestions: store.fuzzy_node_matches(id, 3),
    })
}

fn reconstruct_path(parents: &[Option<usize>], origin: usize, destination: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = Some(destination);
    while let Some(node) = current {
        path.push(node);
        if node == origin {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: usize,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: usize, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then snapshot index.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
