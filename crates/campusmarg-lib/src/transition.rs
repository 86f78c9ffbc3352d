//! Stair and lift lookup.
//!
//! Transitions on different floors that belong to the same physical stairwell
//! or lift shaft carry a shared `shaft` attribute. A transition without one is
//! its own shaft, identified by its node id.

use std::cmp::Ordering;
use std::fmt;

use crate::graph::GraphStore;
use crate::model::{Node, RouteMode};

/// Pair of shaft members used to change floors.
#[derive(Debug, Clone, Copy)]
pub struct Crossing<'a> {
    /// Transition on the origin's floor.
    pub start: &'a Node,
    /// Member of the same shaft on the destination's floor.
    pub end: &'a Node,
}

/// Transition closest to `node` by Manhattan distance over raw (x, y).
///
/// Floors are ignored. Ties resolve to the earliest node in snapshot order.
pub fn nearest_transition<'a>(store: &'a GraphStore, node: &Node) -> Option<&'a Node> {
    nearest_by(store, node, |_| true)
}

/// Transition on `floor` closest to `node`, skipping nodes `mode` does not admit.
pub fn nearest_transition_on_floor<'a>(
    store: &'a GraphStore,
    node: &Node,
    floor: i32,
    mode: RouteMode,
) -> Option<&'a Node> {
    nearest_by(store, node, |candidate| {
        candidate.floor == floor && mode.admits(candidate)
    })
}

/// Shaft identity of a transition node.
///
/// Named shafts and lone transitions live in separate namespaces, so a lone
/// lift whose id happens to equal a shaft name is never joined to that shaft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaftKey<'a> {
    /// Declared through the node's `shaft` attribute.
    Named(&'a str),
    /// Transition without a `shaft`; identified by its node id.
    Lone(&'a str),
}

impl fmt::Display for ShaftKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaftKey::Named(name) => write!(f, "shaft {name}"),
            ShaftKey::Lone(id) => write!(f, "lone {id}"),
        }
    }
}

pub fn shaft_key(node: &Node) -> ShaftKey<'_> {
    match node.shaft.as_deref() {
        Some(name) => ShaftKey::Named(name),
        None => ShaftKey::Lone(&node.id),
    }
}

/// Transition belonging to shaft `key` on `floor`.
pub fn shaft_member<'a>(store: &'a GraphStore, key: ShaftKey<'_>, floor: i32) -> Option<&'a Node> {
    store
        .nodes()
        .iter()
        .find(|node| node.kind.is_transition() && node.floor == floor && shaft_key(node) == key)
}

/// Whether the snapshot holds any stair or lift at all.
pub fn has_transitions(store: &GraphStore) -> bool {
    store.nodes().iter().any(|node| node.kind.is_transition())
}

/// Every usable way from `origin`'s floor to `destination`'s floor, nearest to
/// `origin` first.
///
/// A crossing qualifies when the shaft has a member on both floors and `mode`
/// admits both members.
pub fn crossings<'a>(
    store: &'a GraphStore,
    origin: &Node,
    destination: &Node,
    mode: RouteMode,
) -> Vec<Crossing<'a>> {
    let mut found: Vec<(f64, Crossing<'a>)> = store
        .nodes_on_floor(origin.floor)
        .filter(|node| node.kind.is_transition() && mode.admits(node))
        .filter_map(|start| {
            let end = shaft_member(store, shaft_key(start), destination.floor)?;
            mode.admits(end).then(|| {
                (
                    origin.coordinates.manhattan_to(&start.coordinates),
                    Crossing { start, end },
                )
            })
        })
        .collect();

    found.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    found.into_iter().map(|(_, crossing)| crossing).collect()
}

fn nearest_by<'a>(
    store: &'a GraphStore,
    node: &Node,
    accept: impl Fn(&Node) -> bool,
) -> Option<&'a Node> {
    let mut best: Option<(&Node, f64)> = None;
    for candidate in store.nodes() {
        if !candidate.kind.is_transition() || !accept(candidate) {
            continue;
        }
        let distance = node.coordinates.manhattan_to(&candidate.coordinates);
        if best.map_or(true, |(_, current)| distance < current) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;

    fn store() -> GraphStore {
        GraphStore::from_parts(
            vec![
                Node::new("R1", "Room 1", NodeKind::Room, 1, 0.0, 0.0),
                Node::new("S1", "Stairs", NodeKind::Stair, 1, 2.0, 0.0)
                    .inaccessible()
                    .in_shaft("stairs-a"),
                Node::new("L1", "Lift", NodeKind::Lift, 1, 5.0, 0.0).in_shaft("lift-a"),
                Node::new("S2", "Stairs", NodeKind::Stair, 2, 2.0, 0.0)
                    .inaccessible()
                    .in_shaft("stairs-a"),
                Node::new("L2", "Lift", NodeKind::Lift, 2, 5.0, 0.0).in_shaft("lift-a"),
                Node::new("R2", "Room 2", NodeKind::Room, 2, 1.0, 0.0),
            ],
            vec![],
        )
        .expect("valid graph")
    }

    #[test]
    fn nearest_ignores_floor() {
        let store = store();
        let room = store.node_by_id("R2").unwrap();
        // S1 and S2 tie at distance 1; S1 comes first in snapshot order.
        assert_eq!(nearest_transition(&store, room).unwrap().id, "S1");
    }

    #[test]
    fn nearest_is_none_without_transitions() {
        let store = GraphStore::from_parts(
            vec![Node::new("R1", "Room 1", NodeKind::Room, 1, 0.0, 0.0)],
            vec![],
        )
        .unwrap();
        let room = store.node_by_id("R1").unwrap();
        assert!(nearest_transition(&store, room).is_none());
        assert!(!has_transitions(&store));
    }

    #[test]
    fn floor_scoped_search_respects_mode() {
        let store = store();
        let room = store.node_by_id("R1").unwrap();
        let normal = nearest_transition_on_floor(&store, room, 1, RouteMode::Normal).unwrap();
        let wheelchair =
            nearest_transition_on_floor(&store, room, 1, RouteMode::Wheelchair).unwrap();
        assert_eq!(normal.id, "S1");
        assert_eq!(wheelchair.id, "L1");
    }

    #[test]
    fn shaft_key_falls_back_to_id() {
        let lone = Node::new("L9", "Lift", NodeKind::Lift, 1, 0.0, 0.0);
        assert_eq!(shaft_key(&lone), ShaftKey::Lone("L9"));
        let store = store();
        let lift = ShaftKey::Named("lift-a");
        assert_eq!(shaft_member(&store, lift, 2).unwrap().id, "L2");
        assert!(shaft_member(&store, lift, 3).is_none());
        assert!(shaft_member(&store, ShaftKey::Lone("lift-a"), 2).is_none());
    }

    #[test]
    fn lone_transition_named_like_a_shaft_stays_alone() {
        let store = GraphStore::from_parts(
            vec![
                Node::new("R1", "Room 1", NodeKind::Room, 1, 0.0, 0.0),
                Node::new("east", "Lift", NodeKind::Lift, 1, 1.0, 0.0),
                Node::new("S1", "Stairs", NodeKind::Stair, 1, 2.0, 0.0).in_shaft("east"),
                Node::new("S2", "Stairs", NodeKind::Stair, 2, 2.0, 0.0).in_shaft("east"),
                Node::new("R2", "Room 2", NodeKind::Room, 2, 3.0, 0.0),
            ],
            vec![],
        )
        .expect("valid graph");
        let origin = store.node_by_id("R1").unwrap();
        let destination = store.node_by_id("R2").unwrap();

        let found = crossings(&store, origin, destination, RouteMode::Normal);
        let ids: Vec<_> = found.iter().map(|c| (c.start.id.as_str(), c.end.id.as_str())).collect();
        assert_eq!(ids, vec![("S1", "S2")]);
    }

    #[test]
    fn crossings_are_ordered_by_distance() {
        let store = store();
        let origin = store.node_by_id("R1").unwrap();
        let destination = store.node_by_id("R2").unwrap();

        let normal = crossings(&store, origin, destination, RouteMode::Normal);
        let ids: Vec<_> = normal.iter().map(|c| (c.start.id.as_str(), c.end.id.as_str())).collect();
        assert_eq!(ids, vec![("S1", "S2"), ("L1", "L2")]);

        let wheelchair = crossings(&store, origin, destination, RouteMode::Wheelchair);
        assert_eq!(wheelchair.len(), 1);
        assert_eq!(wheelchair[0].start.id, "L1");
    }
}
