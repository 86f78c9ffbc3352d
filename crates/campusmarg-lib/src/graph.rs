use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::{Edge, Node};

/// Minimum Jaro-Winkler similarity for a node to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Outgoing connection from a node, addressed by snapshot index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub target: usize,
    pub weight: f64,
}

/// Borrowed view of the current snapshot.
#[derive(Debug, Clone, Copy)]
pub struct GraphView<'a> {
    pub nodes: &'a [Node],
    pub edges: &'a [Edge],
}

#[derive(Debug, Default)]
struct Snapshot {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<Link>>,
}

/// In-memory building graph.
///
/// Nodes keep the order in which they were loaded; that order is the stable
/// enumeration the planners use to break distance ties. Mutation requires
/// `&mut self`, so a reload can never overlap with a query borrowing the
/// store.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    snapshot: Arc<Snapshot>,
}

impl GraphStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a node and edge list.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut store = Self::new();
        store.load(nodes, edges)?;
        Ok(store)
    }

    /// Replace the snapshot wholesale.
    ///
    /// The new snapshot is validated first; on failure the previous snapshot
    /// is left untouched and [`Error::InvalidGraphState`] is returned.
    pub fn load(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) -> Result<()> {
        let snapshot = build_snapshot(nodes, edges)?;
        tracing::info!(
            nodes = snapshot.nodes.len(),
            edges = snapshot.edges.len(),
            "graph snapshot loaded"
        );
        self.snapshot = Arc::new(snapshot);
        Ok(())
    }

    /// Drop every node and edge.
    pub fn clear(&mut self) {
        self.snapshot = Arc::new(Snapshot::default());
    }

    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.node_index(id).map(|index| &self.snapshot.nodes[index])
    }

    /// Position of a node in the snapshot enumeration order.
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.snapshot.index.get(id).copied()
    }

    /// Node at a snapshot index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; indices come from this store.
    pub fn node(&self, index: usize) -> &Node {
        &self.snapshot.nodes[index]
    }

    /// Current nodes and edges.
    pub fn graph(&self) -> GraphView<'_> {
        GraphView {
            nodes: &self.snapshot.nodes,
            edges: &self.snapshot.edges,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.snapshot.nodes
    }

    /// Links walkable from the node at `index`, honouring edge direction.
    pub fn neighbours(&self, index: usize) -> &[Link] {
        self.snapshot
            .adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.snapshot.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.nodes.is_empty()
    }

    /// Nodes on a single floor, in snapshot order.
    pub fn nodes_on_floor(&self, floor: i32) -> impl Iterator<Item = &Node> {
        self.snapshot
            .nodes
            .iter()
            .filter(move |node| node.floor == floor)
    }

    /// Distinct floors present in the snapshot, ascending.
    pub fn floors(&self) -> Vec<i32> {
        self.snapshot
            .nodes
            .iter()
            .map(|node| node.floor)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Node ids whose id or name resemble `query`, best match first.
    pub fn fuzzy_node_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .snapshot
            .nodes
            .iter()
            .map(|node| {
                let by_id = strsim::jaro_winkler(&needle, &node.id.to_lowercase());
                let by_name = strsim::jaro_winkler(&needle, &node.name.to_lowercase());
                (by_id.max(by_name), node.id.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, id)| id.to_string())
            .collect()
    }
}

fn build_snapshot(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Snapshot> {
    let mut index = HashMap::with_capacity(nodes.len());
    for (position, node) in nodes.iter().enumerate() {
        if node.id.is_empty() {
            return Err(Error::invalid_graph(format!(
                "node at position {position} has an empty id"
            )));
        }
        if index.insert(node.id.clone(), position).is_some() {
            return Err(Error::invalid_graph(format!(
                "duplicate node id {}",
                node.id
            )));
        }
    }

    let mut adjacency: Vec<Vec<Link>> = vec![Vec::new(); nodes.len()];
    let mut seen_shafts: HashSet<(&str, i32)> = HashSet::new();
    for node in &nodes {
        if let Some(shaft) = node.shaft.as_deref() {
            if !node.kind.is_transition() {
                return Err(Error::invalid_graph(format!(
                    "node {} is a {} but declares shaft {shaft}",
                    node.id, node.kind
                )));
            }
            if !seen_shafts.insert((shaft, node.floor)) {
                return Err(Error::invalid_graph(format!(
                    "shaft {shaft} has more than one node on floor {}",
                    node.floor
                )));
            }
        }
    }

    for edge in &edges {
        let from = resolve_endpoint(&index, edge, &edge.from)?;
        let to = resolve_endpoint(&index, edge, &edge.to)?;
        if !edge.weight.is_finite() || edge.weight <= 0.0 {
            return Err(Error::invalid_graph(format!(
                "edge {} -> {} has non-positive weight {}",
                edge.from, edge.to, edge.weight
            )));
        }

        adjacency[from].push(Link {
            target: to,
            weight: edge.weight,
        });
        if edge.bidirectional && from != to {
            adjacency[to].push(Link {
                target: from,
                weight: edge.weight,
            });
        }
    }

    Ok(Snapshot {
        nodes,
        edges,
        index,
        adjacency,
    })
}

fn resolve_endpoint(index: &HashMap<String, usize>, edge: &Edge, id: &str) -> Result<usize> {
    index.get(id).copied().ok_or_else(|| {
        Error::invalid_graph(format!(
            "edge {} -> {} references missing node {id}",
            edge.from, edge.to
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;

    fn corridor(id: &str, floor: i32) -> Node {
        Node::new(id, format!("Corridor {id}"), NodeKind::Corridor, floor, 0.0, 0.0)
    }

    #[test]
    fn one_way_edges_only_link_forward() {
        let store = GraphStore::from_parts(
            vec![corridor("A", 1), corridor("B", 1)],
            vec![Edge::one_way("A", "B", 2.0)],
        )
        .expect("valid graph");

        let a = store.node_index("A").unwrap();
        let b = store.node_index("B").unwrap();
        assert_eq!(store.neighbours(a), &[Link { target: b, weight: 2.0 }]);
        assert!(store.neighbours(b).is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = GraphStore::from_parts(vec![corridor("A", 1), corridor("A", 2)], vec![])
            .expect_err("duplicate id");
        assert!(matches!(err, Error::InvalidGraphState { .. }));
    }

    #[test]
    fn zero_weight_edges_are_rejected() {
        let err = GraphStore::from_parts(
            vec![corridor("A", 1), corridor("B", 1)],
            vec![Edge::new("A", "B", 0.0)],
        )
        .expect_err("zero weight");
        assert!(err.to_string().contains("non-positive weight"));
    }

    #[test]
    fn shaft_on_room_is_rejected() {
        let room = Node::new("R1", "Room", NodeKind::Room, 1, 0.0, 0.0).in_shaft("X");
        let err = GraphStore::from_parts(vec![room], vec![]).expect_err("room in shaft");
        assert!(err.to_string().contains("declares shaft"));
    }

    #[test]
    fn floors_are_sorted_and_distinct() {
        let store = GraphStore::from_parts(
            vec![corridor("A", 2), corridor("B", 1), corridor("C", 2)],
            vec![],
        )
        .expect("valid graph");
        assert_eq!(store.floors(), vec![1, 2]);
        assert_eq!(store.nodes_on_floor(2).count(), 2);
    }

    #[test]
    fn clear_empties_the_snapshot() {
        let mut store =
            GraphStore::from_parts(vec![corridor("A", 1)], vec![]).expect("valid graph");
        store.clear();
        assert!(store.is_empty());
        assert!(store.node_by_id("A").is_none());
        assert!(store.graph().edges.is_empty());
    }
}
