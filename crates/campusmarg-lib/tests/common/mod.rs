//! Shared fixtures for integration tests.

use std::path::PathBuf;

use campusmarg_lib::{load_graph_store, GraphStore, Node, NodeKind};

/// Path to the fixtures directory shared with the CLI tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Two-floor campus with one staircase (not accessible) and one lift.
#[allow(dead_code)]
pub fn campus_store() -> GraphStore {
    load_graph_store(&fixtures_dir().join("campus.json")).expect("campus fixture loads")
}

/// Same-floor node at the given coordinates.
#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind, floor: i32, x: f64, y: f64) -> Node {
    Node::new(id, format!("{kind} {id}"), kind, floor, x, y)
}
