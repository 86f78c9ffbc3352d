//! Validate command handler: load a graph and report what it contains.

use std::path::Path;

use anyhow::{Context, Result};

use campusmarg_lib::GraphStore;

use crate::commands::load_store;
use crate::output::{GraphSummary, OutputFormat};

/// Count nodes, edges, floors and stair/lift nodes in a loaded store.
pub fn summarize(store: &GraphStore) -> GraphSummary {
    let view = store.graph();
    GraphSummary {
        nodes: view.nodes.len(),
        edges: view.edges.len(),
        floors: store.floors(),
        transitions: view
            .nodes
            .iter()
            .filter(|node| node.kind.is_transition())
            .count(),
    }
}

pub fn handle_validate_command(graph: &Path, format: OutputFormat) -> Result<()> {
    let store = load_store(graph)?;
    let summary = summarize(&store);
    tracing::info!(nodes = summary.nodes, edges = summary.edges, "graph validated");
    format
        .render_summary(&summary)
        .context("failed to write graph summary")
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusmarg_lib::{Edge, Node, NodeKind};

    #[test]
    fn counts_transitions_and_floors() {
        let store = GraphStore::from_parts(
            vec![
                Node::new("A", "Hall", NodeKind::Corridor, 1, 0.0, 0.0),
                Node::new("L1", "Lift", NodeKind::Lift, 1, 1.0, 0.0).in_shaft("lift"),
                Node::new("L3", "Lift", NodeKind::Lift, 3, 1.0, 0.0).in_shaft("lift"),
            ],
            vec![Edge::new("A", "L1", 1.0)],
        )
        .expect("valid graph");

        let summary = summarize(&store);
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.edges, 1);
        assert_eq!(summary.floors, vec![1, 3]);
        assert_eq!(summary.transitions, 2);
    }
}
