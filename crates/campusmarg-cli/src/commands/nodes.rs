//! Nodes command handler: list the nodes of a graph, optionally for one floor.

use std::path::Path;

use anyhow::{bail, Context, Result};

use campusmarg_lib::Node;

use crate::commands::load_store;
use crate::output::OutputFormat;

pub fn handle_nodes_command(graph: &Path, format: OutputFormat, floor: Option<i32>) -> Result<()> {
    let store = load_store(graph)?;
    let nodes: Vec<&Node> = match floor {
        Some(floor) => store.nodes_on_floor(floor).collect(),
        None => store.nodes().iter().collect(),
    };

    if let (Some(floor), true) = (floor, nodes.is_empty()) {
        let known = store
            .floors()
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        bail!("No nodes on floor {floor}. Known floors: {known}.");
    }

    format
        .render_nodes(&nodes)
        .context("failed to write node listing")
}
