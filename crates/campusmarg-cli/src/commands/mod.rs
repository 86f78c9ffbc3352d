// Handlers for the CLI subcommands. main.rs parses arguments and dispatches here.

pub mod nodes;
pub mod route;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use campusmarg_lib::{load_graph_store, GraphStore};

/// Load and validate the graph document at `path`.
pub(crate) fn load_store(path: &Path) -> Result<GraphStore> {
    load_graph_store(path).with_context(|| format!("failed to load graph from {}", path.display()))
}
