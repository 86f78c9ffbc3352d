use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::GraphStore;
use crate::model::{Edge, Node};

/// Serialized building graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Graph files hold either one document or a list of documents.
#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentSource {
    Single(GraphDocument),
    Many(Vec<GraphDocument>),
}

/// Parse a graph document from JSON text.
///
/// When the text holds an array, the first document is used.
pub fn parse_graph_document(text: &str) -> Result<GraphDocument> {
    match serde_json::from_str::<DocumentSource>(text)? {
        DocumentSource::Single(document) => Ok(document),
        DocumentSource::Many(documents) => documents
            .into_iter()
            .next()
            .ok_or_else(|| Error::invalid_graph("graph file contains no documents")),
    }
}

/// Read a graph document from disk.
pub fn load_graph_document(path: &Path) -> Result<GraphDocument> {
    let text = fs::read_to_string(path)?;
    let document = parse_graph_document(&text)?;
    tracing::debug!(path = %path.display(), nodes = document.nodes.len(), "read graph document");
    Ok(document)
}

/// Read a graph document from disk and load it into a fresh store.
pub fn load_graph_store(path: &Path) -> Result<GraphStore> {
    let document = load_graph_document(path)?;
    GraphStore::from_parts(document.nodes, document.edges)
}
