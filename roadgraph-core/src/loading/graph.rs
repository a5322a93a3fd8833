use std::io::Read;
use std::path::Path;

use super::{EdgeValidation, LoadedNodes, load_edges, load_nodes};
use crate::Error;
use crate::io::{FileReader, FingerprintPolicy};
use crate::model::NodeBasedEdge;

/// Nodes and edges of one node/edge stream
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedGraph {
    pub nodes: LoadedNodes,
    pub edges: Vec<NodeBasedEdge>,
}

/// Loads a node/edge stream from `path`.
///
/// A fingerprint of another build only produces a warning.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a section is truncated or
/// malformed, or edge validation fails.
pub fn load_graph(path: impl AsRef<Path>, validation: EdgeValidation) -> Result<LoadedGraph, Error> {
    let mut reader = FileReader::open(path, FingerprintPolicy::Warn)?;
    read_graph(&mut reader, validation)
}

/// Reads the node section and then the edge section from `reader`.
pub fn read_graph<R: Read>(
    reader: &mut FileReader<R>,
    validation: EdgeValidation,
) -> Result<LoadedGraph, Error> {
    let nodes = load_nodes(reader)?;
    let edges = load_edges(reader, validation)?;
    Ok(LoadedGraph { nodes, edges })
}
