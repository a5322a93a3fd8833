use std::io::Read;

use log::{info, warn};

use super::validate::{EdgeValidation, validate_edges};
use crate::Error;
use crate::io::{FileReader, Section};
use crate::model::NodeBasedEdge;

/// Reads the edge section of a node/edge stream.
///
/// Must follow [`super::load_nodes`] on the same reader: edges address nodes
/// by their position in the node array. The edges are returned in file order.
/// With validation enabled they are additionally checked by
/// [`validate_edges`], which does not reorder them.
///
/// # Errors
///
/// Fails on a truncated or malformed section, or with
/// [`Error::InvalidEdges`] if validation finds a malformed edge.
pub fn load_edges<R: Read>(
    reader: &mut FileReader<R>,
    validation: EdgeValidation,
) -> Result<Vec<NodeBasedEdge>, Error> {
    let count = reader.read_element_count(Section::Edges)?;
    info!(" and {count} edges");

    let edges: Vec<NodeBasedEdge> = reader.read_records(count, Section::Edges)?;
    if edges.is_empty() {
        warn!("Edge section is empty");
    }

    if validation.is_enabled() {
        info!("Validating loaded edges...");
        validate_edges(&edges)?;
    }

    info!("Graph loaded ok and has {} edges", edges.len());
    Ok(edges)
}
