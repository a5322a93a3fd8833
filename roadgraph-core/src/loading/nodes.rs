use std::io::Read;

use log::{debug, info};

use crate::Error;
use crate::io::{FileReader, Section};
use crate::model::{ExternalNode, NodeId, QueryNode};

/// Cap on the node array reservation taken from the header count.
const MAX_PREALLOCATED_NODES: usize = 1 << 22;

/// Output of the node section scan
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedNodes {
    /// Nodes indexed by their internal id
    pub nodes: Vec<QueryNode>,
    /// Ids of barrier nodes, strictly increasing
    pub barrier_nodes: Vec<NodeId>,
    /// Ids of nodes with traffic lights, strictly increasing
    pub traffic_lights: Vec<NodeId>,
}

impl LoadedNodes {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Reads the node section of a node/edge stream.
///
/// Node `i` of the section becomes `NodeId(i)`. Barrier and traffic light
/// flags are collected into id lists in the same pass.
///
/// # Errors
///
/// Fails if the section holds fewer records than its count declares or a
/// record is malformed.
pub fn load_nodes<R: Read>(reader: &mut FileReader<R>) -> Result<LoadedNodes, Error> {
    let count = reader.read_element_count(Section::Nodes)?;
    info!("Importing n = {count} nodes");

    let mut nodes = Vec::with_capacity((count as usize).min(MAX_PREALLOCATED_NODES));
    let mut barrier_nodes = Vec::new();
    let mut traffic_lights = Vec::new();

    for raw_id in 0..count {
        let raw: ExternalNode = reader.read_record(Section::Nodes, u64::from(raw_id))?;
        let id = NodeId::new(raw_id);

        nodes.push(raw.to_query_node());
        if raw.barrier {
            barrier_nodes.push(id);
        }
        if raw.traffic_lights {
            traffic_lights.push(id);
        }
    }

    barrier_nodes.shrink_to_fit();
    traffic_lights.shrink_to_fit();
    debug!(
        "Found {} barrier nodes and {} traffic lights",
        barrier_nodes.len(),
        traffic_lights.len()
    );

    Ok(LoadedNodes {
        nodes,
        barrier_nodes,
        traffic_lights,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::io::{FileWriter, FingerprintPolicy};
    use crate::model::OsmNodeId;

    fn node_stream(nodes: &[ExternalNode]) -> FileReader<Cursor<Vec<u8>>> {
        let mut writer = FileWriter::new(Vec::new()).unwrap();
        writer.write_section(nodes).unwrap();
        let bytes = writer.finish().unwrap();
        FileReader::new(Cursor::new(bytes), FingerprintPolicy::Enforce).unwrap()
    }

    /// Deterministic flags: barriers on multiples of 3, lights on multiples of 5
    fn synthetic_nodes(n: u32) -> Vec<ExternalNode> {
        (0..n)
            .map(|i| {
                let lon = i32::try_from(i).unwrap() * 1_000 - 500_000;
                let osm_id = OsmNodeId::new(9_000 + u64::from(i) * 7);
                ExternalNode::new(lon, 48_000_000 + lon / 2, osm_id)
                    .with_barrier(i % 3 == 0)
                    .with_traffic_lights(i % 5 == 0)
            })
            .collect()
    }

    #[test]
    fn loads_all_nodes_in_order() {
        let raw = synthetic_nodes(31);
        let loaded = load_nodes(&mut node_stream(&raw)).unwrap();

        assert_eq!(loaded.len(), 31);
        for (node, raw) in loaded.nodes.iter().zip(&raw) {
            assert_eq!((node.lon, node.lat, node.node_id), (raw.lon, raw.lat, raw.node_id));
        }
    }

    #[test]
    fn derived_lists_match_flags() {
        let raw = synthetic_nodes(31);
        let loaded = load_nodes(&mut node_stream(&raw)).unwrap();

        let barriers: Vec<u32> = loaded.barrier_nodes.iter().map(|id| id.get()).collect();
        let lights: Vec<u32> = loaded.traffic_lights.iter().map(|id| id.get()).collect();
        assert_eq!(barriers, (0..31).filter(|i| i % 3 == 0).collect::<Vec<_>>());
        assert_eq!(lights, vec![0, 5, 10, 15, 20, 25, 30]);

        for list in [&loaded.barrier_nodes, &loaded.traffic_lights] {
            assert!(list.windows(2).all(|w| w[0] < w[1]));
            assert!(list.iter().all(|id| id.index() < loaded.len()));
            assert_eq!(list.capacity(), list.len());
        }
    }

    #[test]
    fn empty_section() {
        let loaded = load_nodes(&mut node_stream(&[])).unwrap();
        assert!(loaded.is_empty());
        assert!(loaded.barrier_nodes.is_empty());
        assert!(loaded.traffic_lights.is_empty());
    }

    #[test]
    fn declared_count_beyond_data_fails() {
        let raw = synthetic_nodes(4);
        let mut writer = FileWriter::new(Vec::new()).unwrap();
        writer.write_element_count(5).unwrap();
        writer.write_records(&raw).unwrap();
        let bytes = writer.finish().unwrap();
        let mut reader = FileReader::new(Cursor::new(bytes), FingerprintPolicy::Enforce).unwrap();

        let err = load_nodes(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                section: Section::Nodes,
                expected: 18,
                available: 0,
                ..
            }
        ));
    }

    #[test]
    fn malformed_flag_names_record() {
        let raw = synthetic_nodes(3);
        let mut writer = FileWriter::new(Vec::new()).unwrap();
        writer.write_section(&raw).unwrap();
        let mut bytes = writer.finish().unwrap();
        // barrier byte of the third node
        bytes[11 + 4 + 2 * 18 + 16] = 7;
        let mut reader = FileReader::new(Cursor::new(bytes), FingerprintPolicy::Enforce).unwrap();

        let err = load_nodes(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRecord {
                section: Section::Nodes,
                index: 2,
                ..
            }
        ));
    }
}
