pub use crate::Error;

// Loading entry points
pub use crate::loading::{
    EdgeValidation, LoadedGraph, LoadedNodes, RoadNetworkConfig, load_graph, load_restrictions,
    load_road_network,
};
pub use crate::model::{
    NetworkSummary, NodeBasedEdge, QueryNode, RoadNetwork, TravelMode, TurnRestriction,
};

// Identifiers
pub use crate::NodeId;
pub use crate::OsmNodeId;

// Binary format
pub use crate::{FileReader, FileWriter, Fingerprint, FingerprintPolicy};
