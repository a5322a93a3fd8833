//! Loader for versioned binary road-network snapshots.
//!
//! Reads the node/edge stream and the turn restriction file produced by the
//! extraction stage into typed containers for the preprocessing pipeline.
//! Nodes are renumbered by load order: the position of a node in the loaded
//! array is its internal [`NodeId`].

pub mod error;
mod export;
pub mod io;
pub mod loading;
pub mod model;
pub mod prelude;

pub use error::Error;
pub use io::{FileReader, FileWriter, Fingerprint, FingerprintPolicy, FormatVersion, Section};
pub use loading::{
    EdgeValidation, EdgeViolation, LoadedGraph, LoadedNodes, RoadNetworkConfig, ViolationKind,
    load_edges, load_graph, load_nodes, load_restrictions, load_road_network, read_graph,
    read_restrictions, validate_edges,
};
pub use model::{
    ExternalNode, NetworkSummary, NodeBasedEdge, NodeId, OsmNodeId, QueryNode, RoadNetwork,
    TravelMode, TurnRestriction,
};

/// Edge weight as stored by the extraction stage. Signed, valid weights are positive.
pub type EdgeWeight = i32;

/// Fixed-point coordinate in millionths of a degree.
pub type FixedCoordinate = i32;

/// Scale between [`FixedCoordinate`] and degrees.
pub const COORDINATE_PRECISION: f64 = 1_000_000.0;
