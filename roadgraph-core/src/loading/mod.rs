//! This module is responsible for loading the binary snapshot files of the
//! extraction stage into a road network.

mod builder;
mod config;
mod edges;
mod graph;
mod nodes;
mod restrictions;
mod validate;

pub use builder::load_road_network;
pub use config::RoadNetworkConfig;
pub use edges::load_edges;
pub use graph::{LoadedGraph, load_graph, read_graph};
pub use nodes::{LoadedNodes, load_nodes};
pub use restrictions::{load_restrictions, read_restrictions};
pub use validate::{EdgeValidation, EdgeViolation, ViolationKind, validate_edges};
