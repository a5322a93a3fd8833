//! Data model of a loaded road network
//!
//! Contains the node, edge and turn restriction types shared by the loaders
//! and the downstream preprocessing stages.

pub mod edge;
pub mod ids;
pub mod network;
pub mod node;
pub mod restriction;

pub use edge::{NodeBasedEdge, TravelMode};
pub use ids::{NodeId, OsmNodeId};
pub use network::{NetworkSummary, RoadNetwork};
pub use node::{ExternalNode, QueryNode};
pub use restriction::TurnRestriction;
