//! Node based edges (directed road segments)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::NodeId;
use crate::EdgeWeight;

/// Travel mode of an edge as assigned by the extraction profile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TravelMode(pub u8);

impl TravelMode {
    pub const INACCESSIBLE: TravelMode = TravelMode(0);
    pub const DEFAULT: TravelMode = TravelMode(1);

    pub fn is_accessible(self) -> bool {
        self != Self::INACCESSIBLE
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_accessible() {
            write!(f, "mode {}", self.0)
        } else {
            f.write_str("inaccessible")
        }
    }
}

/// Directed road segment between two internal nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeBasedEdge {
    pub source: NodeId,
    pub target: NodeId,
    /// Index into the street name table of the extraction stage
    pub name_id: u32,
    pub weight: EdgeWeight,
    pub forward: bool,
    pub backward: bool,
    pub roundabout: bool,
    pub access_restricted: bool,
    pub startpoint: bool,
    pub is_split: bool,
    pub travel_mode: TravelMode,
}

impl NodeBasedEdge {
    /// Forward-only edge in the default travel mode with all other flags cleared.
    pub fn new(source: NodeId, target: NodeId, weight: EdgeWeight) -> Self {
        Self {
            source,
            target,
            name_id: 0,
            weight,
            forward: true,
            backward: false,
            roundabout: false,
            access_restricted: false,
            startpoint: true,
            is_split: false,
            travel_mode: TravelMode::DEFAULT,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
