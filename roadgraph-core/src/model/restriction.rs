use serde::{Deserialize, Serialize};

use super::NodeId;

/// Turn restriction over three internal nodes: `from -> via -> to`.
///
/// Ids are taken as written; the restriction file is produced after
/// renumbering and is not cross-checked against the node array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRestriction {
    pub via: NodeId,
    pub from: NodeId,
    pub to: NodeId,
    /// `true` for mandatory ("only") turns, `false` for forbidden ("no") turns
    pub is_only: bool,
}

impl TurnRestriction {
    pub fn forbidden(from: NodeId, via: NodeId, to: NodeId) -> Self {
        Self {
            via,
            from,
            to,
            is_only: false,
        }
    }

    pub fn mandatory(from: NodeId, via: NodeId, to: NodeId) -> Self {
        Self {
            via,
            from,
            to,
            is_only: true,
        }
    }
}
