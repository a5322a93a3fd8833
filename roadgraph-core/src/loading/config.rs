use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::EdgeValidation;

/// Input files of a road network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadNetworkConfig {
    /// Node/edge stream
    pub graph_path: PathBuf,
    /// Turn restriction file, restrictions are left empty when unset
    #[serde(default)]
    pub restrictions_path: Option<PathBuf>,
    #[serde(default)]
    pub edge_validation: EdgeValidation,
}

impl RoadNetworkConfig {
    pub fn new(graph_path: impl Into<PathBuf>) -> Self {
        Self {
            graph_path: graph_path.into(),
            restrictions_path: None,
            edge_validation: EdgeValidation::default(),
        }
    }

    #[must_use]
    pub fn with_restrictions(mut self, path: impl Into<PathBuf>) -> Self {
        self.restrictions_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_edge_validation(mut self, validation: EdgeValidation) -> Self {
        self.edge_validation = validation;
        self
    }
}
