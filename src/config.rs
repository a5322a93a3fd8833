//! Configuration file of the `roadgraph` tool
//!
//! ```toml
//! graph = "data/berlin.rgf"
//! restrictions = "data/berlin.restrictions"
//! edge_validation = "always"   # build_default | always | never
//! log_filter = "roadgraph_core=debug"
//! ```
//!
//! Command-line flags take precedence over file values.

use std::path::{Path, PathBuf};

use roadgraph_core::{EdgeValidation, RoadNetworkConfig};
use serde::Deserialize;

use crate::cli::InputArgs;
use crate::error::CliError;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub graph: Option<PathBuf>,
    pub restrictions: Option<PathBuf>,
    pub edge_validation: EdgeValidation,
    pub log_filter: Option<String>,
}

impl Config {
    /// Reads the config file at `path`, or returns defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(text)?)
    }

    /// Input files and validation mode, flags overriding the file.
    pub fn network_config(&self, args: &InputArgs) -> Result<RoadNetworkConfig, CliError> {
        let graph = args
            .graph
            .as_ref()
            .or(self.graph.as_ref())
            .ok_or(CliError::MissingGraph)?;
        let validation = args
            .validation
            .map_or(self.edge_validation, EdgeValidation::from);
        let mut config = RoadNetworkConfig::new(graph).with_edge_validation(validation);
        if let Some(restrictions) = args.restrictions.as_ref().or(self.restrictions.as_ref()) {
            config = config.with_restrictions(restrictions);
        }
        Ok(config)
    }

    pub fn log_filter<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.or(self.log_filter.as_deref()).unwrap_or(DEFAULT_LOG_FILTER)
    }
}
