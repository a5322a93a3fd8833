use log::info;

use super::config::RoadNetworkConfig;
use super::{load_graph, load_restrictions};
use crate::{Error, RoadNetwork};

/// Loads the node/edge stream and, if configured, the turn restriction file.
///
/// # Errors
///
/// Returns an error if an input file is missing or cannot be loaded
pub fn load_road_network(config: &RoadNetworkConfig) -> Result<RoadNetwork, Error> {
    validate_config(config)?;

    info!("Loading road graph: {}", config.graph_path.display());
    let graph = load_graph(&config.graph_path, config.edge_validation)?;

    let restrictions = match &config.restrictions_path {
        Some(path) => {
            info!("Loading turn restrictions: {}", path.display());
            load_restrictions(path)?
        }
        None => Vec::new(),
    };

    let network = RoadNetwork::from_parts(graph, restrictions);
    info!(
        "Road network loaded successfully: {} nodes, {} edges, {} turn restrictions",
        network.node_count(),
        network.edge_count(),
        network.restriction_count()
    );
    Ok(network)
}

fn validate_config(config: &RoadNetworkConfig) -> Result<(), Error> {
    let inputs = std::iter::once(&config.graph_path).chain(&config.restrictions_path);
    for path in inputs {
        if !path.is_file() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Input file not found: {}", path.display()),
            )));
        }
    }
    Ok(())
}
