use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),
    #[error("No graph file given, pass --graph or set `graph` in the config file")]
    MissingGraph,
    #[error(transparent)]
    Load(#[from] roadgraph_core::Error),
    #[error("Failed to write '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
