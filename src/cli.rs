use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use roadgraph_core::{EdgeValidation, RoadNetwork, load_road_network};
use tracing::info;

use crate::config::Config;
use crate::error::CliError;

/// Inspect road network snapshots produced by the extraction stage
#[derive(Debug, Parser)]
#[command(name = "roadgraph", version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log filter, e.g. `info` or `roadgraph_core=debug` (`RUST_LOG` wins)
    #[arg(long, global = true)]
    pub log_filter: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print node, edge and restriction counts
    Summary {
        #[command(flatten)]
        input: InputArgs,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load with edge validation and report the first malformed edge
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Write barrier and traffic light nodes as GeoJSON
    Export {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, short)]
        output: PathBuf,
    },
}

#[derive(Debug, Default, Args)]
pub struct InputArgs {
    /// Node/edge stream
    #[arg(long)]
    pub graph: Option<PathBuf>,
    /// Turn restriction file
    #[arg(long)]
    pub restrictions: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub validation: Option<ValidationArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidationArg {
    BuildDefault,
    Always,
    Never,
}

impl From<ValidationArg> for EdgeValidation {
    fn from(arg: ValidationArg) -> Self {
        match arg {
            ValidationArg::BuildDefault => EdgeValidation::BuildDefault,
            ValidationArg::Always => EdgeValidation::Always,
            ValidationArg::Never => EdgeValidation::Never,
        }
    }
}

pub fn run(command: Command, config: &Config) -> Result<(), CliError> {
    match command {
        Command::Summary { input, json } => {
            let summary = load(config, &input, None)?.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
            }
        }
        Command::Validate { input } => {
            let network = load(config, &input, Some(EdgeValidation::Always))?;
            println!("{} edges passed validation", network.edge_count());
        }
        Command::Export { input, output } => {
            let network = load(config, &input, None)?;
            let geojson = network.classified_nodes_geojson_string()?;
            std::fs::write(&output, geojson).map_err(|source| CliError::Output {
                path: output.clone(),
                source,
            })?;
            info!(
                "Wrote {} barriers and {} traffic lights to {}",
                network.barrier_nodes.len(),
                network.traffic_lights.len(),
                output.display()
            );
        }
    }
    Ok(())
}

fn load(
    config: &Config,
    input: &InputArgs,
    validation: Option<EdgeValidation>,
) -> Result<RoadNetwork, CliError> {
    let mut network_config = config.network_config(input)?;
    if let Some(validation) = validation {
        network_config.edge_validation = validation;
    }
    Ok(load_road_network(&network_config)?)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "roadgraph",
            "summary",
            "--graph",
            "a.rgf",
            "--json",
            "--validation",
            "never",
            "--config",
            "roadgraph.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("roadgraph.toml")));
        let Command::Summary { input, json } = cli.command else {
            panic!("expected summary");
        };
        assert!(json);
        assert_eq!(input.graph, Some(PathBuf::from("a.rgf")));
        assert_eq!(input.validation, Some(ValidationArg::Never));
    }

    #[test]
    fn export_requires_output() {
        assert!(Cli::try_parse_from(["roadgraph", "export", "--graph", "a.rgf"]).is_err());
    }
}
