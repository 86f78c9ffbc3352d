use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use campusmarg_cli::commands::nodes::handle_nodes_command;
use campusmarg_cli::commands::route::{handle_route_command, RouteCommandArgs};
use campusmarg_cli::commands::validate::handle_validate_command;
use campusmarg_cli::logging::{init_logging, LoggingConfig};
use campusmarg_cli::output::OutputFormat;
use campusmarg_lib::RouteMode;

#[derive(Parser, Debug)]
#[command(author, version, about = "CampusMarg indoor route planner")]
struct Cli {
    /// Graph document (JSON) describing the building.
    #[arg(long, env = "CAMPUSMARG_GRAPH", global = true)]
    graph: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Append every computed route to this JSON-lines file.
    #[arg(long, env = "CAMPUSMARG_PATH_LOG", global = true)]
    path_log: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a walking route between two node ids.
    Route {
        /// Origin node id.
        #[arg(long = "from")]
        from: String,
        /// Destination node id.
        #[arg(long = "to")]
        to: String,
        /// Avoid inaccessible nodes (same as --mode wheelchair).
        #[arg(long, conflicts_with = "mode")]
        accessible: bool,
        /// Routing mode.
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// List the nodes of the graph.
    Nodes {
        /// Only list nodes on this floor.
        #[arg(long, allow_negative_numbers = true)]
        floor: Option<i32>,
    },
    /// Load the graph and report node, edge, floor and transition counts.
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Normal,
    Wheelchair,
    Emergency,
}

impl From<ModeArg> for RouteMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Normal => RouteMode::Normal,
            ModeArg::Wheelchair => RouteMode::Wheelchair,
            ModeArg::Emergency => RouteMode::Emergency,
        }
    }
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();

    let graph = cli.graph.ok_or_else(|| {
        anyhow::anyhow!("no graph file given; pass --graph <FILE> or set CAMPUSMARG_GRAPH")
    })?;

    match cli.command {
        Command::Route {
            from,
            to,
            accessible,
            mode,
        } => {
            let mode = match mode {
                Some(mode) => mode.into(),
                None => RouteMode::from_accessibility(accessible),
            };
            let args = RouteCommandArgs { from, to, mode };
            handle_route_command(&graph, cli.path_log.as_deref(), cli.format, &args)
        }
        Command::Nodes { floor } => handle_nodes_command(&graph, cli.format, floor),
        Command::Validate => handle_validate_command(&graph, cli.format),
    }
}
