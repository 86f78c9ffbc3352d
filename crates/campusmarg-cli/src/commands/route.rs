//! Route command handler for computing walking routes between two nodes.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use campusmarg_lib::{Error as RouteError, JsonLinesPathLog, RouteMode, RouteQuery, RouteService};

use crate::commands::load_store;
use crate::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin node id.
    pub from: String,
    /// Destination node id.
    pub to: String,
    pub mode: RouteMode,
}

impl RouteCommandArgs {
    pub fn to_query(&self) -> RouteQuery {
        RouteQuery::new(&self.from, &self.to, self.mode)
    }
}

/// Handle the route subcommand.
///
/// Every computed route is appended to `path_log` when one is given.
pub fn handle_route_command(
    graph: &Path,
    path_log: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let store = load_store(graph)?;
    let mut service = RouteService::new(store);
    if let Some(path) = path_log {
        let log = JsonLinesPathLog::open(path)
            .with_context(|| format!("failed to open path log {}", path.display()))?;
        service = service.with_path_log(Arc::new(log));
    }

    let query = args.to_query();
    let result = service
        .route(&query)
        .map_err(|err| handle_route_failure(&query, err))?;

    format
        .render_route(&result)
        .context("failed to write route output")
}

fn handle_route_failure(query: &RouteQuery, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::NodeNotFound { id, suggestions } => {
            anyhow::anyhow!(format_unknown_node_message(&id, &suggestions))
        }
        RouteError::NoPathFound {
            origin,
            destination,
        } => anyhow::anyhow!(format_route_not_found_message(
            &origin,
            &destination,
            query.mode
        )),
        RouteError::NoTransitionAvailable => anyhow::anyhow!(
            "Cannot route from {} to {}: the graph has no stairs or lifts between floors.",
            query.origin_id,
            query.destination_id
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_node_message(id: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown node '{}'.", id);
    if let [only] = suggestions {
        message.push_str(&format!(" Did you mean '{only}'?"));
    } else if !suggestions.is_empty() {
        let joined = suggestions
            .iter()
            .map(|s| format!("'{}'", s))
            .collect::<Vec<_>>()
            .join(", ");
        message.push_str(&format!(" Did you mean one of: {}?", joined));
    }
    message
}

fn format_route_not_found_message(origin: &str, destination: &str, mode: RouteMode) -> String {
    let mut message = format!("No route found between {} and {}.", origin, destination);
    if origin == destination {
        message.push_str(" Origin and destination are the same node.");
    } else if mode == RouteMode::Wheelchair {
        message.push_str(" Try without --accessible to allow stairs and other inaccessible nodes.");
    } else {
        message.push_str(" Check that both nodes are connected in the graph.");
    }
    message
}
