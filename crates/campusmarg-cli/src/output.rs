//! Output formatting for routes, node listings and graph summaries.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use campusmarg_lib::{Node, PathResult};

use crate::terminal::ColorPalette;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Counts reported by the `validate` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub floors: Vec<i32>,
    pub transitions: usize,
}

impl OutputFormat {
    /// Print a computed route to stdout.
    pub fn render_route(self, result: &PathResult) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                print!("{}", format_route_text(result, ColorPalette::detect()));
                Ok(())
            }
            OutputFormat::Json => write_json(result),
        }
    }

    /// Print a node listing to stdout.
    pub fn render_nodes(self, nodes: &[&Node]) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                print!("{}", format_nodes_text(nodes));
                Ok(())
            }
            OutputFormat::Json => write_json(&nodes),
        }
    }

    /// Print graph counts to stdout.
    pub fn render_summary(self, summary: &GraphSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                print!("{}", format_summary_text(summary));
                Ok(())
            }
            OutputFormat::Json => write_json(summary),
        }
    }
}

fn write_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Render a route as numbered instructions followed by totals.
pub fn format_route_text(result: &PathResult, palette: ColorPalette) -> String {
    let mut out = String::new();
    let origin = result.origin().unwrap_or("<unknown>");
    let destination = result.destination().unwrap_or("<unknown>");
    let _ = writeln!(
        out,
        "Route from {}{}{} to {}{}{} ({} mode, {} steps{}):",
        palette.white_bold,
        origin,
        palette.reset,
        palette.white_bold,
        destination,
        palette.reset,
        result.mode,
        result.path.len(),
        if result.cached { ", cached" } else { "" },
    );

    for (i, step) in result.path.iter().enumerate() {
        let [from, to] = step.coordinates;
        let color = if from.floor != to.floor {
            palette.cyan
        } else {
            ""
        };
        let _ = writeln!(
            out,
            " {}{:>3}.{} {}{}{}",
            palette.gray,
            i + 1,
            palette.reset,
            color,
            step.instruction,
            palette.reset,
        );
    }

    let _ = writeln!(
        out,
        "\n{}Total distance: {:.2}{}",
        palette.green, result.total_distance, palette.reset
    );
    let _ = writeln!(
        out,
        "{}Estimated time: {:.2}s{}",
        palette.green, result.total_time, palette.reset
    );
    out
}

/// Render nodes one per line, grouped in the order given.
pub fn format_nodes_text(nodes: &[&Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        let mut flags = Vec::new();
        if !node.accessible {
            flags.push("inaccessible".to_string());
        }
        if let Some(shaft) = &node.shaft {
            flags.push(format!("shaft {shaft}"));
        }
        let suffix = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        let _ = writeln!(
            out,
            "{:<8} {:<10} floor {:>3}  ({}, {})  {}{}",
            node.id,
            node.kind.to_string(),
            node.floor,
            node.coordinates.x,
            node.coordinates.y,
            node.name,
            suffix
        );
    }
    let _ = writeln!(out, "{} nodes", nodes.len());
    out
}

pub fn format_summary_text(summary: &GraphSummary) -> String {
    let floors = summary
        .floors
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Graph is valid.\nNodes: {}\nEdges: {}\nFloors: {}\nTransitions: {}\n",
        summary.nodes, summary.edges, floors, summary.transitions
    )
}
