//! CampusMarg CLI library.
//!
//! Subcommand handlers, output rendering, terminal styling and logging setup
//! for the `campusmarg-cli` binary.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;
