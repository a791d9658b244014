//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Hyper Network - search the student roster
#[derive(Parser, Debug)]
#[command(name = "hn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Machine-readable output: JSON on stdout, JSON logs and errors.
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format (human, json, jsonl, tsv)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/hn/config.toml then .hn/config.toml)
    #[arg(long, global = true, env = "HN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `--robot` forces JSON; otherwise the explicit format or human.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_args(self.robot, self.output_format)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the roster
    Search(commands::search::SearchArgs),

    /// Show the filters a search would send, without contacting the store
    Explain(commands::explain::ExplainArgs),

    /// Serve POST /api/hypernetwork over HTTP
    Serve(commands::serve::ServeArgs),

    /// Print the effective configuration
    Config(commands::config::ConfigArgs),
}
